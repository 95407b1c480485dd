//! Navigation controller and overlay state.
//!
//! All reader UI state lives in one [`ReaderState`] owned by the app and
//! mutated synchronously from input handlers. Navigation never fails: an id
//! without a rendered section is a no-op.

pub mod animator;

use crate::scroll::SectionLayout;

/// Transient UI state, reset on every launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderState {
    pub search_query: String,
    /// `None` until the first scroll measurement picks a chapter.
    pub active_chapter_id: Option<String>,
    pub menu_open: bool,
    pub search_open: bool,
}

/// The two modal layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Table-of-contents menu for narrow windows.
    Menu,
    Search,
}

/// Ways an overlay gets dismissed. All of them end in the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Navigation,
}

impl ReaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Menu => self.menu_open,
            Overlay::Search => self.search_open,
        }
    }

    fn flag_mut(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::Menu => &mut self.menu_open,
            Overlay::Search => &mut self.search_open,
        }
    }

    /// Open an overlay. Opening search keeps the last query.
    pub fn open(&mut self, overlay: Overlay) {
        *self.flag_mut(overlay) = true;
    }

    pub fn close(&mut self, overlay: Overlay, trigger: CloseTrigger) {
        let flag = self.flag_mut(overlay);
        if *flag {
            log::debug!("closing {:?} via {:?}", overlay, trigger);
        }
        *flag = false;
    }

    pub fn toggle(&mut self, overlay: Overlay) {
        let flag = self.flag_mut(overlay);
        *flag = !*flag;
    }

    pub fn any_overlay_open(&self) -> bool {
        self.menu_open || self.search_open
    }
}

/// A smooth-scroll target in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub target_y: f32,
}

/// Turns chapter ids into scroll targets.
#[derive(Debug, Clone)]
pub struct Navigator {
    header_offset: f32,
}

impl Navigator {
    pub fn new(header_offset: f32) -> Self {
        Self { header_offset }
    }

    /// Jump to chapter `id`.
    ///
    /// Looks the section up in the freshest `layout`, closes both overlays,
    /// and clears the search query. Returns `None` and leaves `state`
    /// untouched if the section is not rendered.
    pub fn navigate_to(
        &self,
        state: &mut ReaderState,
        id: &str,
        layout: &SectionLayout,
    ) -> Option<ScrollRequest> {
        let Some(top) = layout.top_of(id) else {
            log::warn!("navigate_to: no rendered section for {:?}", id);
            return None;
        };

        let target_y = (top - self.header_offset).max(0.0);
        log::debug!("navigate_to {} (top {:.0}) -> {:.0}", id, top, target_y);

        state.close(Overlay::Menu, CloseTrigger::Navigation);
        state.close(Overlay::Search, CloseTrigger::Navigation);
        state.search_query.clear();

        Some(ScrollRequest { target_y })
    }

    /// Scroll back to the cover. Overlays are left as they are.
    pub fn scroll_to_top(&self) -> ScrollRequest {
        ScrollRequest { target_y: 0.0 }
    }
}
