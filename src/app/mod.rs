//! `ReaderApp`: the top-level egui application state.
//!
//! This module declares the `ReaderApp` struct and its constructor.
//! Methods are split across the sibling sub-modules:
//!
//! - `navigation`: chapter jumps, smooth scrolling, scroll tracking
//! - `header`: fixed header bar
//! - `content`: sidebar table of contents and the scrollable book
//! - `overlay`: search dialog, menu drawer, floating menu button

pub mod content;
pub mod header;
pub mod navigation;
pub mod overlay;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use eframe::egui;

use saju_book::book::content::BookContent;
use saju_book::host::{EventBus, HostEvent, Subscription, ViewportWatcher};
use saju_book::nav::animator::ScrollAnimator;
use saju_book::nav::{Navigator, ReaderState};
use saju_book::scroll::{ScrollTracker, SectionLayout};
use saju_book::{BookError, ChapterRegistry, ReaderConfig};

/// A navigation request collected during the frame and applied once the
/// book has been laid out, so it always sees this frame's section offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Chapter(String),
    Top,
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct ReaderApp {
    pub config: ReaderConfig,
    pub registry: ChapterRegistry,
    pub book: BookContent,
    pub state: ReaderState,
    pub tracker: ScrollTracker,
    pub navigator: Navigator,
    pub animator: ScrollAnimator,
    /// Section offsets measured while drawing the last frame.
    pub layout: SectionLayout,
    /// Current document scroll offset.
    pub scroll_offset: f32,
    /// Offset to force onto the scroll area next frame.
    pub pending_scroll: Option<f32>,
    pub pending_nav: Option<NavTarget>,
    /// Give the search box keyboard focus on the next frame.
    pub focus_search: bool,
    pub watcher: ViewportWatcher,
    /// Filled by our bus handler, emptied by `drain_host_events`.
    pub host_inbox: Rc<RefCell<VecDeque<HostEvent>>>,
    // Listener first: it detaches from the bus when the app is torn down.
    pub _host_listener: Subscription,
    pub bus: EventBus,
}

impl ReaderApp {
    pub fn new(config: ReaderConfig) -> Result<Self, BookError> {
        let registry = ChapterRegistry::builtin()?;
        let book = BookContent::builtin()?;
        book.check_against(&registry)?;
        log::info!(
            "loaded \"{}\": {} chapters",
            book.title,
            registry.len()
        );

        let bus = EventBus::new();
        let host_inbox = Rc::new(RefCell::new(VecDeque::new()));
        let inbox = Rc::clone(&host_inbox);
        let host_listener = bus.subscribe(move |event| inbox.borrow_mut().push_back(*event));

        Ok(Self {
            tracker: ScrollTracker::new(config.scroll_lookahead)
                .with_force_first_active(config.force_first_active),
            navigator: Navigator::new(config.header_offset),
            animator: ScrollAnimator::new(config.scroll_duration),
            config,
            registry,
            book,
            state: ReaderState::new(),
            layout: SectionLayout::new(),
            scroll_offset: 0.0,
            pending_scroll: None,
            pending_nav: None,
            focus_search: false,
            watcher: ViewportWatcher::new(),
            host_inbox,
            _host_listener: host_listener,
            bus,
        })
    }

    /// Whether the sidebar is shown for the current window width.
    pub fn wide_layout(&self, ctx: &egui::Context) -> bool {
        self.config.shows_sidebar(ctx.screen_rect().width())
    }
}
