//! Reader configuration.
//!
//! Everything here is a compile-time default; there are no config files or
//! environment variables beyond the logger's `RUST_LOG`.

/// Layout and behaviour constants for the reader.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Height of the fixed header. Navigation lands sections this far below
    /// the top of the viewport.
    pub header_offset: f32,
    /// Distance below the scroll position at which a section counts as
    /// "being read".
    pub scroll_lookahead: f32,
    /// When no section has been passed yet, mark the first chapter active
    /// instead of keeping the previous value.
    pub force_first_active: bool,
    /// Windows at least this wide get the sidebar table of contents;
    /// narrower windows use the menu overlay.
    pub sidebar_breakpoint: f32,
    /// Width of the sidebar and of the menu overlay panel.
    pub sidebar_width: f32,
    /// Smooth-scroll animation length in seconds.
    pub scroll_duration: f32,
    /// Initial window size.
    pub window_size: [f32; 2],
    /// Minimum window size.
    pub min_window_size: [f32; 2],
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scroll_lookahead: 150.0,
            force_first_active: false,
            sidebar_breakpoint: 1024.0,
            sidebar_width: 256.0,
            scroll_duration: 0.45,
            window_size: [1280.0, 860.0],
            min_window_size: [360.0, 480.0],
        }
    }
}

impl ReaderConfig {
    /// Whether a window of `width` shows the sidebar.
    pub fn shows_sidebar(&self, width: f32) -> bool {
        width >= self.sidebar_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_header_geometry() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.header_offset, 80.0);
        assert_eq!(cfg.scroll_lookahead, 150.0);
        assert!(!cfg.force_first_active);
    }

    #[test]
    fn sidebar_breakpoint_is_inclusive() {
        let cfg = ReaderConfig::default();
        assert!(cfg.shows_sidebar(1024.0));
        assert!(!cfg.shows_sidebar(1023.9));
    }
}
