//! Scroll position tracking.
//!
//! Each frame the renderer measures where every chapter section starts
//! (document coordinates, 0 = top of the scroll content) into a
//! [`SectionLayout`]. The [`ScrollTracker`] turns the current scroll offset
//! plus that layout into the id of the chapter being read.

use std::collections::HashMap;

use crate::book::ChapterRegistry;

/// Measured top offsets of rendered sections, keyed by chapter id.
///
/// Rebuilt from scratch every frame; never patched.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    tops: HashMap<String, f32>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the top of section `id`.
    pub fn record(&mut self, id: &str, top: f32) {
        self.tops.insert(id.to_string(), top);
    }

    pub fn top_of(&self, id: &str) -> Option<f32> {
        self.tops.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }

    /// Offsets in registry order; `None` for sections not measured.
    pub fn offsets_in(&self, registry: &ChapterRegistry) -> Vec<Option<f32>> {
        registry.ids().map(|id| self.top_of(id)).collect()
    }
}

/// Largest index whose offset is at or above `threshold`, scanning from the
/// bottom. `None` when every section starts below the threshold.
pub fn active_index(offsets: &[f32], threshold: f32) -> Option<usize> {
    offsets.iter().rposition(|&top| top <= threshold)
}

/// Tracks the chapter currently in view.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    lookahead: f32,
    force_first_active: bool,
    active: Option<String>,
}

impl ScrollTracker {
    pub fn new(lookahead: f32) -> Self {
        Self {
            lookahead,
            force_first_active: false,
            active: None,
        }
    }

    /// Mark the first chapter active while scrolled above every section,
    /// instead of keeping whatever was active before.
    pub fn with_force_first_active(mut self, enabled: bool) -> Self {
        self.force_first_active = enabled;
        self
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute the active chapter for `scroll_y`. Returns `true` when it
    /// changed.
    ///
    /// Sections missing from `layout` are skipped. If no section has been
    /// reached, the previous value is kept.
    pub fn on_scroll(
        &mut self,
        scroll_y: f32,
        layout: &SectionLayout,
        registry: &ChapterRegistry,
    ) -> bool {
        let threshold = scroll_y + self.lookahead;

        let mut found = None;
        for chapter in registry.iter().rev() {
            if let Some(top) = layout.top_of(&chapter.id) {
                if top <= threshold {
                    found = Some(chapter.id.as_str());
                    break;
                }
            }
        }

        let next = match found {
            Some(id) => id,
            None if self.force_first_active => match registry.iter().next() {
                Some(first) => first.id.as_str(),
                None => return false,
            },
            None => return false,
        };

        if self.active.as_deref() == Some(next) {
            return false;
        }
        log::debug!(
            "active chapter {} -> {} (threshold {:.0})",
            self.active.as_deref().unwrap_or("-"),
            next,
            threshold
        );
        self.active = Some(next.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Chapter;

    fn registry() -> ChapterRegistry {
        ChapterRegistry::new(vec![
            Chapter::new("a", "A"),
            Chapter::new("b", "B"),
            Chapter::new("c", "C"),
        ])
        .unwrap()
    }

    fn layout(tops: &[(&str, f32)]) -> SectionLayout {
        let mut l = SectionLayout::new();
        for (id, top) in tops {
            l.record(id, *top);
        }
        l
    }

    #[test]
    fn active_index_concrete() {
        let offsets = [0.0, 800.0, 1600.0];
        assert_eq!(active_index(&offsets, 900.0), Some(1));
        assert_eq!(active_index(&offsets, 100.0), Some(0));
        assert_eq!(active_index(&offsets, -50.0), None);
        assert_eq!(active_index(&offsets, 1600.0), Some(2));
        assert_eq!(active_index(&offsets, 99_999.0), Some(2));
        assert_eq!(active_index(&[], 10.0), None);
    }

    #[test]
    fn active_index_is_largest_qualifying() {
        let offsets = [10.0, 20.0, 30.0, 40.0, 50.0];
        for t in 0..60 {
            let t = t as f32;
            let expected = (0..offsets.len()).filter(|&i| offsets[i] <= t).max();
            assert_eq!(active_index(&offsets, t), expected, "threshold {}", t);
        }
    }

    #[test]
    fn tracker_uses_lookahead() {
        let reg = registry();
        let l = layout(&[("a", 0.0), ("b", 800.0), ("c", 1600.0)]);
        let mut tracker = ScrollTracker::new(150.0);

        assert!(tracker.on_scroll(750.0, &l, &reg));
        assert_eq!(tracker.active(), Some("b"));

        assert!(tracker.on_scroll(0.0, &l, &reg));
        assert_eq!(tracker.active(), Some("a"));

        // unchanged id reports no change
        assert!(!tracker.on_scroll(10.0, &l, &reg));
    }

    #[test]
    fn above_first_section_keeps_previous() {
        let reg = registry();
        let l = layout(&[("a", 500.0), ("b", 1300.0), ("c", 2100.0)]);
        let mut tracker = ScrollTracker::new(150.0);

        assert!(!tracker.on_scroll(0.0, &l, &reg));
        assert_eq!(tracker.active(), None);

        tracker.on_scroll(1200.0, &l, &reg);
        assert_eq!(tracker.active(), Some("b"));

        assert!(!tracker.on_scroll(-500.0, &l, &reg));
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn force_first_active_option() {
        let reg = registry();
        let l = layout(&[("a", 500.0), ("b", 1300.0)]);
        let mut tracker = ScrollTracker::new(150.0).with_force_first_active(true);
        assert!(tracker.on_scroll(0.0, &l, &reg));
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn unmeasured_sections_are_skipped() {
        let reg = registry();
        let l = layout(&[("a", 0.0), ("b", 800.0)]);
        let mut tracker = ScrollTracker::new(0.0);
        tracker.on_scroll(5000.0, &l, &reg);
        assert_eq!(tracker.active(), Some("b"));
    }

    #[test]
    fn offsets_in_registry_order() {
        let reg = registry();
        let l = layout(&[("c", 3.0), ("a", 1.0)]);
        assert_eq!(l.offsets_in(&reg), vec![Some(1.0), None, Some(3.0)]);
        assert!(!l.is_empty());
    }
}
