//! Navigation methods for `ReaderApp`.
//!
//! Covers chapter jumps (`go_to_chapter`, `go_to_top`, `apply_pending_nav`),
//! the smooth-scroll lifecycle (`step_animation`), and the host-event pump
//! that keeps the active chapter in sync with the scroll position.

use eframe::egui;

use saju_book::host::HostEvent;

use super::{NavTarget, ReaderApp};

impl ReaderApp {
    /// Queue a jump to chapter `id`; applied after this frame's layout.
    pub fn go_to_chapter(&mut self, id: &str) {
        self.pending_nav = Some(NavTarget::Chapter(id.to_string()));
    }

    /// Queue a smooth scroll back to the cover.
    pub fn go_to_top(&mut self) {
        self.pending_nav = Some(NavTarget::Top);
    }

    /// Resolve the queued navigation against the freshest section layout
    /// and start the scroll animation.
    pub fn apply_pending_nav(&mut self, now: f64) {
        let Some(target) = self.pending_nav.take() else {
            return;
        };
        let request = match target {
            NavTarget::Chapter(id) => {
                self.navigator
                    .navigate_to(&mut self.state, &id, &self.layout)
            }
            NavTarget::Top => Some(self.navigator.scroll_to_top()),
        };
        if let Some(req) = request {
            self.animator.start(self.scroll_offset, req.target_y, now);
        }
    }

    /// Advance the smooth scroll. Manual scrolling cancels it.
    pub fn step_animation(&mut self, ctx: &egui::Context) {
        let (now, manual) = ctx.input(|i| (i.time, i.smooth_scroll_delta.y != 0.0));
        if manual && self.animator.is_running() {
            log::debug!("smooth scroll cancelled by user input");
            self.animator.cancel();
        }
        if let Some(frame) = self.animator.sample(now) {
            self.pending_scroll = Some(frame.offset);
            if frame.running {
                ctx.request_repaint();
            }
        }
    }

    /// Feed this frame's viewport reading to the bus.
    pub fn observe_viewport(&mut self, offset: f32, width: f32, height: f32) {
        for event in self.watcher.observe(offset, width, height) {
            self.bus.dispatch(&event);
        }
    }

    /// Handle everything our handler queued since the last call.
    pub fn drain_host_events(&mut self) {
        let events: Vec<HostEvent> = self.host_inbox.borrow_mut().drain(..).collect();
        for event in events {
            match event {
                HostEvent::Scroll { offset } => {
                    self.scroll_offset = offset;
                    self.track_active();
                }
                HostEvent::Resize { width, height } => {
                    log::debug!("viewport resized to {:.0}x{:.0}", width, height);
                    // sections may have reflowed under the same offset
                    self.track_active();
                }
            }
        }
    }

    fn track_active(&mut self) {
        if self
            .tracker
            .on_scroll(self.scroll_offset, &self.layout, &self.registry)
        {
            self.state.active_chapter_id = self.tracker.active().map(str::to_string);
        }
    }
}
