//! Smooth-scroll animator.
//!
//! Fire-and-forget: the caller starts an animation and samples it once per
//! frame. Starting a new animation while one is running retargets from the
//! current position (last request wins, nothing is queued).
//!
//! Time is plain seconds (`f64`) so the host clock can be fed in directly.

#[derive(Debug, Clone, Copy, PartialEq)]
struct Flight {
    from: f32,
    to: f32,
    start: f64,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    duration: f32,
    flight: Option<Flight>,
}

/// One frame's worth of animation output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub offset: f32,
    /// `false` on the final frame.
    pub running: bool,
}

/// Ease-out cubic on `t` in `[0, 1]`.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

impl ScrollAnimator {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            flight: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.flight.is_some()
    }

    pub fn target(&self) -> Option<f32> {
        self.flight.map(|f| f.to)
    }

    /// Begin scrolling from `current` to `to` at time `now`.
    ///
    /// If an animation is in flight, it restarts from its own current
    /// position rather than from `current`, so retargeting does not jump.
    pub fn start(&mut self, current: f32, to: f32, now: f64) {
        let from = match self.flight {
            Some(_) => self.position_at(now).unwrap_or(current),
            None => current,
        };
        self.flight = Some(Flight {
            from,
            to,
            start: now,
        });
    }

    /// Drop any running animation, e.g. when the user grabs the scrollbar.
    pub fn cancel(&mut self) {
        self.flight = None;
    }

    fn position_at(&self, now: f64) -> Option<f32> {
        let f = self.flight?;
        let t = self.progress(f, now);
        Some(f.from + (f.to - f.from) * ease_out_cubic(t))
    }

    fn progress(&self, flight: Flight, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - flight.start) as f32) / self.duration).clamp(0.0, 1.0)
    }

    /// Offset to apply at `now`, or `None` when idle.
    pub fn sample(&mut self, now: f64) -> Option<ScrollFrame> {
        let flight = self.flight?;
        let t = self.progress(flight, now);
        let offset = flight.from + (flight.to - flight.from) * ease_out_cubic(t);
        let running = t < 1.0;
        if !running {
            self.flight = None;
        }
        Some(ScrollFrame { offset, running })
    }
}
