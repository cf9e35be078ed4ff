//! Eased scroll position driver.
//!
//! Wheel input moves a target; every frame the current position approaches
//! it with exponential damping. Scroll triggers read the smoothed value, never
//! the raw one.

use crate::constants::{SCROLL_LERP, SCROLL_SETTLE_PX};
use crate::easing::damp;
use crate::signal::Signal;

/// Smoothed position published once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollFrame {
    pub position: f32,
    /// px per second, positive when moving down the page.
    pub velocity: f32,
    /// position / limit, in [0, 1].
    pub progress: f32,
    pub limit: f32,
    /// Seconds since the previous frame.
    pub dt_s: f32,
}

pub struct SmoothScroll {
    current: f32,
    target: f32,
    limit: f32,
    lambda: f32,
    wheel_multiplier: f32,
    frames: Signal<ScrollFrame>,
}

impl SmoothScroll {
    /// `lerp` is the fraction of the remaining distance covered per 60 Hz frame.
    pub fn new(lerp: f32, wheel_multiplier: f32) -> Self {
        let lerp = if lerp > 0.0 && lerp < 1.0 {
            lerp
        } else {
            SCROLL_LERP
        };
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            // 1 - exp(-lambda / 60) == lerp
            lambda: -(1.0 - lerp).ln() * 60.0,
            wheel_multiplier,
            frames: Signal::new(),
        }
    }

    /// Maximum scroll offset (document height minus viewport height).
    pub fn set_limit(&mut self, limit: f32) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        self.target = (self.target + delta_y * self.wheel_multiplier).clamp(0.0, self.limit);
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.target = offset.clamp(0.0, self.limit);
    }

    /// The page was scrolled by something other than this driver (scrollbar
    /// drag, keyboard, touch). Adopt that position without easing.
    pub fn sync_external(&mut self, offset: f32) {
        let o = offset.clamp(0.0, self.limit);
        self.current = o;
        self.target = o;
    }

    pub fn advance(&mut self, dt_s: f32) -> ScrollFrame {
        let prev = self.current;
        if (self.target - self.current).abs() <= SCROLL_SETTLE_PX {
            self.current = self.target;
        } else {
            self.current = damp(self.current, self.target, self.lambda, dt_s.max(0.0));
        }
        let velocity = if dt_s > 0.0 {
            (self.current - prev) / dt_s
        } else {
            0.0
        };
        let frame = ScrollFrame {
            position: self.current,
            velocity,
            progress: if self.limit > 0.0 {
                self.current / self.limit
            } else {
                0.0
            },
            limit: self.limit,
            dt_s: dt_s.max(0.0),
        };
        self.frames.emit(&frame);
        frame
    }

    pub fn subscribe(&mut self, f: impl FnMut(&ScrollFrame) + 'static) {
        self.frames.subscribe(f);
    }

    pub fn position(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}
