//! Decorative per-event interaction math: tilt cards, magnetic buttons and the
//! glitch pulse. All functions are pure in the current event.

use crate::constants::{MAGNETIC_INNER_FRACTION, MAGNETIC_OUTER_FRACTION, TILT_MAX_DEG};
use crate::layout::Rect;

/// Card rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Map a pointer position over `rect` to a tilt. Linear in the offset from the
/// centre, reaching `±TILT_MAX_DEG` at the edges. Pointer above the centre tips
/// the top edge away (positive `rotate_x`), pointer right of centre turns the
/// card right (positive `rotate_y`).
pub fn tilt(rect: &Rect, pointer_x: f32, pointer_y: f32) -> Tilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::default();
    }
    let (cx, cy) = rect.center();
    let nx = ((pointer_x - cx) / (rect.width * 0.5)).clamp(-1.0, 1.0);
    let ny = ((pointer_y - cy) / (rect.height * 0.5)).clamp(-1.0, 1.0);
    Tilt {
        rotate_x: -ny * TILT_MAX_DEG,
        rotate_y: nx * TILT_MAX_DEG,
    }
}

/// Translations for a magnetic button and its label, in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Magnetic {
    pub outer: (f32, f32),
    pub inner: (f32, f32),
}

pub fn magnetic(rect: &Rect, pointer_x: f32, pointer_y: f32) -> Magnetic {
    let (cx, cy) = rect.center();
    let dx = pointer_x - cx;
    let dy = pointer_y - cy;
    Magnetic {
        outer: (dx * MAGNETIC_OUTER_FRACTION, dy * MAGNETIC_OUTER_FRACTION),
        inner: (dx * MAGNETIC_INNER_FRACTION, dy * MAGNETIC_INNER_FRACTION),
    }
}

/// Time-driven glitch flag: on for `active_ms` at the start of every `period_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchPulse {
    pub period_ms: u32,
    pub active_ms: u32,
}

impl GlitchPulse {
    pub fn new(period_ms: u32, active_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            active_ms: active_ms.min(period_ms),
        }
    }

    /// State at `elapsed_ms` since the pulse was armed. The first flash
    /// happens one full period after arming, as with a repeating interval.
    pub fn is_active(&self, elapsed_ms: u64) -> bool {
        let period = self.period_ms as u64;
        if elapsed_ms < period {
            return false;
        }
        (elapsed_ms % period) < self.active_ms as u64
    }
}
