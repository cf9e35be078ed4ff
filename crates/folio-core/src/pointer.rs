use crate::layout::Viewport;

/// Last pointer position over the page, normalized to the viewport.
///
/// Single writer (the pointermove listener), many readers (render loop,
/// parallax). Last write wins; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    uv: [f32; 2],
}

impl Default for PointerTracker {
    fn default() -> Self {
        // centre until the first move
        Self { uv: [0.5, 0.5] }
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, client_x: f32, client_y: f32, viewport: Viewport) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        self.uv = [
            (client_x / viewport.width).clamp(0.0, 1.0),
            (client_y / viewport.height).clamp(0.0, 1.0),
        ];
    }

    /// [0, 1] with the origin at the top-left corner.
    #[inline]
    pub fn uv(&self) -> [f32; 2] {
        self.uv
    }

    /// [-1, 1] with the origin at the viewport centre and +y pointing up.
    #[inline]
    pub fn centered(&self) -> [f32; 2] {
        [self.uv[0] * 2.0 - 1.0, -(self.uv[1] * 2.0 - 1.0)]
    }
}
