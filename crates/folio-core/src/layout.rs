use crate::style::StyleBook;

/// Axis-aligned box. Document-space when returned from [`Layout`], client-space
/// when handed to the micro-interaction helpers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Viewport size in CSS px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Measured page geometry. The web layer measures once after setup and again
/// after every resize; scroll evaluation only reads the cached values.
pub trait Layout {
    fn viewport(&self) -> Viewport;
    /// Document-space rects of every element matching `selector`, in document order.
    fn rects(&self, selector: &str) -> &[Rect];

    fn rect(&self, selector: &str) -> Option<Rect> {
        self.rects(selector).first().copied()
    }
}

/// A live page behind a [`Layout`]: pending styles can be written to it and its
/// geometry read back. Reads only see what was written before the last `measure`.
pub trait LayoutHost: Layout {
    /// Write every pending style entry to the page.
    fn flush(&mut self, book: &mut StyleBook);
    fn measure(&mut self);
    /// Largest scroll offset the page allows as of the last `measure`.
    fn scroll_limit(&self) -> f32;
}

/// Fraction of `rect` inside the viewport when the page is scrolled to `scroll_y`.
pub fn visible_fraction(rect: &Rect, scroll_y: f32, viewport: Viewport) -> f32 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let top = rect.y - scroll_y;
    let bottom = top + rect.height;
    let overlap = bottom.min(viewport.height) - top.max(0.0);
    (overlap / rect.height).clamp(0.0, 1.0)
}
