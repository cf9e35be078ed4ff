use crate::constants::CARD_STACK_THRESHOLD;
use crate::layout::{visible_fraction, Rect, Viewport};

pub const CARD_STACK: &str = "#cardStack";
pub const EXPANDED_CLASS: &str = "expanded";

/// Fans the card stack out while enough of it is on screen.
#[derive(Debug, Clone, Copy)]
pub struct CardStack {
    threshold: f32,
    expanded: bool,
}

impl Default for CardStack {
    fn default() -> Self {
        Self {
            threshold: CARD_STACK_THRESHOLD,
            expanded: false,
        }
    }
}

impl CardStack {
    /// Returns the new state when it flips.
    pub fn update(&mut self, rect: &Rect, scroll_y: f32, viewport: Viewport) -> Option<bool> {
        let expanded = visible_fraction(rect, scroll_y, viewport) >= self.threshold;
        if expanded == self.expanded {
            return None;
        }
        self.expanded = expanded;
        Some(expanded)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}
