//! Responsive "selected work" section.
//!
//! Wide viewports pin the section and translate its card track sideways as the
//! page scrolls; narrow viewports leave the cards stacked and only drive a
//! vertical progress bar. Crossing the breakpoint tears the active behavior
//! down completely before the other one is installed.
//!
//! The pin changes the document height, so the page has to be re-measured
//! after it is written. [`PinnedTrack::relayout`] runs that sequence.

use crate::layout::{Layout, LayoutHost};
use crate::scroll::{progress_between, Edge};
use crate::smooth::ScrollFrame;
use crate::style::{ElementRef, Prop, StyleBook};

pub const SECTION: &str = ".work";
pub const TRACK: &str = ".work-track";
pub const CARD: &str = ".work-card";
pub const PROGRESS: &str = ".work-progress";

pub const PINNED_CLASS: &str = "pinned";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    Horizontal,
    Vertical,
}

impl TrackMode {
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

pub struct PinnedTrack {
    breakpoint: f32,
    band: [f32; 2],
    mode: Option<TrackMode>,
    /// Cards touched by the horizontal mode; all of them are cleared on teardown.
    cards_touched: usize,
    /// Section height last written for the pin.
    pin_height: Option<f32>,
}

// Pin heights closer than this are the same layout.
const PIN_HEIGHT_EPSILON_PX: f32 = 0.5;

impl PinnedTrack {
    pub fn new(breakpoint: f32, band: [f32; 2]) -> Self {
        let (lo, hi) = if band[0] <= band[1] {
            (band[0], band[1])
        } else {
            (band[1], band[0])
        };
        Self {
            breakpoint,
            band: [lo.clamp(0.0, 1.0), hi.clamp(0.0, 1.0)],
            mode: None,
            cards_touched: 0,
            pin_height: None,
        }
    }

    pub fn mode(&self) -> Option<TrackMode> {
        self.mode
    }

    /// Re-evaluate the breakpoint. Returns the new mode when it changed (or was
    /// installed for the first time); the teardown must be flushed and the page
    /// re-measured before the new mode is fitted.
    pub fn on_resize(&mut self, viewport_width: f32, book: &mut StyleBook) -> Option<TrackMode> {
        let next = TrackMode::for_width(viewport_width, self.breakpoint);
        if self.mode == Some(next) {
            return None;
        }
        if let Some(prev) = self.mode {
            self.teardown(prev, book);
            log::info!("[scroll] work track {:?} -> {:?}", prev, next);
        }
        self.mode = Some(next);
        Some(next)
    }

    fn teardown(&mut self, mode: TrackMode, book: &mut StyleBook) {
        match mode {
            TrackMode::Horizontal => {
                book.reset(ElementRef::first(TRACK));
                book.reset(ElementRef::first(SECTION));
                for i in 0..self.cards_touched {
                    book.reset(ElementRef::new(CARD, i));
                }
                self.cards_touched = 0;
                self.pin_height = None;
            }
            TrackMode::Vertical => {
                book.reset(ElementRef::first(PROGRESS));
            }
        }
    }

    /// Size the pinned section for the measured track: the viewport height plus
    /// the horizontal overflow, so the whole track scrolls past while pinned.
    /// Returns `true` when the section height changed and the page must be
    /// flushed and measured again.
    pub fn fit(&mut self, layout: &dyn Layout, book: &mut StyleBook) -> bool {
        if self.mode != Some(TrackMode::Horizontal) {
            return false;
        }
        let (Some(_), Some(track)) = (layout.rect(SECTION), layout.rect(TRACK)) else {
            return false;
        };
        let viewport = layout.viewport();
        let height = viewport.height + (track.width - viewport.width).max(0.0);
        let section = ElementRef::first(SECTION);
        book.set_class(section, PINNED_CLASS, true);
        if self
            .pin_height
            .is_some_and(|h| (h - height).abs() < PIN_HEIGHT_EPSILON_PX)
        {
            return false;
        }
        book.set_height(section, Some(height));
        self.pin_height = Some(height);
        true
    }

    /// Measure `host` and settle the track against it. A breakpoint switch is
    /// flushed and measured before the pin is fitted, and a new pin height is
    /// flushed and measured before the scroll limit is read. Returns that limit.
    pub fn relayout<H: LayoutHost>(&mut self, host: &mut H, book: &mut StyleBook) -> f32 {
        host.measure();
        if let Some(mode) = self.on_resize(host.viewport().width, book) {
            log::debug!("[scroll] work track installed as {:?}", mode);
            host.flush(book);
            host.measure();
        }
        if self.fit(&*host, book) {
            host.flush(book);
            host.measure();
        }
        host.scroll_limit()
    }

    pub fn update(&mut self, frame: &ScrollFrame, layout: &dyn Layout, book: &mut StyleBook) {
        match self.mode {
            Some(TrackMode::Horizontal) => self.update_horizontal(frame, layout, book),
            Some(TrackMode::Vertical) => update_vertical(frame, layout, book),
            None => {}
        }
    }

    fn update_horizontal(&mut self, frame: &ScrollFrame, layout: &dyn Layout, book: &mut StyleBook) {
        let (Some(section), Some(track)) = (layout.rect(SECTION), layout.rect(TRACK)) else {
            return;
        };
        let viewport = layout.viewport();
        let overflow = (track.width - viewport.width).max(0.0);

        let start = Edge::new(0.0, 0.0).scroll_offset(&section, viewport);
        let progress = progress_between(frame.position, start, start + overflow);
        let shift = progress * overflow;
        book.set(ElementRef::first(TRACK), Prop::X, -shift);

        let band_lo = self.band[0] * viewport.width;
        let band_hi = self.band[1] * viewport.width;
        let cards = layout.rects(CARD);
        for (i, card) in cards.iter().enumerate() {
            let offset = card.x - track.x;
            let centre = section.x + offset + card.width * 0.5 - shift;
            let active = centre >= band_lo && centre <= band_hi;
            book.set_class(ElementRef::new(CARD, i), ACTIVE_CLASS, active);
        }
        self.cards_touched = self.cards_touched.max(cards.len());
    }
}

fn update_vertical(frame: &ScrollFrame, layout: &dyn Layout, book: &mut StyleBook) {
    let Some(section) = layout.rect(SECTION) else {
        return;
    };
    let viewport = layout.viewport();
    let start = Edge::new(0.0, 0.5).scroll_offset(&section, viewport);
    let end = Edge::new(1.0, 0.5).scroll_offset(&section, viewport);
    let progress = progress_between(frame.position, start, end);
    book.set(ElementRef::first(PROGRESS), Prop::ScaleY, progress);
}
