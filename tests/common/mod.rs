#![allow(dead_code)]
use folio_core::layout::LayoutHost;
use folio_core::{Layout, Rect, StyleBook, Viewport};
use std::collections::HashMap;

/// Fixed geometry standing in for the measured DOM.
#[derive(Clone)]
pub struct FakeLayout {
    pub viewport: Viewport,
    pub rects: HashMap<String, Vec<Rect>>,
}

impl FakeLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            rects: HashMap::new(),
        }
    }

    pub fn with(mut self, selector: &str, rects: Vec<Rect>) -> Self {
        self.rects.insert(selector.to_string(), rects);
        self
    }
}

impl Layout for FakeLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn rects(&self, selector: &str) -> &[Rect] {
        self.rects.get(selector).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Page whose live geometry only reaches readers through `measure`, like the
/// DOM behind a cached layout. Flushed heights resize the matching element and
/// push everything below it down.
pub struct FakePage {
    live: FakeLayout,
    measured: FakeLayout,
    natural_heights: HashMap<String, Vec<f32>>,
    /// Inline heights written by flushes; they survive a reflow.
    applied: HashMap<(String, usize), f32>,
    document_height: f32,
    measured_document_height: f32,
}

fn natural_heights(layout: &FakeLayout) -> HashMap<String, Vec<f32>> {
    layout
        .rects
        .iter()
        .map(|(sel, rects)| (sel.clone(), rects.iter().map(|r| r.height).collect()))
        .collect()
}

impl FakePage {
    pub fn new(live: FakeLayout, document_height: f32) -> Self {
        Self {
            measured: FakeLayout::new(live.viewport.width, live.viewport.height),
            natural_heights: natural_heights(&live),
            live,
            applied: HashMap::new(),
            document_height,
            measured_document_height: 0.0,
        }
    }

    /// New stylesheet layout (a viewport resize across a media query). Inline
    /// heights still on the page are laid out again on top of it.
    pub fn reflow(&mut self, live: FakeLayout, document_height: f32) {
        self.natural_heights = natural_heights(&live);
        self.live = live;
        self.document_height = document_height;
        let applied: Vec<_> = self.applied.iter().map(|(k, h)| (k.clone(), *h)).collect();
        for ((sel, index), height) in applied {
            self.resize_element(&sel, index, height);
        }
    }

    pub fn live(&self) -> &FakeLayout {
        &self.live
    }

    fn resize_element(&mut self, selector: &str, index: usize, height: f32) {
        let Some(rect) = self.live.rects.get_mut(selector).and_then(|r| r.get_mut(index)) else {
            return;
        };
        let old_bottom = rect.y + rect.height;
        let delta = height - rect.height;
        rect.height = height;
        if delta == 0.0 {
            return;
        }
        for rects in self.live.rects.values_mut() {
            for r in rects.iter_mut() {
                if r.y >= old_bottom {
                    r.y += delta;
                }
            }
        }
        self.document_height += delta;
    }
}

impl Layout for FakePage {
    fn viewport(&self) -> Viewport {
        self.measured.viewport
    }

    fn rects(&self, selector: &str) -> &[Rect] {
        self.measured.rects(selector)
    }
}

impl LayoutHost for FakePage {
    fn flush(&mut self, book: &mut StyleBook) {
        for (el, style) in book.drain_dirty() {
            let natural = self
                .natural_heights
                .get(el.selector)
                .and_then(|h| h.get(el.index))
                .copied();
            let key = (el.selector.to_string(), el.index);
            match style.height_px {
                Some(h) => {
                    self.applied.insert(key, h);
                }
                None => {
                    self.applied.remove(&key);
                }
            }
            if let Some(natural) = natural {
                self.resize_element(el.selector, el.index, style.height_px.unwrap_or(natural));
            }
        }
    }

    fn measure(&mut self) {
        self.measured = self.live.clone();
        self.measured_document_height = self.document_height;
    }

    fn scroll_limit(&self) -> f32 {
        (self.measured_document_height - self.measured.viewport.height).max(0.0)
    }
}
