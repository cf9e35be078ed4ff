use folio_core::layout::LayoutHost;
use folio_core::{ElementRef, ElementStyle, Layout, Rect, StyleBook, Viewport};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32)
}

/// Every element matching `selector`, as `HtmlElement`s.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn body_class(document: &web::Document, add: &str, remove: Option<&str>) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        if let Some(r) = remove {
            _ = cl.remove_1(r);
        }
        _ = cl.add_1(add);
    }
}

/// Cached document-space geometry for the selectors the scroll scene reads.
pub struct DomLayout {
    selectors: Vec<&'static str>,
    rects: HashMap<&'static str, Vec<Rect>>,
    viewport: Viewport,
    document_height: f32,
}

impl DomLayout {
    pub fn new(selectors: Vec<&'static str>) -> Self {
        Self {
            selectors,
            rects: HashMap::new(),
            viewport: Viewport::default(),
            document_height: 0.0,
        }
    }

    pub fn measure(&mut self, window: &web::Window, document: &web::Document) {
        self.viewport = viewport(window);
        for sel in &self.selectors {
            self.rects.insert(*sel, document_rects(document, sel));
        }
        self.document_height = document
            .document_element()
            .map(|el| el.scroll_height() as f32)
            .unwrap_or(self.viewport.height);
    }

    /// Largest scroll offset the page allows.
    pub fn scroll_limit(&self) -> f32 {
        (self.document_height - self.viewport.height).max(0.0)
    }
}

impl Layout for DomLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn rects(&self, selector: &str) -> &[Rect] {
        self.rects.get(selector).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Document-space boxes of every element matching `selector`.
pub fn document_rects(document: &web::Document, selector: &str) -> Vec<Rect> {
    query_all(document, selector).iter().map(layout_box).collect()
}

/// Document-space box from the offset-parent chain. CSS transforms written by
/// the scroll scene are not included, so trigger edges stay put across measures.
fn layout_box(el: &web::HtmlElement) -> Rect {
    let (mut x, mut y) = (0.0_f32, 0.0_f32);
    let mut node = Some(el.clone());
    while let Some(n) = node {
        x += n.offset_left() as f32;
        y += n.offset_top() as f32;
        node = n
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    Rect::new(x, y, el.offset_width() as f32, el.offset_height() as f32)
}

/// [`DomLayout`] bound to the live document for one re-measure pass.
pub struct DomHost<'a> {
    pub layout: &'a mut DomLayout,
    pub window: &'a web::Window,
    pub document: &'a web::Document,
}

impl Layout for DomHost<'_> {
    fn viewport(&self) -> Viewport {
        self.layout.viewport()
    }

    fn rects(&self, selector: &str) -> &[Rect] {
        self.layout.rects(selector)
    }
}

impl LayoutHost for DomHost<'_> {
    fn flush(&mut self, book: &mut StyleBook) {
        let pending = book.drain_dirty();
        if !pending.is_empty() {
            apply_styles(self.document, pending);
        }
    }

    fn measure(&mut self) {
        self.layout.measure(self.window, self.document);
    }

    fn scroll_limit(&self) -> f32 {
        self.layout.scroll_limit()
    }
}

fn lookup(document: &web::Document, el: &ElementRef) -> Option<web::HtmlElement> {
    let list = document.query_selector_all(el.selector).ok()?;
    list.item(el.index as u32)?.dyn_into::<web::HtmlElement>().ok()
}

fn set_or_clear(style: &web::CssStyleDeclaration, prop: &str, value: Option<String>) {
    match value {
        Some(v) => {
            _ = style.set_property(prop, &v);
        }
        None => {
            _ = style.remove_property(prop);
        }
    }
}

/// Write drained style entries to the DOM. Unset properties are removed so the
/// stylesheet value applies again.
pub fn apply_styles(document: &web::Document, entries: Vec<(ElementRef, ElementStyle)>) {
    for (el, s) in entries {
        let Some(node) = lookup(document, &el) else {
            continue;
        };
        let style = node.style();
        let transform = s.css_transform();
        set_or_clear(
            &style,
            "transform",
            (transform != "none").then_some(transform),
        );
        set_or_clear(&style, "opacity", s.opacity.map(|o| format!("{:.3}", o)));
        set_or_clear(&style, "width", s.width_percent.map(|w| format!("{:.2}%", w)));
        set_or_clear(&style, "height", s.height_px.map(|h| format!("{:.0}px", h)));
        let cl = node.class_list();
        for (class, on) in s.classes.iter() {
            if *on {
                _ = cl.add_1(class);
            } else {
                _ = cl.remove_1(class);
            }
        }
    }
}
