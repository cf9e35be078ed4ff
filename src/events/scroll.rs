use crate::constants::{SCROLL_ECHO_PX, WHEEL_LINE_PX};
use crate::dom;
use crate::page::Page;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel input feeds the smooth scroll target; native scrolls we did not
/// cause (scrollbar, keyboard, touch) resync it.
pub fn wire_scroll_input(page: &Page) {
    let Some(window) = web::window() else {
        return;
    };

    let p = page.clone();
    let win = window.clone();
    let on_wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        if !p.gate.borrow().is_loaded() {
            return;
        }
        let dy = match ev.delta_mode() {
            web::WheelEvent::DOM_DELTA_LINE => ev.delta_y() as f32 * WHEEL_LINE_PX,
            web::WheelEvent::DOM_DELTA_PAGE => ev.delta_y() as f32 * dom::viewport(&win).height,
            _ => ev.delta_y() as f32,
        };
        p.smooth.borrow_mut().on_wheel(dy);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        on_wheel.as_ref().unchecked_ref(),
        &opts,
    );
    on_wheel.forget();

    let p = page.clone();
    let win = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let y = win.scroll_y().unwrap_or(0.0) as f32;
        if (y - p.last_written_scroll.get()).abs() > SCROLL_ECHO_PX {
            p.smooth.borrow_mut().sync_external(y);
            p.last_written_scroll.set(y);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

/// Resize keeps the canvas backing store at CSS size × devicePixelRatio and
/// schedules a re-measure; the frame loop re-evaluates the work track there.
pub fn wire_resize(page: &Page, canvas: Option<web::HtmlCanvasElement>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(c) = &canvas {
        dom::sync_canvas_backing_size(c);
    }
    let p = page.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(c) = &canvas {
            dom::sync_canvas_backing_size(c);
        }
        p.layout_dirty.set(true);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}
