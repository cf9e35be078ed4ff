use crate::constants::{MAGNETIC_INNER_SELECTOR, MAGNETIC_SELECTOR, TILT_PERSPECTIVE_PX, TILT_SELECTOR};
use crate::dom;
use crate::page::Page;
use folio_core::micro::{magnetic, tilt};
use folio_core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn client_rect(el: &web::HtmlElement) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

fn listen(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Global pointer position for the background shader. Last write wins.
pub fn wire_pointer_tracker(page: &Page) {
    let Some(window) = web::window() else {
        return;
    };
    let pointer = page.pointer.clone();
    let win = window.clone();
    listen(&window, "pointermove", move |ev| {
        let vp = dom::viewport(&win);
        pointer
            .borrow_mut()
            .record(ev.client_x() as f32, ev.client_y() as f32, vp);
    });
}

/// Tilt cards follow the pointer while hovered and flatten on leave.
pub fn wire_tilt(document: &web::Document) {
    for card in dom::query_all(document, TILT_SELECTOR) {
        let el = card.clone();
        listen(&card, "pointermove", move |ev| {
            let t = tilt(&client_rect(&el), ev.client_x() as f32, ev.client_y() as f32);
            _ = el.style().set_property(
                "transform",
                &format!(
                    "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg)",
                    TILT_PERSPECTIVE_PX, t.rotate_x, t.rotate_y
                ),
            );
        });
        let el = card.clone();
        listen(&card, "pointerleave", move |_| {
            _ = el.style().set_property(
                "transform",
                &format!("perspective({}px) rotateX(0deg) rotateY(0deg)", TILT_PERSPECTIVE_PX),
            );
        });
    }
}

/// Magnetic buttons drift toward the pointer; their label drifts less.
pub fn wire_magnetic(document: &web::Document) {
    for button in dom::query_all(document, MAGNETIC_SELECTOR) {
        let inner = button
            .query_selector(MAGNETIC_INNER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok());

        let (el, inner_move) = (button.clone(), inner.clone());
        listen(&button, "pointermove", move |ev| {
            let m = magnetic(&client_rect(&el), ev.client_x() as f32, ev.client_y() as f32);
            _ = el.style().set_property(
                "transform",
                &format!("translate({:.1}px, {:.1}px)", m.outer.0, m.outer.1),
            );
            if let Some(inner) = &inner_move {
                _ = inner.style().set_property(
                    "transform",
                    &format!("translate({:.1}px, {:.1}px)", m.inner.0, m.inner.1),
                );
            }
        });

        let el = button.clone();
        listen(&button, "pointerleave", move |_| {
            _ = el.style().set_property("transform", "translate(0px, 0px)");
            if let Some(inner) = &inner {
                _ = inner.style().set_property("transform", "translate(0px, 0px)");
            }
        });
    }
}
