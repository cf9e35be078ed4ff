use crate::constants::{
    GLITCH_ACTIVE_CLASS, GLITCH_SELECTOR, RESUME_BUTTON_ID, RESUME_DOWNLOADING_CLASS,
    RESUME_LABEL_BUSY, RESUME_LABEL_IDLE, RESUME_RESET_MS,
};
use crate::dom;
use folio_core::micro::GlitchPulse;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_glitch(document: &web::Document, on: bool) {
    for el in dom::query_all(document, GLITCH_SELECTOR) {
        let cl = el.class_list();
        if on {
            _ = cl.add_1(GLITCH_ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(GLITCH_ACTIVE_CLASS);
        }
    }
}

/// Glitch text flashes on for `active_ms` every `period_ms`. Time-driven only;
/// the frame loop calls [`Glitch::update`] for the lifetime of the page.
pub struct Glitch {
    pulse: GlitchPulse,
    armed: Instant,
    on: bool,
}

impl Glitch {
    /// `None` when the page has no glitch text.
    pub fn arm(document: &web::Document, pulse: GlitchPulse) -> Option<Self> {
        if dom::query_all(document, GLITCH_SELECTOR).is_empty() {
            return None;
        }
        Some(Self {
            pulse,
            armed: Instant::now(),
            on: false,
        })
    }

    pub fn update(&mut self, document: &web::Document, now: Instant) {
        let elapsed_ms = now.duration_since(self.armed).as_millis() as u64;
        let on = self.pulse.is_active(elapsed_ms);
        if on != self.on {
            self.on = on;
            set_glitch(document, on);
        }
    }
}

/// Resume button plays a short "downloading" state; the link's own download
/// proceeds natively.
pub fn wire_resume_button(document: &web::Document) {
    let Some(button) = document.get_element_by_id(RESUME_BUTTON_ID) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let btn_reset = button.clone();
    let reset = Closure::wrap(Box::new(move || {
        btn_reset.set_text_content(Some(RESUME_LABEL_IDLE));
        _ = btn_reset.class_list().remove_1(RESUME_DOWNLOADING_CLASS);
    }) as Box<dyn FnMut()>);
    let reset_fn: js_sys::Function = reset.as_ref().unchecked_ref::<js_sys::Function>().clone();
    reset.forget();

    dom::add_click_listener(document, RESUME_BUTTON_ID, move || {
        _ = button.class_list().add_1(RESUME_DOWNLOADING_CLASS);
        button.set_text_content(Some(RESUME_LABEL_BUSY));
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&reset_fn, RESUME_RESET_MS);
    });
}
