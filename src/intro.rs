use crate::constants::{INTRO_ID, INTRO_LOADING_TEXT, INTRO_TEXT_ID, LOADING_BAR_ID};
use crate::page::Page;
use folio_core::IntroTick;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the click-to-start overlay. The first click starts a fixed-interval
/// progress timer; the frame loop plays the exit sequence once it reaches 100.
pub fn wire_intro(document: &web::Document, page: &Page, tick_ms: u32) {
    let Some(intro) = document.get_element_by_id(INTRO_ID) else {
        log::warn!("[intro] missing #{}; starting unlocked", INTRO_ID);
        // No gate on the page: run the gate to completion immediately.
        let mut gate = page.gate.borrow_mut();
        gate.activate();
        while gate.tick() != IntroTick::Finished {}
        drop(gate);
        finish_now(page);
        return;
    };

    let page = page.clone();
    let document = document.clone();
    let timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let on_click = Closure::wrap(Box::new(move || {
        if !page.gate.borrow_mut().activate() {
            return;
        }
        if let Some(text) = document.get_element_by_id(INTRO_TEXT_ID) {
            text.set_text_content(Some(INTRO_LOADING_TEXT));
        }
        if let Some(bar) = document
            .get_element_by_id(LOADING_BAR_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            _ = bar.style().set_property("opacity", "1");
        }
        start_progress_timer(&page, &timer, tick_ms);
    }) as Box<dyn FnMut()>);
    _ = intro.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

fn start_progress_timer(page: &Page, timer: &Rc<Cell<Option<i32>>>, tick_ms: u32) {
    let Some(window) = web::window() else {
        return;
    };
    let page = page.clone();
    let timer_tick = timer.clone();
    let tick = Closure::wrap(Box::new(move || {
        let outcome = page.gate.borrow_mut().tick();
        match outcome {
            IntroTick::Progress(_) => {
                page.gate.borrow().paint_progress(&mut page.book.borrow_mut());
            }
            IntroTick::Finished => {
                stop(&timer_tick);
                page.gate.borrow().paint_progress(&mut page.book.borrow_mut());
                finish_now(&page);
            }
            IntroTick::Idle => stop(&timer_tick),
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        tick_ms as i32,
    ) {
        Ok(handle) => timer.set(Some(handle)),
        Err(e) => log::error!("[intro] setInterval failed: {:?}", e),
    }
    tick.forget();
}

fn stop(timer: &Rc<Cell<Option<i32>>>) {
    if let (Some(handle), Some(window)) = (timer.take(), web::window()) {
        window.clear_interval_with_handle(handle);
    }
}

/// Zero-length step into the exit sequence so the instant variant completes
/// in the same callback that reached 100. Longer sequences continue from the
/// frame loop.
fn finish_now(page: &Page) {
    let mut book = page.book.borrow_mut();
    page.gate.borrow_mut().advance_exit(0.0, &mut book);
}
