#![cfg(target_arch = "wasm32")]
use folio_core::config::ScrollSetup;
use folio_core::micro::GlitchPulse;
use folio_core::scene::{Camera, RenderClock};
use folio_core::{IntroGate, PinnedTrack, SiteConfig, SmoothScroll};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod effects;
mod events;
mod form;
mod frame;
mod intro;
mod page;
mod render;

use constants::{BODY_LOADING_CLASS, CANVAS_ID};
use page::Page;

/// Parse the page's inline site config. Exposed for the browser smoke test.
pub fn site_config_from_document(document: &web::Document) -> SiteConfig {
    config::load(document)
}

/// Measured document-space boxes for `selector`. Exposed for the browser smoke test.
pub fn document_rects(document: &web::Document, selector: &str) -> Vec<folio_core::Rect> {
    dom::document_rects(document, selector)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cfg = config::load(&document);
    log::set_max_level(cfg.log_filter());
    log::info!(
        "[config] intro={:?} scroll_setup={:?} breakpoint={}px",
        cfg.intro.variant,
        cfg.scroll.setup,
        cfg.scroll.breakpoint_px
    );

    if let Some(body) = document.body() {
        _ = body.class_list().add_1(BODY_LOADING_CLASS);
    }
    if let Some(url) = &cfg.background_image {
        config::apply_background_image(&document, url);
    }

    let rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let page = Page::new(
        IntroGate::new(cfg.intro.variant, cfg.intro.max_step, rng),
        PinnedTrack::new(cfg.scroll.breakpoint_px, cfg.scroll.center_band),
        SmoothScroll::new(cfg.scroll.lerp, cfg.scroll.wheel_multiplier),
    );

    // Ordering between the gate and the scroll scene is a configuration choice.
    let after_intro = cfg.scroll.setup == ScrollSetup::AfterIntro;
    page.attach_on_intro_complete(&document, after_intro);
    if !after_intro {
        page.attach_scroll();
    }
    intro::wire_intro(&document, &page, cfg.intro.tick_ms);

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("missing #{}; background disabled", CANVAS_ID);
    }

    events::wire_resize(&page, canvas.clone());
    events::wire_pointer_tracker(&page);
    events::wire_scroll_input(&page);
    events::wire_tilt(&document);
    events::wire_magnetic(&document);
    let glitch = effects::Glitch::arm(
        &document,
        GlitchPulse::new(cfg.glitch.period_ms, cfg.glitch.active_ms),
    );
    effects::wire_resume_button(&document);
    form::wire_contact_form(&document, cfg.form.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        page,
        window,
        document,
        canvas: canvas.clone(),
        gpu: None,
        camera: Camera::default(),
        clock: RenderClock::default(),
        card_stack: Default::default(),
        glitch,
        last_instant: Instant::now(),
    }));
    // The page animates right away; the background joins once the adapter is ready.
    frame::start_loop(frame_ctx.clone());
    if let Some(c) = &canvas {
        let gpu = frame::init_gpu(c).await;
        frame_ctx.borrow_mut().gpu = gpu;
    }
    Ok(())
}
