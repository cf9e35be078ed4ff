use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::effects;
use crate::page::Page;
use crate::render;
use folio_core::cards::{CardStack, CARD_STACK, EXPANDED_CLASS};
use folio_core::layout::LayoutHost;
use folio_core::scene::{BackgroundUniforms, Camera, RenderClock};
use folio_core::{ElementRef, Layout, ScrollFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub page: Page,
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<render::GpuState<'a>>,
    pub camera: Camera,
    pub clock: RenderClock,
    pub card_stack: CardStack,
    pub glitch: Option<effects::Glitch>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        if self.page.layout_dirty.replace(false) {
            self.remeasure();
        }

        // Exit sequence of the intro gate (no-op unless it is exiting).
        self.page
            .gate
            .borrow_mut()
            .advance_exit(dt_sec, &mut self.page.book.borrow_mut());

        // Smoothed scroll; subscribers evaluate bindings and the work track.
        let frame = self.page.smooth.borrow_mut().advance(dt_sec);
        if (frame.position - self.page.last_written_scroll.get()).abs() >= 0.5 {
            self.page.last_written_scroll.set(frame.position);
            self.window.scroll_to_with_x_and_y(0.0, frame.position as f64);
        }

        self.update_card_stack(frame.position);
        if let Some(glitch) = &mut self.glitch {
            glitch.update(&self.document, now);
        }

        let pending = self.page.book.borrow_mut().drain_dirty();
        if !pending.is_empty() {
            dom::apply_styles(&self.document, pending);
        }

        self.render(dt_sec, &frame);
    }

    fn remeasure(&mut self) {
        let mut layout = self.page.layout.borrow_mut();
        let mut book = self.page.book.borrow_mut();
        let mut host = dom::DomHost {
            layout: &mut *layout,
            window: &self.window,
            document: &self.document,
        };
        // The work track joins the layout once the scroll scene is registered.
        let limit = if self.page.scene.borrow().is_registered() {
            self.page.track.borrow_mut().relayout(&mut host, &mut *book)
        } else {
            host.measure();
            host.scroll_limit()
        };
        self.page.smooth.borrow_mut().set_limit(limit);
    }

    fn update_card_stack(&mut self, scroll_y: f32) {
        let layout = self.page.layout.borrow();
        let Some(rect) = layout.rect(CARD_STACK) else {
            return;
        };
        if let Some(expanded) = self.card_stack.update(&rect, scroll_y, layout.viewport()) {
            self.page
                .book
                .borrow_mut()
                .set_class(ElementRef::first(CARD_STACK), EXPANDED_CLASS, expanded);
        }
    }

    fn render(&mut self, dt_sec: f32, scroll: &ScrollFrame) {
        let time = self.clock.advance(dt_sec);
        let (Some(g), Some(canvas)) = (&mut self.gpu, &self.canvas) else {
            return;
        };
        // Apply the latest canvas size before drawing so a resize never renders stretched.
        g.resize_if_needed(canvas.width(), canvas.height());
        let size = g.size();
        self.camera.set_viewport(size.width, size.height);
        let pointer = *self.page.pointer.borrow();
        let uniforms = BackgroundUniforms::build(
            &self.camera,
            size,
            time,
            scroll.progress,
            scroll.velocity,
            pointer.uv(),
            pointer.centered(),
        );
        if let Err(e) = g.render(&uniforms) {
            log::error!("[gpu] render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
