use crate::constants::{BODY_LOADED_CLASS, BODY_LOADING_CLASS, INTRO_ID};
use crate::dom::{self, DomLayout};
use folio_core::catalogue::default_catalogue;
use folio_core::pointer::PointerTracker;
use folio_core::scroll::TriggerScope;
use folio_core::{cards, track, IntroGate, PinnedTrack, ScrollScene, SmoothScroll, StyleBook};
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared page state. Each component keeps its own `Rc<RefCell<_>>`; listeners
/// and the frame loop clone the handles they need.
#[derive(Clone)]
pub struct Page {
    pub gate: Rc<RefCell<IntroGate<StdRng>>>,
    pub scene: Rc<RefCell<ScrollScene>>,
    pub track: Rc<RefCell<PinnedTrack>>,
    pub smooth: Rc<RefCell<SmoothScroll>>,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub book: Rc<RefCell<StyleBook>>,
    pub layout: Rc<RefCell<DomLayout>>,
    /// Set by resize and setup; the next frame re-measures before evaluating.
    pub layout_dirty: Rc<Cell<bool>>,
    /// Last offset this page wrote with `scrollTo`, to tell echoes from user scrolls.
    pub last_written_scroll: Rc<Cell<f32>>,
}

impl Page {
    pub fn new(gate: IntroGate<StdRng>, track: PinnedTrack, smooth: SmoothScroll) -> Self {
        let page = Self {
            gate: Rc::new(RefCell::new(gate)),
            scene: Rc::new(RefCell::new(ScrollScene::new())),
            track: Rc::new(RefCell::new(track)),
            smooth: Rc::new(RefCell::new(smooth)),
            pointer: Rc::new(RefCell::new(PointerTracker::new())),
            book: Rc::new(RefCell::new(StyleBook::new())),
            layout: Rc::new(RefCell::new(DomLayout::new(measured_selectors()))),
            layout_dirty: Rc::new(Cell::new(true)),
            last_written_scroll: Rc::new(Cell::new(0.0)),
        };
        page.subscribe_scroll_consumers();
        page
    }

    /// Scroll frames feed the registered bindings and the work track.
    fn subscribe_scroll_consumers(&self) {
        let scene = self.scene.clone();
        let track = self.track.clone();
        let layout = self.layout.clone();
        let book = self.book.clone();
        self.smooth.borrow_mut().subscribe(move |frame| {
            let layout = layout.borrow();
            let mut book = book.borrow_mut();
            scene.borrow_mut().update(frame, &*layout, &mut book);
            track.borrow_mut().update(frame, &*layout, &mut book);
        });
    }

    /// Register the scroll catalogue. Runs once; the scene refuses repeats.
    pub fn attach_scroll(&self) {
        match self.scene.borrow_mut().register(default_catalogue()) {
            Ok(()) => self.layout_dirty.set(true),
            Err(e) => log::warn!("[scroll] {e}"),
        }
    }

    /// Hook the scroll scene and the body state onto intro completion.
    pub fn attach_on_intro_complete(&self, document: &web::Document, attach_scroll: bool) {
        let page = self.clone();
        let document = document.clone();
        self.gate.borrow_mut().on_complete().subscribe(move |_| {
            dom::body_class(&document, BODY_LOADED_CLASS, Some(BODY_LOADING_CLASS));
            if let Some(intro) = document
                .get_element_by_id(INTRO_ID)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            {
                _ = intro.style().set_property("pointer-events", "none");
            }
            if attach_scroll {
                page.attach_scroll();
            }
        });
    }
}

fn measured_selectors() -> Vec<&'static str> {
    let mut sels: Vec<&'static str> = Vec::new();
    for b in default_catalogue() {
        sels.push(b.targets);
        if let TriggerScope::Shared(s) = b.scope {
            sels.push(s);
        }
    }
    sels.extend([
        track::SECTION,
        track::TRACK,
        track::CARD,
        cards::CARD_STACK,
    ]);
    sels.sort_unstable();
    sels.dedup();
    sels
}
