//! Click-to-start loading gate shown before the page becomes interactive.
//!
//! The gate owns its state outright: one activation flag, one progress value,
//! one writer (the tick timer). Completion is published through a
//! [`OnceSignal`] so the scroll scene can attach without the gate knowing it.

use crate::constants::{INTRO_COMPLETE, INTRO_MAX_STEP};
use crate::easing::Easing;
use crate::signal::OnceSignal;
use crate::style::{ElementRef, Prop, StyleBook};
use crate::timeline::{Step, Timeline};
use rand::Rng;
use serde::Deserialize;

pub const INTRO: ElementRef = ElementRef::first("#intro");
pub const INTRO_TEXT: ElementRef = ElementRef::first("#introText");
pub const LOADING_BAR: ElementRef = ElementRef::first("#loadingBar");
pub const LOADING_FILL: ElementRef = ElementRef::first("#loadingFill");

/// How the gate leaves the screen once progress reaches 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroVariant {
    /// Hide the overlay at once.
    Instant,
    /// Play the exit timeline (text fade, bar fade, overlay slide-up) first.
    #[default]
    Sequenced,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntroState {
    pub started: bool,
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Waiting,
    Loading,
    Exiting,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntroTick {
    /// Not started, or already past loading; the timer should not be running.
    Idle,
    Progress(f32),
    /// Progress just reached exactly 100. Reported once.
    Finished,
}

pub struct IntroGate<R: Rng> {
    state: IntroState,
    phase: IntroPhase,
    max_step: f32,
    rng: R,
    exit: Timeline,
    on_complete: OnceSignal<()>,
}

impl<R: Rng> IntroGate<R> {
    pub fn new(variant: IntroVariant, max_step: f32, rng: R) -> Self {
        let max_step = if max_step.is_finite() && max_step > 0.0 {
            max_step
        } else {
            INTRO_MAX_STEP
        };
        Self {
            state: IntroState::default(),
            phase: IntroPhase::Waiting,
            max_step,
            rng,
            exit: exit_timeline(variant),
            on_complete: OnceSignal::new(),
        }
    }

    /// First activation starts loading and returns `true`; later calls are no-ops.
    pub fn activate(&mut self) -> bool {
        if self.state.started {
            return false;
        }
        self.state.started = true;
        self.phase = IntroPhase::Loading;
        log::info!("[intro] started");
        true
    }

    pub fn tick(&mut self) -> IntroTick {
        if self.phase != IntroPhase::Loading {
            return IntroTick::Idle;
        }
        let step = self.rng.gen_range(0.0..self.max_step);
        self.state.progress = (self.state.progress + step).min(INTRO_COMPLETE);
        if self.state.progress >= INTRO_COMPLETE {
            self.state.progress = INTRO_COMPLETE;
            self.phase = IntroPhase::Exiting;
            log::info!("[intro] loading complete");
            return IntroTick::Finished;
        }
        IntroTick::Progress(self.state.progress)
    }

    /// Write the loading bar fill for the current progress.
    pub fn paint_progress(&self, book: &mut StyleBook) {
        book.set(LOADING_FILL, Prop::WidthPercent, self.state.progress);
    }

    /// Drive the exit sequence. Returns `true` exactly once, on the call that
    /// finishes it; the completion hook fires from inside that call.
    pub fn advance_exit(&mut self, dt_s: f32, book: &mut StyleBook) -> bool {
        if self.phase != IntroPhase::Exiting {
            return false;
        }
        if !self.exit.advance(dt_s, book) {
            return false;
        }
        self.phase = IntroPhase::Loaded;
        log::info!("[intro] exit sequence done");
        self.on_complete.emit(&());
        true
    }

    pub fn on_complete(&mut self) -> &mut OnceSignal<()> {
        &mut self.on_complete
    }

    pub fn state(&self) -> IntroState {
        self.state
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == IntroPhase::Loaded
    }
}

fn exit_timeline(variant: IntroVariant) -> Timeline {
    let step = |target, prop, from, to, start_s, duration_s, easing| Step {
        target,
        prop,
        from,
        to,
        start_s,
        duration_s,
        easing,
    };
    match variant {
        IntroVariant::Instant => Timeline::new(vec![step(
            INTRO,
            Prop::Opacity,
            1.0,
            0.0,
            0.0,
            0.0,
            Easing::Linear,
        )]),
        IntroVariant::Sequenced => Timeline::new(vec![
            step(INTRO_TEXT, Prop::Opacity, 1.0, 0.0, 0.0, 0.35, Easing::EaseOutQuad),
            step(INTRO_TEXT, Prop::Y, 0.0, -24.0, 0.0, 0.35, Easing::EaseOutQuad),
            step(LOADING_BAR, Prop::ScaleX, 1.0, 0.0, 0.1, 0.4, Easing::EaseInQuart),
            step(INTRO, Prop::YPercent, 0.0, -100.0, 0.45, 0.9, Easing::EaseInOutCubic),
        ]),
    }
}
