use crate::easing::{lerp, Easing};
use crate::style::{ElementRef, Prop, StyleBook};

/// One tween inside a [`Timeline`], positioned at an absolute start offset.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub target: ElementRef,
    pub prop: Prop,
    pub from: f32,
    pub to: f32,
    pub start_s: f32,
    pub duration_s: f32,
    pub easing: Easing,
}

impl Step {
    fn value_at(&self, t_s: f32) -> f32 {
        if self.duration_s <= 0.0 {
            return if t_s >= self.start_s { self.to } else { self.from };
        }
        let local = ((t_s - self.start_s) / self.duration_s).clamp(0.0, 1.0);
        lerp(self.from, self.to, self.easing.apply(local))
    }

    fn end_s(&self) -> f32 {
        self.start_s + self.duration_s.max(0.0)
    }
}

/// Fixed sequence of tweens played forward once. There is no pause, seek or
/// cancel: once started it runs to its end.
#[derive(Debug, Clone)]
pub struct Timeline {
    steps: Vec<Step>,
    elapsed_s: f32,
    finished: bool,
}

impl Timeline {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            elapsed_s: 0.0,
            finished: false,
        }
    }

    pub fn duration_s(&self) -> f32 {
        self.steps.iter().map(Step::end_s).fold(0.0, f32::max)
    }

    /// Advance by `dt_s` and write every step's current value. Returns `true`
    /// on the call that reaches the end; later calls are no-ops returning `false`.
    pub fn advance(&mut self, dt_s: f32, book: &mut StyleBook) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed_s += dt_s.max(0.0);
        for step in &self.steps {
            // Steps that have not begun keep whatever the page shows.
            if self.elapsed_s >= step.start_s {
                book.set(step.target, step.prop, step.value_at(self.elapsed_s));
            }
        }
        if self.elapsed_s >= self.duration_s() {
            self.finished = true;
            return true;
        }
        false
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
