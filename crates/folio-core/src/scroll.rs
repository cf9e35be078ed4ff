//! Declarative scroll-driven animation bindings and the scene that evaluates them.
//!
//! A binding maps the smoothed scroll position onto a progress ratio between a
//! start and an end threshold, then interpolates a small set of properties on
//! its targets. Thresholds are expressed the usual way: "when the trigger's
//! top (element anchor 0.0) meets 85% of the viewport height".

use crate::easing::{lerp, Easing};
use crate::layout::{Layout, Rect, Viewport};
use crate::smooth::ScrollFrame;
use crate::style::{ElementRef, Prop, StyleBook};
use smallvec::SmallVec;
use thiserror::Error;

/// Anchor pair: a point on the trigger element meets a line across the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// 0.0 = element top, 1.0 = element bottom.
    pub element: f32,
    /// 0.0 = viewport top, 1.0 = viewport bottom.
    pub viewport: f32,
}

impl Edge {
    pub const fn new(element: f32, viewport: f32) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this edge is crossed for `trigger`.
    pub fn scroll_offset(&self, trigger: &Rect, viewport: Viewport) -> f32 {
        trigger.y + self.element * trigger.height - self.viewport * viewport.height
    }
}

/// Ratio of `scroll_y` between two edges, clamped to [0, 1].
pub fn progress_between(scroll_y: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span.abs() < f32::EPSILON {
        return if scroll_y >= end { 1.0 } else { 0.0 };
    }
    ((scroll_y - start) / span).clamp(0.0, 1.0)
}

/// Staggered progress for target `index` of `count` when the whole set shares
/// one progress value. Each target starts `stagger` later (as a fraction of the
/// total) and all of them finish together at 1.0.
pub fn staggered(progress: f32, index: usize, count: usize, stagger: f32) -> f32 {
    if count <= 1 || stagger <= 0.0 {
        return progress;
    }
    let total_offset = (stagger * (count - 1) as f32).min(0.9);
    let per = total_offset / (count - 1) as f32;
    let begin = per * index as f32;
    let window = 1.0 - total_offset;
    ((progress - begin) / window).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerScope {
    /// Every target shares the first element matching this selector as trigger.
    Shared(&'static str),
    /// Each target triggers itself.
    EachTarget,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drive {
    /// Property values follow scroll progress from the start edge to `end`.
    Scrub { end: Edge },
    /// Crossing the start edge plays a timed tween forward once. There is no
    /// end edge: the tween runs on time, not on scroll distance.
    Play { duration_s: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropTween {
    pub prop: Prop,
    pub from: f32,
    pub to: f32,
}

impl PropTween {
    pub const fn new(prop: Prop, from: f32, to: f32) -> Self {
        Self { prop, from, to }
    }
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub name: &'static str,
    pub targets: &'static str,
    pub scope: TriggerScope,
    pub start: Edge,
    pub drive: Drive,
    pub easing: Easing,
    /// Fraction of the progress range each successive target is delayed by.
    pub stagger: f32,
    pub tweens: SmallVec<[PropTween; 3]>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrarError {
    #[error("scroll bindings are already registered")]
    AlreadyRegistered,
}

/// Play-state of one timed target.
#[derive(Debug, Clone, Copy, Default)]
struct PlayState {
    elapsed_s: Option<f32>,
}

struct Registered {
    binding: Binding,
    plays: Vec<PlayState>,
}

/// Owns every registered binding and evaluates them once per scroll frame.
#[derive(Default)]
pub struct ScrollScene {
    bindings: Vec<Registered>,
    registered: bool,
}

impl ScrollScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the catalogue. One-shot; a second call is refused.
    pub fn register(&mut self, catalogue: Vec<Binding>) -> Result<(), RegistrarError> {
        if self.registered {
            return Err(RegistrarError::AlreadyRegistered);
        }
        self.registered = true;
        log::info!("[scroll] registering {} bindings", catalogue.len());
        self.bindings = catalogue
            .into_iter()
            .map(|binding| Registered {
                binding,
                plays: Vec::new(),
            })
            .collect();
        Ok(())
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Evaluate every binding against the smoothed scroll position.
    pub fn update(
        &mut self,
        frame: &ScrollFrame,
        layout: &dyn Layout,
        book: &mut StyleBook,
    ) {
        let viewport = layout.viewport();
        for reg in &mut self.bindings {
            let b = &reg.binding;
            let targets = layout.rects(b.targets);
            let count = targets.len();
            if count == 0 {
                continue;
            }
            if reg.plays.len() != count {
                reg.plays.resize(count, PlayState::default());
            }
            let shared = match b.scope {
                TriggerScope::Shared(sel) => match layout.rect(sel) {
                    Some(r) => Some(r),
                    None => continue,
                },
                TriggerScope::EachTarget => None,
            };
            for (i, target_rect) in targets.iter().enumerate() {
                let trigger = shared.unwrap_or(*target_rect);
                let start = b.start.scroll_offset(&trigger, viewport);
                let t = match b.drive {
                    Drive::Scrub { end } => {
                        let end = end.scroll_offset(&trigger, viewport);
                        let p = progress_between(frame.position, start, end);
                        staggered(p, i, count, b.stagger)
                    }
                    Drive::Play { duration_s } => {
                        let play = &mut reg.plays[i];
                        if play.elapsed_s.is_none() && frame.position >= start {
                            // stagger delays the start of each target's tween
                            let delay = b.stagger * duration_s * i as f32;
                            play.elapsed_s = Some(-delay);
                        }
                        match play.elapsed_s.as_mut() {
                            Some(e) => {
                                *e += frame.dt_s;
                                if duration_s <= 0.0 {
                                    if *e >= 0.0 {
                                        1.0
                                    } else {
                                        0.0
                                    }
                                } else {
                                    (*e / duration_s).clamp(0.0, 1.0)
                                }
                            }
                            None => 0.0,
                        }
                    }
                };
                let eased = b.easing.apply(t);
                let el = ElementRef::new(b.targets, i);
                for tw in &b.tweens {
                    book.set(el, tw.prop, lerp(tw.from, tw.to, eased));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_offsets_follow_anchor_convention() {
        let vp = Viewport::new(1000.0, 800.0);
        let trigger = Rect::new(0.0, 2000.0, 1000.0, 600.0);
        // "top 80%"
        assert_eq!(Edge::new(0.0, 0.8).scroll_offset(&trigger, vp), 1360.0);
        // "bottom top"
        assert_eq!(Edge::new(1.0, 0.0).scroll_offset(&trigger, vp), 2600.0);
    }

    #[test]
    fn stagger_keeps_last_target_finishing_at_one() {
        for i in 0..5 {
            assert_eq!(staggered(1.0, i, 5, 0.1), 1.0);
            assert_eq!(staggered(0.0, i, 5, 0.1), 0.0);
        }
        assert!(staggered(0.3, 0, 5, 0.1) > staggered(0.3, 4, 5, 0.1));
    }
}
