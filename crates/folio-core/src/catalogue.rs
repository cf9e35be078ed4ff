use crate::easing::Easing;
use crate::scroll::{Binding, Drive, Edge, PropTween, TriggerScope};
use crate::style::Prop;
use smallvec::smallvec;

/// The page's fixed set of scroll bindings. The pinned work track is handled
/// separately by [`crate::track::PinnedTrack`] because it is responsive.
pub fn default_catalogue() -> Vec<Binding> {
    vec![
        // Hero background drifts down slower than the page.
        Binding {
            name: "hero-parallax",
            targets: ".hero-bg",
            scope: TriggerScope::Shared(".hero"),
            start: Edge::new(0.0, 0.0),
            drive: Drive::Scrub {
                end: Edge::new(1.0, 0.0),
            },
            easing: Easing::Linear,
            stagger: 0.0,
            tweens: smallvec![PropTween::new(Prop::Y, 0.0, 220.0)],
        },
        Binding {
            name: "hero-title",
            targets: ".hero-title",
            scope: TriggerScope::Shared(".hero"),
            start: Edge::new(0.0, 0.0),
            drive: Drive::Scrub {
                end: Edge::new(1.0, 0.0),
            },
            easing: Easing::Linear,
            stagger: 0.0,
            tweens: smallvec![
                PropTween::new(Prop::YPercent, 0.0, -40.0),
                PropTween::new(Prop::Opacity, 1.0, 0.2),
            ],
        },
        Binding {
            name: "reveal",
            targets: ".reveal",
            scope: TriggerScope::EachTarget,
            start: Edge::new(0.0, 0.85),
            drive: Drive::Play { duration_s: 0.9 },
            easing: Easing::EaseOutCubic,
            stagger: 0.0,
            tweens: smallvec![
                PropTween::new(Prop::Opacity, 0.0, 1.0),
                PropTween::new(Prop::Y, 60.0, 0.0),
            ],
        },
        Binding {
            name: "skill-chips",
            targets: ".skill-chip",
            scope: TriggerScope::Shared(".skills"),
            start: Edge::new(0.0, 0.8),
            drive: Drive::Play { duration_s: 0.6 },
            easing: Easing::EaseOutQuad,
            stagger: 0.08,
            tweens: smallvec![
                PropTween::new(Prop::Opacity, 0.0, 1.0),
                PropTween::new(Prop::Y, 30.0, 0.0),
                PropTween::new(Prop::Scale, 0.9, 1.0),
            ],
        },
        Binding {
            name: "float-chips",
            targets: ".float-chip",
            scope: TriggerScope::Shared(".about"),
            start: Edge::new(0.0, 1.0),
            drive: Drive::Scrub {
                end: Edge::new(1.0, 0.0),
            },
            easing: Easing::EaseInOutCubic,
            stagger: 0.15,
            tweens: smallvec![
                PropTween::new(Prop::Y, 80.0, -80.0),
                PropTween::new(Prop::RotateY, -12.0, 12.0),
            ],
        },
    ]
}
