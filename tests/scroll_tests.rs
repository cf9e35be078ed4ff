// Host-side tests for scroll bindings and the smooth scroll driver.

mod common;

use common::FakeLayout;
use folio_core::catalogue::default_catalogue;
use folio_core::easing::Easing;
use folio_core::scroll::{progress_between, Binding, Drive, Edge, PropTween, RegistrarError, TriggerScope};
use folio_core::{ElementRef, Prop, Rect, ScrollFrame, ScrollScene, SmoothScroll, StyleBook};
use std::cell::RefCell;
use std::rc::Rc;

fn at(position: f32, dt_s: f32) -> ScrollFrame {
    ScrollFrame {
        position,
        dt_s,
        ..Default::default()
    }
}

fn page_layout() -> FakeLayout {
    FakeLayout::new(1200.0, 800.0)
        .with(".hero", vec![Rect::new(0.0, 0.0, 1200.0, 1000.0)])
        .with(".hero-bg", vec![Rect::new(0.0, 0.0, 1200.0, 1000.0)])
        .with(".hero-title", vec![Rect::new(100.0, 300.0, 800.0, 120.0)])
        .with(
            ".reveal",
            vec![
                Rect::new(0.0, 2000.0, 1200.0, 200.0),
                Rect::new(0.0, 3000.0, 1200.0, 200.0),
            ],
        )
}

fn registered() -> ScrollScene {
    let mut scene = ScrollScene::new();
    scene.register(default_catalogue()).expect("first registration");
    scene
}

#[test]
fn registration_is_one_shot() {
    let mut scene = registered();
    assert!(scene.is_registered());
    let n = scene.len();
    assert_eq!(
        scene.register(default_catalogue()),
        Err(RegistrarError::AlreadyRegistered)
    );
    assert_eq!(scene.len(), n);
}

#[test]
fn unregistered_scene_writes_nothing() {
    let mut scene = ScrollScene::new();
    let mut book = StyleBook::new();
    scene.update(&at(500.0, 0.016), &page_layout(), &mut book);
    assert!(!book.has_pending());
}

#[test]
fn scrubbed_parallax_follows_smoothed_position() {
    let mut scene = registered();
    let mut book = StyleBook::new();
    let layout = page_layout();

    scene.update(&at(500.0, 0.016), &layout, &mut book);
    let bg = book.get(&ElementRef::first(".hero-bg")).unwrap();
    assert_eq!(bg.y, Some(110.0));
    let title = book.get(&ElementRef::first(".hero-title")).unwrap();
    assert_eq!(title.y_percent, Some(-20.0));

    // scrolling back reverses a scrubbed binding
    scene.update(&at(0.0, 0.016), &layout, &mut book);
    let bg = book.get(&ElementRef::first(".hero-bg")).unwrap();
    assert_eq!(bg.y, Some(0.0));
}

#[test]
fn reveal_plays_once_after_crossing_start() {
    let mut scene = registered();
    let mut book = StyleBook::new();
    let layout = page_layout();
    let first = ElementRef::new(".reveal", 0);
    let second = ElementRef::new(".reveal", 1);

    // start edge for the first reveal: 2000 - 0.85 * 800 = 1320
    scene.update(&at(1000.0, 0.016), &layout, &mut book);
    assert_eq!(book.get(&first).unwrap().opacity, Some(0.0));
    assert_eq!(book.get(&first).unwrap().y, Some(60.0));

    scene.update(&at(1400.0, 0.3), &layout, &mut book);
    let mid = book.get(&first).unwrap().opacity.unwrap();
    assert!(mid > 0.0 && mid < 1.0);

    for _ in 0..5 {
        scene.update(&at(1400.0, 0.3), &layout, &mut book);
    }
    assert_eq!(book.get(&first).unwrap().opacity, Some(1.0));
    assert_eq!(book.get(&first).unwrap().y, Some(0.0));
    // the second reveal has not been reached
    assert_eq!(book.get(&second).unwrap().opacity, Some(0.0));

    // once played, scrolling back does not hide it again
    scene.update(&at(0.0, 0.3), &layout, &mut book);
    assert_eq!(book.get(&first).unwrap().opacity, Some(1.0));
}

#[test]
fn missing_targets_are_skipped_silently() {
    let mut scene = registered();
    let mut book = StyleBook::new();
    let layout = FakeLayout::new(1200.0, 800.0);
    scene.update(&at(300.0, 0.016), &layout, &mut book);
    assert!(!book.has_pending());
}

#[test]
fn progress_between_clamps_and_handles_zero_span() {
    assert_eq!(progress_between(-10.0, 0.0, 100.0), 0.0);
    assert_eq!(progress_between(50.0, 0.0, 100.0), 0.5);
    assert_eq!(progress_between(500.0, 0.0, 100.0), 1.0);
    assert_eq!(progress_between(99.0, 100.0, 100.0), 0.0);
    assert_eq!(progress_between(100.0, 100.0, 100.0), 1.0);
}

#[test]
fn smooth_scroll_eases_toward_clamped_target() {
    let mut s = SmoothScroll::new(0.1, 1.0);
    s.set_limit(5000.0);
    s.on_wheel(1000.0);
    assert_eq!(s.target(), 1000.0);

    let f = s.advance(1.0 / 60.0);
    assert!((f.position - 100.0).abs() < 0.01, "{}", f.position);
    assert!(f.velocity > 0.0);

    for _ in 0..600 {
        s.advance(1.0 / 60.0);
    }
    assert!(s.is_settled());
    assert_eq!(s.position(), 1000.0);

    s.on_wheel(1.0e6);
    assert_eq!(s.target(), 5000.0);
    s.on_wheel(-1.0e7);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn smooth_scroll_is_frame_rate_independent() {
    let mut a = SmoothScroll::new(0.1, 1.0);
    let mut b = SmoothScroll::new(0.1, 1.0);
    for s in [&mut a, &mut b] {
        s.set_limit(4000.0);
        s.scroll_to(2000.0);
    }
    for _ in 0..60 {
        a.advance(1.0 / 60.0);
    }
    for _ in 0..120 {
        b.advance(1.0 / 120.0);
    }
    assert!((a.position() - b.position()).abs() < 1.0);
}

#[test]
fn external_scroll_resyncs_without_easing() {
    let mut s = SmoothScroll::new(0.1, 1.0);
    s.set_limit(3000.0);
    s.sync_external(1234.0);
    assert_eq!(s.position(), 1234.0);
    assert_eq!(s.advance(1.0 / 60.0).position, 1234.0);
}

#[test]
fn subscribers_receive_every_frame() {
    let mut s = SmoothScroll::new(0.1, 1.0);
    s.set_limit(1000.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    s.subscribe(move |f| sink.borrow_mut().push(f.position));
    s.scroll_to(500.0);
    for _ in 0..3 {
        s.advance(1.0 / 60.0);
    }
    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen[0] < seen[1] && seen[1] < seen[2]);
}

#[test]
fn play_binding_runs_on_time_not_on_scroll_distance() {
    let mut scene = ScrollScene::new();
    scene
        .register(vec![Binding {
            name: "fade",
            targets: ".card",
            scope: TriggerScope::EachTarget,
            // card top meets the viewport bottom
            start: Edge::new(0.0, 1.0),
            drive: Drive::Play { duration_s: 0.5 },
            easing: Easing::Linear,
            stagger: 0.0,
            tweens: vec![PropTween::new(Prop::Opacity, 0.0, 1.0)].into(),
        }])
        .unwrap();
    let layout = FakeLayout::new(1200.0, 800.0)
        .with(".card", vec![Rect::new(0.0, 1000.0, 400.0, 300.0)]);
    let mut book = StyleBook::new();
    let card = ElementRef::first(".card");

    // one pixel past the start edge, then the page stops scrolling
    scene.update(&at(201.0, 0.0), &layout, &mut book);
    for _ in 0..5 {
        scene.update(&at(201.0, 0.1), &layout, &mut book);
    }
    let opacity = book.get(&card).unwrap().opacity.unwrap();
    assert!((opacity - 1.0).abs() < 1e-5, "{opacity}");
}
