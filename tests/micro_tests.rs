// Tilt, magnetic, glitch and card-stack behavior.

use folio_core::cards::CardStack;
use folio_core::micro::{magnetic, tilt, GlitchPulse};
use folio_core::{Rect, Viewport};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn tilt_is_flat_at_centre() {
    let r = Rect::new(100.0, 100.0, 300.0, 200.0);
    let t = tilt(&r, 250.0, 200.0);
    assert!(approx(t.rotate_x, 0.0));
    assert!(approx(t.rotate_y, 0.0));
}

#[test]
fn tilt_reaches_ten_degrees_at_corners() {
    let r = Rect::new(100.0, 100.0, 300.0, 200.0);
    let top_left = tilt(&r, 100.0, 100.0);
    assert!(approx(top_left.rotate_x, 10.0));
    assert!(approx(top_left.rotate_y, -10.0));
    let bottom_right = tilt(&r, 400.0, 300.0);
    assert!(approx(bottom_right.rotate_x, -10.0));
    assert!(approx(bottom_right.rotate_y, 10.0));
}

#[test]
fn tilt_stays_bounded_outside_the_card() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    for (x, y) in [(-500.0, 50.0), (900.0, -900.0), (50.0, 1e6)] {
        let t = tilt(&r, x, y);
        assert!(t.rotate_x.abs() <= 10.0 && t.rotate_y.abs() <= 10.0);
    }
}

#[test]
fn tilt_ignores_degenerate_rects() {
    let t = tilt(&Rect::new(0.0, 0.0, 0.0, 50.0), 10.0, 10.0);
    assert_eq!((t.rotate_x, t.rotate_y), (0.0, 0.0));
}

#[test]
fn magnetic_offsets_are_linear_in_pointer_distance() {
    let r = Rect::new(0.0, 0.0, 200.0, 80.0);
    let m = magnetic(&r, 150.0, 20.0);
    // offset from centre is (50, -20)
    assert!(approx(m.outer.0, 15.0) && approx(m.outer.1, -6.0));
    assert!(approx(m.inner.0, 5.0) && approx(m.inner.1, -2.0));

    let far = magnetic(&r, 200.0, -20.0);
    assert!(approx(far.outer.0, 2.0 * m.outer.0));
    assert!(approx(far.inner.1, 3.0 * m.inner.1));

    let still = magnetic(&r, 100.0, 40.0);
    assert_eq!(still.outer, (0.0, 0.0));
}

#[test]
fn glitch_flashes_for_200ms_every_3s() {
    let g = GlitchPulse::new(3000, 200);
    assert!(!g.is_active(0));
    assert!(!g.is_active(2999));
    assert!(g.is_active(3000));
    assert!(g.is_active(3199));
    assert!(!g.is_active(3200));
    assert!(!g.is_active(5999));
    assert!(g.is_active(6100));
    assert!(!g.is_active(6200));
}

#[test]
fn glitch_active_window_never_exceeds_period() {
    let g = GlitchPulse::new(100, 500);
    assert_eq!(g.active_ms, 100);
    let zero = GlitchPulse::new(0, 0);
    assert!(!zero.is_active(10));
}

#[test]
fn card_stack_expands_past_half_visibility_and_collapses_again() {
    let vp = Viewport::new(1200.0, 800.0);
    let rect = Rect::new(0.0, 1000.0, 600.0, 400.0);
    let mut stack = CardStack::default();

    assert_eq!(stack.update(&rect, 0.0, vp), None);
    assert_eq!(stack.update(&rect, 300.0, vp), None);
    assert_eq!(stack.update(&rect, 400.0, vp), Some(true));
    assert!(stack.is_expanded());
    assert_eq!(stack.update(&rect, 600.0, vp), None);
    assert_eq!(stack.update(&rect, 1400.0, vp), Some(false));
    assert!(!stack.is_expanded());
}
