// Background scene math: surface sizing, camera and uniform layout.

use folio_core::scene::{plane_rotation, BackgroundUniforms, Camera, RenderClock, SurfaceSize};
use glam::Mat4;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn surface_tracks_the_last_non_zero_size() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..32 {
        let mut surface = SurfaceSize::new(800, 600);
        let mut last = (800, 600);
        for _ in 0..rng.gen_range(1..20) {
            let w = rng.gen_range(0..3000);
            let h = rng.gen_range(0..2000);
            let changed = surface.sync(w, h);
            if w > 0 && h > 0 {
                assert_eq!(changed, (w, h) != last);
                last = (w, h);
            } else {
                assert!(!changed);
            }
        }
        assert_eq!((surface.width, surface.height), last);
    }
}

#[test]
fn surface_never_starts_at_zero() {
    let s = SurfaceSize::new(0, 0);
    assert_eq!((s.width, s.height), (1, 1));
}

#[test]
fn camera_aspect_follows_viewport() {
    let mut cam = Camera::default();
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-5);
    let (w, h) = cam.covering_plane();
    assert!((w / h - cam.aspect).abs() < 1e-4);
    cam.set_viewport(100, 0);
    assert!(cam.aspect.is_finite());
}

#[test]
fn uniforms_match_shader_layout() {
    assert_eq!(std::mem::size_of::<BackgroundUniforms>(), 112);
    assert_eq!(std::mem::size_of::<BackgroundUniforms>() % 16, 0);
}

#[test]
fn uniforms_carry_frame_inputs() {
    let cam = Camera::default();
    let u = BackgroundUniforms::build(
        &cam,
        SurfaceSize::new(1280, 720),
        3.5,
        1.7,
        1500.0,
        [0.25, 0.75],
        [0.0, 0.0],
    );
    assert_eq!(u.resolution, [1280.0, 720.0]);
    assert_eq!(u.time, 3.5);
    assert_eq!(u.scroll, 1.0);
    assert_eq!(u.pointer, [0.25, 0.75]);
    assert_eq!(u.scroll_velocity, 0.5);
}

#[test]
fn scroll_velocity_saturates_in_both_directions() {
    let cam = Camera::default();
    let size = SurfaceSize::new(800, 600);
    let down = BackgroundUniforms::build(&cam, size, 0.0, 0.0, 1.0e5, [0.5; 2], [0.0; 2]);
    let up = BackgroundUniforms::build(&cam, size, 0.0, 0.0, -1.0e5, [0.5; 2], [0.0; 2]);
    assert_eq!(down.scroll_velocity, 1.0);
    assert_eq!(up.scroll_velocity, -1.0);
}

#[test]
fn centred_pointer_leaves_plane_untilted() {
    assert!(plane_rotation([0.0, 0.0]).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    assert!(!plane_rotation([1.0, 0.0]).abs_diff_eq(Mat4::IDENTITY, 1e-3));
}

#[test]
fn clock_is_monotonic() {
    let mut clock = RenderClock::default();
    clock.advance(0.5);
    clock.advance(-1.0);
    assert_eq!(clock.elapsed(), 0.5);
}
