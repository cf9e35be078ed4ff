//! Background scene state shared with the web renderer.
//!
//! These types avoid platform APIs so the per-frame math can be exercised on
//! the host. The renderer packs them into [`BackgroundUniforms`] every frame.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_Z, PLANE_OVERSCAN, PLANE_TILT_RAD, SCROLL_VELOCITY_FULL_PX_S,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Plane size that covers the view at the target distance, with margin so
    /// a tilted plane never shows its edges.
    pub fn covering_plane(&self) -> (f32, f32) {
        let dist = (self.eye - self.target).length();
        let h = 2.0 * dist * (self.fovy_radians * 0.5).tan() * PLANE_OVERSCAN;
        (h * self.aspect, h)
    }
}

/// Backing size of the render surface. The renderer calls [`SurfaceSize::sync`]
/// with the canvas size before every render so the output always matches the
/// latest viewport, however many resizes happened in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Returns `true` when the size changed and GPU resources must be reconfigured.
    pub fn sync(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}

/// Rotation applied to the background plane from the centred pointer offset.
pub fn plane_rotation(pointer_centered: [f32; 2]) -> Mat4 {
    let [px, py] = pointer_centered;
    Mat4::from_rotation_y(px * PLANE_TILT_RAD) * Mat4::from_rotation_x(-py * PLANE_TILT_RAD)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BackgroundUniforms {
    pub mvp: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub scroll: f32,
    pub pointer: [f32; 2],
    pub plane_size: [f32; 2],
    /// Scroll speed in [-1, 1], positive scrolling down.
    pub scroll_velocity: f32,
    pub _pad: [f32; 3],
}

impl BackgroundUniforms {
    pub fn build(
        camera: &Camera,
        surface: SurfaceSize,
        time: f32,
        scroll_progress: f32,
        scroll_velocity_px_s: f32,
        pointer_uv: [f32; 2],
        pointer_centered: [f32; 2],
    ) -> Self {
        let (pw, ph) = camera.covering_plane();
        let model = plane_rotation(pointer_centered);
        let mvp = camera.projection_matrix() * camera.view_matrix() * model;
        Self {
            mvp: mvp.to_cols_array_2d(),
            resolution: [surface.width as f32, surface.height as f32],
            time,
            scroll: scroll_progress.clamp(0.0, 1.0),
            pointer: pointer_uv,
            plane_size: [pw, ph],
            scroll_velocity: (scroll_velocity_px_s / SCROLL_VELOCITY_FULL_PX_S).clamp(-1.0, 1.0),
            _pad: [0.0; 3],
        }
    }
}

/// Monotonic seconds since the render module started.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderClock {
    elapsed_s: f32,
}

impl RenderClock {
    pub fn advance(&mut self, dt_s: f32) -> f32 {
        self.elapsed_s += dt_s.max(0.0);
        self.elapsed_s
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed_s
    }
}
