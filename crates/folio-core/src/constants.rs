// Interaction and sequencing constants shared by the core and the web front-end.

// Intro gate
pub const INTRO_TICK_MS: u32 = 120; // progress timer interval
pub const INTRO_MAX_STEP: f32 = 12.0; // upper bound (exclusive) of one random increment
pub const INTRO_COMPLETE: f32 = 100.0;

// Micro-interactions
pub const TILT_MAX_DEG: f32 = 10.0;
pub const MAGNETIC_OUTER_FRACTION: f32 = 0.3; // button follows 30% of the pointer offset
pub const MAGNETIC_INNER_FRACTION: f32 = 0.1; // label lags behind at 10%
pub const GLITCH_PERIOD_MS: u32 = 3000;
pub const GLITCH_ACTIVE_MS: u32 = 200;

// Smooth scroll
pub const SCROLL_LERP: f32 = 0.1; // fraction of remaining distance covered per 60 Hz frame
pub const SCROLL_SETTLE_PX: f32 = 0.5; // snap to target below this distance

// Responsive pinned track
pub const TRACK_BREAKPOINT_PX: f32 = 900.0;
pub const TRACK_CENTER_BAND: [f32; 2] = [0.35, 0.65]; // viewport-relative x band

// Card stack
pub const CARD_STACK_THRESHOLD: f32 = 0.5;

// Background
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const PLANE_TILT_RAD: f32 = 0.08; // plane rotation at full pointer offset
pub const PLANE_OVERSCAN: f32 = 1.25; // plane size relative to the visible frustum slice
pub const SCROLL_VELOCITY_FULL_PX_S: f32 = 3000.0; // scroll speed that saturates the noise stretch
