// DOM hooks and fixed copy used by the web front-end.

// Canvas and config
pub const CANVAS_ID: &str = "bg-canvas";
pub const CONFIG_SCRIPT_ID: &str = "site-config";
pub const HERO_BG_SELECTOR: &str = ".hero-bg";

// Body state classes
pub const BODY_LOADING_CLASS: &str = "loading-active";
pub const BODY_LOADED_CLASS: &str = "loaded";

// Intro
pub const INTRO_ID: &str = "intro";
pub const INTRO_TEXT_ID: &str = "introText";
pub const LOADING_BAR_ID: &str = "loadingBar";
pub const INTRO_LOADING_TEXT: &str = "LOADING...";

// Micro-interaction hooks
pub const TILT_SELECTOR: &str = ".tilt-card";
pub const TILT_PERSPECTIVE_PX: f32 = 800.0;
pub const MAGNETIC_SELECTOR: &str = ".magnetic";
pub const MAGNETIC_INNER_SELECTOR: &str = ".magnetic-inner";
pub const GLITCH_SELECTOR: &str = ".glitch";
pub const GLITCH_ACTIVE_CLASS: &str = "active";

// Resume button
pub const RESUME_BUTTON_ID: &str = "resumeBtn";
pub const RESUME_DOWNLOADING_CLASS: &str = "downloading";
pub const RESUME_LABEL_IDLE: &str = "DOWNLOAD RESUME";
pub const RESUME_LABEL_BUSY: &str = "DOWNLOADING...";
pub const RESUME_RESET_MS: i32 = 2000;

// Contact form
pub const FORM_ID: &str = "contactForm";
pub const FORM_STATUS_ID: &str = "formStatus";

// Wheel delta normalization (WheelEvent.deltaMode == 1)
pub const WHEEL_LINE_PX: f32 = 16.0;
// Frame delta clamp; long stalls (tab switch) would otherwise jump animations.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
// Native scroll offsets within this distance of our own write are echoes.
pub const SCROLL_ECHO_PX: f32 = 1.0;
