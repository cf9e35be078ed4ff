pub mod cards;
pub mod catalogue;
pub mod config;
pub mod constants;
pub mod easing;
pub mod form;
pub mod intro;
pub mod layout;
pub mod micro;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod signal;
pub mod smooth;
pub mod style;
pub mod timeline;
pub mod track;

pub static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");

pub use config::SiteConfig;
pub use intro::{IntroGate, IntroTick, IntroVariant};
pub use layout::{Layout, Rect, Viewport};
pub use scroll::ScrollScene;
pub use smooth::{ScrollFrame, SmoothScroll};
pub use style::{ElementRef, ElementStyle, Prop, StyleBook};
pub use track::PinnedTrack;
