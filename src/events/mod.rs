mod pointer;
mod scroll;

pub use pointer::{wire_magnetic, wire_pointer_tracker, wire_tilt};
pub use scroll::{wire_resize, wire_scroll_input};
