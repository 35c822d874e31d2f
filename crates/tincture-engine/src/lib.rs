//! Tincture engine crate.
//!
//! Owns the platform + GPU runtime, the animation-driving render loop and the
//! viewport-resize contract used by the sketch binary.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;
pub mod playback;
pub mod viewport;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
