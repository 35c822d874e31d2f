//! Time subsystem.
//!
//! Two independent clocks:
//! - `AnimationClock`: fixed-step logical time fed to shaders; advances once per
//!   produced frame and never resets.
//! - `FrameClock`: wall-clock delta timing per window, used for input smoothing
//!   and frame-rate diagnostics.

mod animation_clock;
mod frame_clock;

pub use animation_clock::{AnimationClock, DEFAULT_TIME_STEP};
pub use frame_clock::{FrameClock, FrameTime};
