//! Color model shared between the sketch configuration and renderers.
//!
//! Colors are stored linear + premultiplied; conversion from sRGB hex happens
//! once at configuration time so shaders never see gamma-encoded values.

pub mod color;

pub use color::{Color, ColorParseError};
