//! Coordinate and geometry types shared by the runtime, renderers and sketch.
//!
//! Canonical CPU space for screen-space work (pointer, cursor overlay):
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! World-space math (camera, plane) uses `glam` directly.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
