//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and creates them
//! lazily on first use, rebuilding the pipeline if the surface format changes.
//!
//! Convention:
//! - the shader plane works in world space through the camera view-projection
//! - overlays work in logical pixels (top-left origin, +Y down) and convert to
//!   NDC in the vertex shader using a viewport uniform

mod common;
mod ctx;
mod cursor;
mod plane;

pub use ctx::{RenderCtx, RenderTarget};
pub use cursor::{CursorRenderer, CursorShape};
pub use plane::{PlaneMaterial, PlaneRenderer, PALETTE_LEN};
