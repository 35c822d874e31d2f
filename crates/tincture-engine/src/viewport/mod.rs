//! Viewport adapter.
//!
//! Keeps the renderer's output buffer and the camera projection consistent with
//! the host surface. Purely reactive: every call re-reads the surface size.

mod adapter;

pub use adapter::{HostSurface, OutputBuffer, ViewportAdapter, ViewportDimensions};
