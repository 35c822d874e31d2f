//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the sketch:
//! the `App` callbacks and the per-callback context they receive.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
