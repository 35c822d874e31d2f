//! Playback: the animation-driving render loop.
//!
//! The loop is a cooperative task driven by the host's per-frame callback
//! facility. Each tick either re-enqueues itself (playing) or ends the chain
//! (stopped). The host, uniforms and draw path are reached through the
//! `Stage` seam so the loop itself never touches the GPU.

mod render_loop;
mod state;

pub use render_loop::{RenderLoop, Stage, Tick};
pub use state::PlaybackState;
