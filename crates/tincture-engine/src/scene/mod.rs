//! Scene types: the camera, the plane geometry and camera controls.
//!
//! Everything here is CPU-side; GPU resources live in `render`.

mod camera;
mod geometry;
mod orbit;

pub use camera::PerspectiveCamera;
pub use geometry::{PlaneGeometry, PlaneVertex};
pub use orbit::OrbitControls;
