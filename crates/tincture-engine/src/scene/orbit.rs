use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::coords::Vec2;

use super::PerspectiveCamera;

const POLE_EPSILON: f32 = 1e-4;

/// Mouse-driven orbit camera: drag rotates around `target`, wheel dollies.
///
/// Rotation is expressed in spherical coordinates around the target, so the
/// camera distance is preserved while dragging and the polar angle never
/// crosses a pole.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,

    /// Multiplier on drag rotation; 1.0 turns a full circle per viewport height.
    pub rotate_speed: f32,
    /// Per-wheel-line dolly factor base.
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    home_position: Vec3,
    home_target: Vec3,
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    /// Captures the camera's current placement as the reset pose.
    pub fn new(camera: &PerspectiveCamera) -> Self {
        Self {
            target: camera.target,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            home_position: camera.position,
            home_target: camera.target,
            drag_from: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.drag_from = Some(pointer);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Rotates the camera by the pointer delta since the last drag update.
    ///
    /// `viewport_height` is in the same units as `pointer`. No-op when no drag
    /// is active.
    pub fn drag_to(&mut self, pointer: Vec2, viewport_height: f32, camera: &mut PerspectiveCamera) {
        let Some(from) = self.drag_from else { return };
        self.drag_from = Some(pointer);
        if viewport_height <= 0.0 {
            return;
        }

        let delta = pointer - from;
        let scale = TAU * self.rotate_speed / viewport_height;
        self.rotate(-delta.x * scale, -delta.y * scale, camera);
    }

    /// Rotates by `d_theta` around the up axis and `d_phi` along the meridian.
    pub fn rotate(&mut self, d_theta: f32, d_phi: f32, camera: &mut PerspectiveCamera) {
        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= 0.0 {
            return;
        }

        let theta = offset.x.atan2(offset.z) + d_theta;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + d_phi)
            .clamp(POLE_EPSILON, PI - POLE_EPSILON);

        camera.position = self.target + spherical_to_offset(radius, theta, phi);
        camera.target = self.target;
    }

    /// Moves the camera along its view ray. Positive `lines` (wheel up) move in.
    pub fn dolly(&mut self, lines: f32, camera: &mut PerspectiveCamera) {
        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= 0.0 || lines == 0.0 {
            return;
        }

        let factor = 0.95f32.powf(self.zoom_speed * lines);
        let new_radius = (radius * factor).clamp(self.min_distance, self.max_distance);
        camera.position = self.target + offset * (new_radius / radius);
    }

    /// Restores the pose captured at construction.
    pub fn reset(&mut self, camera: &mut PerspectiveCamera) {
        self.target = self.home_target;
        self.drag_from = None;
        camera.position = self.home_position;
        camera.target = self.home_target;
    }
}

fn spherical_to_offset(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let sin_phi = phi.sin();
    Vec3::new(
        radius * sin_phi * theta.sin(),
        radius * phi.cos(),
        radius * sin_phi * theta.cos(),
    )
}
