use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::render::CursorShape;

use crate::config::CursorConfig;

/// Radius differences below this snap to the target.
const SETTLE_EPSILON: f32 = 0.05;

/// Follows the pointer and eases the overlay radius between its rest and
/// hover sizes.
#[derive(Debug, Clone)]
pub struct CursorTracker {
    config: CursorConfig,
    regions: Vec<Rect>,

    position: Option<Vec2>,
    hovering: bool,
    radius: f32,
}

impl CursorTracker {
    pub fn new(config: CursorConfig, regions: Vec<Rect>) -> Self {
        let radius = config.radius;
        Self {
            config,
            regions,
            position: None,
            hovering: false,
            radius,
        }
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Moves the overlay to `pointer` and re-evaluates hover.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        self.position = Some(pointer);

        let hovering = self.regions.iter().any(|r| r.normalized().contains(pointer));
        if hovering != self.hovering {
            log::trace!("cursor hover {}", if hovering { "enter" } else { "leave" });
        }
        self.hovering = hovering;
    }

    /// Hides the overlay until the pointer comes back.
    pub fn pointer_left(&mut self) {
        self.position = None;
        self.hovering = false;
    }

    pub fn target_radius(&self) -> f32 {
        if self.hovering {
            self.config.hover_radius
        } else {
            self.config.radius
        }
    }

    /// Whether the radius still has to move toward its target.
    pub fn is_animating(&self) -> bool {
        self.radius != self.target_radius()
    }

    /// Eases the radius toward its target over `dt` seconds.
    ///
    /// Returns `true` while further updates are needed.
    pub fn update(&mut self, dt: f32) -> bool {
        let target = self.target_radius();
        let k = 1.0 - (-self.config.grow_rate.max(0.0) * dt.max(0.0)).exp();
        self.radius += (target - self.radius) * k;

        if (target - self.radius).abs() < SETTLE_EPSILON {
            self.radius = target;
        }
        self.is_animating()
    }

    /// Shape to draw this frame, if the pointer is inside the window.
    pub fn shape(&self) -> Option<CursorShape> {
        let center = self.position?;
        Some(CursorShape {
            center,
            radius: self.radius,
            fill: self.config.fill,
            ring: self.config.ring,
            ring_width: self.config.ring_width,
        })
    }
}
