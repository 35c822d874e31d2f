use winit::window::Window;

use crate::scene::PerspectiveCamera;

/// Drawable size of the host surface in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ViewportDimensions {
    pub width: u32,
    pub height: u32,
}

impl ViewportDimensions {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `width / height`, or `None` while either side is zero (minimized window).
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        (!self.is_empty()).then(|| self.width as f32 / self.height as f32)
    }
}

/// Source of the current surface size.
pub trait HostSurface {
    fn surface_size(&self) -> ViewportDimensions;
}

/// Receiver of the new output buffer size (swapchain, render target).
pub trait OutputBuffer {
    fn set_output_size(&mut self, size: ViewportDimensions);
}

impl HostSurface for Window {
    fn surface_size(&self) -> ViewportDimensions {
        let size = self.inner_size();
        ViewportDimensions::new(size.width, size.height)
    }
}

impl HostSurface for ViewportDimensions {
    fn surface_size(&self) -> ViewportDimensions {
        *self
    }
}

/// Propagates host surface size changes to the output buffer and camera.
///
/// The adapter holds no state: the runtime forwards each window resize signal
/// to the owning app for the app's whole lifetime, and every `resize` reads the
/// size fresh from the host.
#[derive(Debug, Copy, Clone, Default)]
pub struct ViewportAdapter;

impl ViewportAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Reads the host size, resizes `output`, and updates the camera aspect +
    /// projection matrix immediately.
    ///
    /// A zero-sized surface is forwarded to `output` (which may defer
    /// configuration) but leaves the camera untouched.
    pub fn resize<H, O>(
        &self,
        host: &H,
        output: &mut O,
        camera: &mut PerspectiveCamera,
    ) -> ViewportDimensions
    where
        H: HostSurface + ?Sized,
        O: OutputBuffer + ?Sized,
    {
        let dims = host.surface_size();
        output.set_output_size(dims);

        match dims.aspect() {
            Some(aspect) => {
                camera.aspect = aspect;
                camera.update_projection_matrix();
                log::debug!("viewport resized to {}x{} (aspect {aspect:.4})", dims.width, dims.height);
            }
            None => {
                log::debug!("viewport collapsed to {}x{}; camera unchanged", dims.width, dims.height);
            }
        }

        dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[derive(Default)]
    struct RecordingOutput {
        sizes: Vec<ViewportDimensions>,
    }

    impl OutputBuffer for RecordingOutput {
        fn set_output_size(&mut self, size: ViewportDimensions) {
            self.sizes.push(size);
        }
    }

    #[test]
    fn resize_sets_exact_aspect() {
        let mut camera = PerspectiveCamera::default();
        let mut out = RecordingOutput::default();

        ViewportAdapter::new().resize(&ViewportDimensions::new(1600, 900), &mut out, &mut camera);

        assert_eq!(camera.aspect, 1600.0 / 900.0);
        assert_eq!(out.sizes, vec![ViewportDimensions::new(1600, 900)]);
    }

    #[test]
    fn resize_800x600_then_1600x900() {
        let adapter = ViewportAdapter::new();
        let mut camera = PerspectiveCamera::default();
        let mut out = RecordingOutput::default();

        adapter.resize(&ViewportDimensions::new(800, 600), &mut out, &mut camera);
        assert_eq!(camera.aspect, 800.0 / 600.0);
        assert!((camera.aspect - 1.333_333).abs() < 1e-5);

        adapter.resize(&ViewportDimensions::new(1600, 900), &mut out, &mut camera);
        assert_eq!(camera.aspect, 1600.0 / 900.0);
        assert!((camera.aspect - 1.777_778).abs() < 1e-5);
    }

    #[test]
    fn resize_recomputes_projection_immediately() {
        let mut camera = PerspectiveCamera::default();
        let mut out = RecordingOutput::default();

        ViewportAdapter::new().resize(&ViewportDimensions::new(1000, 500), &mut out, &mut camera);

        let expected = Mat4::perspective_rh(camera.fov_y_degrees.to_radians(), 2.0, camera.near, camera.far);
        assert_eq!(camera.projection(), expected);
    }

    #[test]
    fn zero_height_keeps_camera() {
        let adapter = ViewportAdapter::new();
        let mut camera = PerspectiveCamera::default();
        let mut out = RecordingOutput::default();

        adapter.resize(&ViewportDimensions::new(800, 600), &mut out, &mut camera);
        let before = camera.clone();
        let dims = adapter.resize(&ViewportDimensions::new(800, 0), &mut out, &mut camera);

        assert!(dims.is_empty());
        assert_eq!(camera, before);
        assert_eq!(out.sizes.len(), 2, "output still sees the collapsed size");
    }
}
