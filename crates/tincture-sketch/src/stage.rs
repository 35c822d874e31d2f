use tincture_engine::core::{AppControl, FrameCtx};
use tincture_engine::paint::Color;
use tincture_engine::playback::Stage;
use tincture_engine::render::{CursorRenderer, CursorShape, PlaneRenderer};
use tincture_engine::scene::PerspectiveCamera;

use crate::config::SketchConfig;

/// The drawable scene: shader plane, camera and cursor overlay.
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub plane: PlaneRenderer,
    cursor: CursorRenderer,
    clear: Color,
}

impl Scene {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            camera: config.camera(),
            plane: PlaneRenderer::new(config.plane_geometry(), &config.plane_material()),
            cursor: CursorRenderer::new(),
            clear: config.clear,
        }
    }

    /// Clears, draws the plane through the camera, then the overlay on top.
    pub fn draw(&mut self, ctx: &mut FrameCtx<'_, '_>, cursor: Option<&CursorShape>) -> AppControl {
        let Scene { camera, plane, cursor: cursor_renderer, clear } = self;

        ctx.render(*clear, |rctx, target| {
            plane.render(rctx, target, camera);
            if let Some(shape) = cursor {
                cursor_renderer.render(rctx, target, shape);
            }
        })
    }
}

/// One callback's view over the scene and the host window.
pub struct FrameStage<'s, 'a, 'w> {
    ctx: &'s mut FrameCtx<'a, 'w>,
    scene: &'s mut Scene,
    cursor: Option<CursorShape>,
}

impl<'s, 'a, 'w> FrameStage<'s, 'a, 'w> {
    pub fn new(ctx: &'s mut FrameCtx<'a, 'w>, scene: &'s mut Scene, cursor: Option<CursorShape>) -> Self {
        Self { ctx, scene, cursor }
    }
}

impl Stage for FrameStage<'_, '_, '_> {
    fn set_time(&mut self, time: f32) {
        self.scene.plane.set_time(time);
    }

    fn request_frame(&mut self) {
        self.ctx.window.request_redraw();
    }

    fn draw(&mut self) -> AppControl {
        self.scene.draw(self.ctx, self.cursor.as_ref())
    }
}
