use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Every callback receives the same context type, so GPU work (including an
/// immediate draw) is possible from any of them.
pub trait App {
    /// Called once after the window and its GPU context exist.
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called on every window resize or scale-factor change.
    fn on_resize(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called for each translated input event.
    fn on_input(&mut self, ctx: &mut FrameCtx<'_, '_>, event: &InputEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called when the host delivers a requested redraw.
    ///
    /// The runtime never redraws on its own; continuous animation requires
    /// calling `ctx.window.request_redraw()` every frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
