use tincture_engine::core::{App, AppControl, FrameCtx};
use tincture_engine::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
};
use tincture_engine::playback::{RenderLoop, Stage, Tick};
use tincture_engine::scene::OrbitControls;
use tincture_engine::time::AnimationClock;
use tincture_engine::viewport::ViewportAdapter;

use crate::config::SketchConfig;
use crate::cursor::CursorTracker;
use crate::stage::{FrameStage, Scene};

/// Seconds between frame-rate reports.
const REPORT_INTERVAL: f32 = 2.0;

/// The sketch: shader plane + orbit camera + cursor overlay, driven by a
/// fixed-step render loop.
pub struct Sketch {
    playback: Playback,
    adapter: ViewportAdapter,
    scene: Scene,
    orbit: OrbitControls,
    cursor: CursorTracker,
    report: FrameReport,
}

impl Sketch {
    pub fn new(config: SketchConfig) -> Self {
        let scene = Scene::new(&config);

        let mut orbit = OrbitControls::new(&scene.camera);
        orbit.min_distance = 0.05;
        orbit.max_distance = 10.0;

        Self {
            playback: Playback::new(RenderLoop::with_state(
                AnimationClock::with_step(config.time_step),
                config.initial_state,
            )),
            adapter: ViewportAdapter::new(),
            scene,
            orbit,
            cursor: CursorTracker::new(config.cursor.clone(), config.hover_regions.clone()),
            report: FrameReport::default(),
        }
    }

    fn resize(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        let dims = self.adapter.resize(ctx.window.window, &mut *ctx.gpu, &mut self.scene.camera);
        self.scene.plane.set_resolution(dims);
    }

    /// Runs the frame callback against the current scene.
    fn present(&mut self, ctx: &mut FrameCtx<'_, '_>, easing: bool) -> Frame {
        let mut stage = FrameStage::new(ctx, &mut self.scene, self.cursor.shape());
        self.playback.frame(&mut stage, easing)
    }

    /// Asks for one presentation-only redraw if playback is stopped. It is
    /// not a produced frame and does not advance the animation clock.
    fn schedule_repaint(&mut self, ctx: &mut FrameCtx<'_, '_>) {
        if self.playback.want_repaint() {
            ctx.window.request_redraw();
        }
    }

    fn on_key(&mut self, ctx: &mut FrameCtx<'_, '_>, key: Key) -> AppControl {
        match key {
            Key::Space => {
                let mut stage = FrameStage::new(ctx, &mut self.scene, self.cursor.shape());
                self.playback.toggle(&mut stage)
            }
            Key::R => {
                self.orbit.reset(&mut self.scene.camera);
                self.schedule_repaint(ctx);
                AppControl::Continue
            }
            Key::Escape => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }
}

impl App for Sketch {
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        ctx.window.set_cursor_visible(false);
        self.resize(ctx);

        log::info!("sketch started ({})", self.playback.render_loop.state());

        let control = self.present(ctx, false).control();
        self.schedule_repaint(ctx);
        control
    }

    fn on_resize(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.resize(ctx);
        self.schedule_repaint(ctx);
        AppControl::Continue
    }

    fn on_input(&mut self, ctx: &mut FrameCtx<'_, '_>, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::Key { key, state: KeyState::Pressed, repeat: false, .. } => {
                return self.on_key(ctx, *key);
            }

            InputEvent::PointerMoved(p) => {
                self.cursor.pointer_moved(*p);
                if self.orbit.is_dragging() {
                    let height = ctx.window.logical_size().height;
                    self.orbit.drag_to(*p, height, &mut self.scene.camera);
                }
                self.schedule_repaint(ctx);
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                position,
                ..
            }) => match state {
                MouseButtonState::Pressed => self.orbit.begin_drag(*position),
                MouseButtonState::Released => self.orbit.end_drag(),
            },

            InputEvent::MouseWheel { delta, .. } => {
                self.orbit.dolly(delta.lines_y(), &mut self.scene.camera);
                self.schedule_repaint(ctx);
            }

            InputEvent::PointerLeft => {
                self.cursor.pointer_left();
                self.schedule_repaint(ctx);
            }

            InputEvent::Focused(false) => self.orbit.end_drag(),

            _ => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let dt = ctx.time.dt;
        let easing = self.cursor.update(dt);

        let frame = self.present(ctx, easing);
        if let Frame::Produced(_) = frame {
            if let Some(fps) = self.report.record(dt) {
                let render_loop = &self.playback.render_loop;
                log::debug!(
                    "{fps:.1} fps, t={:.5}, {} frames",
                    render_loop.elapsed(),
                    render_loop.frames_produced()
                );
            }
        }
        frame.control()
    }
}

/// What one frame callback did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Frame {
    /// The render loop advanced and drew a frame.
    Produced(AppControl),
    /// The frozen scene was redrawn; clock and frame count are untouched.
    Repainted(AppControl),
    /// A stale redraw with nothing owed.
    Skipped,
}

impl Frame {
    fn control(self) -> AppControl {
        match self {
            Frame::Produced(control) | Frame::Repainted(control) => control,
            Frame::Skipped => AppControl::Continue,
        }
    }
}

/// The render loop plus the repaints owed while it is stopped.
///
/// A stopped loop ends its frame chain, yet camera and cursor changes still
/// have to reach the screen. Those repaints are presentation only: they draw
/// the frozen scene outside the loop, so the clock and the produced-frame
/// count stay put. At most one is pending at a time and a pending one is
/// dropped once playback restarts.
#[derive(Debug)]
struct Playback {
    render_loop: RenderLoop,
    repaint_pending: bool,
}

impl Playback {
    fn new(render_loop: RenderLoop) -> Self {
        Self { render_loop, repaint_pending: false }
    }

    /// Marks a repaint as owed; returns `true` when the caller has to request
    /// the redraw. Always `false` while playing or with one already pending.
    fn want_repaint(&mut self) -> bool {
        if self.render_loop.is_playing() || self.repaint_pending {
            return false;
        }
        self.repaint_pending = true;
        true
    }

    /// Flips playback. A restart draws immediately and drops a pending repaint.
    fn toggle<S: Stage + ?Sized>(&mut self, stage: &mut S) -> AppControl {
        let tick = self.render_loop.toggle(stage);
        if let Tick::Drawn(_) = tick {
            self.repaint_pending = false;
        }
        tick.control()
    }

    /// Handles a fired redraw: a render-loop tick while playing, else the
    /// owed repaint if there is one. `easing` keeps repaints coming while
    /// the overlay is still animating.
    fn frame<S: Stage + ?Sized>(&mut self, stage: &mut S, easing: bool) -> Frame {
        match self.render_loop.render(stage) {
            Tick::Drawn(control) => {
                self.repaint_pending = false;
                Frame::Produced(control)
            }
            Tick::Idle => {
                if !std::mem::take(&mut self.repaint_pending) {
                    return Frame::Skipped;
                }
                let control = stage.draw();
                if easing && self.want_repaint() {
                    stage.request_frame();
                }
                Frame::Repainted(control)
            }
        }
    }
}

/// Rolling frame-rate counter over `REPORT_INTERVAL`.
#[derive(Debug, Default)]
struct FrameReport {
    frames: u32,
    elapsed: f32,
}

impl FrameReport {
    /// Records one frame; returns the average fps once per interval.
    fn record(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < REPORT_INTERVAL {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed;
        *self = Self::default();
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use tincture_engine::playback::PlaybackState;
    use tincture_engine::time::DEFAULT_TIME_STEP;

    use super::*;

    /// Host stand-in: redraw requests coalesce into one pending flag.
    #[derive(Debug, Default)]
    struct HostStage {
        uniform: f32,
        redraw_requested: bool,
        requests: usize,
        draws: usize,
    }

    impl HostStage {
        /// Fires the pending redraw, if any, through the frame callback.
        fn fire(&mut self, playback: &mut Playback, easing: bool) -> Option<Frame> {
            if !std::mem::take(&mut self.redraw_requested) {
                return None;
            }
            Some(playback.frame(self, easing))
        }
    }

    impl Stage for HostStage {
        fn set_time(&mut self, time: f32) {
            self.uniform = time;
        }

        fn request_frame(&mut self) {
            self.redraw_requested = true;
            self.requests += 1;
        }

        fn draw(&mut self) -> AppControl {
            self.draws += 1;
            AppControl::Continue
        }
    }

    fn stopped_after(frames: usize) -> (Playback, HostStage) {
        let mut playback = Playback::new(RenderLoop::new(AnimationClock::default()));
        let mut stage = HostStage::default();
        for _ in 0..frames {
            playback.frame(&mut stage, false);
        }
        playback.toggle(&mut stage);
        assert!(!playback.render_loop.is_playing());
        (playback, stage)
    }

    // ── frame report ────────────────────────────────────────────────────────

    #[test]
    fn report_waits_for_a_full_interval() {
        let mut r = FrameReport::default();
        for _ in 0..59 {
            assert!(r.record(1.0 / 60.0).is_none());
        }
        for _ in 0..120 {
            if let Some(fps) = r.record(1.0 / 60.0) {
                assert!((fps - 60.0).abs() < 0.5);
                assert_eq!(r.frames, 0);
                return;
            }
        }
        panic!("no report after two seconds of frames");
    }

    // ── sketch ──────────────────────────────────────────────────────────────

    #[test]
    fn new_sketch_starts_in_configured_state() {
        let mut config = SketchConfig::default();
        config.initial_state = PlaybackState::Stopped;
        let sketch = Sketch::new(config);
        assert!(!sketch.playback.render_loop.is_playing());
        assert_eq!(sketch.playback.render_loop.elapsed(), 0.0);
        assert!(!sketch.playback.repaint_pending);
    }

    #[test]
    fn orbit_home_is_configured_camera() {
        let sketch = Sketch::new(SketchConfig::default());
        assert_eq!(sketch.scene.camera.position, glam::Vec3::new(0.0, 0.0, 0.52));
        assert!(!sketch.orbit.is_dragging());
    }

    // ── stopped repaints ────────────────────────────────────────────────────

    #[test]
    fn stopped_repaint_keeps_clock_and_frame_count() {
        let (mut playback, mut stage) = stopped_after(3);
        let (elapsed, frames, uniform) =
            (playback.render_loop.elapsed(), playback.render_loop.frames_produced(), stage.uniform);
        let draws = stage.draws;

        assert!(playback.want_repaint());
        stage.request_frame();
        assert_eq!(stage.fire(&mut playback, false), Some(Frame::Repainted(AppControl::Continue)));

        assert_eq!(stage.draws, draws + 1);
        assert_eq!(playback.render_loop.elapsed(), elapsed);
        assert_eq!(playback.render_loop.frames_produced(), frames);
        assert_eq!(stage.uniform, uniform);
        assert!(!stage.redraw_requested);
    }

    #[test]
    fn repaint_requests_coalesce_while_pending() {
        let (mut playback, _) = stopped_after(1);
        assert!(playback.want_repaint());
        assert!(!playback.want_repaint());
    }

    #[test]
    fn no_repaint_is_owed_while_playing() {
        let mut playback = Playback::new(RenderLoop::default());
        assert!(!playback.want_repaint());
        assert!(!playback.repaint_pending);
    }

    #[test]
    fn stale_redraw_after_stop_draws_nothing() {
        let (mut playback, mut stage) = stopped_after(2);
        // The last produced frame queued a redraw that fires after the stop.
        assert!(stage.redraw_requested);
        let draws = stage.draws;

        assert_eq!(stage.fire(&mut playback, false), Some(Frame::Skipped));
        assert_eq!(stage.draws, draws);
        assert_eq!(playback.render_loop.frames_produced(), 2);
    }

    #[test]
    fn easing_keeps_repaints_coming_until_settled() {
        let (mut playback, mut stage) = stopped_after(1);
        stage.redraw_requested = false;

        assert!(playback.want_repaint());
        stage.request_frame();
        assert_eq!(stage.fire(&mut playback, true), Some(Frame::Repainted(AppControl::Continue)));
        assert!(stage.redraw_requested);

        assert_eq!(stage.fire(&mut playback, false), Some(Frame::Repainted(AppControl::Continue)));
        assert!(!stage.redraw_requested);
        assert_eq!(stage.fire(&mut playback, false), None);
    }

    // ── resume ──────────────────────────────────────────────────────────────

    #[test]
    fn resume_drops_pending_repaint() {
        let (mut playback, mut stage) = stopped_after(1);
        assert!(playback.want_repaint());

        playback.toggle(&mut stage);
        assert!(playback.render_loop.is_playing());
        assert!(!playback.repaint_pending);

        // Stopped again before the queued redraw fires: nothing is owed.
        playback.toggle(&mut stage);
        let draws = stage.draws;
        assert_eq!(stage.fire(&mut playback, false), Some(Frame::Skipped));
        assert_eq!(stage.draws, draws);
    }

    #[test]
    fn resume_with_queued_redraw_runs_a_single_chain() {
        let (mut playback, mut stage) = stopped_after(1);
        assert!(stage.redraw_requested);

        playback.toggle(&mut stage);
        assert_eq!(playback.render_loop.frames_produced(), 2);
        assert_eq!(playback.render_loop.elapsed(), 2.0 * DEFAULT_TIME_STEP);

        // One coalesced redraw per fire; each fire produces exactly one frame.
        for n in 3..8 {
            assert_eq!(stage.fire(&mut playback, false), Some(Frame::Produced(AppControl::Continue)));
            assert_eq!(playback.render_loop.frames_produced(), n);
        }
        assert_eq!(stage.draws, 7);
    }

    #[test]
    fn toggle_while_playing_stops_without_drawing() {
        let mut playback = Playback::new(RenderLoop::default());
        let mut stage = HostStage::default();
        assert_eq!(playback.toggle(&mut stage), AppControl::Continue);
        assert!(!playback.render_loop.is_playing());
        assert_eq!(stage.draws, 0);
        assert_eq!(stage.requests, 0);
    }
}
