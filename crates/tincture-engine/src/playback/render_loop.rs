use crate::core::AppControl;
use crate::time::AnimationClock;

use super::PlaybackState;

/// Collaborators the render loop drives each tick.
///
/// Implementations are short-lived views over the scene, the shading
/// pipeline and the host window for the duration of one callback.
pub trait Stage {
    /// Writes `time` into the shading pipeline's time uniform.
    fn set_time(&mut self, time: f32);

    /// Registers one more render on the host's per-frame callback facility.
    ///
    /// Single-shot: the loop calls this again on every produced frame.
    fn request_frame(&mut self);

    /// Synchronously draws the scene through the current camera.
    fn draw(&mut self) -> AppControl;
}

/// Outcome of one render-loop tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tick {
    /// Playback is stopped; nothing was touched and the chain ends here.
    Idle,
    /// A frame was produced and the next one has been requested.
    Drawn(AppControl),
}

impl Tick {
    /// Control directive to hand back to the runtime.
    #[inline]
    pub fn control(self) -> AppControl {
        match self {
            Tick::Idle => AppControl::Continue,
            Tick::Drawn(control) => control,
        }
    }
}

/// Owns the animation clock and playback state.
///
/// Invariants:
/// - the time uniform equals `elapsed()` as of the most recently produced frame
/// - no frame is produced while stopped
/// - at most one frame chain exists; `play()` while playing is a no-op
#[derive(Debug, Clone, Default)]
pub struct RenderLoop {
    clock: AnimationClock,
    state: PlaybackState,
    frames: u64,
}

impl RenderLoop {
    /// Creates a loop in the `Playing` state.
    pub fn new(clock: AnimationClock) -> Self {
        Self::with_state(clock, PlaybackState::Playing)
    }

    pub fn with_state(clock: AnimationClock, state: PlaybackState) -> Self {
        Self { clock, state, frames: 0 }
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Current animation time.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Number of frames produced since construction.
    #[inline]
    pub fn frames_produced(&self) -> u64 {
        self.frames
    }

    /// Produces one frame if playing.
    ///
    /// Order: advance clock, write uniform, schedule next tick, draw.
    pub fn render<S: Stage + ?Sized>(&mut self, stage: &mut S) -> Tick {
        if !self.state.is_playing() {
            return Tick::Idle;
        }

        let time = self.clock.advance();
        stage.set_time(time);
        stage.request_frame();
        self.frames = self.frames.wrapping_add(1);

        Tick::Drawn(stage.draw())
    }

    /// Stops frame production. Idempotent.
    ///
    /// A tick already queued on the host is not withdrawn; it becomes `Idle`
    /// when it fires.
    pub fn stop(&mut self) {
        if self.state == PlaybackState::Stopped {
            return;
        }
        self.state = PlaybackState::Stopped;
        log::info!("playback stopped at t={:.5}", self.clock.elapsed());
    }

    /// Resumes frame production and restarts the chain with one immediate tick.
    ///
    /// No-op while already playing so a second chain is never spawned.
    pub fn play<S: Stage + ?Sized>(&mut self, stage: &mut S) -> Tick {
        if self.state.is_playing() {
            return Tick::Idle;
        }
        self.state = PlaybackState::Playing;
        log::info!("playback resumed at t={:.5}", self.clock.elapsed());
        self.render(stage)
    }

    /// Flips between playing and stopped.
    pub fn toggle<S: Stage + ?Sized>(&mut self, stage: &mut S) -> Tick {
        match self.state {
            PlaybackState::Playing => {
                self.stop();
                Tick::Idle
            }
            PlaybackState::Stopped => self.play(stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::DEFAULT_TIME_STEP;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        SetTime(f32),
        RequestFrame,
        Draw,
    }

    /// Records every collaborator call and counts pending host callbacks.
    #[derive(Default)]
    struct RecordingStage {
        calls: Vec<Call>,
        pending: usize,
        uniform: f32,
    }

    impl RecordingStage {
        fn draws(&self) -> usize {
            self.calls.iter().filter(|c| **c == Call::Draw).count()
        }
    }

    impl Stage for RecordingStage {
        fn set_time(&mut self, time: f32) {
            self.uniform = time;
            self.calls.push(Call::SetTime(time));
        }

        fn request_frame(&mut self) {
            self.pending += 1;
            self.calls.push(Call::RequestFrame);
        }

        fn draw(&mut self) -> AppControl {
            self.calls.push(Call::Draw);
            AppControl::Continue
        }
    }

    /// Fires every callback queued before this refresh, like one vsync.
    fn refresh(lp: &mut RenderLoop, stage: &mut RecordingStage) {
        let due = std::mem::take(&mut stage.pending);
        for _ in 0..due {
            lp.render(stage);
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-7
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn starts_playing_at_zero() {
        let lp = RenderLoop::default();
        assert_eq!(lp.state(), PlaybackState::Playing);
        assert_eq!(lp.elapsed(), 0.0);
    }

    #[test]
    fn render_orders_uniform_schedule_draw() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();

        assert_eq!(lp.render(&mut stage), Tick::Drawn(AppControl::Continue));
        assert_eq!(
            stage.calls,
            vec![Call::SetTime(DEFAULT_TIME_STEP), Call::RequestFrame, Call::Draw]
        );
    }

    #[test]
    fn three_renders_reach_0_00027() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();
        for _ in 0..3 {
            lp.render(&mut stage);
        }
        assert!(approx(lp.elapsed(), 0.00027));
        assert_eq!(stage.uniform, lp.elapsed());
    }

    #[test]
    fn n_renders_advance_by_n_steps() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();
        let before = lp.elapsed();
        let n = 1000;
        for _ in 0..n {
            lp.render(&mut stage);
        }
        let expected = before + n as f32 * DEFAULT_TIME_STEP;
        assert!((lp.elapsed() - expected).abs() < 1e-5);
        assert_eq!(lp.frames_produced(), n);
    }

    #[test]
    fn render_while_stopped_touches_nothing() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();
        lp.render(&mut stage);
        lp.stop();
        let t = lp.elapsed();
        stage.calls.clear();

        assert_eq!(lp.render(&mut stage), Tick::Idle);
        assert_eq!(lp.elapsed(), t);
        assert!(stage.calls.is_empty());
    }

    // ── stop / play ───────────────────────────────────────────────────────

    #[test]
    fn stop_is_idempotent() {
        let mut lp = RenderLoop::default();
        lp.stop();
        lp.stop();
        assert_eq!(lp.state(), PlaybackState::Stopped);
    }

    #[test]
    fn queued_callback_becomes_noop_after_stop() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();
        lp.render(&mut stage);
        assert_eq!(stage.pending, 1);

        lp.stop();
        refresh(&mut lp, &mut stage);

        assert_eq!(stage.pending, 0, "chain must not re-register");
        assert_eq!(stage.draws(), 1);
    }

    #[test]
    fn play_after_stop_resumes_without_reset() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();
        lp.render(&mut stage);
        lp.render(&mut stage);
        lp.stop();
        let paused_at = lp.elapsed();

        assert_eq!(lp.play(&mut stage), Tick::Drawn(AppControl::Continue));
        assert!(approx(lp.elapsed(), paused_at + DEFAULT_TIME_STEP));
        assert_eq!(stage.uniform, lp.elapsed());
    }

    #[test]
    fn play_while_playing_does_not_spawn_second_chain() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();
        lp.render(&mut stage);

        assert_eq!(lp.play(&mut stage), Tick::Idle);
        assert_eq!(stage.pending, 1);

        let start = lp.elapsed();
        for _ in 0..10 {
            refresh(&mut lp, &mut stage);
        }
        assert_eq!(stage.pending, 1);
        assert!((lp.elapsed() - (start + 10.0 * DEFAULT_TIME_STEP)).abs() < 1e-7);
    }

    #[test]
    fn toggle_flips_state() {
        let mut lp = RenderLoop::default();
        let mut stage = RecordingStage::default();

        assert_eq!(lp.toggle(&mut stage), Tick::Idle);
        assert!(!lp.is_playing());
        assert!(matches!(lp.toggle(&mut stage), Tick::Drawn(_)));
        assert!(lp.is_playing());
    }

    #[test]
    fn starting_stopped_produces_no_frames() {
        let mut lp = RenderLoop::with_state(AnimationClock::new(), PlaybackState::Stopped);
        let mut stage = RecordingStage::default();
        assert_eq!(lp.render(&mut stage), Tick::Idle);
        assert_eq!(lp.frames_produced(), 0);
    }

    #[test]
    fn draw_control_is_forwarded() {
        struct ExitStage;
        impl Stage for ExitStage {
            fn set_time(&mut self, _: f32) {}
            fn request_frame(&mut self) {}
            fn draw(&mut self) -> AppControl {
                AppControl::Exit
            }
        }

        let mut lp = RenderLoop::default();
        assert_eq!(lp.render(&mut ExitStage).control(), AppControl::Exit);
        assert_eq!(Tick::Idle.control(), AppControl::Continue);
    }
}
