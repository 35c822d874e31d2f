/// Logical time added per produced frame.
pub const DEFAULT_TIME_STEP: f32 = 0.00009;

/// Fixed-step elapsed-time accumulator.
///
/// The value is independent of wall-clock time: it advances by `step` exactly
/// once per frame actually produced, so pausing playback freezes the animation
/// and resuming continues from the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    elapsed: f32,
    step: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::with_step(DEFAULT_TIME_STEP)
    }

    /// Creates a clock with a custom per-frame increment.
    ///
    /// Non-finite or negative steps fall back to zero so the value stays monotonic.
    pub fn with_step(step: f32) -> Self {
        let step = if step.is_finite() && step >= 0.0 { step } else { 0.0 };
        Self { elapsed: 0.0, step }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Advances by one step and returns the new elapsed value.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.elapsed += self.step;
        self.elapsed
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
