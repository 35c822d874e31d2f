use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,
}

/// Wall-clock frame timer.
///
/// Delta time is clamped so a long stall (debugger, minimized window, paused
/// playback) does not produce a huge step in anything smoothed by `dt`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        FrameTime { dt: dt.as_secs_f32() }
    }

    /// Timing for callbacks that are not frames; `dt` is zero.
    pub fn peek(&self) -> FrameTime {
        FrameTime { dt: 0.0 }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_to_max_after_stall() {
        let mut clock = FrameClock::new();
        let later = clock.last + Duration::from_secs(10);
        assert_eq!(clock.tick_at(later).dt, 0.25);
    }

    #[test]
    fn dt_is_clamped_to_min() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(5));
        let same = clock.last;
        assert_eq!(clock.tick_at(same).dt, 0.001);
    }

    #[test]
    fn tick_moves_the_baseline() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(1));
        let t0 = clock.last;
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(100)).dt, 0.1);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(150)).dt, 0.05);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(1));
        let t0 = clock.last;
        assert_eq!(clock.peek().dt, 0.0);
        assert_eq!(clock.last, t0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(20)).dt, 0.02);
    }
}
