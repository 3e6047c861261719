/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

/// Cap on steps per frame so a stalled tab does not spiral.
const MAX_STEPS_PER_FRAME: u32 = 10;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Drop any partial step, e.g. when a session is torn down.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Simulation clock owned by the `EngineContext`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Fixed steps completed since the scene started.
    pub ticks: u64,
    /// Seconds per fixed step.
    pub dt: f32,
    /// Smoothed host frame rate, written by the runner each frame.
    pub frame_rate: f32,
}

impl FrameClock {
    pub fn new(dt: f32) -> Self {
        Self {
            ticks: 0,
            dt,
            frame_rate: 0.0,
        }
    }

    /// Mark one fixed step as done.
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    /// Simulated time since scene start, in seconds.
    pub fn elapsed(&self) -> f32 {
        self.ticks as f32 * self.dt
    }

    /// Whole seconds since scene start.
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed().floor() as u32
    }
}

/// Exponential moving average of frames per second.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRateMeter {
    fps: Option<f32>,
}

impl FrameRateMeter {
    const SMOOTHING: f32 = 0.1;

    pub fn new() -> Self {
        Self { fps: None }
    }

    /// Feed one host frame delta (seconds). Returns the smoothed rate.
    pub fn sample(&mut self, frame_dt: f32) -> f32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            let instant = 1.0 / frame_dt;
            self.fps = Some(match self.fps {
                Some(prev) => prev + (instant - prev) * Self::SMOOTHING,
                None => instant,
            });
        }
        self.rate()
    }

    pub fn rate(&self) -> f32 {
        self.fps.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
    }

    #[test]
    fn ignores_bad_frame_times() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(f32::NAN), 0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1, "bad frames leave no residue");
    }

    #[test]
    fn clock_counts_whole_seconds() {
        let mut clock = FrameClock::new(1.0 / 60.0);
        for _ in 0..119 {
            clock.advance();
        }
        assert_eq!(clock.elapsed_seconds(), 1);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_seconds(), 2);
    }

    #[test]
    fn frame_rate_converges() {
        let mut meter = FrameRateMeter::new();
        assert_eq!(meter.rate(), 0.0);
        assert!((meter.sample(1.0 / 30.0) - 30.0).abs() < 0.01);
        for _ in 0..200 {
            meter.sample(1.0 / 60.0);
        }
        assert!((meter.rate() - 60.0).abs() < 0.1, "rate was {}", meter.rate());
    }
}
