//! Animation primitives for the reveal widget
//!
//! Everything here is a pure function of elapsed time. The app measures
//! frame deltas and feeds them in; nothing reads the wall clock directly,
//! so the same code runs under tests with hand-picked durations.

use std::time::Duration;

/// Period of one spark pass along the decorative path.
pub const SPARK_PERIOD: Duration = Duration::from_millis(3000);

/// Duration of the time/timezone fade-in.
pub const FADE_DURATION: Duration = Duration::from_millis(1500);

/// Free-running loop: maps elapsed time onto `[0, 1)` and wraps forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopingClock {
    period: Duration,
}

impl Default for LoopingClock {
    fn default() -> Self {
        Self::new(SPARK_PERIOD)
    }
}

impl LoopingClock {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Position within the current loop iteration.
    pub fn position(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_nanos();
        if period == 0 {
            return 0.0;
        }
        let within = elapsed.as_nanos() % period;
        (within as f64 / period as f64) as f32
    }
}

/// One-way opacity fade from 0.0 to 1.0 with ease-in-out.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    duration: Duration,
    elapsed: Duration,
    started: bool,
}

impl Default for Fade {
    fn default() -> Self {
        Self::new(FADE_DURATION)
    }
}

impl Fade {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            started: false,
        }
    }

    /// Restart from fully transparent.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = true;
    }

    /// Return to the never-started state (opacity 0).
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = false;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.started && !self.is_finished() {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.elapsed >= self.duration
    }

    /// Linear progress through the fade, before easing.
    pub fn progress(&self) -> f32 {
        if !self.started {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }

    pub fn opacity(&self) -> f32 {
        ease_in_out_quad(self.progress())
    }
}

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-in-out: slow start, fast middle, slow finish.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
