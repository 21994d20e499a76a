//! Fake progress: a counter that climbs to 100 on a fixed cadence.
//!
//! Nothing is being loaded. The bar exists for pacing only.

use crate::timer::Periodic;
use std::time::Duration;

/// Default interval between increments. 100 ticks ≈ 7 s.
pub const TICK_INTERVAL: Duration = Duration::from_millis(70);

pub const PROGRESS_MAX: u8 = 100;

/// Result of advancing the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressStep {
    /// Ticks that actually incremented the counter.
    pub ticks: u32,
    /// The counter hit 100 during this step. Reported once per run.
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressSimulator {
    value: u8,
    interval: Duration,
    ticker: Option<Periodic>,
    dirty: bool,
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl ProgressSimulator {
    pub fn new(interval: Duration) -> Self {
        Self {
            value: 0,
            interval,
            ticker: None,
            dirty: false,
        }
    }

    /// Reset to 0 and begin ticking.
    pub fn start(&mut self) {
        self.set_progress(0);
        self.ticker = Some(Periodic::new(self.interval));
    }

    /// Cancel ticking without touching the value.
    pub fn stop(&mut self) {
        self.ticker = None;
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Store `v` clamped to `[0, 100]` and request a redraw.
    pub fn set_progress(&mut self, v: i32) {
        self.value = v.clamp(0, PROGRESS_MAX as i32) as u8;
        self.dirty = true;
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Fill fraction for the bar, `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        self.value as f32 / PROGRESS_MAX as f32
    }

    /// Returns and clears the redraw request.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn advance(&mut self, dt: Duration) -> ProgressStep {
        let Some(ticker) = self.ticker.as_mut() else {
            return ProgressStep::default();
        };

        let fired = ticker.advance(dt);
        let mut step = ProgressStep::default();
        for _ in 0..fired {
            self.set_progress(self.value as i32 + 1);
            step.ticks += 1;
            tracing::trace!(value = self.value, "progress tick");
            if self.value >= PROGRESS_MAX {
                self.ticker = None;
                step.completed = true;
                break;
            }
        }
        step
    }
}
