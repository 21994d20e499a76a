//! Virtual-time timers
//!
//! The frame loop measures how much time passed and hands it to these
//! timers, which report how many times they fired. Arithmetic is done on
//! `Duration` so a hundred 70 ms steps add up to exactly 7 s.

use std::time::Duration;

/// Fires every `period`, carrying leftover time between advances.
#[derive(Debug, Clone, PartialEq)]
pub struct Periodic {
    period: Duration,
    pending: Duration,
}

impl Periodic {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            pending: Duration::ZERO,
        }
    }

    /// Returns how many periods completed during `dt`.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.pending += dt;
        let mut fired = 0;
        while self.pending >= self.period {
            self.pending -= self.period;
            fired += 1;
        }
        fired
    }
}

/// Fires once after `delay`, then stays quiet.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShot {
    delay: Duration,
    elapsed: Duration,
    fired: bool,
}

impl OneShot {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            fired: false,
        }
    }

    /// True on the single advance that crosses the delay.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.fired = true;
            return true;
        }
        false
    }
}
