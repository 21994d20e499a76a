//! Repaint scheduling
//!
//! egui only paints when something asks it to. The spark never stops
//! moving, so the widget normally runs in continuous mode at a fixed frame
//! interval; `RepaintController` records why each frame ran and asks for
//! the next one.
//!
//! Call [`RepaintController::begin_frame`] at the top of `update()` and
//! [`RepaintController::end_frame`] at the bottom.

use std::time::{Duration, Instant};

/// Frame interval while continuous (~60 Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse move, click, key).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
    /// Timed continuous repaint (animation).
    Continuous,
}

/// Classify a frame from what the controller knows about it.
pub fn classify(frame: u64, had_input: bool, needs_repaint: bool, continuous: bool) -> RepaintReason {
    if frame == 0 {
        RepaintReason::Init
    } else if had_input {
        RepaintReason::Input
    } else if needs_repaint {
        RepaintReason::StateChange
    } else if continuous {
        RepaintReason::Continuous
    } else {
        // Woken by something egui saw that we did not; treat as input.
        RepaintReason::Input
    }
}

/// Time to feed animations for a frame. The first frame reports zero so
/// the gap between construction and the first paint is never counted.
pub fn frame_delta(reason: RepaintReason, since_last: Duration) -> Duration {
    match reason {
        RepaintReason::Init => Duration::ZERO,
        _ => since_last,
    }
}

/// What `end_frame` should ask egui for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextRepaint {
    After(Duration),
    Now,
    Idle,
}

pub struct RepaintController {
    continuous: bool,
    needs_repaint: bool,
    interval: Duration,
    frame: u64,
    reason: RepaintReason,
    last_frame: Instant,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

impl RepaintController {
    pub fn new(interval: Duration) -> Self {
        Self {
            continuous: true,
            needs_repaint: false,
            interval,
            frame: 0,
            reason: RepaintReason::Init,
            last_frame: Instant::now(),
        }
    }

    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Inspects egui input to decide why this frame runs. Returns the
    /// time animations should advance by (zero on the first frame).
    pub fn begin_frame(&mut self, ctx: &egui::Context) -> Duration {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.reason = classify(self.frame, had_input, self.needs_repaint, self.continuous);
        self.needs_repaint = false;

        let now = Instant::now();
        let since_last = now.duration_since(self.last_frame);
        self.last_frame = now;
        frame_delta(self.reason, since_last)
    }

    /// What to schedule after this frame.
    pub fn next_repaint(&self) -> NextRepaint {
        if self.continuous {
            NextRepaint::After(self.interval)
        } else if self.needs_repaint {
            NextRepaint::Now
        } else {
            NextRepaint::Idle
        }
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        match self.next_repaint() {
            NextRepaint::After(d) => ctx.request_repaint_after(d),
            NextRepaint::Now => ctx.request_repaint(),
            NextRepaint::Idle => {}
        }
    }
}
