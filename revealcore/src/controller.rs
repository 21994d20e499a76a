//! Reveal cycle state machine
//!
//! ```text
//!   Idle ──activate──▶ Loading ──counter hits 100──▶ Revealed ──2 s──▶ Idle
//! ```
//!
//! The controller owns every timer of the cycle and advances them from the
//! frame delta. It never touches egui; the app reads the visibility flags
//! and opacities and paints accordingly.

use crate::animation::{Fade, FADE_DURATION, SPARK_PERIOD};
use crate::clock::{DisplayedTime, TimeSource};
use crate::progress::{ProgressSimulator, PROGRESS_MAX, TICK_INTERVAL};
use crate::timer::OneShot;
use std::time::Duration;

/// Delay before the button comes back after a reveal.
pub const BUTTON_DELAY: Duration = Duration::from_millis(2000);

/// Every duration the cycle uses, in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub tick_interval: Duration,
    pub fade: Duration,
    pub button_delay: Duration,
    pub spark_period: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            fade: FADE_DURATION,
            button_delay: BUTTON_DELAY,
            spark_period: SPARK_PERIOD,
        }
    }
}

impl Timings {
    /// How long the fake loading phase lasts.
    pub fn loading_time(&self) -> Duration {
        self.tick_interval * PROGRESS_MAX as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Button shown, waiting for a click.
    Idle,
    /// Button hidden, progress bar filling.
    Loading,
    /// Time shown and fading in; button returns after the delay.
    Revealed,
}

/// What happened during an [`RevealController::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    LoadingStarted,
    Progress(u8),
    Revealed(DisplayedTime),
    ButtonRestored,
}

pub struct RevealController {
    timings: Timings,
    state: RevealState,
    progress: ProgressSimulator,
    button_timer: Option<OneShot>,
    displayed: Option<DisplayedTime>,
    labels_visible: bool,
    time_fade: Fade,
    zone_fade: Fade,
    pending: Vec<RevealEvent>,
    cycles: u64,
    shut_down: bool,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl RevealController {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            state: RevealState::Idle,
            progress: ProgressSimulator::new(timings.tick_interval),
            button_timer: None,
            displayed: None,
            labels_visible: false,
            time_fade: Fade::new(timings.fade),
            zone_fade: Fade::new(timings.fade),
            pending: Vec::new(),
            cycles: 0,
            shut_down: false,
        }
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn button_visible(&self) -> bool {
        self.state == RevealState::Idle && !self.shut_down
    }

    pub fn progress_visible(&self) -> bool {
        self.state == RevealState::Loading
    }

    /// Labels stay up after the button returns, until the next click.
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    pub fn progress(&self) -> &ProgressSimulator {
        &self.progress
    }

    pub fn displayed(&self) -> Option<&DisplayedTime> {
        self.displayed.as_ref()
    }

    pub fn time_opacity(&self) -> f32 {
        self.time_fade.opacity()
    }

    pub fn zone_opacity(&self) -> f32 {
        self.zone_fade.opacity()
    }

    /// Completed reveals since startup.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the progress bar changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        self.progress.take_dirty()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Button press. Only honoured in `Idle`; returns whether it was.
    pub fn activate(&mut self) -> bool {
        if self.shut_down || self.state != RevealState::Idle {
            tracing::debug!(state = ?self.state, shut_down = self.shut_down, "activation ignored");
            return false;
        }

        self.hide_labels();
        self.progress.start();
        self.state = RevealState::Loading;
        self.pending.push(RevealEvent::LoadingStarted);
        tracing::info!(cycle = self.cycles + 1, "loading started");
        true
    }

    /// Move every timer forward by `dt` and run whatever transitions fall due.
    pub fn advance(&mut self, dt: Duration, source: &dyn TimeSource) -> Vec<RevealEvent> {
        if self.shut_down {
            self.pending.clear();
            return Vec::new();
        }

        let mut events = std::mem::take(&mut self.pending);

        match self.state {
            RevealState::Idle => {}
            RevealState::Loading => {
                let step = self.progress.advance(dt);
                if step.ticks > 0 {
                    events.push(RevealEvent::Progress(self.progress.value()));
                }
                if step.completed {
                    let shown = self.reveal(source);
                    events.push(RevealEvent::Revealed(shown));
                }
            }
            RevealState::Revealed => {
                let due = self
                    .button_timer
                    .as_mut()
                    .map(|t| t.advance(dt))
                    .unwrap_or(false);
                if due {
                    self.button_timer = None;
                    self.state = RevealState::Idle;
                    events.push(RevealEvent::ButtonRestored);
                    tracing::info!(cycle = self.cycles, "button restored");
                }
            }
        }

        // The fade started by `reveal` above begins on the next advance.
        if !matches!(events.last(), Some(RevealEvent::Revealed(_))) {
            self.time_fade.advance(dt);
            self.zone_fade.advance(dt);
        }

        events
    }

    /// Cancel every timer. Nothing fires afterwards.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.progress.stop();
        self.button_timer = None;
        self.pending.clear();
        self.shut_down = true;
        tracing::debug!(state = ?self.state, "controller shut down");
    }

    fn reveal(&mut self, source: &dyn TimeSource) -> DisplayedTime {
        self.progress.stop();
        let shown = DisplayedTime::capture(source);
        tracing::info!(time = %shown.time, timezone = %shown.timezone, "time revealed");

        self.displayed = Some(shown.clone());
        self.labels_visible = true;
        self.time_fade.start();
        self.zone_fade.start();
        self.button_timer = Some(OneShot::new(self.timings.button_delay));
        self.state = RevealState::Revealed;
        self.cycles += 1;
        shown
    }

    fn hide_labels(&mut self) {
        self.labels_visible = false;
        self.time_fade.reset();
        self.zone_fade.reset();
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::SteppingClock;
    use crate::clock::SystemClock;

    const TICK: Duration = Duration::from_millis(70);

    fn run_ticks(c: &mut RevealController, n: u32, src: &dyn TimeSource) -> Vec<RevealEvent> {
        let mut all = Vec::new();
        for _ in 0..n {
            all.extend(c.advance(TICK, src));
        }
        all
    }

    fn revealed(events: &[RevealEvent]) -> Vec<&DisplayedTime> {
        events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::Revealed(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let c = RevealController::default();
        assert_eq!(c.state(), RevealState::Idle);
        assert!(c.button_visible());
        assert!(!c.progress_visible());
        assert!(!c.labels_visible());
        assert!(c.displayed().is_none());
        assert_eq!(c.timings().loading_time(), Duration::from_millis(7000));
    }

    #[test]
    fn test_activate_enters_loading() {
        let clock = SteppingClock::new(12, 0, 0, Some("Asia/Tokyo"));
        let mut c = RevealController::default();
        assert!(c.activate());
        assert_eq!(c.state(), RevealState::Loading);
        assert!(!c.button_visible());
        assert!(c.progress_visible());
        assert_eq!(c.progress().value(), 0);
        assert_eq!(c.advance(Duration::ZERO, &clock), vec![RevealEvent::LoadingStarted]);
    }

    #[test]
    fn test_full_cycle() {
        let clock = SteppingClock::new(23, 59, 58, Some("Asia/Tokyo"));
        let mut c = RevealController::default();
        c.activate();

        let events = run_ticks(&mut c, 99, &clock);
        assert_eq!(c.state(), RevealState::Loading);
        assert_eq!(c.progress().value(), 99);
        assert_eq!(events.last(), Some(&RevealEvent::Progress(99)));
        assert!(revealed(&events).is_empty());

        let events = run_ticks(&mut c, 1, &clock);
        assert_eq!(c.state(), RevealState::Revealed);
        let shown = revealed(&events);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].time, "23:59:58");
        assert_eq!(shown[0].timezone, "Asia/Tokyo");
        assert!(!c.progress_visible());
        assert!(c.labels_visible());
        assert!(!c.button_visible());
        assert_eq!(c.time_opacity(), 0.0);
        assert_eq!(c.cycles(), 1);

        // Fade runs while the button is still away.
        c.advance(Duration::from_millis(750), &clock);
        assert!((c.time_opacity() - 0.5).abs() < 1e-6);
        assert!((c.zone_opacity() - 0.5).abs() < 1e-6);

        let events = c.advance(Duration::from_millis(1249), &clock);
        assert!(events.is_empty());
        assert_eq!(c.state(), RevealState::Revealed);
        assert_eq!(c.time_opacity(), 1.0);

        let events = c.advance(Duration::from_millis(1), &clock);
        assert_eq!(events, vec![RevealEvent::ButtonRestored]);
        assert_eq!(c.state(), RevealState::Idle);
        assert!(c.button_visible());
        // Labels linger until the next click.
        assert!(c.labels_visible());
    }

    #[test]
    fn test_activation_ignored_outside_idle() {
        let clock = SteppingClock::new(9, 0, 0, Some("UTC"));
        let mut c = RevealController::default();
        assert!(c.activate());
        run_ticks(&mut c, 50, &clock);
        assert!(!c.activate());
        assert_eq!(c.progress().value(), 50);

        run_ticks(&mut c, 50, &clock);
        assert_eq!(c.state(), RevealState::Revealed);
        assert!(!c.activate());
        assert_eq!(c.state(), RevealState::Revealed);
        assert_eq!(c.cycles(), 1);
    }

    #[test]
    fn test_second_cycle_hides_labels_and_is_fresh() {
        let clock = SteppingClock::new(10, 0, 0, Some("Europe/Berlin"));
        let mut c = RevealController::default();

        c.activate();
        let first = revealed(&run_ticks(&mut c, 100, &clock))[0].clone();
        c.advance(BUTTON_DELAY, &clock);
        assert_eq!(c.state(), RevealState::Idle);

        assert!(c.activate());
        assert!(!c.labels_visible());
        assert_eq!(c.time_opacity(), 0.0);
        assert_eq!(c.progress().value(), 0);

        let second = revealed(&run_ticks(&mut c, 100, &clock))[0].clone();
        assert!(second.captured_at > first.captured_at);
        assert_ne!(second.time, first.time);
        assert_eq!(c.cycles(), 2);
    }

    #[test]
    fn test_single_large_delta() {
        let clock = SteppingClock::new(6, 30, 0, None);
        let mut c = RevealController::default();
        c.activate();
        let events = c.advance(Duration::from_secs(30), &clock);
        assert_eq!(revealed(&events).len(), 1);
        assert_eq!(revealed(&events)[0].timezone, "UTC+03:00");
        assert_eq!(c.state(), RevealState::Revealed);
        // The button delay starts counting only after the reveal.
        assert!(c.advance(Duration::from_millis(1999), &clock).is_empty());
        assert_eq!(c.advance(Duration::from_millis(1), &clock), vec![RevealEvent::ButtonRestored]);
    }

    #[test]
    fn test_shutdown_silences_timers() {
        let clock = SteppingClock::new(6, 30, 0, Some("UTC"));
        let mut c = RevealController::default();
        c.activate();
        run_ticks(&mut c, 10, &clock);
        c.shutdown();

        assert!(c.advance(Duration::from_secs(60), &clock).is_empty());
        assert_eq!(c.progress().value(), 10);
        assert_eq!(c.cycles(), 0);
        assert!(!c.activate());
        assert!(!c.button_visible());
        assert!(c.is_shut_down());
    }

    #[test]
    fn test_shutdown_during_button_delay() {
        let clock = SteppingClock::new(6, 30, 0, Some("UTC"));
        let mut c = RevealController::default();
        c.activate();
        run_ticks(&mut c, 100, &clock);
        c.shutdown();
        assert!(c.advance(BUTTON_DELAY * 2, &clock).is_empty());
        assert_eq!(c.state(), RevealState::Revealed);
    }

    #[test]
    fn test_end_to_end_with_system_clock() {
        let mut c = RevealController::default();
        c.activate();
        let events = run_ticks(&mut c, 100, &SystemClock);
        let shown = revealed(&events);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].time.len(), 8);
        assert!(!shown[0].timezone.is_empty());
        c.advance(BUTTON_DELAY, &SystemClock);
        assert!(c.button_visible());
    }
}
