//! Wall clock and timezone name, behind a trait so tests can pin them.

use crate::error::ClockError;
use chrono::{DateTime, FixedOffset, Local};

/// Where the revealed time comes from.
pub trait TimeSource {
    /// Current local time, with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Display name of the host zone, e.g. `Europe/Moscow`.
    fn timezone_name(&self) -> Result<String, ClockError>;
}

/// The host's clock and IANA zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }

    fn timezone_name(&self) -> Result<String, ClockError> {
        let name = iana_time_zone::get_timezone()?;
        if name.trim().is_empty() {
            return Err(ClockError::EmptyTimezone);
        }
        Ok(name)
    }
}

/// Time and zone strings captured when the reveal starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedTime {
    /// `HH:MM:SS`, 24-hour.
    pub time: String,
    pub timezone: String,
    pub captured_at: DateTime<FixedOffset>,
}

impl DisplayedTime {
    /// Read the source once. A failed zone lookup falls back to the bare
    /// UTC offset, so the label is never empty.
    pub fn capture(source: &dyn TimeSource) -> Self {
        let now = source.now();
        let timezone = match source.timezone_name() {
            Ok(name) if !name.trim().is_empty() => name,
            Ok(_) => {
                tracing::warn!("timezone name is blank, showing UTC offset");
                offset_label(now.offset())
            }
            Err(e) => {
                tracing::warn!(error = %e, "timezone lookup failed, showing UTC offset");
                offset_label(now.offset())
            }
        };
        Self {
            time: format_time(&now),
            timezone,
            captured_at: now,
        }
    }
}

pub fn format_time(now: &DateTime<FixedOffset>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// `UTC+03:00`, `UTC-05:30`, `UTC+00:00`.
pub fn offset_label(offset: &FixedOffset) -> String {
    format!("UTC{}", offset)
}
