//! Error types for time source lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    /// The host refused to report its IANA zone.
    #[error("timezone lookup failed: {0}")]
    TimezoneLookup(#[from] iana_time_zone::GetTimezoneError),
    /// The host reported a zone, but it has no usable name.
    #[error("timezone name is empty")]
    EmptyTimezone,
}
