//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, the instant type used for every nomination and
//! voting window boundary and for the evaluation instant handed to the
//! phase resolver.
//!
//! Timestamps are UTC and truncated to seconds. Window comparisons are
//! half-open (`start <= now < end`), so sub-second noise in stored values
//! would otherwise make a window appear open or closed for a fraction of
//! a second depending on where the record was written.
//!
//! The resolver never calls [`Timestamp::now()`]. Only boundary code
//! (the CLI, a request handler) reads the clock, once per evaluation.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EvtError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an RFC 3339 string with `Z` suffix.
/// - [`Timestamp::parse_lenient()`] — from any RFC 3339 offset, converted to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// Only the `Z` suffix is accepted. Use [`Timestamp::parse_lenient()`]
    /// for stored records written with explicit offsets.
    ///
    /// # Errors
    ///
    /// Returns [`EvtError::InvalidTimestamp`] if the string is not valid
    /// RFC 3339 or does not end in `Z`.
    pub fn parse(s: &str) -> Result<Self, EvtError> {
        if !s.ends_with('Z') {
            return Err(EvtError::InvalidTimestamp {
                input: s.to_string(),
                reason: "must use Z suffix (UTC only)".to_string(),
            });
        }
        Self::parse_lenient(s)
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    pub fn parse_lenient(s: &str) -> Result<Self, EvtError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| EvtError::InvalidTimestamp {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, EvtError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| EvtError::InvalidTimestamp {
            input: secs.to_string(),
            reason: "out of range for a Unix timestamp".to_string(),
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Shift by a signed number of seconds. Saturates at the representable range.
    pub fn add_secs(&self, secs: i64) -> Self {
        Duration::try_seconds(secs)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Self)
            .unwrap_or(if secs < 0 {
                Self(DateTime::<Utc>::MIN_UTC)
            } else {
                Self(DateTime::<Utc>::MAX_UTC)
            })
    }

    /// Shift by a signed number of minutes.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add_secs(minutes.saturating_mul(60))
    }

    /// Shift by a signed number of hours.
    pub fn add_hours(&self, hours: i64) -> Self {
        self.add_secs(hours.saturating_mul(3600))
    }

    /// Render as RFC 3339 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = EvtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = EvtError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_lenient(&s)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> String {
        ts.to_iso8601()
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // 1970..2100 keeps every value representable after small shifts.
    const EPOCH_RANGE: std::ops::Range<i64> = 0..4_102_444_800;

    proptest! {
        /// Shifting forward then back returns the original instant.
        #[test]
        fn add_secs_inverts(secs in EPOCH_RANGE, delta in -1_000_000i64..1_000_000) {
            let ts = Timestamp::from_epoch_secs(secs).unwrap();
            prop_assert_eq!(ts.add_secs(delta).add_secs(-delta), ts);
        }

        /// Ordering agrees with epoch seconds.
        #[test]
        fn ordering_matches_epoch(a in EPOCH_RANGE, b in EPOCH_RANGE) {
            let ta = Timestamp::from_epoch_secs(a).unwrap();
            let tb = Timestamp::from_epoch_secs(b).unwrap();
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }

        /// Rendered form re-parses strictly to the same instant.
        #[test]
        fn iso8601_reparses(secs in EPOCH_RANGE) {
            let ts = Timestamp::from_epoch_secs(secs).unwrap();
            prop_assert_eq!(Timestamp::parse(&ts.to_iso8601()).unwrap(), ts);
        }
    }
}
