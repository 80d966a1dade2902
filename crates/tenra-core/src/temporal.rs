//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to seconds
//! precision.
//!
//! ## Execution-Context Time
//!
//! The engine never reads the wall clock inside business logic. Every
//! time-gated rule (cancellation window, unstake delay, voting deadline,
//! rental-period elapse) compares against a `Timestamp` supplied by the
//! caller's execution context. [`Timestamp::now()`] exists for the CLI and
//! for collaborators that genuinely sit at the system boundary.
//!
//! ## Security Invariant
//!
//! Timestamps are UTC with seconds precision everywhere. Non-UTC inputs
//! are rejected at parse time rather than silently converted, so two
//! serializations of the same instant can never disagree.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A UTC timestamp truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    ///
    /// Boundary use only — engine operations take `now` as a parameter.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a Unix epoch timestamp in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameters`] for out-of-range values.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, EngineError> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or_else(|| EngineError::InvalidParameters(format!("invalid epoch seconds: {secs}")))
    }

    /// Parse from an RFC 3339 string, rejecting non-UTC offsets.
    ///
    /// Only the `Z` suffix is accepted; explicit offsets, including
    /// `+00:00`, are rejected.
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        if !s.ends_with('Z') {
            return Err(EngineError::InvalidParameters(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            EngineError::InvalidParameters(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Unix epoch seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// This instant shifted forward by `secs` seconds (negative shifts back).
    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Whole seconds elapsed from `earlier` to `self` (negative if `self`
    /// precedes `earlier`).
    pub fn secs_since(&self, earlier: Timestamp) -> i64 {
        self.0.timestamp() - earlier.0.timestamp()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as RFC 3339 with `Z` suffix and seconds precision.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    // with_nanosecond(0) only fails for leap-second nanos >= 2_000_000_000,
    // which chrono never produces from valid datetimes.
    dt.with_nanosecond(0).unwrap_or(dt)
}
