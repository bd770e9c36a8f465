//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn march_15() -> Timestamp {
        Timestamp(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap())
    }

    #[test]
    fn now_is_after_a_past_moment() {
        assert!(march_15() < Timestamp::now());
    }

    #[test]
    fn displays_as_rfc3339() {
        assert_eq!(march_15().to_string(), "2024-03-15T10:30:00+00:00");
    }

    #[test]
    fn serializes_transparently() {
        let ts = march_15();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-03-15T10:30:00Z\"");
    }
}
