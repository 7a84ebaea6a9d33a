//! Backend timestamps.
//!
//! The backend mixes timezone-aware values (`2025-01-05T10:00:00+00:00`) with
//! naive `isoformat()` output (`2025-01-05T10:00:00.123456`). Both are kept
//! as the wall-clock time the server sent.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A backend timestamp in server wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parse either an RFC 3339 or a naive ISO-8601 timestamp.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.naive_local()));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(Self)
    }

    #[must_use]
    pub fn naive(self) -> NaiveDateTime {
        self.0
    }

    /// `05 Jan 2025 10:00`, used for list rows.
    #[must_use]
    pub fn format_short(self) -> String {
        self.0.format("%d %b %Y %H:%M").to_string()
    }

    /// `05 Jan 2025`, used for account creation dates.
    #[must_use]
    pub fn format_date(self) -> String {
        self.0.format("%d %b %Y").to_string()
    }

    /// `05 January 2025, 10:00`, used for report headers.
    #[must_use]
    pub fn format_long(self) -> String {
        self.0.format("%d %B %Y, %H:%M").to_string()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}
