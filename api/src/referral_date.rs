//! The date attached to a referral, as sent by the backend.

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;

/// Text shown in place of a date the backend sent in an unusable shape.
pub const INVALID_DATE: &str = "Invalid Date";

/// A referral date.
///
/// The backend may send an ISO-8601 string (with or without offset, seconds
/// or time part) or a number of milliseconds since the Unix epoch. Values that
/// parse as neither are kept as an invalid date rather than rejecting the whole
/// response; they render as [`INVALID_DATE`]. So does a `null` or absent date,
/// which is never replaced by the current time.
///
/// Dates are always shown in UTC, not in the viewer's local zone, so a bare
/// `2024-01-05` reads "Jan 5, 2024" everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferralDate(Option<DateTime<Utc>>);

/// Raw wire representation, before any parsing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    EpochMillis(f64),
}

/// Date-times without an offset, taken as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-times with a numeric offset that RFC 3339 alone does not accept.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

impl ReferralDate {
    fn new(datetime: DateTime<Utc>) -> Self {
        Self(Some(datetime))
    }

    fn invalid() -> Self {
        Self(None)
    }

    /// Parses the textual forms the backend is known to use.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::new(dt.with_timezone(&Utc));
        }
        if let Some(dt) = OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(s, format).ok())
        {
            return Self::new(dt.with_timezone(&Utc));
        }

        // a trailing `Z` is UTC, same as no offset at all
        let naive = s
            .strip_suffix('Z')
            .or_else(|| s.strip_suffix('z'))
            .unwrap_or(s);
        if let Some(dt) = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        {
            return Self::new(dt.and_utc());
        }
        if let Some(datetime) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Self::new(datetime.and_utc());
        }

        Self::invalid()
    }

    pub fn from_epoch_millis(millis: f64) -> Self {
        if !millis.is_finite() {
            return Self::invalid();
        }
        Self(DateTime::from_timestamp_millis(millis.trunc() as i64))
    }

    /// Short display form, e.g. "Jan 5, 2024".
    pub fn format_short(&self) -> String {
        match self.0 {
            Some(dt) => dt.format("%b %-d, %Y").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    /// Full timestamp, used for tooltips.
    pub fn standard_format(&self) -> String {
        match self.0 {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

impl fmt::Display for ReferralDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}

impl<'de> Deserialize<'de> for ReferralDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawDate>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawDate::Text(s)) => Self::parse(&s),
            Some(RawDate::EpochMillis(millis)) => Self::from_epoch_millis(millis),
            None => Self::invalid(),
        })
    }
}
