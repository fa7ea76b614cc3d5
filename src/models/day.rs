use std::fmt;

use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A calendar date truncated to the day.
///
/// All booking math in this crate runs on whole days: a reservation from
/// the 10th to the 12th occupies the nights of the 10th and the 11th, and
/// the time-of-day embedded in upstream ISO 8601 strings must never cause
/// two records for the same day to compare unequal. `DayStamp` is that
/// normalized value.
///
/// A stamp can be *invalid* (the result of parsing a malformed date
/// string). Ordered comparisons involving an invalid stamp are always
/// false, so predicates written in positive form (`a < b && c < d`)
/// degrade to `false` rather than panicking. Callers that need to reject
/// malformed input check [`DayStamp::is_valid`] up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayStamp(Option<NaiveDate>);

impl DayStamp {
    /// The invalid stamp. Compares false against everything, including itself.
    pub const INVALID: DayStamp = DayStamp(None);

    /// Create a stamp from an already-normalized date.
    pub fn from_date(date: NaiveDate) -> Self {
        DayStamp(Some(date))
    }

    /// Create a stamp from year/month/day. Out-of-range components yield
    /// the invalid stamp.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        DayStamp(NaiveDate::from_ymd_opt(year, month, day))
    }

    /// Parse an ISO 8601 date (`2025-02-10`) or date-time string, with or
    /// without an offset (`2025-02-10T14:30:00Z`, `2025-02-10T14:30:00`),
    /// keeping only the calendar day.
    ///
    /// Never fails: unparseable input yields [`DayStamp::INVALID`].
    /// Offset date-times are truncated to the calendar day of their UTC
    /// instant; zoneless ones to their literal date.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if let Ok(date) = value.parse::<NaiveDate>() {
            return DayStamp(Some(date));
        }
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
            return DayStamp(Some(dt.to_utc().date_naive()));
        }
        if let Ok(dt) = value.parse::<chrono::NaiveDateTime>() {
            return DayStamp(Some(dt.date()));
        }
        DayStamp::INVALID
    }

    /// Today's date (UTC).
    pub fn today() -> Self {
        DayStamp(Some(chrono::Utc::now().date_naive()))
    }

    /// Whether this stamp holds a real date.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The underlying date, if valid.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Strictly-before comparison. False whenever either side is invalid,
    /// mirroring how comparisons against an unparseable date behave in the
    /// upstream API payloads this crate consumes.
    pub fn is_before(&self, other: DayStamp) -> bool {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// The following day, or the invalid stamp at the end of the calendar.
    pub fn next_day(&self) -> DayStamp {
        DayStamp(self.0.and_then(|d| d.succ_opt()))
    }
}

impl fmt::Display for DayStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "invalid"),
        }
    }
}

impl From<NaiveDate> for DayStamp {
    fn from(date: NaiveDate) -> Self {
        DayStamp::from_date(date)
    }
}

impl Serialize for DayStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DayStamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(s) => Ok(DayStamp::parse(&s)),
            None => Ok(DayStamp::INVALID),
        }
    }
}

impl Default for DayStamp {
    fn default() -> Self {
        DayStamp::INVALID
    }
}
