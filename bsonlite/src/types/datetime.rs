use crate::common::get_current_time_or_zero;
use chrono::{TimeZone, Utc};
use std::fmt::{Debug, Display, Formatter};

/// A user-facing wall-clock timestamp with millisecond precision.
///
/// Stored as signed milliseconds since the UNIX epoch, so dates before 1970
/// are representable. Distinct from [`Timestamp`](crate::types::Timestamp),
/// which is the store's internal replication-ordering pair.
///
/// # Examples
///
/// ```rust,ignore
/// use bsonlite::types::DateTime;
///
/// let now = DateTime::now();
/// assert!(now.timestamp_millis() > 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DateTime {
    millis: i64,
}

impl DateTime {
    /// Creates a datetime from milliseconds since the UNIX epoch.
    pub fn from_millis(millis: i64) -> Self {
        DateTime { millis }
    }

    /// Gets the current wall-clock time.
    pub fn now() -> Self {
        DateTime {
            millis: get_current_time_or_zero() as i64,
        }
    }

    /// Gets the milliseconds since the UNIX epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.millis
    }

    /// Converts to a chrono UTC datetime, if representable.
    pub fn to_chrono(&self) -> Option<chrono::DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.millis).single()
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(value: chrono::DateTime<Utc>) -> Self {
        DateTime {
            millis: value.timestamp_millis(),
        }
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_chrono() {
            Some(datetime) => write!(f, "{}", datetime.to_rfc3339()),
            None => write!(f, "DateTime({}ms)", self.millis),
        }
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
