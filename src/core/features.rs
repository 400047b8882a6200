//! Calendar and time-of-day features derived from a message timestamp.

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Derived time features, all pure functions of one timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Calendar date.
    pub date: NaiveDate,
    /// Year.
    pub year: i32,
    /// Month, 1-12.
    pub month_num: u32,
    /// English month name, e.g. `January`.
    pub month_name: String,
    /// Day of month, 1-31.
    pub day: u32,
    /// English weekday name, e.g. `Monday`.
    pub weekday_name: String,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// One-hour activity bucket, see [`period_label`].
    pub period_label: String,
}

impl TimeFeatures {
    /// Derives every feature from `timestamp`.
    pub fn derive(timestamp: NaiveDateTime) -> Self {
        let hour = timestamp.hour();
        Self {
            date: timestamp.date(),
            year: timestamp.year(),
            month_num: timestamp.month(),
            month_name: timestamp.format("%B").to_string(),
            day: timestamp.day(),
            weekday_name: timestamp.format("%A").to_string(),
            hour,
            minute: timestamp.minute(),
            period_label: period_label(hour),
        }
    }
}

/// Formats the one-hour bucket starting at `hour`.
///
/// `9` becomes `"09-10"`; hour 23 wraps to `"23-00"`. Hours past 23 are
/// taken modulo 24.
pub fn period_label(hour: u32) -> String {
    let hour = hour % 24;
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// English name of a 1-based month number, or `None` outside 1-12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name())
}
