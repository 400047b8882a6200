//! Filter table rows by date range, sender and row kind.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Rows on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Rows on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Rows from one participant |
//! | Kind | [`without_notifications`](FilterConfig::without_notifications) | Drop system notifications |
//!
//! Active filters are combined with AND logic and row order is preserved.
//!
//! # Example
//!
//! ```
//! use chatframe::core::filter::{FilterConfig, apply_filters};
//! use chatframe::parser::parse_transcript;
//!
//! # fn main() -> chatframe::Result<()> {
//! let table = parse_transcript("\
//! 01/01/24, 09:00 - Alice: Happy new year
//! 01/01/24, 09:05 - Bob: Same to you
//! 15/06/24, 18:00 - Alice: Summer already
//! 15/06/24, 18:01 - Alice left
//! ")?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .without_notifications();
//!
//! let filtered = apply_filters(table.into_messages(), &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body(), "Summer already");
//! # Ok(())
//! # }
//! ```

use chrono::{NaiveDate, NaiveDateTime};

use crate::Message;
use crate::error::{ChatframeError, Result};

/// Configuration for filtering table rows.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only rows on or after this moment.
    pub after: Option<NaiveDateTime>,

    /// Include only rows on or before this moment.
    pub before: Option<NaiveDateTime>,

    /// Include only rows from this sender (case-insensitive).
    pub from: Option<String>,

    /// Drop rows attributed to the notification sentinel.
    pub exclude_notifications: bool,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all rows pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(day_at(date_str, 0, 0, 0)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// The whole day is included.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        // Row timestamps have at most second precision
        self.before = Some(day_at(date_str, 23, 59, 59)?);
        Ok(self)
    }

    /// Sets the sender filter. Matching is case-insensitive.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Drops system notification rows.
    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.exclude_notifications = true;
        self
    }

    /// Sets the start moment directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end moment directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.from.is_some() || self.exclude_notifications
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a single row passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if self.exclude_notifications && msg.is_notification() {
            return false;
        }

        if let Some(ref from) = self.from {
            if msg.sender().to_lowercase() != from.to_lowercase() {
                return false;
            }
        }

        let ts = msg.timestamp();
        if self.after.is_some_and(|after| ts < after) {
            return false;
        }
        if self.before.is_some_and(|before| ts > before) {
            return false;
        }

        true
    }
}

/// Parses a `YYYY-MM-DD` date and pins it to a time of day.
fn day_at(date_str: &str, hour: u32, minute: u32, second: u32) -> Result<NaiveDateTime> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| ChatframeError::invalid_date(date_str))
}

/// Filters rows based on the provided configuration.
///
/// Returns the rows matching all active filters, in their original order.
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
