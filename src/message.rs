//! The parsed message record.
//!
//! [`Message`] is one row of the output table: when it was sent, who sent it,
//! what it said, and the calendar features every downstream analysis groups
//! by. The features are computed once, at construction, and the fields are
//! read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use chatframe::Message;
//! use chatframe::parsing::Sender;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 13)
//!     .unwrap()
//!     .and_hms_opt(23, 5, 0)
//!     .unwrap();
//! let msg = Message::new(ts, Sender::Participant("Alice".into()), "Hello!");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.features().period_label, "23-00");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::features::TimeFeatures;
use crate::parsing::classify::Sender;

/// Column names of the message table, in output order.
pub const COLUMNS: [&str; 12] = [
    "timestamp",
    "sender",
    "body",
    "date",
    "year",
    "month_num",
    "month_name",
    "day",
    "weekday_name",
    "hour",
    "minute",
    "period_label",
];

/// One parsed chat message.
///
/// Serializes flat, in [`COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    timestamp: NaiveDateTime,
    sender: Sender,
    body: String,
    #[serde(flatten)]
    features: TimeFeatures,
}

impl Message {
    /// Creates a message and derives its time features.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            body: body.into(),
            features: TimeFeatures::derive(timestamp),
        }
    }

    /// Local wall-clock time the message was sent (no timezone).
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Sender name, or `group_notification` for system notifications.
    pub fn sender(&self) -> &str {
        self.sender.as_str()
    }

    /// Typed sender.
    pub fn sender_kind(&self) -> &Sender {
        &self.sender
    }

    /// Returns `true` if this row is a system notification.
    pub fn is_notification(&self) -> bool {
        self.sender.is_notification()
    }

    /// Message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Derived calendar and time-of-day features.
    pub fn features(&self) -> &TimeFeatures {
        &self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 8)
            .unwrap()
            .and_hms_opt(11, 44, 33)
            .unwrap()
    }

    #[test]
    fn test_new_derives_features() {
        let msg = Message::new(ts(), Sender::Participant("Alice".into()), "Hi");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.body(), "Hi");
        assert_eq!(msg.timestamp(), ts());
        assert_eq!(msg.features().weekday_name, "Monday");
        assert_eq!(msg.features().period_label, "11-12");
        assert!(!msg.is_notification());
    }

    #[test]
    fn test_notification_sender() {
        let msg = Message::new(ts(), Sender::Notification, "Alice left");
        assert_eq!(msg.sender(), "group_notification");
        assert!(msg.is_notification());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_serializes_flat() {
        let msg = Message::new(ts(), Sender::Participant("Alice".into()), "Hi");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["sender"], "Alice");
        assert_eq!(json["timestamp"], "2024-07-08T11:44:33");
        assert_eq!(json["date"], "2024-07-08");
        assert_eq!(json["month_name"], "July");
        assert_eq!(json["period_label"], "11-12");

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }
}
