//! Property-based tests for chatframe.
//!
//! These tests generate random transcripts and bodies to find edge cases.

use chrono::{Datelike, Timelike};
use proptest::prelude::*;

use chatframe::core::features::period_label;
use chatframe::core::{FilterConfig, apply_filters};
use chatframe::parser::parse_transcript;
use chatframe::parsing::{EMPTY_MESSAGE, classify};

const SENDERS: &[&str] = &["Alice", "Bob", "Charlie", "User123", "Иван", "+1 555 0100"];

const BODIES: &[&str] = &[
    "Hello",
    "Hi there!",
    "10:30 works for me",
    "Привет мир",
    "🎉🔥 emoji",
    "first line\nsecond line",
    "ratio 3:1",
    "see https://example.com",
    "",
];

/// One generated message: sender, body, day, month, hour, minute.
#[derive(Debug, Clone)]
struct Generated {
    sender: &'static str,
    body: &'static str,
    day: u32,
    month: u32,
    hour: u32,
    minute: u32,
}

/// Generate a random message using fast strategies (no regex!)
fn arb_generated() -> impl Strategy<Value = Generated> {
    (
        prop::sample::select(SENDERS),
        prop::sample::select(BODIES),
        1u32..=28,
        1u32..=12,
        0u32..24,
        0u32..60,
    )
        .prop_map(|(sender, body, day, month, hour, minute)| Generated {
            sender,
            body,
            day,
            month,
            hour,
            minute,
        })
}

fn render_dashed(messages: &[Generated]) -> String {
    messages
        .iter()
        .map(|m| {
            format!(
                "{:02}/{:02}/24, {:02}:{:02} - {}: {}\n",
                m.day, m.month, m.hour, m.minute, m.sender, m.body
            )
        })
        .collect()
}

fn render_bracketed(messages: &[Generated]) -> String {
    messages
        .iter()
        .map(|m| {
            let hour12 = if m.hour % 12 == 0 { 12 } else { m.hour % 12 };
            let meridiem = if m.hour < 12 { "AM" } else { "PM" };
            format!(
                "[{:02}/{:02}/24, {}:{:02}:00 {}] {}: {}\n",
                m.day, m.month, hour12, m.minute, meridiem, m.sender, m.body
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSE PROPERTIES
    // ============================================

    /// N well-formed messages produce exactly N rows
    #[test]
    fn n_messages_n_rows(messages in prop::collection::vec(arb_generated(), 4..40)) {
        for text in [render_dashed(&messages), render_bracketed(&messages)] {
            let table = parse_transcript(&text).unwrap();
            prop_assert_eq!(table.len(), messages.len());
            prop_assert_eq!(table.report().dropped_count(), 0);
        }
    }

    /// Parsing the same transcript twice yields identical tables
    #[test]
    fn parse_is_idempotent(messages in prop::collection::vec(arb_generated(), 4..20)) {
        let text = render_bracketed(&messages);
        prop_assert_eq!(parse_transcript(&text).unwrap(), parse_transcript(&text).unwrap());
    }

    /// Senders, bodies and timestamps survive the round trip
    #[test]
    fn rows_match_generated(messages in prop::collection::vec(arb_generated(), 4..20)) {
        let table = parse_transcript(&render_bracketed(&messages)).unwrap();

        for (row, expected) in table.iter().zip(&messages) {
            prop_assert_eq!(row.sender(), expected.sender);
            let body = if expected.body.is_empty() { EMPTY_MESSAGE } else { expected.body };
            prop_assert_eq!(row.body(), body);

            let ts = row.timestamp();
            prop_assert_eq!((ts.day(), ts.month()), (expected.day, expected.month));
            prop_assert_eq!((ts.hour(), ts.minute()), (expected.hour, expected.minute));
        }
    }

    // ============================================
    // CLASSIFIER PROPERTIES
    // ============================================

    /// Classification never panics and the sender is always valid
    #[test]
    fn classify_sender_is_valid(body in any::<String>()) {
        let c = classify(&body, 50);
        if let Some(name) = c.sender.participant() {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().count() <= 50);
        }
    }

    /// Notification rows carry the trimmed input unchanged
    #[test]
    fn notification_keeps_text(body in "[a-z ]{0,30}") {
        let c = classify(&body, 50);
        prop_assert!(c.sender.is_notification());
        prop_assert_eq!(c.body, body.trim());
    }

    // ============================================
    // FEATURE PROPERTIES
    // ============================================

    /// Period labels name the hour and the next one, wrapping at midnight
    #[test]
    fn period_label_shape(hour in 0u32..24) {
        let label = period_label(hour);
        prop_assert_eq!(label.len(), 5);
        let (start, end) = label.split_at(2);
        prop_assert_eq!(start.parse::<u32>().unwrap(), hour);
        prop_assert_eq!(end[1..].parse::<u32>().unwrap(), (hour + 1) % 24);
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// Sender filter keeps exactly the rows of that sender
    #[test]
    fn sender_filter_partitions(
        messages in prop::collection::vec(arb_generated(), 4..30),
        who in prop::sample::select(SENDERS),
    ) {
        let rows = parse_transcript(&render_dashed(&messages)).unwrap().into_messages();
        let total = rows.len();

        let kept = apply_filters(rows, &FilterConfig::new().with_sender(who));
        let expected = messages.iter().filter(|m| m.sender == who).count();

        prop_assert_eq!(kept.len(), expected);
        prop_assert!(kept.len() <= total);
        prop_assert!(kept.iter().all(|m| m.sender() == who));
    }

    /// No filter means passthrough
    #[test]
    fn no_filter_is_passthrough(messages in prop::collection::vec(arb_generated(), 4..20)) {
        let rows = parse_transcript(&render_dashed(&messages)).unwrap().into_messages();
        let original = rows.clone();
        prop_assert_eq!(apply_filters(rows, &FilterConfig::new()), original);
    }
}
