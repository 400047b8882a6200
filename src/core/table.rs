//! The parsed message table and its batch report.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::Message;
use crate::config::DateOrder;
use crate::parsing::timestamp::DateParseFailure;

/// A segment whose timestamp could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedSegment {
    /// Position of the segment in the transcript (0-based).
    pub index: usize,
    /// The raw boundary text.
    pub timestamp_text: String,
    /// Why it was dropped.
    #[serde(serialize_with = "serialize_reason")]
    pub reason: DateParseFailure,
}

fn serialize_reason<S: serde::Serializer>(
    reason: &DateParseFailure,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Per-segment result of the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// The segment became a table row.
    Parsed(Message),
    /// The segment was skipped.
    Dropped(DroppedSegment),
}

/// Diagnostics for one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Name of the detected export format.
    pub format: &'static str,
    /// Date order actually used. Never [`DateOrder::Auto`].
    pub date_order: DateOrder,
    /// Boundary matches counted during detection.
    pub boundary_count: usize,
    /// Segments produced by the split.
    pub segment_count: usize,
    /// Rows in the table.
    pub parsed: usize,
    /// Segments dropped for an unreadable timestamp.
    pub dropped: Vec<DroppedSegment>,
    /// Timestamps whose day and month could be read either way.
    pub ambiguous_dates: usize,
    /// Rows attributed to the notification sentinel.
    pub notifications: usize,
}

impl ParseReport {
    /// Number of dropped segments.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// The ordered message table produced by a parse, with its report.
///
/// Rows are in transcript order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTable {
    messages: Vec<Message>,
    report: ParseReport,
}

impl ChatTable {
    /// Assembles a table from per-segment outcomes, in order.
    pub(crate) fn from_outcomes(
        outcomes: impl IntoIterator<Item = SegmentOutcome>,
        mut report: ParseReport,
    ) -> Self {
        let mut messages = Vec::new();
        for outcome in outcomes {
            match outcome {
                SegmentOutcome::Parsed(message) => messages.push(message),
                SegmentOutcome::Dropped(dropped) => report.dropped.push(dropped),
            }
        }

        report.parsed = messages.len();
        report.notifications = messages.iter().filter(|m| m.is_notification()).count();

        Self { messages, report }
    }

    /// The rows.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The parse report.
    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no segment produced a row.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Sorted unique participant names, without the notification sentinel.
    pub fn participants(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter_map(|m| m.sender_kind().participant())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Consumes the table, returning the rows.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Consumes the table, returning rows and report.
    pub fn into_parts(self) -> (Vec<Message>, ParseReport) {
        (self.messages, self.report)
    }
}

impl<'a> IntoIterator for &'a ChatTable {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl IntoIterator for ChatTable {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
