//! Transcript parser entry point.
//!
//! [`TranscriptParser`] runs the whole pipeline over one in-memory transcript:
//! format detection, splitting, timestamp parsing, classification and feature
//! derivation. The only fatal outcome is an unrecognized format; a segment
//! whose timestamp cannot be read is dropped and listed in the
//! [`ParseReport`].
//!
//! # Example
//!
//! ```rust
//! use chatframe::parser::TranscriptParser;
//!
//! let text = "\
//! 13/01/24, 12:00 - Alice: Hi
//! 13/01/24, 12:01 - Bob: Hello
//! 13/01/24, 12:02 - Alice: How are you?
//! 13/01/24, 12:03 - Bob: Fine
//! ";
//!
//! let table = TranscriptParser::new().parse_str(text)?;
//! assert_eq!(table.len(), 4);
//! assert_eq!(table.report().format, "dashed_24h");
//! assert_eq!(table.participants(), vec!["Alice", "Bob"]);
//! # Ok::<(), chatframe::ChatframeError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::Message;
use crate::config::{DateOrder, ParseConfig};
use crate::core::table::{ChatTable, DroppedSegment, ParseReport, SegmentOutcome};
use crate::error::{ChatframeError, Result};
use crate::parsing::classify::classify;
use crate::parsing::detect::detect_format;
use crate::parsing::split::{RawSegment, normalize_line_endings, split_segments};
use crate::parsing::timestamp::{infer_date_order, is_ambiguous, parse_timestamp};

/// Parser for WhatsApp-style text transcripts.
///
/// Holds only its configuration, so one parser can be shared across threads
/// and reused for any number of transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParseConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::Io`] if the file cannot be read,
    /// [`ChatframeError::Utf8`] if it is not valid UTF-8, and
    /// [`ChatframeError::UnrecognizedFormat`] as for [`parse_str`](Self::parse_str).
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<ChatTable> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|source| ChatframeError::Utf8 {
            context: path.display().to_string(),
            source,
        })?;
        self.parse_str(&text)
    }

    /// Parses a transcript held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::UnrecognizedFormat`] if the text is empty or
    /// no export format matches often enough.
    pub fn parse_str(&self, text: &str) -> Result<ChatTable> {
        let normalized = normalize_line_endings(text);
        let text: &str = &normalized;
        let detection = detect_format(text, self.config.min_boundary_matches)?;
        let descriptor = detection.descriptor;
        info!(
            format = descriptor.name,
            boundaries = detection.boundary_count,
            "detected export format"
        );

        let segments = split_segments(text, descriptor, detection.boundary_count)?;
        let date_order = self.resolve_date_order(&segments);

        let ambiguous_dates = segments
            .iter()
            .filter(|s| is_ambiguous(s.timestamp_text))
            .count();
        if ambiguous_dates > 0 && self.config.date_order != DateOrder::Auto {
            warn!(
                count = ambiguous_dates,
                order = %date_order,
                "transcript has dates that read differently day-first and month-first"
            );
        }

        let formats = descriptor.candidate_date_formats(date_order);
        let report = ParseReport {
            format: descriptor.name,
            date_order,
            boundary_count: detection.boundary_count,
            segment_count: segments.len(),
            parsed: 0,
            dropped: Vec::new(),
            ambiguous_dates,
            notifications: 0,
        };

        let outcomes = segments
            .iter()
            .map(|segment| self.parse_segment(segment, &formats, date_order));
        let table = ChatTable::from_outcomes(outcomes, report);

        info!(
            format = descriptor.name,
            rows = table.report().parsed,
            dropped = table.report().dropped_count(),
            notifications = table.report().notifications,
            "parsed transcript"
        );
        Ok(table)
    }

    fn resolve_date_order(&self, segments: &[RawSegment<'_>]) -> DateOrder {
        match self.config.date_order {
            DateOrder::Auto => {
                let inferred = infer_date_order(segments.iter().map(|s| s.timestamp_text));
                info!(order = %inferred, "inferred date order");
                inferred
            }
            fixed => fixed,
        }
    }

    fn parse_segment(
        &self,
        segment: &RawSegment<'_>,
        formats: &[&str],
        order: DateOrder,
    ) -> SegmentOutcome {
        match parse_timestamp(segment.timestamp_text, formats, order) {
            Ok(timestamp) => {
                let classified = classify(segment.body_text, self.config.max_sender_len);
                SegmentOutcome::Parsed(Message::new(
                    timestamp,
                    classified.sender,
                    classified.body,
                ))
            }
            Err(reason) => {
                warn!(
                    index = segment.index,
                    timestamp = segment.timestamp_text.trim(),
                    %reason,
                    "dropped segment"
                );
                SegmentOutcome::Dropped(DroppedSegment {
                    index: segment.index,
                    timestamp_text: segment.timestamp_text.to_string(),
                    reason,
                })
            }
        }
    }
}

/// Parses a transcript with the default configuration.
///
/// Shorthand for `TranscriptParser::new().parse_str(text)`.
///
/// # Errors
///
/// Returns [`ChatframeError::UnrecognizedFormat`] if no export format matches.
pub fn parse_transcript(text: &str) -> Result<ChatTable> {
    TranscriptParser::new().parse_str(text)
}
