//! Export format descriptors.
//!
//! WhatsApp exports vary by platform and locale. Each supported variant is
//! described by a [`FormatDescriptor`]: a boundary pattern that matches the
//! timestamp marker starting every message, plus the chrono format strings
//! used to read that marker.
//!
//! Supported styles (in detection priority order):
//! - Bracketed (iOS): `[08/07/24, 11:44:33 AM] Sender: Message`
//! - Bracketed, dotted dates: `[15.01.24, 10:30:45] Sender: Message`
//! - Dashed (Android): `13/01/24, 12:01 - Sender: Message`
//! - Dashed, 12-hour: `1/15/24, 10:30 AM - Sender: Message`
//! - Dashed, dotted dates: `26.10.2025, 20:40 - Sender: Message`
//!
//! Bracketed styles come first: they are more specific, so a transcript that
//! happens to match both families resolves to the bracketed reading.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::DateOrder;
use crate::error::{ChatframeError, Result};

/// Prefixes every boundary pattern: markers start a line, optionally after a
/// BOM or a bidi mark (iOS inserts U+200E before system lines).
macro_rules! boundary {
    ($pattern:literal) => {
        concat!(r"(?m)^[\x{FEFF}\x{200E}\x{200F}]?", $pattern)
    };
}

/// Family of export styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFamily {
    /// Timestamp wrapped in brackets, followed by a space.
    Bracketed,
    /// Timestamp followed by ` - `.
    Dashed,
}

/// One supported export style.
///
/// Descriptors are immutable. The boundary regex is compiled on first use and
/// shared by every subsequent parse.
#[derive(Debug)]
pub struct FormatDescriptor {
    /// Identifier used in diagnostics and reports.
    pub name: &'static str,
    /// Export family this style belongs to.
    pub family: ExportFamily,
    /// Regex matching one message's leading timestamp marker.
    pub boundary_pattern: &'static str,
    /// Sample marker, for error messages and documentation.
    pub example: &'static str,
    day_first_formats: &'static [&'static str],
    month_first_formats: &'static [&'static str],
    boundary: OnceLock<Regex>,
}

impl FormatDescriptor {
    /// Creates a descriptor.
    ///
    /// Each format list must be ordered two-digit year before four-digit
    /// year: chrono's `%Y` happily reads `24` as the year 24 AD.
    pub const fn new(
        name: &'static str,
        family: ExportFamily,
        boundary_pattern: &'static str,
        example: &'static str,
        day_first_formats: &'static [&'static str],
        month_first_formats: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            family,
            boundary_pattern,
            example,
            day_first_formats,
            month_first_formats,
            boundary: OnceLock::new(),
        }
    }

    /// Returns the compiled boundary regex.
    pub fn boundary(&self) -> Result<&Regex> {
        if let Some(regex) = self.boundary.get() {
            return Ok(regex);
        }
        let regex =
            Regex::new(self.boundary_pattern).map_err(|source| ChatframeError::InvalidPattern {
                name: self.name,
                source,
            })?;
        Ok(self.boundary.get_or_init(|| regex))
    }

    /// Candidate chrono formats in the order they should be tried.
    ///
    /// The preferred ordering comes first; the other ordering is kept as a
    /// fallback so that `01/13/24` still parses under a day-first hint.
    /// [`DateOrder::Auto`] must be resolved by the caller and is treated as
    /// day-first here.
    pub fn candidate_date_formats(&self, order: DateOrder) -> Vec<&'static str> {
        let (preferred, fallback) = match order {
            DateOrder::MonthFirst => (self.month_first_formats, self.day_first_formats),
            DateOrder::DayFirst | DateOrder::Auto => {
                (self.day_first_formats, self.month_first_formats)
            }
        };
        preferred.iter().chain(fallback).copied().collect()
    }
}

static DESCRIPTORS: [FormatDescriptor; 9] = [
    FormatDescriptor::new(
        "bracketed_12h_seconds",
        ExportFamily::Bracketed,
        boundary!(r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}\s?[APap][Mm]\]"),
        "[08/07/24, 11:44:33 AM]",
        &["%d/%m/%y, %I:%M:%S %p", "%d/%m/%Y, %I:%M:%S %p"],
        &["%m/%d/%y, %I:%M:%S %p", "%m/%d/%Y, %I:%M:%S %p"],
    ),
    FormatDescriptor::new(
        "bracketed_24h_seconds",
        ExportFamily::Bracketed,
        boundary!(r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}\]"),
        "[08/07/24, 23:44:33]",
        &["%d/%m/%y, %H:%M:%S", "%d/%m/%Y, %H:%M:%S"],
        &["%m/%d/%y, %H:%M:%S", "%m/%d/%Y, %H:%M:%S"],
    ),
    FormatDescriptor::new(
        "bracketed_12h",
        ExportFamily::Bracketed,
        boundary!(r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s?[APap][Mm]\]"),
        "[08/07/24, 11:44 AM]",
        &["%d/%m/%y, %I:%M %p", "%d/%m/%Y, %I:%M %p"],
        &["%m/%d/%y, %I:%M %p", "%m/%d/%Y, %I:%M %p"],
    ),
    FormatDescriptor::new(
        "bracketed_24h",
        ExportFamily::Bracketed,
        boundary!(r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\]"),
        "[08/07/24, 23:44]",
        &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"],
        &["%m/%d/%y, %H:%M", "%m/%d/%Y, %H:%M"],
    ),
    FormatDescriptor::new(
        "bracketed_dotted",
        ExportFamily::Bracketed,
        boundary!(r"\[\d{1,2}\.\d{1,2}\.\d{2,4},\s\d{1,2}:\d{2}(?::\d{2})?\]"),
        "[15.01.24, 10:30:45]",
        &[
            "%d.%m.%y, %H:%M:%S",
            "%d.%m.%y, %H:%M",
            "%d.%m.%Y, %H:%M:%S",
            "%d.%m.%Y, %H:%M",
        ],
        &[
            "%m.%d.%y, %H:%M:%S",
            "%m.%d.%y, %H:%M",
            "%m.%d.%Y, %H:%M:%S",
            "%m.%d.%Y, %H:%M",
        ],
    ),
    FormatDescriptor::new(
        "dashed_24h",
        ExportFamily::Dashed,
        boundary!(r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s"),
        "13/01/24, 12:01 - ",
        &["%d/%m/%y, %H:%M", "%d/%m/%Y, %H:%M"],
        &["%m/%d/%y, %H:%M", "%m/%d/%Y, %H:%M"],
    ),
    FormatDescriptor::new(
        "dashed_24h_seconds",
        ExportFamily::Dashed,
        boundary!(r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}\s-\s"),
        "13/01/24, 12:01:30 - ",
        &["%d/%m/%y, %H:%M:%S", "%d/%m/%Y, %H:%M:%S"],
        &["%m/%d/%y, %H:%M:%S", "%m/%d/%Y, %H:%M:%S"],
    ),
    FormatDescriptor::new(
        "dashed_12h",
        ExportFamily::Dashed,
        boundary!(r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}(?::\d{2})?\s?[APap][Mm]\s-\s"),
        "1/15/24, 10:30 AM - ",
        &[
            "%d/%m/%y, %I:%M:%S %p",
            "%d/%m/%y, %I:%M %p",
            "%d/%m/%Y, %I:%M:%S %p",
            "%d/%m/%Y, %I:%M %p",
        ],
        &[
            "%m/%d/%y, %I:%M:%S %p",
            "%m/%d/%y, %I:%M %p",
            "%m/%d/%Y, %I:%M:%S %p",
            "%m/%d/%Y, %I:%M %p",
        ],
    ),
    FormatDescriptor::new(
        "dashed_dotted",
        ExportFamily::Dashed,
        boundary!(r"\d{1,2}\.\d{1,2}\.\d{2,4},\s\d{1,2}:\d{2}(?::\d{2})?\s-\s"),
        "26.10.2025, 20:40 - ",
        &[
            "%d.%m.%y, %H:%M:%S",
            "%d.%m.%y, %H:%M",
            "%d.%m.%Y, %H:%M:%S",
            "%d.%m.%Y, %H:%M",
        ],
        &[
            "%m.%d.%y, %H:%M:%S",
            "%m.%d.%y, %H:%M",
            "%m.%d.%Y, %H:%M:%S",
            "%m.%d.%Y, %H:%M",
        ],
    ),
];

/// Returns every built-in descriptor in detection priority order.
pub fn descriptors() -> &'static [FormatDescriptor] {
    &DESCRIPTORS
}

/// Looks up a built-in descriptor by name.
pub fn descriptor_by_name(name: &str) -> Option<&'static FormatDescriptor> {
    DESCRIPTORS.iter().find(|d| d.name == name)
}

/// Names of all built-in descriptors, in priority order.
pub fn supported_format_names() -> Vec<&'static str> {
    DESCRIPTORS.iter().map(|d| d.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for descriptor in descriptors() {
            assert!(descriptor.boundary().is_ok(), "{}", descriptor.name);
        }
    }

    #[test]
    fn test_each_descriptor_matches_its_example() {
        for descriptor in descriptors() {
            let regex = descriptor.boundary().unwrap();
            let line = format!("{}Alice: hi", descriptor.example);
            assert!(regex.is_match(&line), "{} vs {}", descriptor.name, line);
        }
    }

    #[test]
    fn test_bracketed_before_dashed() {
        let families: Vec<ExportFamily> = descriptors().iter().map(|d| d.family).collect();
        let first_dashed = families
            .iter()
            .position(|f| *f == ExportFamily::Dashed)
            .unwrap();
        assert!(
            families[first_dashed..]
                .iter()
                .all(|f| *f == ExportFamily::Dashed)
        );
    }

    #[test]
    fn test_boundary_is_line_anchored() {
        let regex = descriptor_by_name("dashed_24h").unwrap().boundary().unwrap();
        assert!(regex.is_match("13/01/24, 12:01 - Bob: hi"));
        assert!(!regex.is_match("Bob said 13/01/24, 12:01 - then left"));
    }

    #[test]
    fn test_boundary_allows_bidi_mark() {
        let regex = descriptor_by_name("bracketed_12h_seconds")
            .unwrap()
            .boundary()
            .unwrap();
        assert!(regex.is_match("\u{200E}[08/07/24, 11:44:33 AM] Alice: image omitted"));
    }

    #[test]
    fn test_boundary_allows_narrow_nbsp() {
        let regex = descriptor_by_name("bracketed_12h_seconds")
            .unwrap()
            .boundary()
            .unwrap();
        assert!(regex.is_match("[08/07/24, 11:44:33\u{202F}AM] Alice: hi"));
    }

    #[test]
    fn test_candidate_order_follows_hint() {
        let descriptor = descriptor_by_name("dashed_24h").unwrap();
        let day_first = descriptor.candidate_date_formats(DateOrder::DayFirst);
        assert_eq!(day_first[0], "%d/%m/%y, %H:%M");
        assert_eq!(day_first.len(), 4);

        let month_first = descriptor.candidate_date_formats(DateOrder::MonthFirst);
        assert_eq!(month_first[0], "%m/%d/%y, %H:%M");
        assert_eq!(month_first[2], "%d/%m/%y, %H:%M");
    }

    #[test]
    fn test_supported_names_unique() {
        let mut names = supported_format_names();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(descriptor_by_name("whatsapp_web").is_none());
    }
}
