//! Timestamp parsing for boundary markers.
//!
//! A marker is first cleaned (brackets, the trailing ` - `, and the odd
//! Unicode spacing iOS uses are stripped), then tried against the
//! descriptor's chrono formats in order. If none fits, a permissive parser
//! reads any `D/M/Y, H:MM[:SS] [AM|PM]` shape, resolving day/month ambiguity
//! with the configured [`DateOrder`].
//!
//! Two-digit years use chrono's pivot: `00..=69` is 2000-2069, `70..=99` is
//! 1970-1999. The fallback parser applies the same rule.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

use crate::config::DateOrder;

static FLEXIBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,4})[./-](\d{1,2})[./-](\d{1,4}),?\s*(\d{1,2})[:.](\d{2})(?:[:.](\d{2}))?(?:\s*([AaPp])\.?[Mm]\.?)?$",
    )
    .unwrap()
});

static LEADING_FIELDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,4})[./-](\d{1,2})[./-]").unwrap());

/// A timestamp that no candidate format and no fallback could read.
///
/// Local to one segment: the segment is dropped, the parse continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparsable timestamp '{text}'")]
pub struct DateParseFailure {
    /// The cleaned timestamp text.
    pub text: String,
}

/// Strips delimiters and normalizes spacing in a boundary marker.
///
/// `"[08/07/24, 11:44:33\u{202F}AM]"` becomes `"08/07/24, 11:44:33 AM"` and
/// `"13/01/24, 12:01 - "` becomes `"13/01/24, 12:01"`.
pub fn clean_timestamp(raw: &str) -> String {
    let normalized: String = raw
        .chars()
        .filter(|c| !matches!(c, '\u{200E}' | '\u{200F}' | '\u{FEFF}'))
        .map(|c| match c {
            '\u{202F}' | '\u{00A0}' => ' ',
            other => other,
        })
        .collect();

    normalized
        .trim_matches(|c: char| c == '[' || c == ']' || c == '-' || c.is_whitespace())
        .to_string()
}

/// Parses a boundary marker into a naive date-time.
///
/// `formats` are tried in order; the first success wins. `order` is only
/// consulted by the fallback parser.
pub fn parse_timestamp(
    raw: &str,
    formats: &[&str],
    order: DateOrder,
) -> Result<NaiveDateTime, DateParseFailure> {
    let cleaned = clean_timestamp(raw);

    for format in formats {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&cleaned, format) {
            return Ok(parsed);
        }
    }

    parse_flexible(&cleaned, order).ok_or(DateParseFailure { text: cleaned })
}

/// Permissive date-time parser used when no candidate format matches.
///
/// Accepts `.`, `/` or `-` as date separators, optional seconds, optional
/// AM/PM marker, and ISO-style `YYYY-MM-DD` ordering. When both leading fields
/// could be a month, `order` decides; when only one can, that one is the
/// month regardless of `order`.
pub fn parse_flexible(text: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let caps = FLEXIBLE.captures(text.trim())?;
    let field = |i: usize| caps.get(i).map(|m| m.as_str());

    let first = field(1)?;
    let second: u32 = field(2)?.parse().ok()?;
    let third = field(3)?;

    let (year, month, day) = if first.len() == 4 {
        (first.parse().ok()?, second, third.parse().ok()?)
    } else {
        let first: u32 = first.parse().ok()?;
        let (mut day, mut month) = match order {
            DateOrder::MonthFirst => (second, first),
            DateOrder::DayFirst | DateOrder::Auto => (first, second),
        };
        if month > 12 && day <= 12 {
            std::mem::swap(&mut day, &mut month);
        }
        (expand_year(third)?, month, day)
    };

    let mut hour: u32 = field(4)?.parse().ok()?;
    let minute: u32 = field(5)?.parse().ok()?;
    let second_of_minute: u32 = field(6).map_or(Some(0), |s| s.parse().ok())?;

    if let Some(meridiem) = field(7) {
        if !(1..=12).contains(&hour) {
            return None;
        }
        hour %= 12;
        if meridiem.eq_ignore_ascii_case("p") {
            hour += 12;
        }
    }

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second_of_minute)
}

fn expand_year(text: &str) -> Option<i32> {
    let year: i32 = text.parse().ok()?;
    match text.len() {
        1 | 2 if year < 70 => Some(2000 + year),
        1 | 2 => Some(1900 + year),
        4 => Some(year),
        _ => None,
    }
}

/// Returns the first two numeric date fields of a marker, unless the date is
/// written year-first.
fn leading_fields(raw: &str) -> Option<(u32, u32)> {
    let cleaned = clean_timestamp(raw);
    let caps = LEADING_FIELDS.captures(&cleaned)?;
    let first = caps.get(1)?.as_str();
    if first.len() == 4 {
        return None;
    }
    Some((first.parse().ok()?, caps.get(2)?.as_str().parse().ok()?))
}

/// Returns `true` if the marker's day and month could be read either way.
pub fn is_ambiguous(raw: &str) -> bool {
    leading_fields(raw).is_some_and(|(a, b)| a != b && a <= 12 && b <= 12)
}

/// Infers the day/month order from a set of markers.
///
/// A leading field above 12 is evidence for day-first, a second field above
/// 12 for month-first. The majority wins; a tie or no evidence yields
/// day-first.
pub fn infer_date_order<'a>(markers: impl IntoIterator<Item = &'a str>) -> DateOrder {
    let (mut day_first, mut month_first) = (0usize, 0usize);

    for (a, b) in markers.into_iter().filter_map(leading_fields) {
        if a > 12 && b <= 12 {
            day_first += 1;
        } else if b > 12 && a <= 12 {
            month_first += 1;
        }
    }

    if month_first > day_first {
        DateOrder::MonthFirst
    } else {
        DateOrder::DayFirst
    }
}
