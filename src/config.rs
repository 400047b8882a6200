//! Parser configuration.
//!
//! [`ParseConfig`] collects the few knobs the parsing pipeline exposes. The
//! most important one is [`DateOrder`]: WhatsApp exports never say whether
//! `03/04/24` means the 3rd of April or the 4th of March, so the caller
//! decides (or asks the parser to infer it from the transcript).
//!
//! # Example
//!
//! ```rust
//! use chatframe::config::{DateOrder, ParseConfig};
//! use chatframe::parser::TranscriptParser;
//!
//! let config = ParseConfig::new()
//!     .with_date_order(DateOrder::MonthFirst)
//!     .with_min_boundary_matches(5);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How to read the first two numeric fields of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `D/M/Y`, the convention of most non-US exports.
    #[default]
    DayFirst,
    /// `M/D/Y`, US-locale exports.
    MonthFirst,
    /// Infer from the transcript: any field above 12 settles which one is
    /// the day. Falls back to day-first when nothing is conclusive.
    Auto,
}

impl DateOrder {
    /// Returns all supported names.
    pub fn all_names() -> &'static [&'static str] {
        &["day-first", "month-first", "auto"]
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
            DateOrder::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first" | "dayfirst" | "dmy" => Ok(DateOrder::DayFirst),
            "month-first" | "monthfirst" | "mdy" => Ok(DateOrder::MonthFirst),
            "auto" => Ok(DateOrder::Auto),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: {}",
                s,
                DateOrder::all_names().join(", ")
            )),
        }
    }
}

/// Configuration for transcript parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Day/month ordering used for candidate formats and the fallback parser
    /// (default: day-first)
    pub date_order: DateOrder,

    /// A format is selected only when its boundary pattern matches strictly
    /// more often than this (default: 3)
    pub min_boundary_matches: usize,

    /// Longest accepted sender name, in characters (default: 50)
    pub max_sender_len: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::DayFirst,
            min_boundary_matches: 3,
            max_sender_len: 50,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day/month ordering.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets the detection threshold.
    #[must_use]
    pub fn with_min_boundary_matches(mut self, threshold: usize) -> Self {
        self.min_boundary_matches = threshold;
        self
    }

    /// Sets the longest accepted sender name.
    #[must_use]
    pub fn with_max_sender_len(mut self, len: usize) -> Self {
        self.max_sender_len = len;
        self
    }
}
