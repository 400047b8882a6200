//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`DateOrderArg`] - Day/month ordering options

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DateOrder;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_table.csv";

/// Parse a WhatsApp chat export into a per-message table
/// with sender, timestamp and time features.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatframe")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatframe chat.txt
    chatframe chat.txt -o messages.json -f json
    chatframe chat.txt --date-order month-first --after 2024-01-01
    chatframe chat.txt --from Alice --no-notifications -f jsonl")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// How to read ambiguous dates such as 03/04/24
    #[arg(long, value_enum, default_value = "day-first")]
    pub date_order: DateOrderArg,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this participant only
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Drop system notification rows
    #[arg(long)]
    pub no_notifications: bool,

    /// Log parse diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines, one row per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Day/month ordering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateOrderArg {
    /// D/M/Y
    #[default]
    #[value(alias = "dmy")]
    DayFirst,

    /// M/D/Y
    #[value(alias = "mdy")]
    MonthFirst,

    /// Infer from the transcript
    Auto,
}

impl From<DateOrderArg> for DateOrder {
    fn from(order: DateOrderArg) -> DateOrder {
        match order {
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
            DateOrderArg::Auto => DateOrder::Auto,
        }
    }
}
