//! # Chatframe
//!
//! A Rust library for turning exported WhatsApp chat transcripts into a typed,
//! analysis-ready message table.
//!
//! ## Overview
//!
//! A WhatsApp export is one text blob in one of several locale-dependent
//! styles. Chatframe:
//! - detects which style a transcript uses (bracketed iOS or dashed Android,
//!   12h or 24h, with or without seconds, slash or dot dates)
//! - splits it into one segment per message, keeping multiline messages whole
//! - reads each timestamp, honoring a configurable [`DateOrder`](config::DateOrder)
//! - tells participant messages apart from system notifications
//! - derives calendar and time-of-day features for every row
//!
//! The result is a [`ChatTable`](core::ChatTable): rows in transcript order
//! plus a [`ParseReport`](core::ParseReport) listing anything that was dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatframe::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! [08/07/24, 11:44:33 AM] Alice: Hello
//! [08/07/24, 11:45:02 AM] Bob: Hi! Meet at 10:30?
//! [08/07/24, 11:45:40 AM] Alice: image omitted
//! [08/07/24, 11:46:10 AM] Alice: Sure
//! ";
//!
//!     let table = TranscriptParser::new().parse_str(text)?;
//!     assert_eq!(table.len(), 4);
//!     assert_eq!(table.messages()[1].body(), "Hi! Meet at 10:30?");
//!     assert!(table.messages()[2].is_notification());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the entry point
//! - [`parsing`] - pipeline stages: descriptors, detection, splitting,
//!   timestamps, classification
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`DateOrder`](config::DateOrder)
//! - [`core`] - table, features, filtering and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - [`ChatframeError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatframeError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatframe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::error::{ChatframeError, Result};

    pub use crate::config::{DateOrder, ParseConfig};
    pub use crate::parser::{TranscriptParser, parse_transcript};
    pub use crate::parsing::classify::Sender;

    pub use crate::core::{ChatTable, FilterConfig, ParseReport, TimeFeatures, apply_filters};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
