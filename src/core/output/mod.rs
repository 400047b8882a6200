//! Output format writers for the message table.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter and a header row - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! Every writer emits the full column set of
//! [`COLUMNS`](crate::message::COLUMNS), in order.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatframe::Result<()> {
//! use chatframe::core::output::{to_csv, write_json, write_jsonl};
//! use chatframe::parser::TranscriptParser;
//!
//! let table = TranscriptParser::new().parse("chat.txt")?;
//!
//! write_json(table.messages(), "chat.json")?;
//! write_jsonl(table.messages(), "chat.jsonl")?;
//! let csv_string = to_csv(table.messages())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
