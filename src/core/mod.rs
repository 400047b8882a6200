//! Message table, derived features, filtering and output.
//!
//! - [`features`] - calendar and time-of-day features of a timestamp
//! - [`table`] - the parsed table and its [`ParseReport`]
//! - [`filter`] - row filtering by date, sender and kind
//! - [`output`] - format writers (CSV, JSON, JSONL)

pub mod features;
pub mod filter;
pub mod output;
pub mod table;

pub use features::{TimeFeatures, period_label};
pub use filter::{FilterConfig, apply_filters};
pub use table::{ChatTable, DroppedSegment, ParseReport, SegmentOutcome};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
