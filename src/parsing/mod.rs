//! Transcript parsing stages.
//!
//! The stages run in a fixed order over one in-memory transcript:
//!
//! 1. [`detect`] picks a [`descriptor::FormatDescriptor`] by counting boundary
//!    matches.
//! 2. [`split`] cuts the transcript at every boundary into [`split::RawSegment`]s.
//! 3. [`timestamp`] reads each segment's marker.
//! 4. [`classify`] attributes each body to a sender or to the notification
//!    sentinel.
//!
//! [`crate::parser::TranscriptParser`] wires them together.

pub mod classify;
pub mod descriptor;
pub mod detect;
pub mod split;
pub mod timestamp;

// Re-export commonly used items
pub use classify::{EMPTY_MESSAGE, NOTIFICATION_SENDER, Sender, classify};
pub use descriptor::{ExportFamily, FormatDescriptor, descriptors, supported_format_names};
pub use detect::{Detection, detect_format};
pub use split::{RawSegment, split_segments};
pub use timestamp::{DateParseFailure, parse_flexible, parse_timestamp};
