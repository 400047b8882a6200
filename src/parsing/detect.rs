//! Export format auto-detection.
//!
//! Detection walks the descriptor registry in priority order and picks the
//! first style whose boundary pattern matches more than a threshold number of
//! times. Requiring several matches keeps a single timestamp-looking line in
//! an otherwise unrelated document from being mistaken for a chat export.

use tracing::debug;

use crate::error::{ChatframeError, Result};
use crate::parsing::descriptor::{FormatDescriptor, descriptors};

/// Outcome of format detection.
#[derive(Debug, Clone, Copy)]
pub struct Detection {
    /// The selected descriptor.
    pub descriptor: &'static FormatDescriptor,
    /// Number of boundary matches counted for it.
    pub boundary_count: usize,
}

/// Counts non-overlapping boundary matches of `descriptor` in `text`.
pub fn count_boundaries(descriptor: &FormatDescriptor, text: &str) -> Result<usize> {
    Ok(descriptor.boundary()?.find_iter(text).count())
}

/// Detects the export format of a transcript.
///
/// Returns the first descriptor (in priority order) whose boundary count is
/// strictly greater than `threshold`.
///
/// # Errors
///
/// Returns [`ChatframeError::UnrecognizedFormat`] if the text is empty,
/// whitespace only, or no descriptor clears the threshold.
pub fn detect_format(text: &str, threshold: usize) -> Result<Detection> {
    if text.trim().is_empty() {
        return Err(ChatframeError::unrecognized_format());
    }

    for descriptor in descriptors() {
        let count = count_boundaries(descriptor, text)?;
        debug!(format = descriptor.name, matches = count, "tried format");

        if count > threshold {
            return Ok(Detection {
                descriptor,
                boundary_count: count,
            });
        }
    }

    Err(ChatframeError::unrecognized_format())
}
