//! Splits a transcript into per-message segments.
//!
//! Every boundary match starts a new segment; the text up to the next
//! boundary (or the end of the transcript) is that segment's body. Multiline
//! messages therefore stay in one piece without any line-by-line state.

use std::borrow::Cow;

use tracing::warn;

use crate::error::Result;
use crate::parsing::descriptor::FormatDescriptor;

/// One message's raw text, borrowed from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// Position of the segment in the transcript (0-based).
    pub index: usize,
    /// The exact text matched by the boundary pattern.
    pub timestamp_text: &'a str,
    /// Everything between this boundary and the next one.
    pub body_text: &'a str,
}

/// Rewrites `\r\n` and lone `\r` line endings as `\n`.
///
/// Boundary patterns anchor on `\n`, so classic Mac exports must be
/// normalized before detection. Text without `\r` is borrowed unchanged.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Splits `text` at every boundary of `descriptor`.
///
/// Text before the first boundary is discarded. `expected` is the count
/// observed during detection; if the split pass disagrees, the result is
/// truncated to the shorter of the two so timestamps and bodies stay paired.
pub fn split_segments<'a>(
    text: &'a str,
    descriptor: &FormatDescriptor,
    expected: usize,
) -> Result<Vec<RawSegment<'a>>> {
    let boundaries: Vec<_> = descriptor.boundary()?.find_iter(text).collect();

    if boundaries.len() != expected {
        warn!(
            format = descriptor.name,
            detected = expected,
            split = boundaries.len(),
            "boundary count changed between detection and split"
        );
    }

    let paired = boundaries.len().min(expected);
    let segments = boundaries
        .iter()
        .enumerate()
        .take(paired)
        .map(|(index, boundary)| {
            let body_end = boundaries
                .get(index + 1)
                .map_or(text.len(), |next| next.start());
            RawSegment {
                index,
                timestamp_text: boundary.as_str(),
                body_text: &text[boundary.end()..body_end],
            }
        })
        .collect();

    Ok(segments)
}
