//! JSON Lines (JSONL) output writer.
//!
//! One compact JSON object per row, newline terminated. Convenient for
//! loading into dataframe libraries and line-oriented tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Message;
use crate::error::Result;

/// Writes the message table to JSONL (JSON Lines) format.
///
/// # Format
/// ```text
/// {"timestamp":"2024-01-13T12:00:00","sender":"Alice","body":"Hi",...}
/// {"timestamp":"2024-01-13T12:01:00","sender":"Bob","body":"Hello",...}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts the message table to a JSONL string.
///
/// Same format as [`write_jsonl`].
pub fn to_jsonl(messages: &[Message]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[Message], writer: &mut W) -> Result<()> {
    for msg in messages {
        serde_json::to_writer(&mut *writer, msg)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
