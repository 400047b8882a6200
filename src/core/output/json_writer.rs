//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::error::Result;

/// Writes the message table to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {
///     "timestamp": "2024-01-13T12:01:00",
///     "sender": "Bob",
///     "body": "<Empty message>",
///     "date": "2024-01-13",
///     ...
///   }
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the message table to a pretty-printed JSON array.
///
/// Same format as [`write_json`].
pub fn to_json(messages: &[Message]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}
