//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::error::{ChatframeError, Result};
use crate::message::COLUMNS;

/// Writes the message table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header: the [`COLUMNS`] names
/// - Timestamps as `YYYY-MM-DD HH:MM:SS`, dates as `YYYY-MM-DD`
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts the message table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[Message]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(COLUMNS)?;
    for msg in messages {
        writer.write_record(build_record(msg))?;
    }

    writer.flush().map_err(ChatframeError::from)
}

/// Build CSV record for a single message.
fn build_record(msg: &Message) -> [String; 12] {
    let f = msg.features();
    [
        msg.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
        msg.sender().to_string(),
        msg.body().to_string(),
        f.date.format("%Y-%m-%d").to_string(),
        f.year.to_string(),
        f.month_num.to_string(),
        f.month_name.clone(),
        f.day.to_string(),
        f.weekday_name.clone(),
        f.hour.to_string(),
        f.minute.to_string(),
        f.period_label.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify::Sender;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn msg(sender: Sender, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_header_and_row() {
        let messages = vec![msg(Sender::Participant("Alice".into()), "Hello")];
        let csv = to_csv(&messages).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "timestamp;sender;body;date;year;month_num;month_name;day;weekday_name;hour;minute;period_label"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-06-15 12:30:00;Alice;Hello;2024-06-15;2024;6;June;15;Saturday;12;30;12-13"
        );
    }

    #[test]
    fn test_quotes_delimiter_and_newlines() {
        let messages = vec![msg(Sender::Notification, "a;b\nc")];
        let csv = to_csv(&messages).unwrap();
        assert!(csv.contains("group_notification;\"a;b\nc\""));
    }

    #[test]
    fn test_write_csv_file() {
        let messages = vec![
            msg(Sender::Participant("Alice".into()), "Hello"),
            msg(Sender::Participant("Bob".into()), "Hi there"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&messages, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains(";Bob;Hi there;"));
    }
}
