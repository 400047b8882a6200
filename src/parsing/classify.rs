//! Sender attribution and system-notification detection.
//!
//! Once the timestamp marker is removed, a segment body looks like
//! `Sender: text` for a participant message and like free text for group
//! events (`Alice added Bob`, `Messages and calls are end-to-end encrypted`).
//! Bodies are split on the first colon only, and the left-hand side is
//! accepted as a sender name only if it plausibly is one. Anything else
//! becomes a notification row carrying the whole text, so nothing is lost.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reserved sender value for system and administrative notifications.
pub const NOTIFICATION_SENDER: &str = "group_notification";

/// Body used when a participant sent nothing after the colon.
pub const EMPTY_MESSAGE: &str = "<Empty message>";

/// Case-insensitive substrings that mark a body as a system notification.
pub const SYSTEM_KEYWORDS: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "added you",
    "left",
    "joined using",
    "changed the group",
    "security code changed",
    "deleted this message",
    "message was deleted",
    "media omitted",
    "sticker omitted",
    "image omitted",
    "video omitted",
    "audio omitted",
    "document omitted",
    "gif omitted",
];

/// Left-hand sides that mark the colon as part of a link.
const URL_SCHEMES: &[&str] = &["ftp", "mailto", "tel", "www"];

static DATE_LIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+/\d+/\d+").unwrap());

/// Who a message is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A system or administrative notification, not a human message.
    Notification,
    /// A named participant.
    Participant(String),
}

impl Sender {
    /// Returns the sender as it appears in the output table.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::Notification => NOTIFICATION_SENDER,
            Sender::Participant(name) => name,
        }
    }

    /// Returns `true` for the notification sentinel.
    pub fn is_notification(&self) -> bool {
        matches!(self, Sender::Notification)
    }

    /// Returns the participant name, if any.
    pub fn participant(&self) -> Option<&str> {
        match self {
            Sender::Notification => None,
            Sender::Participant(name) => Some(name),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Sender {
    fn from(value: &str) -> Self {
        if value == NOTIFICATION_SENDER {
            Sender::Notification
        } else {
            Sender::Participant(value.to_string())
        }
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Sender::from(value.as_str()))
    }
}

/// A classified segment body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Attributed sender, or the notification sentinel.
    pub sender: Sender,
    /// Message text with the sender prefix removed, or the full notification.
    pub body: String,
}

impl Classified {
    fn notification(text: &str) -> Self {
        Self {
            sender: Sender::Notification,
            body: text.to_string(),
        }
    }
}

/// Returns `true` if `text` contains any [`SYSTEM_KEYWORDS`] entry.
pub fn is_system_notification(text: &str) -> bool {
    let lower = text.to_lowercase();
    SYSTEM_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Classifies one segment body. Never fails.
///
/// The body is trimmed first; the trimmed text is what notification rows
/// carry.
pub fn classify(body: &str, max_sender_len: usize) -> Classified {
    let text = body.trim();

    if is_system_notification(text) {
        return Classified::notification(text);
    }

    let Some((left, right)) = text.split_once(':') else {
        return Classified::notification(text);
    };

    let candidate = left.trim_matches(|c: char| c == '-' || c.is_whitespace());
    if !is_plausible_sender(candidate, right, max_sender_len) {
        return Classified::notification(text);
    }

    let message = right.trim();
    Classified {
        sender: Sender::Participant(candidate.to_string()),
        body: if message.is_empty() {
            EMPTY_MESSAGE.to_string()
        } else {
            message.to_string()
        },
    }
}

/// Rejects left-hand sides that show the colon belonged to the content.
fn is_plausible_sender(candidate: &str, rest: &str, max_len: usize) -> bool {
    if candidate.is_empty() || candidate.chars().count() > max_len {
        return false;
    }

    // `https://...` splits into `https` and `//...`
    let lower = candidate.to_lowercase();
    let is_link = lower.starts_with("http")
        || URL_SCHEMES.contains(&lower.as_str())
        || rest.starts_with("//");
    if is_link {
        return false;
    }

    if candidate.chars().all(char::is_numeric) {
        return false;
    }

    !DATE_LIKE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str) -> Sender {
        Sender::Participant(name.to_string())
    }

    #[test]
    fn test_basic_message() {
        let c = classify(" Alice: Hello everyone!\n", 50);
        assert_eq!(c.sender, participant("Alice"));
        assert_eq!(c.body, "Hello everyone!");
    }

    #[test]
    fn test_first_colon_only() {
        let c = classify(" Alice: 10:30 is when we meet", 50);
        assert_eq!(c.sender, participant("Alice"));
        assert_eq!(c.body, "10:30 is when we meet");
    }

    #[test]
    fn test_empty_message_sentinel() {
        let c = classify("Bob:", 50);
        assert_eq!(c.sender, participant("Bob"));
        assert_eq!(c.body, EMPTY_MESSAGE);

        let c = classify("Bob:   \n", 50);
        assert_eq!(c.body, EMPTY_MESSAGE);
    }

    #[test]
    fn test_keyword_notification_any_case() {
        let c = classify("IMAGE Omitted", 50);
        assert_eq!(c.sender, Sender::Notification);
        assert_eq!(c.body, "IMAGE Omitted");
    }

    #[test]
    fn test_keyword_wins_over_sender() {
        let c = classify("Alice: <Media omitted>", 50);
        assert!(c.sender.is_notification());
        assert_eq!(c.body, "Alice: <Media omitted>");
    }

    #[test]
    fn test_encryption_notice() {
        let text = "Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.";
        let c = classify(text, 50);
        assert!(c.sender.is_notification());
        assert_eq!(c.body, text);
    }

    #[test]
    fn test_no_colon_is_notification() {
        let c = classify("Alice changed this group's icon", 50);
        assert!(c.sender.is_notification());
        assert_eq!(c.body, "Alice changed this group's icon");
    }

    #[test]
    fn test_url_is_not_sender() {
        let c = classify("https://example.com/path", 50);
        assert!(c.sender.is_notification());
        assert_eq!(c.body, "https://example.com/path");

        let c = classify("see ftp://files.example.com", 50);
        assert!(c.sender.is_notification());
    }

    #[test]
    fn test_numeric_candidate_rejected() {
        let c = classify("12345: not a name", 50);
        assert!(c.sender.is_notification());
        assert_eq!(c.body, "12345: not a name");
    }

    #[test]
    fn test_non_ascii_numeric_candidate_rejected() {
        let c = classify("١٢٣: hi", 50);
        assert!(c.sender.is_notification());
        assert_eq!(c.body, "١٢٣: hi");

        let c = classify("१२३४: नमस्ते", 50);
        assert!(c.sender.is_notification());
    }

    #[test]
    fn test_link_schemes_are_not_senders() {
        for text in [
            "mailto:bob@example.com",
            "tel:+15550100",
            "ftp:files",
            "WWW: example",
        ] {
            let c = classify(text, 50);
            assert!(c.sender.is_notification(), "{text}");
            assert_eq!(c.body, text);
        }
    }

    #[test]
    fn test_phone_number_sender_accepted() {
        let c = classify("+1 555 0100: hello", 50);
        assert_eq!(c.sender, participant("+1 555 0100"));
    }

    #[test]
    fn test_date_like_candidate_rejected() {
        let c = classify("12/01/2024 meeting notes: bring snacks", 50);
        assert!(c.sender.is_notification());
    }

    #[test]
    fn test_long_candidate_rejected() {
        let long = "a".repeat(51);
        let c = classify(&format!("{long}: text"), 50);
        assert!(c.sender.is_notification());

        let exact = "b".repeat(50);
        let c = classify(&format!("{exact}: text"), 50);
        assert_eq!(c.sender, participant(&exact));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let name = "Иван".repeat(12); // 48 chars, 96 bytes
        let c = classify(&format!("{name}: привет"), 50);
        assert_eq!(c.sender, participant(&name));
    }

    #[test]
    fn test_dash_residue_trimmed() {
        let c = classify("- Bob - : hi", 50);
        assert_eq!(c.sender, participant("Bob"));
    }

    #[test]
    fn test_empty_candidate_rejected() {
        let c = classify(": orphan text", 50);
        assert!(c.sender.is_notification());
        assert_eq!(c.body, ": orphan text");
    }

    #[test]
    fn test_sender_display_and_from() {
        assert_eq!(Sender::Notification.to_string(), NOTIFICATION_SENDER);
        assert_eq!(Sender::from("group_notification"), Sender::Notification);
        assert_eq!(Sender::from("Alice"), participant("Alice"));
        assert_eq!(participant("Alice").participant(), Some("Alice"));
        assert_eq!(Sender::Notification.participant(), None);
    }
}
