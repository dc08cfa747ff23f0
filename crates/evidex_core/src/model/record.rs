//! Extracted message record.
//!
//! # Responsibility
//! - Define the canonical evidence record shared by search, reports and
//!   selection.
//! - Map originating application names onto a typed `App`.
//!
//! # Invariants
//! - `message_id` is unique within the loaded corpus.
//! - `confidence` is an opaque extraction value, never derived from a query.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of one extracted message (for example `W1234`).
pub type RecordId = String;

/// Originating messaging application.
///
/// Unknown names are kept verbatim in `Other` so fixtures from new
/// extractors still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum App {
    WhatsApp,
    Telegram,
    Signal,
    Other(String),
}

impl App {
    /// Parses an application name, case-insensitively for known apps.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "whatsapp" => Self::WhatsApp,
            "telegram" => Self::Telegram,
            "signal" => Self::Signal,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Display name matching extractor output.
    pub fn as_str(&self) -> &str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Signal => "Signal",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for App {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<App> for String {
    fn from(value: App) -> Self {
        value.as_str().to_string()
    }
}

impl Display for App {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One message recovered from a seized device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub message_id: RecordId,
    /// Message body as extracted, code-switched text included.
    pub text: String,
    /// ISO-8601 timestamp string as reported by the extractor.
    pub timestamp: String,
    pub app: App,
    pub sender: String,
    /// Conversation members in extractor order, sender included.
    pub participants: Vec<String>,
    /// Set when the message was recovered from deleted storage.
    pub deleted: bool,
    pub tags: Vec<String>,
    pub device: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Record {
    /// Participants other than the sender, in original order.
    pub fn recipients(&self) -> impl Iterator<Item = &str> {
        self.participants
            .iter()
            .map(String::as_str)
            .filter(move |name| *name != self.sender)
    }

    /// Returns whether the record carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }
}
