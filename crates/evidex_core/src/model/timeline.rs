//! Timeline events reconstructed from an extraction.

use crate::model::record::App;
use serde::{Deserialize, Serialize};

/// Event category shown by the timeline view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Chat,
    Call,
    Media,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Call => "call",
            Self::Media => "media",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    /// Source artifact id; messages share ids with `Record::message_id`.
    pub message_id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: String,
    pub app: App,
    pub description: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_ref: Option<String>,
}
