//! Timeline filtering.
//!
//! # Invariants
//! - Filtering keeps fixture order.
//! - `All` returns every event.

use crate::model::timeline::{EventKind, TimelineEvent};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    UnknownFilter(String),
}

impl Display for TimelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFilter(value) => write!(
                f,
                "unknown timeline filter `{value}`; expected all|chat|call|media"
            ),
        }
    }
}

impl Error for TimelineError {}

/// Event-kind filter selected in the timeline view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineFilter {
    #[default]
    All,
    Only(EventKind),
}

impl TimelineFilter {
    pub fn accepts(self, event: &TimelineEvent) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => event.kind == kind,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.as_str(),
        }
    }
}

impl FromStr for TimelineFilter {
    type Err = TimelineError;

    fn from_str(value: &str) -> TimelineResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "chat" => Ok(Self::Only(EventKind::Chat)),
            "call" => Ok(Self::Only(EventKind::Call)),
            "media" => Ok(Self::Only(EventKind::Media)),
            other => Err(TimelineError::UnknownFilter(other.to_string())),
        }
    }
}

/// Per-filter event counts shown on the filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimelineCounts {
    pub all: usize,
    pub chat: usize,
    pub call: usize,
    pub media: usize,
}

impl TimelineCounts {
    pub fn from_events(events: &[TimelineEvent]) -> Self {
        let mut counts = Self {
            all: events.len(),
            ..Self::default()
        };
        for event in events {
            match event.kind {
                EventKind::Chat => counts.chat += 1,
                EventKind::Call => counts.call += 1,
                EventKind::Media => counts.media += 1,
            }
        }
        counts
    }
}

/// Returns events accepted by `filter`, in order.
pub fn filter_events(events: &[TimelineEvent], filter: TimelineFilter) -> Vec<&TimelineEvent> {
    events.iter().filter(|event| filter.accepts(event)).collect()
}
