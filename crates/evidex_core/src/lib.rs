//! Core domain logic for Evidex.
//! This crate is the single source of truth for case data rules.

pub mod fixture;
pub mod logging;
pub mod model;
pub mod report;
pub mod search;
pub mod service;
pub mod store;
pub mod task;

pub use fixture::{FixtureError, FixtureResult, FixtureSet};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::advisor::{AdvisorReport, Anomaly, MissingArtifact, Severity};
pub use model::entity::{Entity, Graph, GraphEdge, GraphNode};
pub use model::record::{App, Record, RecordId};
pub use model::selection::{SelectionError, SelectionResult, SelectionSet};
pub use model::timeline::{EventKind, TimelineEvent};
pub use report::render::{
    export_placeholder, render_report_text, ExportFormat, ExportNotice, DEFAULT_REPORT_TITLE,
};
pub use report::summary::{ranked_persons, LabelCount, ReportSummary};
pub use search::engine::{search, search_with, SearchError, SearchQuery, SearchResult};
pub use search::summary::{summarize_hits, SearchSummary};
pub use service::case_session::{CaseSession, SessionId};
pub use service::ingest_service::{CompletenessOutcome, IngestError, IngestSession};
pub use service::network_service::{
    high_risk_persons, node_details, NodeDetails, RiskBand, HIGH_RISK_THRESHOLD,
};
pub use service::timeline_service::{
    filter_events, TimelineCounts, TimelineError, TimelineFilter,
};
pub use store::EvidenceStore;
pub use task::{spawn_task, TaskError, TaskHandle};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
