//! Per-investigator case session state.
//!
//! # Responsibility
//! - Hold the transient state one investigator builds while working a case:
//!   last search, report selection, upload, timeline filter.
//! - Route every state change through one explicit value instead of
//!   process-global state.
//!
//! # Invariants
//! - Session state is never persisted; `discard` ends it.
//! - The store is borrowed read-only for the whole session.

use crate::model::record::Record;
use crate::model::selection::{SelectionError, SelectionResult, SelectionSet};
use crate::model::timeline::TimelineEvent;
use crate::report::render::{export_placeholder, render_report_text, ExportFormat, ExportNotice};
use crate::report::summary::ReportSummary;
use crate::search::engine::{search_with, SearchQuery, SearchResult};
use crate::service::ingest_service::{CompletenessOutcome, IngestResult, IngestSession};
use crate::service::timeline_service::{filter_events, TimelineFilter};
use crate::store::EvidenceStore;
use log::{info, warn};
use uuid::Uuid;

/// Stable id of one case session, used only for log correlation.
pub type SessionId = Uuid;

/// Explicit session state over a read-only evidence store.
pub struct CaseSession<'a, S: EvidenceStore> {
    id: SessionId,
    store: &'a S,
    last_query: Option<String>,
    last_results: Vec<&'a Record>,
    selection: SelectionSet<'a>,
    ingest: IngestSession,
    timeline_filter: TimelineFilter,
}

impl<'a, S: EvidenceStore> CaseSession<'a, S> {
    /// Starts an empty session.
    pub fn new(store: &'a S) -> Self {
        let id = Uuid::new_v4();
        info!("event=session_start module=session status=ok session={id}");
        Self {
            id,
            store,
            last_query: None,
            last_results: Vec::new(),
            selection: SelectionSet::new(),
            ingest: IngestSession::new(),
            timeline_filter: TimelineFilter::All,
        }
    }

    /// Starts a session whose report already holds the first `count` records.
    pub fn with_seeded_report(store: &'a S, count: usize) -> Self {
        let mut session = Self::new(store);
        session.selection = SelectionSet::seeded(store.records(), count);
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Runs a search and remembers query and hits.
    ///
    /// A rejected query leaves the previous search state untouched.
    pub fn run_search(&mut self, query: &SearchQuery) -> SearchResult<&[&'a Record]> {
        let store: &'a S = self.store;
        let hits = match search_with(query, store.records()) {
            Ok(hits) => hits,
            Err(err) => {
                warn!(
                    "event=search_run module=session status=rejected session={} reason={err}",
                    self.id
                );
                return Err(err);
            }
        };

        info!(
            "event=search_run module=session status=ok session={} query_len={} hits={}",
            self.id,
            query.text.trim().chars().count(),
            hits.len()
        );
        self.last_query = Some(query.text.trim().to_string());
        self.last_results = hits;
        Ok(&self.last_results)
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn last_results(&self) -> &[&'a Record] {
        &self.last_results
    }

    /// Forgets the last search.
    pub fn clear_search(&mut self) {
        self.last_query = None;
        self.last_results.clear();
    }

    /// Adds a corpus record to the report.
    ///
    /// Returns `false` when the record was already selected.
    pub fn add_to_report(&mut self, message_id: &str) -> SelectionResult<bool> {
        let store: &'a S = self.store;
        let record = store
            .record(message_id)
            .ok_or_else(|| SelectionError::UnknownRecord(message_id.to_string()))?;
        Ok(self.selection.add(record))
    }

    pub fn remove_from_report(&mut self, message_id: &str) -> SelectionResult<()> {
        self.selection.remove(message_id)?;
        Ok(())
    }

    pub fn clear_report(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &SelectionSet<'a> {
        &self.selection
    }

    pub fn report_summary(&self) -> ReportSummary {
        ReportSummary::from_selection(&self.selection)
    }

    pub fn report_text(&self, title: &str) -> String {
        render_report_text(title, &self.selection)
    }

    pub fn export_report(&self, format: ExportFormat) -> ExportNotice {
        export_placeholder(format, &self.selection)
    }

    pub fn set_timeline_filter(&mut self, filter: TimelineFilter) {
        self.timeline_filter = filter;
    }

    pub fn timeline_filter(&self) -> TimelineFilter {
        self.timeline_filter
    }

    /// Timeline events accepted by the current filter.
    pub fn timeline_events(&self) -> Vec<&'a TimelineEvent> {
        let store: &'a S = self.store;
        filter_events(store.timeline(), self.timeline_filter)
    }

    pub fn ingest(&self) -> &IngestSession {
        &self.ingest
    }

    pub fn ingest_mut(&mut self) -> &mut IngestSession {
        &mut self.ingest
    }

    /// Runs the completeness check for the selected extraction file.
    pub fn run_completeness_check(&self) -> IngestResult<CompletenessOutcome> {
        self.ingest.run_completeness_check(self.store.advisor_report())
    }

    /// Ends the session, dropping all transient state.
    pub fn discard(self) {
        info!(
            "event=session_end module=session status=ok session={} selected={}",
            self.id,
            self.selection.len()
        );
    }
}
