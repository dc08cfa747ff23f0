//! Extraction upload and completeness check.
//!
//! # Responsibility
//! - Track which extraction report the investigator selected.
//! - Produce the completeness advisor outcome for that selection.
//!
//! # Invariants
//! - A check never runs without a selected file.
//! - The outcome mirrors the advisor fixture; the file itself is not parsed.

use crate::model::advisor::{AdvisorReport, Severity};
use crate::task::{spawn_task, TaskError, TaskHandle};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type IngestResult<T> = Result<T, IngestError>;

#[derive(Debug)]
pub enum IngestError {
    /// Check requested before any extraction report was selected.
    NoFileSelected,
    /// Selected file name is blank.
    InvalidFileName(String),
    Task(TaskError),
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFileSelected => write!(f, "please upload a UFDR/XRY report first"),
            Self::InvalidFileName(value) => write!(f, "invalid extraction file name: `{value}`"),
            Self::Task(err) => write!(f, "{err}"),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Task(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskError> for IngestError {
    fn from(value: TaskError) -> Self {
        Self::Task(value)
    }
}

/// Result of one completeness check.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessOutcome {
    pub file_name: String,
    pub report: AdvisorReport,
    pub high_severity_artifacts: usize,
    pub high_risk_anomalies: usize,
}

impl CompletenessOutcome {
    fn from_report(file_name: String, report: AdvisorReport) -> Self {
        let high_severity_artifacts = report.artifacts_at(Severity::High);
        let high_risk_anomalies = report
            .anomalies
            .iter()
            .filter(|anomaly| anomaly.risk_level == Severity::High)
            .count();
        Self {
            file_name,
            report,
            high_severity_artifacts,
            high_risk_anomalies,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.report.extraction_status.complete
    }
}

/// Upload state for one case session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSession {
    selected_file: Option<String>,
}

impl IngestSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the extraction report to check, replacing any previous one.
    pub fn select_file(&mut self, file_name: &str) -> IngestResult<()> {
        let trimmed = file_name.trim();
        if trimmed.is_empty() {
            return Err(IngestError::InvalidFileName(file_name.to_string()));
        }
        self.selected_file = Some(trimmed.to_string());
        info!(
            "event=ingest_file_selected module=ingest status=ok name_len={}",
            trimmed.len()
        );
        Ok(())
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    pub fn clear(&mut self) {
        self.selected_file = None;
    }

    /// Runs the completeness check against `report` on the caller thread.
    pub fn run_completeness_check(
        &self,
        report: &AdvisorReport,
    ) -> IngestResult<CompletenessOutcome> {
        let file_name = self.require_file()?;
        let outcome = CompletenessOutcome::from_report(file_name, report.clone());
        log_outcome(&outcome);
        Ok(outcome)
    }

    /// Runs the completeness check on a worker thread.
    ///
    /// The handle completes when the check itself completes.
    pub fn spawn_completeness_check(
        &self,
        report: AdvisorReport,
    ) -> IngestResult<TaskHandle<CompletenessOutcome>> {
        let file_name = self.require_file()?;
        let handle = spawn_task("completeness-check", move || {
            let outcome = CompletenessOutcome::from_report(file_name, report);
            log_outcome(&outcome);
            outcome
        })?;
        Ok(handle)
    }

    fn require_file(&self) -> IngestResult<String> {
        match self.selected_file.as_ref() {
            Some(name) => Ok(name.clone()),
            None => {
                warn!("event=completeness_check module=ingest status=rejected reason=no_file");
                Err(IngestError::NoFileSelected)
            }
        }
    }
}

fn log_outcome(outcome: &CompletenessOutcome) {
    info!(
        "event=completeness_check module=ingest status=ok complete={} missing_artifacts={} high_severity={} anomalies={}",
        outcome.is_complete(),
        outcome.report.missing_artifacts.len(),
        outcome.high_severity_artifacts,
        outcome.report.anomalies.len()
    );
}
