//! Extraction completeness advisor report.
//!
//! # Invariants
//! - All scores and counts are canned fixture values; nothing here is
//!   recomputed from an uploaded file.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Severity of a missing artifact or risk level of an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStatus {
    pub complete: bool,
    pub confidence: f64,
    pub device_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub total_messages: u64,
    pub total_calls: u64,
    pub total_media: u64,
    pub total_contacts: u64,
    pub apps_extracted: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingArtifact {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub reason: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    #[serde(rename = "type")]
    pub kind: String,
    pub risk_level: Severity,
    pub description: String,
    /// Either one ISO-8601 instant or a `start to end` window.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub extraction_status: ExtractionStatus,
    pub extraction_summary: ExtractionSummary,
    pub missing_artifacts: Vec<MissingArtifact>,
    pub anomalies: Vec<Anomaly>,
}

impl AdvisorReport {
    /// Counts missing artifacts at `severity`.
    pub fn artifacts_at(&self, severity: Severity) -> usize {
        self.missing_artifacts
            .iter()
            .filter(|artifact| artifact.severity == severity)
            .count()
    }
}
