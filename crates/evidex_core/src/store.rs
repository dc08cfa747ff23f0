//! Read-only evidence store contract.
//!
//! # Responsibility
//! - Give services one storage-agnostic view over a loaded case.
//!
//! # Invariants
//! - Stores never hand out mutable access; case data is immutable after load.

use crate::fixture::FixtureSet;
use crate::model::advisor::AdvisorReport;
use crate::model::entity::{Entity, Graph};
use crate::model::record::Record;
use crate::model::timeline::TimelineEvent;

/// Read access to one loaded case.
pub trait EvidenceStore {
    fn records(&self) -> &[Record];
    fn entities(&self) -> &[Entity];
    fn graph(&self) -> &Graph;
    fn timeline(&self) -> &[TimelineEvent];
    fn advisor_report(&self) -> &AdvisorReport;

    fn record(&self, message_id: &str) -> Option<&Record> {
        self.records()
            .iter()
            .find(|record| record.message_id == message_id)
    }
}

impl EvidenceStore for FixtureSet {
    fn records(&self) -> &[Record] {
        &self.records
    }

    fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }

    fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    fn advisor_report(&self) -> &AdvisorReport {
        &self.advisor
    }
}
