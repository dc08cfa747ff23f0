//! Findings summary over a report selection.

use crate::model::entity::Entity;
use crate::model::selection::SelectionSet;
use std::collections::HashSet;

/// Tag counted as a financial transaction discussion.
pub const FINANCIAL_TAG: &str = "Financial";

/// Label with an occurrence count, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_items: usize,
    pub financial_count: usize,
    pub deleted_count: usize,
    /// Distinct names across every selected record's participants.
    pub unique_individuals: usize,
    pub by_app: Vec<LabelCount>,
    pub by_tag: Vec<LabelCount>,
}

impl ReportSummary {
    pub fn from_selection(selection: &SelectionSet<'_>) -> Self {
        let mut individuals = HashSet::new();
        let mut by_app = Vec::new();
        let mut by_tag = Vec::new();
        let mut financial_count = 0;
        let mut deleted_count = 0;

        for record in selection.iter() {
            if record.has_tag(FINANCIAL_TAG) {
                financial_count += 1;
            }
            if record.deleted {
                deleted_count += 1;
            }
            individuals.extend(record.participants.iter().map(String::as_str));
            bump(&mut by_app, record.app.as_str());
            for tag in &record.tags {
                bump(&mut by_tag, tag);
            }
        }

        Self {
            total_items: selection.len(),
            financial_count,
            deleted_count,
            unique_individuals: individuals.len(),
            by_app,
            by_tag,
        }
    }
}

fn bump(counts: &mut Vec<LabelCount>, label: &str) {
    match counts.iter_mut().find(|entry| entry.label == label) {
        Some(entry) => entry.count += 1,
        None => counts.push(LabelCount {
            label: label.to_string(),
            count: 1,
        }),
    }
}

/// Person entities ordered by descending risk score.
///
/// Ties keep fixture order.
pub fn ranked_persons(entities: &[Entity]) -> Vec<&Entity> {
    let mut persons = entities
        .iter()
        .filter(|entity| entity.is_person())
        .collect::<Vec<_>>();
    persons.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
    persons
}
