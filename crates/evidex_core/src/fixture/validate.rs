//! Invariant checks applied to every decoded fixture set.

use super::{
    FixtureError, FixtureResult, FixtureSet, DOCUMENTS_FILE, ENTITIES_FILE, TIMELINE_FILE,
};
use crate::model::timestamp::is_iso8601;
use std::collections::HashSet;

pub(super) fn validate(set: &FixtureSet) -> FixtureResult<()> {
    ensure_unique(
        DOCUMENTS_FILE,
        set.records.iter().map(|record| record.message_id.as_str()),
    )?;
    ensure_unique(
        ENTITIES_FILE,
        set.entities.iter().map(|entity| entity.id.as_str()),
    )?;
    ensure_unique(
        TIMELINE_FILE,
        set.timeline.iter().map(|event| event.id.as_str()),
    )?;

    for record in &set.records {
        if !is_iso8601(&record.timestamp) {
            return Err(FixtureError::InvalidTimestamp {
                fixture: DOCUMENTS_FILE,
                id: record.message_id.clone(),
                value: record.timestamp.clone(),
            });
        }
    }
    for event in &set.timeline {
        if !is_iso8601(&event.timestamp) {
            return Err(FixtureError::InvalidTimestamp {
                fixture: TIMELINE_FILE,
                id: event.id.clone(),
                value: event.timestamp.clone(),
            });
        }
    }

    let node_ids = set
        .graph
        .nodes
        .iter()
        .map(|node| node.id.as_str())
        .collect::<HashSet<_>>();
    for edge in &set.graph.edges {
        if !node_ids.contains(edge.source.as_str()) || !node_ids.contains(edge.target.as_str()) {
            return Err(FixtureError::DanglingEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
            });
        }
    }

    Ok(())
}

fn ensure_unique<'a>(
    fixture: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> FixtureResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                fixture,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
