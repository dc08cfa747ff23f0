//! Report selection set.
//!
//! # Responsibility
//! - Hold the ordered records an investigator picked for a report.
//!
//! # Invariants
//! - Insertion order is preserved.
//! - A record id appears at most once.
//! - The set borrows records from the loaded corpus and never mutates them.

use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SelectionResult<T> = Result<T, SelectionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Record id is not part of the loaded corpus.
    UnknownRecord(String),
    /// Record id is not currently selected.
    NotSelected(String),
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRecord(id) => write!(f, "record not found in corpus: {id}"),
            Self::NotSelected(id) => write!(f, "record is not in the report: {id}"),
        }
    }
}

impl Error for SelectionError {}

/// Ordered, duplicate-free set of borrowed records.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet<'a> {
    items: Vec<&'a Record>,
}

impl<'a> SelectionSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a selection with the first `count` records of `corpus`.
    pub fn seeded(corpus: &'a [Record], count: usize) -> Self {
        let mut selection = Self::new();
        for record in corpus.iter().take(count) {
            selection.add(record);
        }
        selection
    }

    /// Appends `record` unless its id is already selected.
    ///
    /// Returns `true` when the record was inserted.
    pub fn add(&mut self, record: &'a Record) -> bool {
        if self.contains(&record.message_id) {
            return false;
        }
        self.items.push(record);
        true
    }

    /// Removes the record with `message_id`, returning it.
    pub fn remove(&mut self, message_id: &str) -> SelectionResult<&'a Record> {
        let position = self
            .items
            .iter()
            .position(|record| record.message_id == message_id)
            .ok_or_else(|| SelectionError::NotSelected(message_id.to_string()))?;
        Ok(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, message_id: &str) -> bool {
        self.items
            .iter()
            .any(|record| record.message_id == message_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.items.iter().copied()
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.items
            .iter()
            .map(|record| record.message_id.as_str())
            .collect()
    }
}
