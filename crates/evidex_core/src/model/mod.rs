//! Evidence domain model loaded from case fixtures.
//!
//! # Responsibility
//! - Define the records, entities, graph, timeline and advisor shapes that
//!   every surface reads.
//! - Keep fixture field naming as the serde wire names.
//!
//! # Invariants
//! - Model values are immutable once loaded; surfaces only filter or borrow.
//! - Record identifiers are unique within one fixture set.

pub mod advisor;
pub mod entity;
pub mod record;
pub mod selection;
pub mod timeline;
pub mod timestamp;
