//! Case report assembly.
//!
//! # Responsibility
//! - Summarize a selection into findings counts.
//! - Render the plain-text report and answer export requests.
//!
//! # Invariants
//! - Reports only read the selection; they never reorder it.
//! - Exports never write files; they return a notice instead.

pub mod render;
pub mod summary;
