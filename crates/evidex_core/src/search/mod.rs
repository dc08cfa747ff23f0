//! Multilingual keyword search over the loaded corpus.
//!
//! # Responsibility
//! - Match free-text queries against record text, tags and participants.
//! - Expand a fixed set of English triggers into Hindi/Hinglish terms.
//! - Summarize hits as canned findings with message citations.
//!
//! # Invariants
//! - Search is pure: same query and corpus always give the same result.
//! - Results keep corpus order; nothing is ranked.

pub mod engine;
pub mod summary;
pub mod synonyms;
