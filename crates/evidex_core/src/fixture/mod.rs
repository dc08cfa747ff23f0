//! Case fixture loading.
//!
//! # Responsibility
//! - Provide the embedded demo case and directory-based overrides.
//! - Reject fixture sets that break model invariants instead of masking them.
//!
//! # Invariants
//! - A loaded `FixtureSet` has unique record and entity ids, ISO-8601 record
//!   timestamps and no dangling graph edges.
//! - Fixtures are decoded once; callers only borrow from the result.

mod validate;

use crate::model::advisor::AdvisorReport;
use crate::model::entity::{Entity, Graph};
use crate::model::record::Record;
use crate::model::timeline::TimelineEvent;
use log::info;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DOCUMENTS_FILE: &str = "documents.json";
pub const ENTITIES_FILE: &str = "entities.json";
pub const GRAPH_FILE: &str = "graph.json";
pub const TIMELINE_FILE: &str = "timeline.json";
pub const ADVISOR_FILE: &str = "advisor.json";

const EMBEDDED_DOCUMENTS: &str = include_str!("../../fixtures/documents.json");
const EMBEDDED_ENTITIES: &str = include_str!("../../fixtures/entities.json");
const EMBEDDED_GRAPH: &str = include_str!("../../fixtures/graph.json");
const EMBEDDED_TIMELINE: &str = include_str!("../../fixtures/timeline.json");
const EMBEDDED_ADVISOR: &str = include_str!("../../fixtures/advisor.json");

pub type FixtureResult<T> = Result<T, FixtureError>;

/// Fixture load and validation errors.
#[derive(Debug)]
pub enum FixtureError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        fixture: &'static str,
        source: serde_json::Error,
    },
    DuplicateId {
        fixture: &'static str,
        id: String,
    },
    InvalidTimestamp {
        fixture: &'static str,
        id: String,
        value: String,
    },
    DanglingEdge {
        source: String,
        target: String,
    },
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read fixture `{}`: {source}", path.display())
            }
            Self::Decode { fixture, source } => {
                write!(f, "invalid fixture `{fixture}`: {source}")
            }
            Self::DuplicateId { fixture, id } => {
                write!(f, "duplicate id `{id}` in fixture `{fixture}`")
            }
            Self::InvalidTimestamp { fixture, id, value } => write!(
                f,
                "invalid timestamp `{value}` for `{id}` in fixture `{fixture}`"
            ),
            Self::DanglingEdge { source, target } => {
                write!(f, "graph edge `{source}` -> `{target}` references unknown node")
            }
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Every fixture one case needs, decoded and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub records: Vec<Record>,
    pub entities: Vec<Entity>,
    pub graph: Graph,
    pub timeline: Vec<TimelineEvent>,
    pub advisor: AdvisorReport,
}

impl FixtureSet {
    /// Loads the demo case compiled into the crate.
    pub fn embedded() -> FixtureResult<Self> {
        let set = Self {
            records: decode(DOCUMENTS_FILE, EMBEDDED_DOCUMENTS)?,
            entities: decode(ENTITIES_FILE, EMBEDDED_ENTITIES)?,
            graph: decode(GRAPH_FILE, EMBEDDED_GRAPH)?,
            timeline: decode(TIMELINE_FILE, EMBEDDED_TIMELINE)?,
            advisor: decode(ADVISOR_FILE, EMBEDDED_ADVISOR)?,
        };
        validate::validate(&set)?;
        log_loaded("embedded", &set);
        Ok(set)
    }

    /// Loads fixtures from `dir`, falling back to the embedded file for any
    /// fixture the directory does not contain.
    ///
    /// A missing `dir` is an error, never a silent fallback to the demo case.
    pub fn load_dir(dir: &Path) -> FixtureResult<Self> {
        if !dir.is_dir() {
            return Err(FixtureError::Io {
                path: dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "fixture directory does not exist",
                ),
            });
        }

        let set = Self {
            records: load_or_embedded(dir, DOCUMENTS_FILE, EMBEDDED_DOCUMENTS)?,
            entities: load_or_embedded(dir, ENTITIES_FILE, EMBEDDED_ENTITIES)?,
            graph: load_or_embedded(dir, GRAPH_FILE, EMBEDDED_GRAPH)?,
            timeline: load_or_embedded(dir, TIMELINE_FILE, EMBEDDED_TIMELINE)?,
            advisor: load_or_embedded(dir, ADVISOR_FILE, EMBEDDED_ADVISOR)?,
        };
        validate::validate(&set)?;
        log_loaded("directory", &set);
        Ok(set)
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }
}

fn decode<T: DeserializeOwned>(fixture: &'static str, raw: &str) -> FixtureResult<T> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Decode { fixture, source })
}

fn load_or_embedded<T: DeserializeOwned>(
    dir: &Path,
    fixture: &'static str,
    embedded: &str,
) -> FixtureResult<T> {
    let path = dir.join(fixture);
    if !path.is_file() {
        return decode(fixture, embedded);
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| FixtureError::Io {
        path: path.clone(),
        source,
    })?;
    decode(fixture, &raw)
}

fn log_loaded(origin: &str, set: &FixtureSet) {
    info!(
        "event=fixtures_loaded module=fixture status=ok origin={} records={} entities={} nodes={} edges={} events={}",
        origin,
        set.records.len(),
        set.entities.len(),
        set.graph.nodes.len(),
        set.graph.edges.len(),
        set.timeline.len()
    );
}
