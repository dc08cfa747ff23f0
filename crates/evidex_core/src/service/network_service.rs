//! Network view lookups over canned graph data.
//!
//! # Responsibility
//! - Classify entity risk scores into display bands.
//! - Join graph nodes with entity records for the detail drawer.
//!
//! # Invariants
//! - Risk scores are read, never computed.
//! - No layout, centrality or path algorithm runs here.

use crate::model::entity::{Entity, Graph, GraphEdge, GraphNode};

/// Default cut-off for the high-risk persons list.
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

const HIGH_BAND_FLOOR: f64 = 0.85;
const ELEVATED_BAND_FLOOR: f64 = 0.70;

/// Display band derived from a fixture risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    High,
    Elevated,
    Normal,
}

impl RiskBand {
    /// Bands are strict: a score must exceed the floor to enter the band.
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_BAND_FLOOR {
            Self::High
        } else if score > ELEVATED_BAND_FLOOR {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Elevated => "elevated",
            Self::Normal => "normal",
        }
    }
}

/// Person entities with a risk score strictly above `threshold`.
pub fn high_risk_persons(entities: &[Entity], threshold: f64) -> Vec<&Entity> {
    entities
        .iter()
        .filter(|entity| entity.is_person() && entity.risk_score > threshold)
        .collect()
}

/// Edges incident to `node_id`, in fixture order.
pub fn edges_for<'g>(graph: &'g Graph, node_id: &str) -> Vec<&'g GraphEdge> {
    graph
        .edges
        .iter()
        .filter(|edge| edge.touches(node_id))
        .collect()
}

/// Node detail for the network drawer.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDetails<'a> {
    pub node: &'a GraphNode,
    /// Entity record for person nodes, when one exists.
    pub entity: Option<&'a Entity>,
    pub edges: Vec<&'a GraphEdge>,
    pub band: Option<RiskBand>,
}

/// Looks up a node and joins it with its entity and incident edges.
pub fn node_details<'a>(
    graph: &'a Graph,
    entities: &'a [Entity],
    node_id: &str,
) -> Option<NodeDetails<'a>> {
    let node = graph.node(node_id)?;
    let entity = if node.kind == "person" {
        entities.iter().find(|entity| entity.id == node.id)
    } else {
        None
    };
    // The graph node's own score wins; the entity score fills a gap.
    let score = node.risk_score.or(entity.map(|entity| entity.risk_score));

    Some(NodeDetails {
        node,
        entity,
        edges: edges_for(graph, node_id),
        band: score.map(RiskBand::from_score),
    })
}
