//! Entities and the communication graph.
//!
//! # Invariants
//! - `risk_score` values are opaque fixture inputs in `0.0..=1.0`.
//! - Every edge endpoint names an existing node (checked at fixture load).

use serde::{Deserialize, Serialize};

/// Identified person, device or account in a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    /// Serialized as `type`; `person`, `device`, `account` in practice.
    #[serde(rename = "type")]
    pub kind: String,
    pub role: String,
    pub risk_score: f64,
    pub reason: String,
}

impl Entity {
    pub fn is_person(&self) -> bool {
        self.kind == "person"
    }
}

/// Graph vertex as rendered by the network view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub risk_score: Option<f64>,
}

/// Aggregated interaction between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    /// Interaction kind, e.g. `messages`, `calls`, `transfer`.
    pub kind: String,
    pub count: u32,
    #[serde(default)]
    pub app: Option<String>,
}

impl GraphEdge {
    /// Returns whether `node_id` is either endpoint.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
