//! Serde model of the persisted graph document.
//!
//! ```json
//! {
//!   "Nodes": [{"id": 0, "pos": "35.18,32.10,0.0"}, {"id": 1, "pos": [1.0, 2.0, 0.0]}, {"id": 2}],
//!   "Edges": [{"src": 0, "dest": 1, "w": 1.5}]
//! }
//! ```

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, Position, Weight};
use serde::{Deserialize, Serialize};

/// Flat vertex and edge lists describing one graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertices, in graph iteration order
    #[serde(rename = "Nodes")]
    pub nodes: Vec<NodeRecord>,
    /// Edges, grouped by source vertex
    #[serde(rename = "Edges")]
    pub edges: Vec<EdgeRecord>,
}

/// One vertex entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Vertex ID
    pub id: NodeId,
    /// Optional position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PositionField>,
}

/// A position as written in a document: either `"x,y,z"` or `[x, y, z]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionField {
    /// Comma-delimited numbers
    Text(String),
    /// Numeric array of two or three components
    Components(Vec<f64>),
}

impl PositionField {
    /// Parse into a [`Position`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPosition`] unless the field holds two or
    /// three numbers.
    pub fn to_position(&self) -> Result<Position> {
        match self {
            PositionField::Text(text) => text.parse(),
            PositionField::Components(components) => Position::from_components(components)
                .ok_or_else(|| GraphError::InvalidPosition {
                    value: format!("{components:?}"),
                }),
        }
    }
}

impl From<Position> for PositionField {
    fn from(pos: Position) -> Self {
        PositionField::Components(pos.to_array().to_vec())
    }
}

/// One edge entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source vertex ID
    pub src: NodeId,
    /// Destination vertex ID
    pub dest: NodeId,
    /// Edge weight
    #[serde(rename = "w")]
    pub weight: Weight,
}
