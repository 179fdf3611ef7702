//! Core graph types: vertex IDs, positions, vertex data, and enums.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Caller-chosen vertex identifier, unique per graph.
pub type NodeId = i64;

/// Edge weight. Must be non-negative for shortest-path queries.
pub type Weight = f64;

/// A point in space attached to a vertex.
///
/// Two-component inputs are lifted to three components with `z = 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Position {
    /// Create a position from three coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a position from a slice of two or three components.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match *components {
            [x, y] => Some(Self::new(x, y, 0.0)),
            [x, y, z] => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// Components as an `[x, y, z]` array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl FromStr for Position {
    type Err = GraphError;

    /// Parse `"x,y,z"` or `"x,y"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GraphError::InvalidPosition {
            value: s.to_string(),
        };

        let components = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        Self::from_components(&components).ok_or_else(invalid)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// A single graph vertex.
///
/// Traversal scratch state (tentative distance, predecessor) is not stored
/// here; each algorithm keeps it in a side map for the duration of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    id: NodeId,
    position: Option<Position>,
}

impl NodeData {
    /// Create vertex data for `id` with an optional position.
    pub fn new(id: NodeId, position: Option<Position>) -> Self {
        Self { id, position }
    }

    /// The vertex identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The vertex position, if it has one.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

impl std::fmt::Display for NodeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "|Key: {}|", self.id)
    }
}

/// Direction for adjacency and reachability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow outgoing edges (from this vertex)
    Outgoing,
    /// Follow incoming edges (to this vertex)
    Incoming,
}

/// Axis-aligned bounds over all positioned vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Componentwise minimum
    pub min: Position,
    /// Componentwise maximum
    pub max: Position,
}

impl Default for BoundingBox {
    /// Frame used when fewer than two vertices carry a position.
    fn default() -> Self {
        Self {
            min: Position::new(0.0, 0.0, 0.0),
            max: Position::new(10.0, 10.0, 0.0),
        }
    }
}

impl BoundingBox {
    /// Whether `position` lies inside the box (edges included).
    pub fn contains(&self, position: Position) -> bool {
        (self.min.x..=self.max.x).contains(&position.x)
            && (self.min.y..=self.max.y).contains(&position.y)
            && (self.min.z..=self.max.z).contains(&position.z)
    }
}
