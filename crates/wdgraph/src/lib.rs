//! # wdgraph
//!
//! An in-memory directed weighted graph with shortest paths, strongly
//! connected components, and JSON persistence.
//!
//! ## Core Principles
//!
//! - **Caller-chosen IDs**: vertices are keyed by any `i64` you pick
//! - **No surprises on bad input**: duplicate or missing entities yield `false`,
//!   unreachable targets yield `f64::INFINITY`; nothing panics
//! - **Read-only algorithms**: traversals borrow the graph and keep their
//!   scratch state per call
//! - **Observable change**: a version counter bumps on every mutation
//!
//! ## Architecture
//!
//! ```text
//! GraphAlgo (facade, load/save)
//!     ↓
//! PathFinder (Dijkstra)   ComponentFinder (SCC)
//!     ↓
//! DiGraph (vertices, forward/backward adjacency)
//!     ↕
//! codec (GraphDocument <-> JSON)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wdgraph::{ComponentFinder, DiGraph, PathFinder};
//!
//! let mut graph = DiGraph::new();
//! for id in 1..=4 {
//!     graph.add_vertex(id, None);
//! }
//! graph.add_edge(1, 2, 5.0);
//! graph.add_edge(2, 3, 2.0);
//! graph.add_edge(3, 4, 10.0);
//! graph.add_edge(2, 4, 1.0);
//!
//! let result = PathFinder::new(&graph).shortest_path(1, 4);
//! assert_eq!(result.distance, 6.0);
//! assert_eq!(result.path, vec![1, 2, 4]);
//!
//! // No cycles, so every vertex is its own component
//! assert_eq!(ComponentFinder::new(&graph).all_components().len(), 4);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod algo;
pub mod codec;
pub mod error;
pub mod graph;

// Re-export main types
pub use algo::GraphAlgo;
pub use codec::{GraphDocument, JsonLayout};
pub use error::{GraphError, Result};
pub use graph::{
    BoundingBox, Component, ComponentFinder, DiGraph, Direction, NodeData, NodeId, PathFinder,
    Position, ShortestPath, Weight,
};
