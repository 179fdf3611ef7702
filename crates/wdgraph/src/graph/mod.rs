//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`NodeData`]: a vertex with an optional [`Position`]
//! - [`DiGraph`]: the directed weighted graph container
//! - [`algorithms`]: shortest paths and strongly connected components

mod digraph;
mod types;
pub mod algorithms;

pub use algorithms::{Component, ComponentFinder, PathFinder, ShortestPath};
pub use digraph::DiGraph;
pub use types::{BoundingBox, Direction, NodeData, NodeId, Position, Weight};
