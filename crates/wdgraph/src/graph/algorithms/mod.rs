//! Graph algorithms: Dijkstra shortest paths and strongly connected components.
//!
//! Both engines borrow a [`DiGraph`](crate::graph::DiGraph) immutably and keep
//! their working state local to each call.

mod components;
mod shortest_path;

pub use components::{reachable, Component, ComponentFinder};
pub use shortest_path::{PathFinder, ShortestPath};
