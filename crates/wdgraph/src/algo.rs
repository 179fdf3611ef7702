//! [`GraphAlgo`]: a graph together with its algorithms and JSON persistence.

use crate::codec::{self, JsonLayout};
use crate::error::Result;
use crate::graph::{Component, ComponentFinder, DiGraph, NodeId, PathFinder, ShortestPath};
use log::warn;
use std::path::Path;

/// Owns a [`DiGraph`] and runs queries and load/save against it.
///
/// # Example
///
/// ```
/// use wdgraph::{DiGraph, GraphAlgo};
///
/// let mut graph = DiGraph::new();
/// graph.add_vertex(0, None);
/// graph.add_vertex(1, None);
/// graph.add_vertex(2, None);
/// graph.add_edge(0, 1, 1.0);
/// graph.add_edge(1, 2, 4.0);
///
/// let algo = GraphAlgo::new(graph);
/// let result = algo.shortest_path(0, 2);
/// assert_eq!(result.distance, 5.0);
/// assert_eq!(result.path, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphAlgo {
    graph: DiGraph,
}

impl GraphAlgo {
    /// Wrap an existing graph.
    pub fn new(graph: DiGraph) -> Self {
        Self { graph }
    }

    /// The graph the algorithms run on.
    pub fn graph(&self) -> &DiGraph {
        &self.graph
    }

    /// Mutable access to the graph.
    pub fn graph_mut(&mut self) -> &mut DiGraph {
        &mut self.graph
    }

    /// Take back ownership of the graph.
    pub fn into_graph(self) -> DiGraph {
        self.graph
    }

    /// Shortest path from `source` to `target`. See [`PathFinder::shortest_path`].
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> ShortestPath {
        PathFinder::new(&self.graph).shortest_path(source, target)
    }

    /// Distance only; `f64::INFINITY` if there is no path.
    pub fn shortest_path_distance(&self, source: NodeId, target: NodeId) -> f64 {
        PathFinder::new(&self.graph).shortest_path_distance(source, target)
    }

    /// The strongly connected component containing `id`.
    pub fn connected_component(&self, id: NodeId) -> Component {
        ComponentFinder::new(&self.graph).component_of(id)
    }

    /// All strongly connected components.
    pub fn connected_components(&self) -> Vec<Component> {
        ComponentFinder::new(&self.graph).all_components()
    }

    /// Whether the graph is a single strongly connected component.
    pub fn is_connected(&self) -> bool {
        ComponentFinder::new(&self.graph).is_strongly_connected()
    }

    /// Replace the held graph with one read from a JSON file.
    ///
    /// Returns `Ok(false)` and keeps the current graph if the file is missing
    /// or unreadable.
    ///
    /// # Errors
    ///
    /// A malformed document is returned as an error; the current graph is
    /// kept in that case too.
    pub fn load_from_json<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        match codec::read_file(path) {
            Ok(graph) => {
                self.graph = graph;
                Ok(true)
            }
            Err(e) if e.is_io() => {
                warn!("Graph not loaded: {e}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Write the held graph to a JSON file.
    ///
    /// Returns `Ok(false)` if the file cannot be written.
    ///
    /// # Errors
    ///
    /// Returns an error only if the graph itself fails to serialize.
    pub fn save_to_json<P: AsRef<Path>>(&self, path: P, layout: JsonLayout) -> Result<bool> {
        match codec::write_file(&self.graph, path, layout) {
            Ok(()) => Ok(true),
            Err(e) if e.is_io() => {
                warn!("Graph not saved: {e}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

impl From<DiGraph> for GraphAlgo {
    fn from(graph: DiGraph) -> Self {
        Self::new(graph)
    }
}
