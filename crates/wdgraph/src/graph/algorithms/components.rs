//! Strongly connected components by forward/backward reachability.
//!
//! The component of `v` is the set of vertices reachable from `v` that can
//! also reach `v`. Only reachability matters here, not distances, so both
//! passes are plain breadth-first searches: one along outgoing edges and one
//! along incoming edges (the reverse graph, without building it).

use crate::graph::{DiGraph, Direction, NodeId};
use log::{debug, trace};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// A strongly connected component: a set of vertex IDs.
pub type Component = BTreeSet<NodeId>;

/// All vertices reachable from `start` following edges in `direction`,
/// `start` included.
///
/// Empty if `start` is not a vertex.
pub fn reachable(graph: &DiGraph, start: NodeId, direction: Direction) -> HashSet<NodeId> {
    let mut visited = HashSet::new();
    if !graph.contains_vertex(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (neighbor, _) in graph.edges_of(current, direction) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Strongly connected component engine over a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFinder<'g> {
    graph: &'g DiGraph,
}

impl<'g> ComponentFinder<'g> {
    /// Create a component finder over `graph`.
    pub fn new(graph: &'g DiGraph) -> Self {
        Self { graph }
    }

    /// The strongly connected component containing `source`.
    ///
    /// Empty if `source` is not a vertex. Otherwise always contains `source`.
    pub fn component_of(&self, source: NodeId) -> Component {
        let forward = reachable(self.graph, source, Direction::Outgoing);
        if forward.is_empty() {
            return Component::new();
        }
        let backward = reachable(self.graph, source, Direction::Incoming);

        let component: Component = forward.intersection(&backward).copied().collect();
        trace!(
            "Component of {source}: {} forward, {} backward, {} shared",
            forward.len(),
            backward.len(),
            component.len()
        );
        component
    }

    /// Partition of every vertex into strongly connected components.
    ///
    /// Components appear in the insertion order of their first vertex.
    /// Singleton components are included.
    pub fn all_components(&self) -> Vec<Component> {
        let mut components = Vec::new();
        let mut assigned: HashSet<NodeId> = HashSet::new();

        for id in self.graph.vertex_ids() {
            if assigned.contains(&id) {
                continue;
            }

            let component = self.component_of(id);
            if component.is_empty() {
                continue;
            }
            assigned.extend(component.iter().copied());
            components.push(component);
        }

        debug!(
            "Found {} strongly connected components over {} vertices",
            components.len(),
            self.graph.vertex_count()
        );
        components
    }

    /// Whether every vertex can reach every other vertex.
    ///
    /// Graphs with zero or one vertex are strongly connected.
    pub fn is_strongly_connected(&self) -> bool {
        match self.graph.vertex_ids().next() {
            None => true,
            Some(first) => self.component_of(first).len() == self.graph.vertex_count(),
        }
    }
}
