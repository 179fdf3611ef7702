//! The directed weighted graph container.

use super::types::{BoundingBox, Direction, NodeData, NodeId, Position, Weight};
use indexmap::IndexMap;
use log::{debug, trace};

type Adjacency = IndexMap<NodeId, IndexMap<NodeId, Weight>>;

/// A directed weighted graph keyed by caller-chosen vertex IDs.
///
/// At most one edge exists per ordered `(src, dest)` pair and self-loops are
/// rejected. Mutations report success with a `bool`; a `false` result means
/// the graph was left untouched.
///
/// Every successful structural mutation bumps [`DiGraph::version`], which
/// callers may use to detect that a graph changed between two reads.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    nodes: IndexMap<NodeId, NodeData>,
    // Forward and backward indexes are kept in lock-step
    adjacency_out: Adjacency,
    adjacency_in: Adjacency,
    edge_count: usize,
    version: u64,
}

impl DiGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex.
    ///
    /// Returns `false` if `id` is already present.
    pub fn add_vertex(&mut self, id: NodeId, position: Option<Position>) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }

        self.nodes.insert(id, NodeData::new(id, position));
        self.version += 1;
        debug!("Added vertex: id={id}");
        true
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Each incident edge removal bumps the version on its own, followed by
    /// one more bump for the vertex itself. Returns `false` if `id` is absent.
    pub fn remove_vertex(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains_key(&id) {
            return false;
        }

        let sources: Vec<NodeId> = self.in_edges(id).map(|(src, _)| src).collect();
        let targets: Vec<NodeId> = self.out_edges(id).map(|(dest, _)| dest).collect();
        trace!(
            "Removing {} incoming and {} outgoing edges of vertex {id}",
            sources.len(),
            targets.len()
        );

        for src in sources {
            self.remove_edge(src, id);
        }
        for dest in targets {
            self.remove_edge(id, dest);
        }

        self.nodes.shift_remove(&id);
        self.version += 1;
        debug!("Removed vertex: id={id}");
        true
    }

    /// Add a directed edge from `src` to `dest`.
    ///
    /// Returns `false` for a self-loop, a missing endpoint, or an edge that
    /// already exists (its weight is not updated).
    pub fn add_edge(&mut self, src: NodeId, dest: NodeId, weight: Weight) -> bool {
        if src == dest || !self.contains_vertex(src) || !self.contains_vertex(dest) {
            return false;
        }
        if self.contains_edge(src, dest) {
            return false;
        }

        self.adjacency_out
            .entry(src)
            .or_default()
            .insert(dest, weight);
        self.adjacency_in
            .entry(dest)
            .or_default()
            .insert(src, weight);

        self.edge_count += 1;
        self.version += 1;
        debug!("Added edge: src={src}, dest={dest}, weight={weight}");
        true
    }

    /// Remove the edge from `src` to `dest`.
    ///
    /// Returns `false` for a self-loop query, a missing endpoint, or a
    /// missing edge.
    pub fn remove_edge(&mut self, src: NodeId, dest: NodeId) -> bool {
        if src == dest || !self.contains_vertex(src) || !self.contains_vertex(dest) {
            return false;
        }
        if !self.contains_edge(src, dest) {
            return false;
        }

        detach(&mut self.adjacency_out, src, dest);
        detach(&mut self.adjacency_in, dest, src);

        self.edge_count -= 1;
        self.version += 1;
        debug!("Removed edge: src={src}, dest={dest}");
        true
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Modification counter, bumped once per successful structural mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is a vertex of this graph.
    pub fn contains_vertex(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether an edge from `src` to `dest` exists.
    pub fn contains_edge(&self, src: NodeId, dest: NodeId) -> bool {
        self.edge_weight(src, dest).is_some()
    }

    /// Weight of the edge from `src` to `dest`, if present.
    pub fn edge_weight(&self, src: NodeId, dest: NodeId) -> Option<Weight> {
        self.adjacency_out
            .get(&src)
            .and_then(|targets| targets.get(&dest))
            .copied()
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(&id)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &NodeData> + '_ {
        self.nodes.values()
    }

    /// All vertex IDs in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Outgoing edges of `id` as `(dest, weight)` pairs.
    ///
    /// Empty when `id` has no outgoing edges or is not a vertex.
    pub fn out_edges(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        adjacent(&self.adjacency_out, id)
    }

    /// Incoming edges of `id` as `(src, weight)` pairs.
    ///
    /// Empty when `id` has no incoming edges or is not a vertex.
    pub fn in_edges(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        adjacent(&self.adjacency_in, id)
    }

    /// Edges adjacent to `id` in the given direction, as `(other, weight)` pairs.
    pub fn edges_of(
        &self,
        id: NodeId,
        direction: Direction,
    ) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        match direction {
            Direction::Outgoing => adjacent(&self.adjacency_out, id),
            Direction::Incoming => adjacent(&self.adjacency_in, id),
        }
    }

    /// Every edge as a `(src, dest, weight)` triple, grouped by source in
    /// vertex insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.nodes
            .keys()
            .flat_map(move |&src| self.out_edges(src).map(move |(dest, w)| (src, dest, w)))
    }

    /// Positions of every vertex that has one.
    pub fn positions(&self) -> impl Iterator<Item = (NodeId, Position)> + '_ {
        self.nodes
            .values()
            .filter_map(|node| node.position().map(|pos| (node.id(), pos)))
    }

    /// Componentwise min/max over all positioned vertices.
    ///
    /// Falls back to [`BoundingBox::default`] when fewer than two vertices
    /// carry a position.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut positions = self.positions().map(|(_, pos)| pos);
        let Some(first) = positions.next() else {
            return BoundingBox::default();
        };

        let mut seen = 1usize;
        let mut bbox = BoundingBox {
            min: first,
            max: first,
        };
        for pos in positions {
            seen += 1;
            bbox.min.x = bbox.min.x.min(pos.x);
            bbox.min.y = bbox.min.y.min(pos.y);
            bbox.min.z = bbox.min.z.min(pos.z);
            bbox.max.x = bbox.max.x.max(pos.x);
            bbox.max.y = bbox.max.y.max(pos.y);
            bbox.max.z = bbox.max.z.max(pos.z);
        }

        if seen < 2 {
            return BoundingBox::default();
        }
        bbox
    }

    // ===== Algorithm Methods =====

    /// Shortest path from `src` to `dest` by total edge weight.
    ///
    /// See [`PathFinder::shortest_path`](super::algorithms::PathFinder::shortest_path).
    pub fn shortest_path(&self, src: NodeId, dest: NodeId) -> super::algorithms::ShortestPath {
        super::algorithms::PathFinder::new(self).shortest_path(src, dest)
    }

    /// The strongly connected component containing `id`.
    ///
    /// See [`ComponentFinder::component_of`](super::algorithms::ComponentFinder::component_of).
    pub fn component_of(&self, id: NodeId) -> super::algorithms::Component {
        super::algorithms::ComponentFinder::new(self).component_of(id)
    }

    /// Partition of all vertices into strongly connected components.
    pub fn strongly_connected_components(&self) -> Vec<super::algorithms::Component> {
        super::algorithms::ComponentFinder::new(self).all_components()
    }
}

impl std::fmt::Display for DiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph: |V|={}, |E|={}",
            self.vertex_count(),
            self.edge_count()
        )
    }
}

fn adjacent(adjacency: &Adjacency, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
    adjacency
        .get(&id)
        .into_iter()
        .flatten()
        .map(|(&other, &weight)| (other, weight))
}

fn detach(adjacency: &mut Adjacency, from: NodeId, to: NodeId) {
    if let Some(targets) = adjacency.get_mut(&from) {
        targets.shift_remove(&to);
        if targets.is_empty() {
            adjacency.shift_remove(&from);
        }
    }
}
