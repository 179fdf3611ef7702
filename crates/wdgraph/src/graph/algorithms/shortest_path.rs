//! Single-source shortest paths (Dijkstra).

use crate::graph::{DiGraph, Direction, NodeId, Weight};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Result of a shortest-path query.
///
/// An unreachable target is reported as an infinite distance with an empty
/// path, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Total weight of the path, `f64::INFINITY` if unreachable
    pub distance: Weight,
    /// Vertices from source to target inclusive, empty if unreachable
    pub path: Vec<NodeId>,
}

impl ShortestPath {
    /// The result for a target that cannot be reached.
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Whether the target was reached.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Split into `(distance, path)`.
    pub fn into_parts(self) -> (Weight, Vec<NodeId>) {
        (self.distance, self.path)
    }
}

/// Per-call traversal scratch: tentative distance and predecessor.
#[derive(Debug, Clone, Copy)]
struct Label {
    distance: Weight,
    predecessor: Option<NodeId>,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy)]
struct State {
    cost: Weight,
    node: NodeId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Dijkstra shortest-path engine over a borrowed graph.
///
/// Edge weights must be non-negative. This is a precondition and is not
/// checked; negative weights give unspecified (but terminating) results.
///
/// The graph is only read. All traversal state lives in maps allocated for
/// each call, so concurrent readers of the same graph do not interfere.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g DiGraph,
}

impl<'g> PathFinder<'g> {
    /// Create a path finder over `graph`.
    pub fn new(graph: &'g DiGraph) -> Self {
        Self { graph }
    }

    /// Shortest path from `source` to `target` by total edge weight.
    ///
    /// - Either endpoint missing: `(∞, [])`.
    /// - `source == target`: `(0, [source])`.
    /// - `target` unreachable: `(∞, [])`.
    ///
    /// Ties between equal-weight paths are broken arbitrarily.
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> ShortestPath {
        if !self.graph.contains_vertex(source) || !self.graph.contains_vertex(target) {
            return ShortestPath::unreachable();
        }
        if source == target {
            return ShortestPath {
                distance: 0.0,
                path: vec![source],
            };
        }

        debug!("Shortest path query: source={source}, target={target}");
        let labels = self.run(source, Some(target));
        let Some(label) = labels.get(&target) else {
            return ShortestPath::unreachable();
        };

        match self.reconstruct(&labels, source, target) {
            Some(path) => ShortestPath {
                distance: label.distance,
                path,
            },
            None => ShortestPath::unreachable(),
        }
    }

    /// Distance of the shortest path from `source` to `target`.
    ///
    /// `f64::INFINITY` when unreachable or when either endpoint is missing.
    pub fn shortest_path_distance(&self, source: NodeId, target: NodeId) -> Weight {
        self.shortest_path(source, target).distance
    }

    /// Shortest distances from `source` to every reachable vertex, `source`
    /// included at distance zero. Empty if `source` is not a vertex.
    pub fn distances_from(&self, source: NodeId) -> IndexMap<NodeId, Weight> {
        if !self.graph.contains_vertex(source) {
            return IndexMap::new();
        }

        let labels = self.run(source, None);
        self.graph
            .vertex_ids()
            .filter_map(|id| labels.get(&id).map(|label| (id, label.distance)))
            .collect()
    }

    /// Lazy-deletion Dijkstra from `source`.
    ///
    /// Vertices absent from the returned map were never reached. Stops early
    /// once `target` is settled.
    fn run(&self, source: NodeId, target: Option<NodeId>) -> HashMap<NodeId, Label> {
        let mut labels: HashMap<NodeId, Label> = HashMap::new();
        let mut settled: HashSet<NodeId> = HashSet::new();
        let mut heap = BinaryHeap::new();
        let mut relaxations = 0usize;

        labels.insert(
            source,
            Label {
                distance: 0.0,
                predecessor: None,
            },
        );
        heap.push(State {
            cost: 0.0,
            node: source,
        });

        while let Some(State { cost, node }) = heap.pop() {
            // Stale entry or already settled at its minimum
            if !settled.insert(node) {
                continue;
            }
            if Some(node) == target {
                break;
            }

            for (neighbor, weight) in self.graph.edges_of(node, Direction::Outgoing) {
                if settled.contains(&neighbor) {
                    continue;
                }

                let next_cost = cost + weight;
                // Unlabelled vertices are at +inf
                let best = labels
                    .get(&neighbor)
                    .map_or(f64::INFINITY, |label| label.distance);
                let improved = next_cost < best;

                if improved {
                    labels.insert(
                        neighbor,
                        Label {
                            distance: next_cost,
                            predecessor: Some(node),
                        },
                    );
                    heap.push(State {
                        cost: next_cost,
                        node: neighbor,
                    });
                    relaxations += 1;
                }
            }
        }

        trace!(
            "Dijkstra from {source}: settled {} vertices, {relaxations} relaxations",
            settled.len()
        );
        labels
    }

    /// Walk predecessor links from `target` back to `source`.
    fn reconstruct(
        &self,
        labels: &HashMap<NodeId, Label>,
        source: NodeId,
        target: NodeId,
    ) -> Option<Vec<NodeId>> {
        let mut path = vec![target];
        let mut current = target;

        while current != source {
            // A chain longer than the vertex count means the predecessor
            // links form a cycle, which only negative weights can cause.
            if path.len() > self.graph.vertex_count() {
                warn!("Predecessor cycle while rebuilding path {source} -> {target}");
                return None;
            }
            current = labels.get(&current)?.predecessor?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}
