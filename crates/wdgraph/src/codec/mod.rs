//! Conversion between [`DiGraph`] and its persisted JSON document.
//!
//! [`encode`] and [`decode`] work on the in-memory [`GraphDocument`];
//! the string and file helpers wrap them with `serde_json`.

mod document;

pub use document::{EdgeRecord, GraphDocument, NodeRecord, PositionField};

use crate::error::{GraphError, Result};
use crate::graph::DiGraph;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Output layout for JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonLayout {
    /// Single line, as stored on disk
    #[default]
    Compact,
    /// Indented, for reading
    Pretty,
}

/// Flatten `graph` into vertex and edge lists in its iteration order.
pub fn encode(graph: &DiGraph) -> GraphDocument {
    let nodes = graph
        .vertices()
        .map(|node| NodeRecord {
            id: node.id(),
            pos: node.position().map(PositionField::from),
        })
        .collect();

    let edges = graph
        .edges()
        .map(|(src, dest, weight)| EdgeRecord { src, dest, weight })
        .collect();

    GraphDocument { nodes, edges }
}

/// Build a fresh graph from `document`: all vertices first, then all edges.
///
/// Entries the graph rejects (duplicate vertices, edges to missing vertices,
/// self-loops, duplicate edges) are skipped with a warning, following the
/// normal `add_vertex`/`add_edge` contract.
///
/// # Errors
///
/// Returns [`GraphError::InvalidPosition`] if a vertex position cannot be parsed.
pub fn decode(document: &GraphDocument) -> Result<DiGraph> {
    let mut graph = DiGraph::new();

    for node in &document.nodes {
        let position = node
            .pos
            .as_ref()
            .map(PositionField::to_position)
            .transpose()?;
        if !graph.add_vertex(node.id, position) {
            warn!("Skipping duplicate vertex {}", node.id);
        }
    }

    for edge in &document.edges {
        if !graph.add_edge(edge.src, edge.dest, edge.weight) {
            warn!("Skipping rejected edge {} -> {}", edge.src, edge.dest);
        }
    }

    debug!(
        "Decoded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Serialize `graph` to JSON text.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if `serde_json` fails to write the
/// document. Non-finite weights and coordinates are written as `null`, which
/// [`from_json_str`] later rejects.
pub fn to_json_string(graph: &DiGraph, layout: JsonLayout) -> Result<String> {
    let document = encode(graph);
    let text = match layout {
        JsonLayout::Compact => serde_json::to_string(&document),
        JsonLayout::Pretty => serde_json::to_string_pretty(&document),
    };
    text.map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Parse JSON text into a graph.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] for invalid JSON or a missing
/// required field, and [`GraphError::InvalidPosition`] for a bad position.
pub fn from_json_str(text: &str) -> Result<DiGraph> {
    let document: GraphDocument = serde_json::from_str(text)
        .map_err(|e| GraphError::serialization("Malformed graph document", Some(e)))?;
    decode(&document)
}

/// Read a graph from a JSON file.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be read, otherwise the
/// errors of [`from_json_str`].
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<DiGraph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
    let graph = from_json_str(&text)?;
    info!("Loaded graph from {path:?}: {graph}");
    Ok(graph)
}

/// Write a graph to a JSON file, replacing any existing content.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be written, otherwise the
/// errors of [`to_json_string`].
pub fn write_file<P: AsRef<Path>>(graph: &DiGraph, path: P, layout: JsonLayout) -> Result<()> {
    let path = path.as_ref();
    let text = to_json_string(graph, layout)?;
    fs::write(path, text).map_err(|e| GraphError::io(path, e))?;
    info!("Saved graph to {path:?}: {graph}");
    Ok(())
}
