//! Unit tests for the JSON document codec.

use std::collections::HashSet;
use wdgraph::codec::{self, EdgeRecord, NodeRecord, PositionField};
use wdgraph::{DiGraph, GraphError, JsonLayout, Position};

fn create_positioned_graph() -> DiGraph {
    let mut graph = DiGraph::new();
    graph.add_vertex(0, Some(Position::new(35.187, 32.103, 0.0)));
    graph.add_vertex(1, Some(Position::new(35.189, 32.106, 0.0)));
    graph.add_vertex(2, None);
    graph.add_edge(0, 1, 1.35);
    graph.add_edge(1, 0, 1.45);
    graph.add_edge(1, 2, 0.0);
    graph
}

fn edge_set(graph: &DiGraph) -> HashSet<(i64, i64, u64)> {
    graph
        .edges()
        .map(|(src, dest, w)| (src, dest, w.to_bits()))
        .collect()
}

#[test]
fn test_round_trip_preserves_structure() {
    let graph = create_positioned_graph();
    let decoded = codec::decode(&codec::encode(&graph)).unwrap();

    assert_eq!(decoded.vertex_count(), graph.vertex_count());
    assert_eq!(decoded.edge_count(), graph.edge_count());
    assert_eq!(edge_set(&decoded), edge_set(&graph));
    for node in graph.vertices() {
        assert_eq!(decoded.vertex(node.id()).map(|n| n.position()), Some(node.position()));
    }
}

#[test]
fn test_round_trip_through_text() {
    let graph = create_positioned_graph();
    for layout in [JsonLayout::Compact, JsonLayout::Pretty] {
        let text = codec::to_json_string(&graph, layout).unwrap();
        let decoded = codec::from_json_str(&text).unwrap();
        assert_eq!(edge_set(&decoded), edge_set(&graph));
        let ids: Vec<_> = decoded.vertex_ids().collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}

#[test]
fn test_document_keys() {
    let text = codec::to_json_string(&create_positioned_graph(), JsonLayout::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["Nodes"][0]["id"], 0);
    assert_eq!(value["Nodes"][0]["pos"], serde_json::json!([35.187, 32.103, 0.0]));
    assert!(value["Nodes"][2].get("pos").is_none());
    assert_eq!(value["Edges"][0], serde_json::json!({"src": 0, "dest": 1, "w": 1.35}));
}

#[test]
fn test_string_and_array_positions_agree() {
    let text = r#"{
        "Nodes": [
            {"id": 0, "pos": "35.18,32.10,0.0"},
            {"id": 1, "pos": [35.18, 32.10, 0.0]},
            {"id": 2, "pos": [3, 4]}
        ],
        "Edges": [{"src": 0, "dest": 1, "w": 2}]
    }"#;
    let graph = codec::from_json_str(text).unwrap();

    let pos = |id| graph.vertex(id).and_then(|n| n.position());
    assert_eq!(pos(0), Some(Position::new(35.18, 32.10, 0.0)));
    assert_eq!(pos(0), pos(1));
    assert_eq!(pos(2), Some(Position::new(3.0, 4.0, 0.0)));
    assert_eq!(graph.edge_weight(0, 1), Some(2.0));
}

#[test]
fn test_missing_nodes_key_is_fatal() {
    let result = codec::from_json_str(r#"{"Edges": []}"#);
    assert!(matches!(result, Err(GraphError::Serialization { .. })));
}

#[test]
fn test_missing_edge_weight_is_fatal() {
    let text = r#"{"Nodes": [{"id": 0}, {"id": 1}], "Edges": [{"src": 0, "dest": 1}]}"#;
    assert!(matches!(
        codec::from_json_str(text),
        Err(GraphError::Serialization { .. })
    ));
}

#[test]
fn test_missing_node_id_is_fatal() {
    let text = r#"{"Nodes": [{"pos": "1,2,3"}], "Edges": []}"#;
    assert!(codec::from_json_str(text).is_err());
}

#[test]
fn test_bad_position_is_fatal() {
    let text = r#"{"Nodes": [{"id": 0, "pos": "1,2,x"}], "Edges": []}"#;
    assert!(matches!(
        codec::from_json_str(text),
        Err(GraphError::InvalidPosition { .. })
    ));
}

#[test]
fn test_edges_to_undeclared_vertices_are_skipped() {
    let document = wdgraph::GraphDocument {
        nodes: vec![NodeRecord { id: 1, pos: None }, NodeRecord { id: 2, pos: None }],
        edges: vec![
            EdgeRecord { src: 1, dest: 2, weight: 1.0 },
            EdgeRecord { src: 2, dest: 3, weight: 1.0 },
            EdgeRecord { src: 2, dest: 2, weight: 1.0 },
            EdgeRecord { src: 1, dest: 2, weight: 9.0 },
        ],
    };
    let graph = codec::decode(&document).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(1, 2), Some(1.0));
}

#[test]
fn test_empty_graph_round_trip() {
    let text = codec::to_json_string(&DiGraph::new(), JsonLayout::Compact).unwrap();
    assert_eq!(text, r#"{"Nodes":[],"Edges":[]}"#);
    assert!(codec::from_json_str(&text).unwrap().is_empty());
}

#[test]
fn test_encode_writes_array_positions() {
    let document = codec::encode(&create_positioned_graph());
    assert!(matches!(
        document.nodes[0].pos,
        Some(PositionField::Components(_))
    ));
}
