//! Pipeline payload representation.
//!
//! [`Pipeline`] is the root type for a submitted pipeline description: the
//! JSON object `{"nodes": [...], "edges": [...]}` produced by the upstream
//! editor. Nodes and edges carry whatever extra data the editor attaches
//! (canvas position, handles, per-node configuration); everything beyond the
//! fields declared here is preserved opaquely in the `extra` catch-all maps.
//!
//! # Unknown field preservation
//!
//! Every struct in this module flattens undeclared keys into an `extra` map
//! (`#[serde(flatten)]`). This keeps the parser total over payloads from
//! newer editor versions. **Never** add `#[serde(deny_unknown_fields)]` here
//! or on any child struct.

use serde::{Deserialize, Serialize};

/// The submitted pipeline: node list, edge list, nothing else required.
///
/// Deserialize from JSON with [`serde_json::from_str`]; both lists may be
/// empty. The node list is reported back by count only; the cycle detector
/// never consults it (vertex existence is derived from edge endpoints).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Ordered list of pipeline nodes as supplied by the caller.
    pub nodes: Vec<Node>,

    /// Ordered list of directed edges as supplied by the caller.
    pub edges: Vec<Edge>,

    /// Unknown top-level JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A pipeline node.
///
/// Only `id` is declared; the detector treats node identity as an opaque
/// equality-comparable token and ignores everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Opaque node identifier. Identity is by value equality.
    pub id: String,

    /// Everything else the editor attached (position, data, type, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A directed edge `source → target`.
///
/// Both endpoint fields are required: a payload containing an edge without a
/// `source` or `target` is rejected at deserialization, before any graph
/// logic runs. Duplicate edges and self-loops are legal and are preserved as
/// distinct entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the node this edge leaves.
    pub source: String,

    /// Identifier of the node this edge enters.
    pub target: String,

    /// Everything else the editor attached (edge id, handles, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Edge {
    /// Constructs a bare edge with no extra data. Convenience for callers
    /// that build pipelines programmatically.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    /// Serialize and immediately re-parse, asserting structural equality.
    fn round_trip(p: &Pipeline) -> Pipeline {
        let json = serde_json::to_string(p).expect("serialize");
        let back: Pipeline = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(*p, back, "round-trip mismatch:\n{json}");
        back
    }

    #[test]
    fn pipeline_minimal_parse() {
        let json = r#"{"nodes": [], "edges": []}"#;
        let p: Pipeline = serde_json::from_str(json).expect("deserialize");
        assert!(p.nodes.is_empty());
        assert!(p.edges.is_empty());
        assert!(p.extra.is_empty());
    }

    #[test]
    fn pipeline_nodes_and_edges_parse() {
        let json = r#"{
            "nodes": [
                {"id": "customInput-1", "type": "customInput", "position": {"x": 100, "y": 200}},
                {"id": "llm-1", "type": "llm", "position": {"x": 400, "y": 200}}
            ],
            "edges": [
                {"source": "customInput-1", "target": "llm-1", "sourceHandle": "customInput-1-value"}
            ]
        }"#;
        let p: Pipeline = serde_json::from_str(json).expect("deserialize");
        assert_eq!(p.nodes.len(), 2);
        assert_eq!(p.edges.len(), 1);
        assert_eq!(p.nodes[0].id, "customInput-1");
        assert_eq!(p.edges[0].source, "customInput-1");
        assert_eq!(p.edges[0].target, "llm-1");
    }

    /// Editor-attached fields on nodes and edges survive a round trip.
    #[test]
    fn pipeline_unknown_fields_preserved() {
        let json = r#"{
            "nodes": [{"id": "n1", "position": {"x": 1, "y": 2}, "data": {"label": "In"}}],
            "edges": [{"source": "n1", "target": "n1", "id": "reactflow__edge-n1n1"}],
            "x_editor_version": "0.4.2"
        }"#;
        let p: Pipeline = serde_json::from_str(json).expect("deserialize");

        assert_eq!(
            p.extra.get("x_editor_version").and_then(|v| v.as_str()),
            Some("0.4.2")
        );
        assert!(p.nodes[0].extra.contains_key("position"));
        assert!(p.edges[0].extra.contains_key("id"));

        let serialized = serde_json::to_string(&p).expect("serialize");
        assert!(serialized.contains("x_editor_version"));
        assert!(serialized.contains("reactflow__edge-n1n1"));
        round_trip(&p);
    }

    /// Missing `nodes` must fail deserialization.
    #[test]
    fn pipeline_missing_nodes_fails() {
        let result: Result<Pipeline, _> = serde_json::from_str(r#"{"edges": []}"#);
        assert!(result.is_err(), "missing nodes should fail");
    }

    /// Missing `edges` must fail deserialization.
    #[test]
    fn pipeline_missing_edges_fails() {
        let result: Result<Pipeline, _> = serde_json::from_str(r#"{"nodes": []}"#);
        assert!(result.is_err(), "missing edges should fail");
    }

    /// An edge without a `source` is a boundary-validation failure: it must
    /// be rejected at parse time, never reaching the detector.
    #[test]
    fn edge_missing_source_fails() {
        let json = r#"{"nodes": [], "edges": [{"target": "b"}]}"#;
        let result: Result<Pipeline, _> = serde_json::from_str(json);
        assert!(result.is_err(), "edge without source should fail");
    }

    /// An edge without a `target` is likewise rejected at parse time.
    #[test]
    fn edge_missing_target_fails() {
        let json = r#"{"nodes": [], "edges": [{"source": "a"}]}"#;
        let result: Result<Pipeline, _> = serde_json::from_str(json);
        assert!(result.is_err(), "edge without target should fail");
    }

    /// A node without an `id` fails; node identity is the one thing we need.
    #[test]
    fn node_missing_id_fails() {
        let json = r#"{"nodes": [{"type": "llm"}], "edges": []}"#;
        let result: Result<Pipeline, _> = serde_json::from_str(json);
        assert!(result.is_err(), "node without id should fail");
    }

    /// Duplicate edges are preserved as distinct entries, not deduplicated.
    #[test]
    fn duplicate_edges_preserved() {
        let json = r#"{
            "nodes": [],
            "edges": [
                {"source": "a", "target": "b"},
                {"source": "a", "target": "b"}
            ]
        }"#;
        let p: Pipeline = serde_json::from_str(json).expect("deserialize");
        assert_eq!(p.edges.len(), 2);
        assert_eq!(p.edges[0], p.edges[1]);
    }

    #[test]
    fn edge_new_constructs_bare_edge() {
        let e = Edge::new("a", "b");
        assert_eq!(e.source, "a");
        assert_eq!(e.target, "b");
        assert!(e.extra.is_empty());
    }

    #[test]
    fn pipeline_programmatic_round_trip() {
        let p = Pipeline {
            nodes: vec![
                Node {
                    id: "in-1".to_owned(),
                    extra: serde_json::Map::new(),
                },
                Node {
                    id: "out-1".to_owned(),
                    extra: serde_json::Map::new(),
                },
            ],
            edges: vec![Edge::new("in-1", "out-1")],
            extra: serde_json::Map::new(),
        };
        let rt = round_trip(&p);
        assert_eq!(rt.nodes.len(), 2);
        assert_eq!(rt.edges[0].source, "in-1");
    }
}
