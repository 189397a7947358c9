//! Graph construction from an edge list using `petgraph`.
//!
//! Builds a `StableDiGraph` from the submitted edge list in a single pass,
//! interning each endpoint identifier into a vertex on first sight.
//!
//! # Edge-derived vertex set
//!
//! The vertex set is exactly the set of identifiers appearing as a source or
//! target of at least one edge. The caller's node list is **never** consulted:
//! an endpoint id is inserted into the graph on first sight, so construction
//! cannot fail. Nodes that appear in no edge are invisible here; they are
//! counted by the surrounding summary, not by the detector.
//!
//! # Multigraph semantics
//!
//! Duplicate edges and self-loops are inserted as distinct parallel edges.
//! Each one contributes independently to its target's in-degree, which is
//! what the cycle detector's release accounting requires.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::pipeline::Edge;

/// Weight stored inline on each petgraph node.
///
/// Just the identifier: the detector needs nothing else about a vertex.
#[derive(Debug, Clone)]
pub struct NodeWeight {
    /// Endpoint identifier copied from the first edge that mentioned it.
    pub local_id: String,
}

/// A directed multigraph derived from a pipeline's edge list.
///
/// Construct with [`build_graph`]. The identifier-to-index map used during
/// construction is not retained; the detector walks the graph by index only.
#[derive(Debug)]
pub struct PipelineGraph {
    graph: StableDiGraph<NodeWeight, ()>,
}

impl PipelineGraph {
    /// Returns the number of distinct vertices derived from edge endpoints.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges, counting duplicates and self-loops.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns a reference to the underlying [`StableDiGraph`] for use by
    /// the cycle detector.
    pub fn graph(&self) -> &StableDiGraph<NodeWeight, ()> {
        &self.graph
    }
}

/// Builds a [`PipelineGraph`] from an edge list.
///
/// Single pass, O(E) with E the number of edges: each endpoint is resolved
/// through a scratch id map (inserting a fresh vertex on first sight) and
/// the edge is added between the resolved indices. Infallible: any edge
/// list, including one with duplicate or self-looping edges, produces a
/// graph.
pub fn build_graph(edges: &[Edge]) -> PipelineGraph {
    let mut graph: StableDiGraph<NodeWeight, ()> =
        StableDiGraph::with_capacity(edges.len(), edges.len());
    let mut id_to_index: HashMap<String, NodeIndex> = HashMap::new();

    for edge in edges {
        let source_idx = *id_to_index.entry(edge.source.clone()).or_insert_with(|| {
            graph.add_node(NodeWeight {
                local_id: edge.source.clone(),
            })
        });
        let target_idx = *id_to_index.entry(edge.target.clone()).or_insert_with(|| {
            graph.add_node(NodeWeight {
                local_id: edge.target.clone(),
            })
        });
        graph.add_edge(source_idx, target_idx, ());
    }

    PipelineGraph { graph }
}
