//! Pipeline summary: the response produced for a submitted pipeline.

use serde::Serialize;

use crate::cycles::is_acyclic;
use crate::graph::build_graph;
use crate::pipeline::Pipeline;

/// Counts and acyclicity verdict for one submitted pipeline.
///
/// Serializes to exactly `{"num_nodes": N, "num_edges": M, "is_dag": B}`.
///
/// The counts are the literal lengths of the caller-supplied lists: no
/// deduplication, no check that edge endpoints appear in the node list.
/// Counts and acyclicity are independent facts: isolated nodes raise
/// `num_nodes` without ever touching the verdict, and `is_dag` is computed
/// from the edge list alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    /// Length of the supplied node list.
    pub num_nodes: usize,
    /// Length of the supplied edge list.
    pub num_edges: usize,
    /// Whether the graph derived from the edge list contains no cycle.
    pub is_dag: bool,
}

impl PipelineSummary {
    /// Analyzes a pipeline: counts both lists and runs cycle detection over
    /// the edges. One-shot and stateless; the working graph is discarded on
    /// return.
    pub fn analyze(pipeline: &Pipeline) -> Self {
        let graph = build_graph(&pipeline.edges);
        Self {
            num_nodes: pipeline.nodes.len(),
            num_edges: pipeline.edges.len(),
            is_dag: is_acyclic(&graph),
        }
    }
}
