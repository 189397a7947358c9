//! Cycle detection for pipeline graphs.
//!
//! Implements Kahn's algorithm (BFS-based topological sort) over a
//! [`PipelineGraph`]. This is the one piece of non-trivial logic in the
//! repository: everything around it is payload shaping.
//!
//! # Algorithm Overview
//!
//! Kahn's algorithm computes an in-degree table for every vertex, seeds a
//! BFS queue with all zero-in-degree vertices, then repeatedly removes a
//! vertex from the queue and decrements the in-degrees of its successors.
//! Any vertex whose in-degree falls to zero during this process is added to
//! the queue.
//!
//! If the queue is exhausted before every vertex has been visited, the
//! unvisited remainder form or depend on at least one directed cycle and the
//! graph is not a DAG. There is no cycle enumeration here; the only output
//! is the boolean verdict.

use std::collections::{HashMap, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::PipelineGraph;

/// Returns `true` if `graph` contains no directed cycle.
///
/// Total over its input: any graph, including an empty one or one with
/// self-loops and parallel duplicate edges, yields a verdict without failure. Parallel edges count
/// with multiplicity, so a target is only released once every one of its
/// incoming edges has been resolved. The verdict is independent of the order
/// in which edges were inserted and of the worklist processing order.
pub fn is_acyclic(graph: &PipelineGraph) -> bool {
    let g = graph.graph();

    // Build the in-degree table. Initialize every vertex to zero so sources
    // (vertices that never appear as a target) are seeded correctly.
    let mut in_degree: HashMap<NodeIndex, usize> = HashMap::with_capacity(g.node_count());
    for node_idx in g.node_indices() {
        in_degree.insert(node_idx, 0);
    }

    // Accumulate over all edges, duplicates counted with multiplicity.
    for edge_ref in g.edge_references() {
        *in_degree.entry(edge_ref.target()).or_insert(0) += 1;
    }

    // Seed the BFS queue with vertices that have no incoming edges.
    let mut queue: VecDeque<NodeIndex> = in_degree
        .iter()
        .filter(|&(_, &deg)| deg == 0)
        .map(|(&idx, _)| idx)
        .collect();

    let mut visited_count: usize = 0;
    let total_vertices = in_degree.len();

    // Kahn's BFS: remove zero-in-degree vertices, decrement successors.
    while let Some(node) = queue.pop_front() {
        visited_count += 1;

        for edge_ref in g.edges(node) {
            let target = edge_ref.target();
            if let Some(deg) = in_degree.get_mut(&target) {
                if *deg > 0 {
                    *deg -= 1;
                }
                if *deg == 0 {
                    queue.push_back(target);
                }
            }
        }
    }

    // Every vertex consumed: acyclic. Anything left over is on or behind a
    // cycle (a self-loop keeps its own vertex pinned above zero forever).
    visited_count == total_vertices
}
