//! Core library for the pipedag pipeline DAG checker.
//!
//! Parses pipeline payloads (`{"nodes": [...], "edges": [...]}`), builds a
//! directed multigraph from the edge list, and decides acyclicity with
//! Kahn's algorithm. All I/O and presentation lives in the CLI crate.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod cycles;
pub mod graph;
pub mod pipeline;
pub mod summary;

pub use cycles::is_acyclic;
pub use graph::{NodeWeight, PipelineGraph, build_graph};
pub use pipeline::{Edge, Node, Pipeline};
pub use summary::PipelineSummary;

/// Returns the current version of the pipedag-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
