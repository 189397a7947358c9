//! Implementation of `pipedag check <file>`.
//!
//! Parses a pipeline JSON payload and prints a summary to stdout:
//! - node count (literal length of the supplied node list)
//! - edge count (literal length of the supplied edge list)
//! - whether the edge-derived graph is a DAG
//!
//! In `--format json` mode a single JSON object is emitted; in human mode,
//! aligned key/value lines.
//!
//! Exit codes: 0 = success, 2 = parse failure, 1 = cycle found while
//! `--fail-on-cycle` is set.
use std::time::Instant;

use pipedag_core::{Pipeline, PipelineSummary};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatterConfig, write_summary_human, write_summary_json, write_timing};

/// Runs the `check` command.
///
/// Parses `content` as a pipeline payload, analyzes it, and writes the
/// summary to stdout in the requested format. With `fail_on_cycle` set, a
/// cyclic pipeline additionally yields [`CliError::CycleDetected`] after the
/// summary has been written.
///
/// # Errors
///
/// - [`CliError::ParseFailed`]: the content is not a valid payload.
/// - [`CliError::IoError`]: writing to stdout failed.
/// - [`CliError::CycleDetected`]: `fail_on_cycle` and the verdict is false.
pub fn run(
    content: &str,
    format: &OutputFormat,
    config: &FormatterConfig,
    fail_on_cycle: bool,
) -> Result<(), CliError> {
    let started = Instant::now();

    let pipeline: Pipeline =
        serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
            detail: format!("line {}, column {}: {e}", e.line(), e.column()),
        })?;

    let summary = PipelineSummary::analyze(&pipeline);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => write_summary_human(&mut out, &summary, config),
        OutputFormat::Json => write_summary_json(&mut out, &summary),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })?;

    write_timing(&mut std::io::stderr().lock(), "checked", started.elapsed(), config).map_err(
        |e| CliError::IoError {
            source: "stderr".to_owned(),
            detail: e.to_string(),
        },
    )?;

    if fail_on_cycle && !summary.is_dag {
        return Err(CliError::CycleDetected);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn config() -> FormatterConfig {
        FormatterConfig {
            colors: false,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn valid_payload_succeeds() {
        let content = r#"{"nodes": [{"id": "a"}], "edges": []}"#;
        let result = run(content, &OutputFormat::Json, &config(), false);
        assert!(result.is_ok());
    }

    #[test]
    fn malformed_json_is_parse_failure() {
        let err = run("{not json", &OutputFormat::Json, &config(), false)
            .expect_err("should fail to parse");
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, CliError::ParseFailed { .. }));
    }

    #[test]
    fn edge_missing_target_is_parse_failure() {
        let content = r#"{"nodes": [], "edges": [{"source": "a"}]}"#;
        let err = run(content, &OutputFormat::Json, &config(), false)
            .expect_err("should fail to parse");
        match err {
            CliError::ParseFailed { detail } => {
                assert!(detail.contains("target"), "detail: {detail}");
            }
            other => panic!("expected ParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn cycle_without_flag_is_ok() {
        let content = r#"{"nodes": [], "edges": [
            {"source": "a", "target": "b"},
            {"source": "b", "target": "a"}
        ]}"#;
        let result = run(content, &OutputFormat::Json, &config(), false);
        assert!(result.is_ok(), "a cycle is a result, not a failure");
    }

    #[test]
    fn cycle_with_flag_is_exit_1() {
        let content = r#"{"nodes": [], "edges": [
            {"source": "a", "target": "b"},
            {"source": "b", "target": "a"}
        ]}"#;
        let err = run(content, &OutputFormat::Json, &config(), true)
            .expect_err("fail_on_cycle should trip");
        assert_eq!(err.exit_code(), 1);
        assert!(matches!(err, CliError::CycleDetected));
    }

    #[test]
    fn acyclic_with_flag_is_ok() {
        let content = r#"{"nodes": [], "edges": [{"source": "a", "target": "b"}]}"#;
        let result = run(content, &OutputFormat::Json, &config(), true);
        assert!(result.is_ok());
    }
}
