//! Summary output formatting: human-readable and JSON modes.
//!
//! Two output strategies for a [`PipelineSummary`]:
//!
//! - **Human mode** (default): aligned key/value lines to stdout with the
//!   verdict color-coded (green for acyclic, red for a cycle). Colors are
//!   disabled when `--no-color` is set, the `NO_COLOR` environment variable
//!   is present (per <https://no-color.org>), or stdout is not a TTY (the
//!   summary is redirected to a file or a pipe).
//! - **JSON mode**: the summary serialized as a single JSON object, the
//!   wire shape `{"num_nodes": N, "num_edges": M, "is_dag": B}`.
//!
//! Verbose mode additionally writes timing lines to stderr; quiet mode
//! suppresses them.

use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use pipedag_core::PipelineSummary;

/// Returns `true` if ANSI color codes should be emitted.
///
/// Colors are disabled when any of the following conditions hold:
/// - `no_color_flag` is `true` (the `--no-color` CLI flag was passed).
/// - The `NO_COLOR` environment variable is present (any value).
/// - stdout is not a TTY (the summary is redirected to a file or a pipe).
///
/// The TTY check targets stdout because that is where the colored summary
/// goes; stderr only ever carries plain error and timing lines.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

/// Configuration for the summary formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    ///
    /// `no_color_flag` is the `--no-color` boolean. Color detection also
    /// checks the `NO_COLOR` env var and whether stdout is a TTY.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Writes a summary in human-readable aligned format.
///
/// ```text
/// nodes:   4
/// edges:   4
/// is_dag:  true
/// ```
///
/// The `is_dag` value is color-coded when `config.colors` is `true`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    summary: &PipelineSummary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    writeln!(writer, "nodes:   {}", summary.num_nodes)?;
    writeln!(writer, "edges:   {}", summary.num_edges)?;

    if config.colors {
        let color = if summary.is_dag { ANSI_GREEN } else { ANSI_RED };
        writeln!(writer, "is_dag:  {color}{}{ANSI_RESET}", summary.is_dag)
    } else {
        writeln!(writer, "is_dag:  {}", summary.is_dag)
    }
}

/// Writes a summary as a single JSON object followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    summary: &PipelineSummary,
) -> std::io::Result<()> {
    let json = serde_json::to_string(summary).map_err(std::io::Error::other)?;
    writeln!(writer, "{json}")
}

/// Writes timing information to `writer` in verbose mode.
///
/// No-op when `config.verbose` is `false`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet || !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}
