//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`]. This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// A single structured JSON object.
    Json,
}

/// All top-level subcommands exposed by the `pipedag` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check a pipeline payload: report node/edge counts and acyclicity.
    Check {
        /// Path to a pipeline JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Exit with code 1 when the pipeline contains a cycle.
        ///
        /// The summary is still printed; this only changes the exit code so
        /// the check can gate a CI step. Without the flag a cycle is an
        /// ordinary result and the exit code stays 0.
        #[arg(long)]
        fail_on_cycle: bool,
    },

    /// Print the pipedag-core library version.
    Version,
}

/// Root CLI struct for the `pipedag` binary.
///
/// Global flags are marked `global = true` so clap propagates them to every
/// subcommand.
#[derive(Parser)]
#[command(
    name = "pipedag",
    version,
    about = "Pipeline DAG checker",
    long_about = "Checks whether a pipeline description ({\"nodes\": [...], \"edges\": [...]})\n\
                  forms a directed acyclic graph, and reports node and edge counts."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit timing information to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `PIPEDAG_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence. Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "PIPEDAG_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
