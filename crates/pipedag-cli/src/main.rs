//! Entry point for the `pipedag` binary.
//!
//! Parses arguments, dispatches to the command modules, and maps any
//! [`CliError`] to a stderr message plus its stable exit code.
mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser as _;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::format::FormatterConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);

    match &cli.command {
        Command::Check {
            file,
            fail_on_cycle,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::check::run(&content, &cli.format, &config, *fail_on_cycle)
        }
        Command::Version => {
            println!("{}", pipedag_core::version());
            Ok(())
        }
    }
}
