//! Command execution and runtime logic.
//!
//! Contains logging initialization, the dispatch from parsed arguments
//! to the generate command, and the mapping of failures to an exit code.

use anyhow::Result;
use enumgen_core::cli::ExitCode;
use std::io::Write;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands;

/// Initializes logging infrastructure.
///
/// Logs go to stderr so stdout stays free for generated code. `RUST_LOG`
/// is honored unless `verbose` forces the debug level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the parsed command line.
///
/// # Errors
///
/// Returns an error if generation or file I/O fails.
pub fn execute(cli: Cli) -> Result<ExitCode> {
    commands::generate::run(&commands::generate::GenerateOptions {
        file: cli.file,
        output: cli.output,
        yaml: cli.yaml,
        package: cli.package,
    })
}

/// Turns the outcome of a run into the process exit code.
///
/// Failures are printed with their full context chain to `stderr` and map
/// to [`ExitCode::ERROR`].
pub fn finish<W: Write>(result: Result<ExitCode>, stderr: &mut W) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            // Nothing left to report to if stderr itself is gone
            let _ = writeln!(stderr, "Error: {err:#}");
            ExitCode::ERROR
        }
    }
}
