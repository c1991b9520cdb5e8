//! CLI entry point for generating node-graph fixtures.
//!
//! Parses command-line arguments with clap, samples a fixture, writes it to
//! stdout or the requested file, and maps errors to exit codes. Logging is
//! initialized first and always targets stderr.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use nodeforge_cli::{
    cli::{Cli, CliError, emit_fixture, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    emit_fixture(&summary, stdout.lock()).context("failed to emit fixture")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some(core.code()),
                CliError::Io { .. } | CliError::Stdout(_) => None,
            });
        let code_field = code.map(|code| field::display(code.as_str()));
        let message = format!("{err:#}");

        error!(error = %message, code = code_field, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
