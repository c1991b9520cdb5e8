//! Command-line interface orchestration for nodeforge.
//!
//! The CLI offers a single `generate` command that samples one fixture and
//! writes it to stdout or to a file.

mod commands;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, LayoutArg, emit_fixture, run_cli,
};

#[cfg(test)]
mod tests;
