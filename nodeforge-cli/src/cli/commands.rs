//! Command implementations and argument parsing for the nodeforge CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use nodeforge_core::{DEFAULT_NODE_COUNT, Fixture, FixtureError, FixtureGeneratorBuilder, Layout};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "nodeforge",
    about = "Generate randomized node-graph fixtures for parser stress tests."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one fixture.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of indexed nodes to declare.
    #[arg(
        long = "nodes",
        default_value_t = DEFAULT_NODE_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub node_count: usize,

    /// Seed for reproducible output (drawn from OS entropy when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Whitespace layout of the generated text.
    #[arg(long, value_enum, default_value_t = LayoutArg::Compact)]
    pub layout: LayoutArg,

    /// Write the fixture to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Layouts selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// One line per declaration.
    Compact,
    /// One line per child reference.
    Expanded,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Compact => Self::Compact,
            LayoutArg::Expanded => Self::Expanded,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the fixture to a file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the fixture to the fallback stream failed.
    #[error("failed to write fixture to stdout: {0}")]
    Stdout(#[source] io::Error),
    /// Core configuration or seeding failed.
    #[error(transparent)]
    Core(#[from] FixtureError),
}

/// A generated fixture together with where and how it should be written.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// The sampled fixture.
    pub fixture: Fixture,
    /// Layout used when writing the fixture.
    pub layout: Layout,
    /// Destination file; `None` writes to the fallback stream.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when configuration or seeding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use nodeforge_cli::cli::{Cli, Command, GenerateCommand, LayoutArg, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         node_count: 3,
///         seed: Some(42),
///         layout: LayoutArg::Compact,
///         output: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.fixture.nodes().count(), 3);
/// assert_eq!(summary.fixture.seed(), Some(42));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(node_count = command.node_count, seeded = command.seed.is_some()),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let GenerateCommand {
        node_count,
        seed,
        layout,
        output,
    } = command;

    let mut builder = FixtureGeneratorBuilder::new().with_node_count(node_count);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    let fixture = builder.build()?.sample()?;

    info!(
        node_count = fixture.node_count(),
        seed = fixture.seed(),
        "fixture generated"
    );
    Ok(GenerationSummary {
        fixture,
        layout: layout.into(),
        output,
    })
}

/// Writes the fixture to its configured file, or to `fallback` when no output
/// path was given.
///
/// # Errors
/// Returns [`CliError::Io`] when the output file cannot be created or written,
/// and [`CliError::Stdout`] when writing to `fallback` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use nodeforge_cli::cli::{Cli, Command, GenerateCommand, LayoutArg, emit_fixture, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Generate(GenerateCommand {
///         node_count: 2,
///         seed: Some(1),
///         layout: LayoutArg::Expanded,
///         output: None,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// emit_fixture(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("pass B;\n"));
/// # Ok(())
/// # }
/// ```
pub fn emit_fixture(summary: &GenerationSummary, fallback: impl Write) -> Result<(), CliError> {
    match &summary.output {
        Some(path) => {
            let to_io_error = |source| CliError::Io {
                path: path.clone(),
                source,
            };
            let file = File::create(path).map_err(to_io_error)?;
            write_fixture(summary, BufWriter::new(file)).map_err(to_io_error)?;
            info!(path = %path.display(), "fixture written");
            Ok(())
        }
        None => write_fixture(summary, BufWriter::new(fallback)).map_err(CliError::Stdout),
    }
}

fn write_fixture(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    writer.write_all(summary.fixture.render(summary.layout).as_bytes())?;
    writer.flush()
}
