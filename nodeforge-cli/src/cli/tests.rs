//! Tests for the `generate` command and its argument parsing.

use std::fs;
use std::io::{self, Write};

use clap::Parser;
use nodeforge_core::{FixtureError, Layout};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::commands::run_generate;
use super::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn seeded() -> GenerateCommand {
    GenerateCommand {
        node_count: 3,
        seed: Some(42),
        layout: LayoutArg::Compact,
        output: None,
    }
}

/// Writer whose every operation fails, standing in for a closed stdout.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

fn generate_cli(command: GenerateCommand) -> Cli {
    Cli {
        command: Command::Generate(command),
    }
}

/// Run the command and expect an error, panicking with the given message if it
/// succeeds.
fn run_generate_expecting_error(command: GenerateCommand, panic_msg: &str) -> CliError {
    match run_generate(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

#[rstest]
fn run_cli_records_seed(seeded: GenerateCommand) -> TestResult {
    let summary = run_cli(generate_cli(seeded))?;
    assert_eq!(summary.fixture.seed(), Some(42));
    assert_eq!(summary.fixture.nodes().count(), 3);
    assert_eq!(summary.layout, Layout::Compact);
    assert!(summary.output.is_none());
    Ok(())
}

#[rstest]
fn seeded_runs_are_reproducible(seeded: GenerateCommand) -> TestResult {
    let first = run_cli(generate_cli(seeded.clone()))?;
    let second = run_cli(generate_cli(seeded))?;
    assert_eq!(first.fixture, second.fixture);
    Ok(())
}

#[rstest]
fn unseeded_run_reports_drawn_seed(seeded: GenerateCommand) -> TestResult {
    let summary = run_cli(generate_cli(GenerateCommand {
        seed: None,
        ..seeded
    }))?;
    assert!(summary.fixture.seed().is_some());
    Ok(())
}

#[rstest]
fn run_generate_rejects_zero_nodes(seeded: GenerateCommand) {
    let err = run_generate_expecting_error(
        GenerateCommand {
            node_count: 0,
            ..seeded
        },
        "zero nodes must fail",
    );
    assert!(matches!(
        err,
        CliError::Core(FixtureError::InvalidNodeCount { got: 0 })
    ));
}

#[rstest]
#[case::compact(LayoutArg::Compact, Layout::Compact)]
#[case::expanded(LayoutArg::Expanded, Layout::Expanded)]
fn emit_fixture_writes_fallback_stream(
    seeded: GenerateCommand,
    #[case] arg: LayoutArg,
    #[case] layout: Layout,
) -> TestResult {
    let summary = run_cli(generate_cli(GenerateCommand {
        layout: arg,
        ..seeded
    }))?;
    let mut buffer = Vec::new();
    emit_fixture(&summary, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, summary.fixture.render(layout));
    Ok(())
}

#[rstest]
fn emit_fixture_writes_output_file(seeded: GenerateCommand) -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("large.ccn");
    let summary = run_cli(generate_cli(GenerateCommand {
        output: Some(path.clone()),
        ..seeded
    }))?;

    let mut untouched = Vec::new();
    emit_fixture(&summary, &mut untouched)?;

    assert!(untouched.is_empty(), "stdout must stay empty with --output");
    assert_eq!(fs::read_to_string(&path)?, summary.fixture.to_string());
    Ok(())
}

#[rstest]
fn emit_fixture_reports_unwritable_path(seeded: GenerateCommand) -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("missing").join("large.ccn");
    let summary = run_cli(generate_cli(GenerateCommand {
        output: Some(path.clone()),
        ..seeded
    }))?;

    let err = match emit_fixture(&summary, io::sink()) {
        Ok(()) => panic!("writing into a missing directory must fail"),
        Err(err) => err,
    };
    assert!(matches!(err, CliError::Io { path: ref failed, .. } if *failed == path));
    Ok(())
}

#[rstest]
fn emit_fixture_reports_failing_fallback_stream(seeded: GenerateCommand) -> TestResult {
    let summary = run_cli(generate_cli(seeded))?;
    let err = match emit_fixture(&summary, BrokenPipe) {
        Ok(()) => panic!("a broken fallback stream must fail"),
        Err(err) => err,
    };
    assert!(matches!(
        err,
        CliError::Stdout(ref source) if source.kind() == io::ErrorKind::BrokenPipe
    ));
    Ok(())
}

#[rstest]
fn clap_applies_defaults() -> TestResult {
    let cli = Cli::try_parse_from(["nodeforge", "generate"])?;
    let Command::Generate(command) = cli.command;
    assert_eq!(command.node_count, 300);
    assert_eq!(command.seed, None);
    assert_eq!(command.layout, LayoutArg::Compact);
    assert!(command.output.is_none());
    Ok(())
}

#[rstest]
fn clap_parses_all_options() -> TestResult {
    let cli = Cli::try_parse_from([
        "nodeforge",
        "generate",
        "--nodes",
        "12",
        "--seed",
        "7",
        "--layout",
        "expanded",
        "-o",
        "fixture.ccn",
    ])?;
    let Command::Generate(command) = cli.command;
    assert_eq!(command.node_count, 12);
    assert_eq!(command.seed, Some(7));
    assert_eq!(command.layout, LayoutArg::Expanded);
    assert_eq!(command.output, Some("fixture.ccn".into()));
    Ok(())
}

#[rstest]
#[case::unknown_layout(&["nodeforge", "generate", "--layout", "pretty"])]
#[case::negative_seed(&["nodeforge", "generate", "--seed", "-1"])]
#[case::non_numeric_nodes(&["nodeforge", "generate", "--nodes", "many"])]
fn clap_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}
