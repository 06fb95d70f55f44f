//! CLI for the benchmark extractor.
//!
//! Parses `extract_benchmarks <input_file> <output_file>`, sets up logging and
//! runs the extraction.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Usage line printed when the arguments are wrong.
pub const USAGE: &str = "Usage: extract_benchmarks <input_file> <output_file>";

/// Environment variable naming an optional Markdown summary path.
pub const MARKDOWN_ENV: &str = "EXTRACT_BENCHMARKS_MARKDOWN";

/// Exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for bad arguments.
pub const EXIT_USAGE: u8 = 1;

/// Extract benchmark results from `cargo bench` output into a JSON report.
///
/// Takes exactly two arguments. Help and version flags are disabled so that
/// every argument is a path, including ones starting with `-`.
#[derive(Parser, Debug)]
#[command(name = "extract_benchmarks")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Text file containing `cargo bench` output.
    #[arg(allow_hyphen_values = true)]
    pub input_file: PathBuf,

    /// JSON report to write. Parent directories are created.
    #[arg(allow_hyphen_values = true)]
    pub output_file: PathBuf,
}

/// Settings taken from the environment rather than the command line.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Also write a Markdown summary to this path.
    pub markdown: Option<PathBuf>,
}

impl Settings {
    /// Read settings from `EXTRACT_BENCHMARKS_MARKDOWN`. An empty value is
    /// treated as unset.
    pub fn from_env() -> Self {
        Self {
            markdown: std::env::var_os(MARKDOWN_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Parse the process arguments, install logging, and run.
pub fn run() -> anyhow::Result<ExitCode> {
    init_tracing();
    let stdout = std::io::stdout();
    let status = run_from(std::env::args_os(), &Settings::from_env(), &mut stdout.lock())?;
    Ok(ExitCode::from(status))
}

/// Run with explicit arguments, settings and summary sink. The first argument
/// is the program name. Returns the exit status.
///
/// Any argument count other than two prints [`USAGE`] to `out` and returns
/// [`EXIT_USAGE`] without touching the filesystem.
pub fn run_from<I, T>(args: I, settings: &Settings, out: &mut impl Write) -> anyhow::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let parsed = if args.len() == 3 {
        Cli::try_parse_from(&args).ok()
    } else {
        None
    };
    let Some(cli) = parsed else {
        writeln!(out, "{USAGE}").context("failed to print usage")?;
        return Ok(EXIT_USAGE);
    };

    execute(&cli, settings, out)?;
    Ok(EXIT_SUCCESS)
}

fn execute(cli: &Cli, settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    let results = bench_extractor::extract_to(&cli.input_file, &cli.output_file, out)
        .with_context(|| format!("extracting benchmarks from {}", cli.input_file.display()))?;

    if let Some(path) = &settings.markdown {
        bench_extractor::markdown::write_markdown(&results, path)
            .context("writing markdown summary")?;
    }

    Ok(())
}

/// Install a stderr fmt subscriber filtered by `RUST_LOG`, defaulting to
/// `warn`. Stdout is reserved for the summary.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
