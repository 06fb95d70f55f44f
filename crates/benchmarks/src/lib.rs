//! Benchmark result extraction for the benchmark dashboard.
//!
//! This crate turns the text printed by `cargo bench` (libtest's bencher
//! format) into a JSON report sorted by mean iteration time.
//!
//! # Quick Start
//!
//! ```no_run
//! use bench_extractor::extract;
//!
//! let results = extract("target/bench-output.txt", "dashboard/data/benchmarks.json")?;
//! println!("fastest: {:?}", results.first().map(|r| r.name()));
//! # Ok::<(), bench_extractor::ExtractError>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - The `BenchmarkResult` record
//! - [`parser`] - Recognizing benchmark lines in raw output
//! - [`io`] - Reading input and writing JSON reports
//! - [`markdown`] - Markdown report generation
//! - [`error`] - Error types

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod io;
pub mod markdown;
pub mod parser;
pub mod result;

pub use error::{ExtractError, Result};
pub use parser::parse_benchmarks;
pub use result::BenchmarkResult;

use std::io::Write;
use std::path::Path;
use tracing::info;

/// Extract benchmark results from `input` and write them as JSON to `output`.
///
/// The summary is printed to standard output. See [`extract_to`].
///
/// # Errors
///
/// Returns an [`ExtractError`] if the input cannot be read or the report
/// cannot be written.
pub fn extract(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Vec<BenchmarkResult>> {
    let stdout = std::io::stdout();
    extract_to(input, output, &mut stdout.lock())
}

/// Extract benchmark results from `input`, write them as JSON to `output`,
/// and write the human-readable summary to `summary`.
///
/// Nothing is written to `output` unless the input was read successfully.
/// Returns the records in report order.
pub fn extract_to(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    summary: &mut impl Write,
) -> Result<Vec<BenchmarkResult>> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let text = io::read_input(input)?;
    let results = parse_benchmarks(&text);
    info!(
        input = %input.display(),
        count = results.len(),
        "parsed benchmark output"
    );

    io::write_results_json(&results, output)?;
    info!(output = %output.display(), "wrote benchmark report");

    write_summary(&results, summary)?;
    Ok(results)
}

/// Write the count line followed by one `name: time ns` line per record.
pub fn write_summary(results: &[BenchmarkResult], out: &mut impl Write) -> Result<()> {
    writeln!(out, "Extracted {} benchmark results", results.len()).map_err(ExtractError::Summary)?;
    for result in results {
        writeln!(out, "  {}: {} ns", result.name(), result.time_ns())
            .map_err(ExtractError::Summary)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = "\
running 3 tests
test bench_parse_header ... bench:       1,234 ns/iter (+/- 56)
test bench_parse_body   ... bench:      12,345 ns/iter (+/- 1,002)
test bench_lex          ... bench:         789 ns/iter (+/- 12)

test result: ok. 0 passed; 0 failed; 0 ignored; 3 measured; 0 filtered out
";

    #[test]
    fn test_extract_writes_sorted_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bench.txt");
        let output = dir.path().join("out/benchmarks.json");
        fs::write(&input, SAMPLE).unwrap();

        let mut summary = Vec::new();
        let results = extract_to(&input, &output, &mut summary).unwrap();

        let names: Vec<&str> = results.iter().map(BenchmarkResult::name).collect();
        assert_eq!(names, vec!["bench_lex", "bench_parse_header", "bench_parse_body"]);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json[1]["name"], "bench_parse_header");
        assert_eq!(json[1]["time_ns"], 1234);
        assert_eq!(json[1]["variance_ns"], 56);
        assert_eq!(json[1]["time_us"], 1.234);
        assert_eq!(json[1]["time_ms"], 0.001234);
        assert_eq!(json[2]["variance_ns"], 1002);

        assert_eq!(
            String::from_utf8(summary).unwrap(),
            "Extracted 3 benchmark results\n  \
             bench_lex: 789 ns\n  \
             bench_parse_header: 1234 ns\n  \
             bench_parse_body: 12345 ns\n"
        );
    }

    #[test]
    fn test_extract_derived_units_are_exact() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bench.txt");
        let output = dir.path().join("benchmarks.json");
        fs::write(&input, SAMPLE).unwrap();

        extract_to(&input, &output, &mut std::io::sink()).unwrap();
        for result in io::read_results_json(&output).unwrap() {
            assert_eq!(result.time_us(), result.time_ns() as f64 / 1000.0);
            assert_eq!(result.time_ms(), result.time_ns() as f64 / 1_000_000.0);
        }
    }

    #[test]
    fn test_extract_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bench.txt");
        let output = dir.path().join("benchmarks.json");
        fs::write(&input, "running 0 tests\n").unwrap();

        let mut summary = Vec::new();
        let results = extract_to(&input, &output, &mut summary).unwrap();

        assert!(results.is_empty());
        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
        assert_eq!(
            String::from_utf8(summary).unwrap(),
            "Extracted 0 benchmark results\n"
        );
    }

    #[test]
    fn test_extract_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bench.txt");
        let output = dir.path().join("benchmarks.json");
        fs::write(&input, SAMPLE).unwrap();

        extract_to(&input, &output, &mut std::io::sink()).unwrap();
        let first = fs::read(&output).unwrap();
        extract_to(&input, &output, &mut std::io::sink()).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out/benchmarks.json");

        let err = extract_to(dir.path().join("missing.txt"), &output, &mut std::io::sink())
            .unwrap_err();

        assert!(matches!(err, ExtractError::ReadInput { .. }));
        assert!(!output.exists());
        assert!(!dir.path().join("out").exists());
    }
}
