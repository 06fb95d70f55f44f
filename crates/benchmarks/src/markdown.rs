// Copyright 2025 Parsanol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown output generation for benchmark results.

use crate::error::Result;
use crate::io::write_file;
use crate::result::BenchmarkResult;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use std::path::Path;

/// Generate a markdown summary stamped with the current time.
pub fn generate_summary(results: &[BenchmarkResult]) -> String {
    render_summary(results, Utc::now())
}

/// Render the markdown summary for a fixed generation time.
pub fn render_summary(results: &[BenchmarkResult], generated_at: DateTime<Utc>) -> String {
    let mut output = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(output, "# Benchmark Summary");
    let _ = writeln!(output);
    let _ = writeln!(output, "Generated: {}", generated_at.to_rfc3339());
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "| Benchmark | Time (ns) | Variance (ns) | Time (µs) | Time (ms) |"
    );
    let _ = writeln!(
        output,
        "|-----------|-----------|---------------|-----------|-----------|"
    );

    for result in results {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} |",
            result.name(),
            result.time_ns(),
            result.variance_ns(),
            result.time_us(),
            result.time_ms()
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "---");
    let _ = writeln!(output, "Total benchmarks: {}", results.len());

    output
}

/// Write the markdown summary to `path`, creating parent directories.
pub fn write_markdown(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &generate_summary(results))
}
