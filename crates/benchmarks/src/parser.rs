// Copyright 2025 Parsanol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Parsing of libtest benchmark output.
//!
//! Recognizes result lines of the form
//!
//! ```text
//! test bench_parse_header ... bench:   1,234 ns/iter (+/- 56)
//! ```
//!
//! anywhere in the text. Everything else is ignored.

use crate::result::BenchmarkResult;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Pattern for a single benchmark result. `.` does not cross line boundaries.
pub const BENCH_LINE_PATTERN: &str =
    r"test\s+(\S+)\s+.*bench:\s+([0-9,]+)\s+ns/iter\s+\(\+/-\s+([0-9,]+)\)";

static BENCH_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(BENCH_LINE_PATTERN).expect("benchmark line pattern is valid"));

/// Extract every benchmark result from `text`, sorted ascending by `time_ns`.
///
/// The sort is stable, so results with equal times keep their order of
/// appearance. Matches whose numerals cannot be read as integers are skipped.
pub fn parse_benchmarks(text: &str) -> Vec<BenchmarkResult> {
    let mut results: Vec<BenchmarkResult> = BENCH_LINE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = &caps[1];
            let (Some(time_ns), Some(variance_ns)) =
                (parse_grouped(&caps[2]), parse_grouped(&caps[3]))
            else {
                warn!(
                    benchmark = name,
                    time = &caps[2],
                    variance = &caps[3],
                    "skipping benchmark with unreadable numerals"
                );
                return None;
            };
            debug!(benchmark = name, time_ns, variance_ns, "matched benchmark");
            Some(BenchmarkResult::new(name, time_ns, variance_ns))
        })
        .collect();

    results.sort_by_key(BenchmarkResult::time_ns);
    results
}

/// Parse a numeral that may contain comma thousands separators, e.g. `12,345`.
///
/// Returns `None` when nothing but commas remains or the value overflows `u64`.
pub fn parse_grouped(numeral: &str) -> Option<u64> {
    let digits: String = numeral.chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}
