// Copyright 2025 Parsanol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark result types.
//!
//! This module provides the `BenchmarkResult` record written to the dashboard
//! report: one per `bench:` line found in the benchmark output.

use serde::{Deserialize, Serialize};

const NANOS_PER_MICRO: f64 = 1_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// A single extracted benchmark measurement.
///
/// `time_us` and `time_ms` are always derived from `time_ns`. The fields are
/// private so a record can only be built through [`BenchmarkResult::new`], and
/// deserialization recomputes the derived fields instead of trusting the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredResult")]
pub struct BenchmarkResult {
    name: String,
    time_ns: u64,
    variance_ns: u64,
    time_us: f64,
    time_ms: f64,
}

impl BenchmarkResult {
    /// Create a new BenchmarkResult from a mean time and variance in nanoseconds.
    pub fn new(name: impl Into<String>, time_ns: u64, variance_ns: u64) -> Self {
        Self {
            name: name.into(),
            time_ns,
            variance_ns,
            time_us: time_ns as f64 / NANOS_PER_MICRO,
            time_ms: time_ns as f64 / NANOS_PER_MILLI,
        }
    }

    /// Benchmark identifier as reported by the harness.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mean iteration time in nanoseconds.
    pub fn time_ns(&self) -> u64 {
        self.time_ns
    }

    /// Reported variance in nanoseconds.
    pub fn variance_ns(&self) -> u64 {
        self.variance_ns
    }

    /// Mean iteration time in microseconds.
    pub fn time_us(&self) -> f64 {
        self.time_us
    }

    /// Mean iteration time in milliseconds.
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }
}

/// On-disk shape of a record. Derived fields are ignored when reading.
#[derive(Deserialize)]
struct StoredResult {
    name: String,
    time_ns: u64,
    variance_ns: u64,
}

impl From<StoredResult> for BenchmarkResult {
    fn from(stored: StoredResult) -> Self {
        BenchmarkResult::new(stored.name, stored.time_ns, stored.variance_ns)
    }
}
