// Copyright 2025 Parsanol Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for benchmark reports.
//!
//! This module reads benchmark output from disk and writes the resulting
//! records back out as JSON, creating parent directories as needed.

use crate::error::{ExtractError, Result};
use crate::result::BenchmarkResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the raw benchmark output to be scanned.
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ExtractError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure the directory chain leading to `path` exists.
///
/// A bare file name has no parent to create.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Write `contents` to `path`, creating parent directories and truncating any
/// existing file.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|source| ExtractError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(())
}

/// Write benchmark results to a JSON file with 2-space indentation.
pub fn write_results_json(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    write_file(path.as_ref(), &json)
}

/// Read results from a JSON report.
pub fn read_results_json(path: impl AsRef<Path>) -> Result<Vec<BenchmarkResult>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ExtractError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ExtractError::InvalidReport {
        path: path.to_path_buf(),
        source,
    })
}
