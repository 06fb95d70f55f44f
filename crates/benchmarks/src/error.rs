// Copyright 2025 Parsanol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for benchmark extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting or writing benchmark reports.
///
/// Every variant that touches the filesystem carries the path involved, so the
/// diagnostic printed by the CLI names the file that could not be accessed.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The benchmark output file could not be read
    #[error("failed to read benchmark output {}", .path.display())]
    ReadInput {
        /// Input file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The parent directory of an output file could not be created
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be written
    #[error("failed to write report {}", .path.display())]
    WriteOutput {
        /// Report file that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be parsed as a result array
    #[error("invalid report {}", .path.display())]
    InvalidReport {
        /// Report file that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be serialized
    #[error("failed to serialize benchmark results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The summary could not be written to its sink
    #[error("failed to write summary: {0}")]
    Summary(#[source] std::io::Error),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
