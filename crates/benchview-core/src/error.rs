// Dweve benchview - Benchmark aggregation, tabulation and charting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for record loading, grouping and value derivation.
//!
//! Every failure in this crate is fatal for the run: a benchmark log that
//! cannot be read, a line that is not a JSON object, or a record that lacks
//! a field the pipeline was configured to read. Non-fatal consistency
//! problems are reported elsewhere as diagnostics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while turning benchmark logs into aggregated values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The input source could not be opened or read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The input file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The offending file
        path: PathBuf,
        /// Actual size in bytes
        actual: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// A line is not valid JSON, or is valid JSON but not an object.
    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// A record lacks a field the pipeline needs.
    #[error("Missing field '{field}' in record for '{algorithm}'")]
    MissingField {
        /// The field that was looked up
        field: String,
        /// Algorithm identity of the record, or `?` when the identity itself is missing
        algorithm: String,
    },

    /// A field exists but holds a value of the wrong kind.
    #[error("Field '{field}' in record for '{algorithm}' is not {expected}")]
    FieldType {
        /// The field that was looked up
        field: String,
        /// Algorithm identity of the record
        algorithm: String,
        /// Human-readable description of the expected kind
        expected: &'static str,
    },

    /// The configured metric cannot be expressed in the configured unit.
    #[error("Value '{metric}' and unit '{unit}' incompatible")]
    IncompatibleUnit {
        /// Metric field name
        metric: String,
        /// Unit name
        unit: String,
    },

    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl CoreError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a malformed-record error for a given input line.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(field: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            algorithm: algorithm.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CoreError::io_error(
            "bench.jsonl",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bench.jsonl"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = CoreError::missing_field("num_edges", "Link-cut");
        assert_eq!(
            err.to_string(),
            "Missing field 'num_edges' in record for 'Link-cut'"
        );
    }

    #[test]
    fn test_incompatible_unit_display() {
        let err = CoreError::IncompatibleUnit {
            metric: "rotation_count".to_string(),
            unit: "ms".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Value 'rotation_count' and unit 'ms' incompatible"
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = CoreError::malformed(3, "expected a JSON object");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("expected a JSON object"));
    }
}
