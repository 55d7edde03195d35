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

//! Structured error types for the benchview CLI.
//!
//! Every command returns `Result<(), CliError>`. Library failures are wrapped
//! unchanged so their messages reach the user as written.

use benchview_chart::ChartError;
use benchview_core::CoreError;
use benchview_table::TableError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// The main error type for benchview CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchview_cli::error::CliError;
///
/// fn read_log(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Loading or aggregating records failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Building a table failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Planning or rendering a chart failed.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Writing output failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The destination that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_are_transparent() {
        let core = CoreError::missing_field("num_edges", "MTR");
        let message = core.to_string();
        assert_eq!(CliError::from(core.clone()).to_string(), message);
        assert_eq!(CliError::from(TableError::from(core)).to_string(), message);
    }

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "out.svg",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error for 'out.svg': denied");
    }
}
