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

//! Error types for chart planning and rendering.

use benchview_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors raised while planning or drawing a chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Loading or value derivation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No profile with the requested name.
    #[error("Unknown profile '{name}' (available: {available})")]
    UnknownProfile {
        /// Requested profile name
        name: String,
        /// Comma-separated list of known profiles
        available: String,
    },

    /// An x value that cannot be placed on a numeric axis.
    #[error("Field '{field}' of '{algorithm}' is not numeric: {value}")]
    NonNumericAxis {
        /// The x field
        field: String,
        /// Algorithm of the offending record
        algorithm: String,
        /// The value found
        value: String,
    },

    /// The drawing backend failed.
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Writing the image failed.
    #[error("Failed to write '{path}': {message}")]
    Write {
        /// Output path
        path: PathBuf,
        /// Error message
        message: String,
    },
}

impl ChartError {
    /// Create a rendering error from any backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }

    /// Create a write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_profile_message() {
        let err = ChartError::UnknownProfile {
            name: "nope".to_string(),
            available: "cache, lca".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown profile 'nope' (available: cache, lca)");
    }

    #[test]
    fn test_write_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ChartError::write_error("/tmp/out.svg", io);
        assert!(err.to_string().contains("/tmp/out.svg"));
        assert!(err.to_string().contains("denied"));
    }
}
