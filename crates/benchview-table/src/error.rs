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

//! Error types for table rendering.

use benchview_core::CoreError;
use thiserror::Error;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while configuring or rendering a table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Loading, grouping or value derivation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The dense grid has no way to represent a missing value.
    #[error("No data for '{algorithm}' at {key_name} = {key}; the dense grid format requires every cell")]
    AbsentCell {
        /// Name of the key field
        key_name: String,
        /// Key value of the empty cell
        key: String,
        /// Algorithm of the empty cell
        algorithm: String,
    },
}

impl TableError {
    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
