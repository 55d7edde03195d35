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

//! Dense whitespace-separated grid, as read by pgfplots `\addplot table`.

use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::format::NumberFormat;
use benchview_core::{AggregatedGrid, KeyValue};

/// Header column naming the key.
pub const KEY_COLUMN: &str = "value";

/// Column name of an algorithm: spaces are not allowed in a column name.
pub fn column_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// Render the grid as a dense table of means.
///
/// Every (key, algorithm) cell must hold a value. The check runs before any
/// line is produced, so a failed render yields no partial output.
///
/// # Errors
///
/// Returns [`TableError::AbsentCell`] naming the first empty cell.
pub fn render(grid: &AggregatedGrid<KeyValue>, config: &TableConfig) -> Result<String> {
    if let Some((key, algorithm)) = grid.first_absent() {
        return Err(TableError::AbsentCell {
            key_name: config.key.clone(),
            key: key.to_string(),
            algorithm: config.display_name(algorithm).to_string(),
        });
    }

    let number = NumberFormat::new(config.decimal_places);
    let mut out = String::from(KEY_COLUMN);
    for algorithm in grid.algorithms() {
        out.push(' ');
        out.push_str(&column_name(config.display_name(algorithm)));
    }
    out.push('\n');

    for (k, key) in grid.keys().iter().enumerate() {
        out.push_str(&key.to_string());
        for cell in grid.row(k) {
            out.push(' ');
            if let Some(mean) = cell.mean() {
                out.push_str(&number.format(mean));
            }
        }
        out.push('\n');
    }
    out.push('\n');
    Ok(out)
}
