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

//! Tabulate command - benchmark log to table

use super::write_output;
use crate::error::Result;
use benchview_table::{load_and_tabulate, TableConfig};
use std::path::Path;
use tracing::info;

/// Render a benchmark log as a table.
///
/// The table goes to `output`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns `Err` if the configuration is invalid, the log cannot be loaded,
/// a record lacks the key or value field, or the output cannot be written.
pub fn tabulate(input: &Path, config: &TableConfig, output: Option<&Path>) -> Result<()> {
    let table = load_and_tabulate(input, config)?;
    write_output(&table, output)?;
    if let Some(path) = output {
        info!("Wrote table to '{}'", path.display());
    }
    Ok(())
}
