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

//! Table rendering for benchview.
//!
//! Records are grouped by algorithm and a key field, reduced to aggregates
//! and written in one of three formats:
//!
//! - [`OutputFormat::Plain`]: one aligned block per key ([`plain`])
//! - [`OutputFormat::Typeset`]: a LaTeX `tabular` ([`typeset`])
//! - [`OutputFormat::DenseGrid`]: a whitespace-separated grid of means ([`dense`])
//!
//! # Example
//!
//! ```
//! use benchview_core::{Metric, RecordLoader, Unit, ValueSpec};
//! use benchview_table::{tabulate, TableConfig};
//!
//! let input = concat!(
//!     "{\"name\":\"A\",\"time_ns\":1000000,\"num_edges\":10}\n",
//!     "{\"name\":\"A\",\"time_ns\":3000000,\"num_edges\":10}\n",
//! );
//! let records = RecordLoader::new().load_reader(input.as_bytes()).unwrap();
//! let value = ValueSpec::new(Metric::TimeNs, Unit::Ms, None).unwrap();
//! let table = tabulate(&records, &TableConfig::new("num_edges", value)).unwrap();
//! assert_eq!(table, "num_edges: 10\n  A:  2.00 ms\n");
//! ```

pub mod config;
pub mod dense;
pub mod error;
pub mod format;
pub mod plain;
pub mod typeset;

pub use config::{parse_rename, OutputFormat, TableConfig, DEFAULT_DECIMAL_PLACES};
pub use error::{Result, TableError};
pub use format::{nicify_int, NumberFormat};

use benchview_core::{AggregatedGrid, GroupingEngine, KeyValue, Record, RecordLoader};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Group and aggregate records into the grid shared by every format.
///
/// Records of excluded algorithms are skipped, so records that did not go
/// through a filtering loader are handled the same way.
pub fn build_grid(records: &[Record], config: &TableConfig) -> Result<AggregatedGrid<KeyValue>> {
    let excluded: HashSet<&str> = config.excluded_algorithms.iter().map(String::as_str).collect();
    let key = config.key.as_str();
    let value = &config.value;

    let grouped = GroupingEngine::new()
        .with_excluded_keys(config.excluded_keys.iter().cloned())
        .group_by_algorithm(
            records.iter().filter(|r| !excluded.contains(r.algorithm())),
            |r| r.key(key),
            |r| value.value(r),
        )?;

    let grid = AggregatedGrid::build(&grouped, &config.order, config.dispersion);
    debug!(
        "Aggregated {} keys x {} algorithms",
        grid.keys().len(),
        grid.algorithms().len()
    );
    Ok(grid)
}

/// Render records as a table.
///
/// # Errors
///
/// Fails on an invalid configuration, on a record missing the key or value
/// fields, and for dense-grid output with an empty cell.
pub fn tabulate(records: &[Record], config: &TableConfig) -> Result<String> {
    config.validate()?;
    info!(
        "Tabulating {} records by '{}' as {:?}",
        records.len(),
        config.key,
        config.format
    );

    let grid = build_grid(records, config)?;
    match config.format {
        OutputFormat::Plain => Ok(plain::render(&grid, config)),
        OutputFormat::Typeset => typeset::render(&grid, config),
        OutputFormat::DenseGrid => dense::render(&grid, config),
    }
}

/// Load a log file and render it as a table.
///
/// The configuration is validated before the file is opened.
pub fn load_and_tabulate(path: impl AsRef<Path>, config: &TableConfig) -> Result<String> {
    config.validate()?;
    let records = RecordLoader::new()
        .with_excluded(config.excluded_algorithms.iter().cloned())
        .load_path(path)?;
    tabulate(&records, config)
}
