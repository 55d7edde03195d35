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

//! Plain-text table output.
//!
//! One block per key:
//!
//! ```text
//! num_edges: 1000
//!   Link-cut: 2.10 ms
//!   MTR:      1.97 ms
//! ```

use crate::config::TableConfig;
use crate::format::NumberFormat;
use benchview_core::{Aggregate, AggregatedGrid, KeyValue, UnitStyle};

/// Plain rendering of one cell; `None` when the cell is absent.
pub fn format_cell(aggregate: &Aggregate, number: &NumberFormat) -> Option<String> {
    match aggregate {
        Aggregate::Absent => None,
        Aggregate::Point { mean } => Some(number.format(*mean)),
        Aggregate::Deviation { mean, stdev } => {
            Some(format!("{}±{}", number.format(*mean), number.format(*stdev)))
        }
        Aggregate::Range { low, high, .. } => {
            Some(format!("{}-{}", number.format(*low), number.format(*high)))
        }
    }
}

/// Render the grid as plain text blocks.
pub fn render(grid: &AggregatedGrid<KeyValue>, config: &TableConfig) -> String {
    let number = NumberFormat::new(config.decimal_places);
    let unit = config.value.unit_label(UnitStyle::Plain);

    let names: Vec<&str> = grid
        .algorithms()
        .iter()
        .map(|a| config.display_name(a))
        .collect();
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0) + 2;

    let mut out = String::new();
    for (k, key) in grid.keys().iter().enumerate() {
        out.push_str(&format!("{}: {}\n", config.key, key));

        let cells: Vec<Option<String>> = grid
            .row(k)
            .iter()
            .map(|cell| format_cell(cell, &number))
            .collect();
        let value_width = cells
            .iter()
            .flatten()
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0);

        for (name, cell) in names.iter().zip(&cells) {
            if let Some(value) = cell {
                let label = format!("{}:", name);
                out.push_str(&format!(
                    "  {:<name_width$} {:>value_width$} {}\n",
                    label, value, unit
                ));
            }
        }
    }
    out
}
