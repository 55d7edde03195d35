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

//! LaTeX `tabular` output.
//!
//! Keys become columns and algorithms become rows. The booktabs rules
//! (`\toprule`, `\midrule`, `\bottomrule`) and the `\dsimpl` macro wrapping
//! algorithm names are expected to be defined by the including document.

use crate::config::TableConfig;
use crate::error::Result;
use crate::format::{apply_template, nicify_key, NumberFormat};
use benchview_core::{Aggregate, AggregatedGrid, Dispersion, KeyValue, Unit, UnitStyle};

/// Typeset text of an absent cell.
pub const ABSENT_CELL: &str = "--";

/// Names with this prefix are shown verbatim instead of in `\dsimpl{}`.
pub const BARE_NAME_PREFIX: &str = "Kruskal";

/// Typeset rendering of one cell.
pub fn format_cell(aggregate: &Aggregate, number: &NumberFormat) -> String {
    match aggregate {
        Aggregate::Absent => ABSENT_CELL.to_string(),
        Aggregate::Point { mean } => format!("${}$", number.format(*mean)),
        Aggregate::Deviation { mean, stdev } => {
            format!(r"${}\pm {}$", number.format(*mean), number.format(*stdev))
        }
        Aggregate::Range { low, high, .. } => {
            format!("${}$--${}$", number.format(*low), number.format(*high))
        }
    }
}

/// Row label of an algorithm.
pub fn row_label(name: &str) -> String {
    if name.starts_with(BARE_NAME_PREFIX) {
        name.to_string()
    } else {
        format!(r"\dsimpl{{{}}}", name)
    }
}

fn caption(config: &TableConfig) -> String {
    let unit = config.value.unit_label(UnitStyle::Typeset);
    let mut caption = match config.value.unit() {
        Unit::Rots => format!("Number of {}", unit),
        _ => format!("Running time ({})", unit),
    };
    match config.dispersion {
        Dispersion::None => {}
        Dispersion::StdDev => caption.push_str(" with standard deviation"),
        Dispersion::Range(r) => {
            caption.push_str(&format!(r" as range of $\pm {}$ standard deviations", r))
        }
    }
    caption
}

/// Render the grid as a LaTeX table.
///
/// # Errors
///
/// Fails only when no column-header template can be resolved.
pub fn render(grid: &AggregatedGrid<KeyValue>, config: &TableConfig) -> Result<String> {
    let template = config.resolved_key_template()?;
    let number = NumberFormat::new(config.decimal_places);
    let columns = grid.keys().len();

    let mut out = String::new();
    out.push_str(&format!("\t\\begin{{tabular}}{{l{}}}\n", "c".repeat(columns)));
    out.push_str("\t\t\\toprule\n");
    out.push_str(&format!(
        "\t\t& \\multicolumn{{{}}}{{c}}{{{}}}\\\\\n",
        columns,
        caption(config)
    ));
    out.push_str(&format!("\t\t\\cmidrule{{2-{}}}\n", columns + 1));

    out.push_str("\t\tAlgorithm");
    for key in grid.keys() {
        out.push_str(" & ");
        out.push_str(&apply_template(&template, &nicify_key(key)));
    }
    out.push_str("\\\\\n");
    out.push_str("\t\t\\midrule\n");

    for (a, algorithm) in grid.algorithms().iter().enumerate() {
        out.push_str("\t\t");
        out.push_str(&row_label(config.display_name(algorithm)));
        for k in 0..columns {
            out.push_str(" & ");
            out.push_str(&format_cell(&grid.row(k)[a], &number));
        }
        out.push_str("\\\\\n");
    }

    out.push_str("\t\t\\bottomrule\n");
    out.push_str("\t\\end{tabular}\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use benchview_core::{CanonicalOrder, GroupedSamples, Metric, ValueSpec};

    fn config() -> TableConfig {
        TableConfig::new(
            "num_edges",
            ValueSpec::new(Metric::TimeNs, Unit::Ms, None).unwrap(),
        )
        .with_format(OutputFormat::Typeset)
    }

    fn grid(dispersion: Dispersion) -> AggregatedGrid<KeyValue> {
        let mut g = GroupedSamples::new();
        g.push("MTR", KeyValue::Int(1000), 1.0);
        g.push("MTR", KeyValue::Int(20000), 2.0);
        g.push("MTR", KeyValue::Int(20000), 4.0);
        g.push("Kruskal (petgraph)", KeyValue::Int(20000), 3.0);
        AggregatedGrid::build(&g, &CanonicalOrder::default(), dispersion)
    }

    #[test]
    fn test_format_cell() {
        let number = NumberFormat::new(1);
        assert_eq!(format_cell(&Aggregate::Absent, &number), "--");
        assert_eq!(format_cell(&Aggregate::Point { mean: 2.0 }, &number), "$2.0$");
        assert_eq!(
            format_cell(&Aggregate::Deviation { mean: 2.0, stdev: 0.5 }, &number),
            r"$2.0\pm 0.5$"
        );
        assert_eq!(
            format_cell(&Aggregate::Range { mean: 2.0, low: 1.0, high: 3.0 }, &number),
            "$1.0$--$3.0$"
        );
    }

    #[test]
    fn test_row_label() {
        assert_eq!(row_label("Kruskal (petgraph)"), "Kruskal (petgraph)");
        assert_eq!(row_label("MTR"), r"\dsimpl{MTR}");
    }

    #[test]
    fn test_render_full_table() {
        let out = render(&grid(Dispersion::None), &config()).unwrap();
        let expected = concat!(
            "\t\\begin{tabular}{lcc}\n",
            "\t\t\\toprule\n",
            "\t\t& \\multicolumn{2}{c}{Running time (ms)}\\\\\n",
            "\t\t\\cmidrule{2-3}\n",
            "\t\tAlgorithm & $m = 1000$ & $m = 20\\,000$\\\\\n",
            "\t\t\\midrule\n",
            "\t\tKruskal (petgraph) & -- & $3.00$\\\\\n",
            "\t\t\\dsimpl{MTR} & $1.00$ & $3.00$\\\\\n",
            "\t\t\\bottomrule\n",
            "\t\\end{tabular}\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_caption_mentions_deviation_and_unit() {
        let out = render(&grid(Dispersion::StdDev), &config()).unwrap();
        assert!(out.contains("{Running time (ms) with standard deviation}"));
        assert!(out.contains(r"$3.00\pm 1.41$"));

        let rots = TableConfig::new(
            "num_edges",
            ValueSpec::new(Metric::RotationCount, Unit::Rots, None).unwrap(),
        );
        assert_eq!(caption(&rots), "Number of rotations");
    }

    #[test]
    fn test_explicit_template_applies_to_every_column() {
        let config = TableConfig::new(
            "std_dev",
            ValueSpec::new(Metric::TimeNs, Unit::Us, None).unwrap(),
        )
        .with_format(OutputFormat::Typeset)
        .with_key_template(r"$\sigma = {}$");
        let out = render(&grid(Dispersion::None), &config).unwrap();
        assert!(out.contains(r"Algorithm & $\sigma = 1000$ & $\sigma = 20\,000$\\"));
        assert!(out.contains(r"Running time (\textmu{}s)"));
    }

    #[test]
    fn test_rename_changes_row_label() {
        let config = config().with_rename("MTR", "Kruskal MTR");
        let out = render(&grid(Dispersion::None), &config).unwrap();
        assert!(out.contains("\t\tKruskal MTR & $1.00$"));
    }
}
