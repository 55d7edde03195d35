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

//! End-to-end tabulation tests: log text in, rendered table out.

use benchview_core::{Dispersion, Metric, PerUnit, RecordLoader, Unit, ValueSpec};
use benchview_table::{load_and_tabulate, tabulate, OutputFormat, TableConfig, TableError};
use std::io::Write;
use tempfile::NamedTempFile;

const TWO_ALGORITHMS: &str = concat!(
    "{\"name\":\"A\",\"time_ns\":1000000,\"num_edges\":100}\n",
    "{\"name\":\"A\",\"time_ns\":3000000,\"num_edges\":100}\n",
    "{\"name\":\"B\",\"time_ns\":2000000,\"num_edges\":100}\n",
);

fn ms() -> ValueSpec {
    ValueSpec::new(Metric::TimeNs, Unit::Ms, None).unwrap()
}

fn run(input: &str, config: &TableConfig) -> benchview_table::Result<String> {
    let records = RecordLoader::new().load_reader(input.as_bytes()).unwrap();
    tabulate(&records, config)
}

#[test]
fn test_means_in_milliseconds() {
    let out = run(TWO_ALGORITHMS, &TableConfig::new("num_edges", ms())).unwrap();
    assert_eq!(out, "num_edges: 100\n  A:  2.00 ms\n  B:  2.00 ms\n");
}

#[test]
fn test_standard_deviation_only_with_two_samples() {
    let config = TableConfig::new("num_edges", ms()).with_dispersion(Dispersion::StdDev);
    let out = run(TWO_ALGORITHMS, &config).unwrap();
    assert!(out.contains("  A:  2.00±1.41 ms\n"));
    assert!(out.contains("  B:       2.00 ms\n"));
}

#[test]
fn test_range_dispersion() {
    let config = TableConfig::new("num_edges", ms())
        .with_dispersion(Dispersion::range(1.0).unwrap())
        .with_decimal_places(1);
    let out = run(TWO_ALGORITHMS, &config).unwrap();
    assert!(out.contains("A:  0.6-3.4 ms"));
}

#[test]
fn test_negative_range_multiplier_is_fatal() {
    let config = TableConfig::new("num_edges", ms()).with_dispersion(Dispersion::Range(-1.0));
    assert!(matches!(
        run(TWO_ALGORITHMS, &config),
        Err(TableError::InvalidConfig { .. })
    ));
}

#[test]
fn test_integral_float_key_groups_with_integer_key() {
    let input = concat!(
        "{\"name\":\"A\",\"time_ns\":1000000,\"num_edges\":1}\n",
        "{\"name\":\"A\",\"time_ns\":2000000,\"num_edges\":1.0}\n",
        "{\"name\":\"A\",\"time_ns\":4000000,\"num_edges\":1}\n",
    );
    let out = run(input, &TableConfig::new("num_edges", ms())).unwrap();
    assert_eq!(out, "num_edges: 1\n  A:  2.33 ms\n");
}

#[test]
fn test_blocks_follow_key_order_and_canonical_algorithms() {
    let input = concat!(
        "{\"name\":\"Custom\",\"time_ns\":1000,\"num_vertices\":20}\n",
        "{\"name\":\"MTR\",\"time_ns\":1000,\"num_vertices\":20}\n",
        "{\"name\":\"Link-cut\",\"time_ns\":1000,\"num_vertices\":10}\n",
    );
    let value = ValueSpec::new(Metric::TimeNs, Unit::Us, None).unwrap();
    let out = run(input, &TableConfig::new("num_vertices", value)).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "num_vertices: 10");
    assert!(lines[1].starts_with("  Link-cut:"));
    assert!(lines[1].ends_with(" µs"));
    assert_eq!(lines[2], "num_vertices: 20");
    assert!(lines[3].starts_with("  MTR:"));
    assert!(lines[4].starts_with("  Custom:"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_per_unit_rate() {
    let input = "{\"name\":\"A\",\"time_ns\":5000,\"num_queries\":10}\n";
    let value = ValueSpec::new(Metric::TimeNs, Unit::Us, Some(PerUnit::Query)).unwrap();
    let out = run(input, &TableConfig::new("num_queries", value)).unwrap();
    assert_eq!(out, "num_queries: 10\n  A:  0.50 µs/query\n");
}

#[test]
fn test_missing_denominator_is_fatal() {
    let input = "{\"name\":\"A\",\"time_ns\":5000,\"num_edges\":10}\n";
    let value = ValueSpec::new(Metric::TimeNs, Unit::Us, Some(PerUnit::Vertex)).unwrap();
    let err = run(input, &TableConfig::new("num_edges", value)).unwrap_err();
    assert!(matches!(err, TableError::Core(_)));
    assert!(err.to_string().contains("num_vertices"));
}

#[test]
fn test_exclusions() {
    let input = concat!(
        "{\"name\":\"A\",\"time_ns\":1000000,\"num_edges\":1}\n",
        "{\"name\":\"B\",\"time_ns\":1000000,\"num_edges\":1}\n",
        "{\"name\":\"A\",\"time_ns\":1000000,\"num_edges\":2}\n",
    );
    let config = TableConfig::new("num_edges", ms())
        .with_excluded_algorithms(["B"])
        .with_excluded_keys(["2"]);
    let out = run(input, &config).unwrap();
    assert_eq!(out, "num_edges: 1\n  A:  1.00 ms\n");
}

#[test]
fn test_dense_grid_reports_absent_cell_without_output() {
    let input = concat!(
        "{\"name\":\"A\",\"time_ns\":1000000,\"num_edges\":1}\n",
        "{\"name\":\"B\",\"time_ns\":1000000,\"num_edges\":2}\n",
    );
    let config = TableConfig::new("num_edges", ms()).with_format(OutputFormat::DenseGrid);
    let err = run(input, &config).unwrap_err();
    assert!(matches!(err, TableError::AbsentCell { .. }));
}

#[test]
fn test_dense_grid_output() {
    let config = TableConfig::new("num_edges", ms())
        .with_format(OutputFormat::DenseGrid)
        .with_rename("A", "Algo A");
    let out = run(TWO_ALGORITHMS, &config).unwrap();
    assert_eq!(out, "value Algo_A B\n100 2.00 2.00\n\n");
}

#[test]
fn test_typeset_output_shape() {
    let config = TableConfig::new("num_edges", ms()).with_format(OutputFormat::Typeset);
    let out = run(TWO_ALGORITHMS, &config).unwrap();
    assert!(out.starts_with("\t\\begin{tabular}{lc}\n"));
    assert!(out.contains("Algorithm & $m = 100$\\\\"));
    assert!(out.contains("\\dsimpl{A} & $2.00$\\\\"));
    assert!(out.ends_with("\t\\end{tabular}\n"));
}

#[test]
fn test_rotation_count_table() {
    let input = "{\"name\":\"A\",\"rotation_count\":42,\"num_queries\":7}\n";
    let value = ValueSpec::new(Metric::RotationCount, Unit::Rots, None).unwrap();
    let config = TableConfig::new("num_queries", value).with_decimal_places(0);
    assert_eq!(run(input, &config).unwrap(), "num_queries: 7\n  A:  42 rotations\n");
}

#[test]
fn test_load_and_tabulate_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{{\"seed\":5,\"results\":[{{\"name\":\"X\",\"time_ns\":1000000,\"num_edges\":3}},{{\"name\":\"X\",\"time_ns\":3000000,\"num_edges\":3}}]}}\n"
    )
    .unwrap();
    let out = load_and_tabulate(file.path(), &TableConfig::new("num_edges", ms())).unwrap();
    assert_eq!(out, "num_edges: 3\n  X:  2.00 ms\n");
}

#[test]
fn test_invalid_config_checked_before_reading() {
    let config = TableConfig::new("num_edges", ms()).with_key_template("{}");
    let err = load_and_tabulate("/nonexistent/benchmarks.jsonl", &config).unwrap_err();
    assert!(matches!(err, TableError::InvalidConfig { .. }));
}

#[test]
fn test_missing_file() {
    let err = load_and_tabulate("/nonexistent/benchmarks.jsonl", &TableConfig::new("num_edges", ms()))
        .unwrap_err();
    assert!(matches!(err, TableError::Core(_)));
}
