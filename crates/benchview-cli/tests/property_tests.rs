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

//! Property-based tests for the tabulate command

use benchview_cli::cli::{Commands, ReportCommands};
use benchview_cli::commands::tabulate;
use clap::Parser;
use proptest::prelude::*;
use std::fs;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

const LINES: &[&str] = &[
    "{\"name\":\"MTR\",\"num_edges\":100,\"time_ns\":1000000}",
    "{\"name\":\"MTR\",\"num_edges\":100,\"time_ns\":1500000}",
    "{\"name\":\"MTR\",\"num_edges\":200,\"time_ns\":4000000}",
    "{\"name\":\"Link-cut\",\"num_edges\":100,\"time_ns\":3000000}",
    "{\"name\":\"Link-cut\",\"num_edges\":200,\"time_ns\":2000000}",
    "{\"name\":\"Greedy Splay\",\"num_edges\":200,\"time_ns\":7000000}",
    "{\"name\":\"Greedy Splay\",\"num_edges\":200,\"time_ns\":9000000}",
];

fn run(lines: &[&str], extra: &[&str]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.jsonl");
    let output = dir.path().join("table.txt");
    fs::write(&input, lines.join("\n")).unwrap();

    let mut argv = vec!["benchview", "tabulate", "--key", "num_edges", "--value-unit", "ms"];
    argv.extend_from_slice(extra);
    let input_arg = input.to_string_lossy().to_string();
    argv.extend_from_slice(&["--input-file", &input_arg]);

    let Commands::Report(ReportCommands::Tabulate(args)) = Cli::try_parse_from(argv).unwrap().command
    else {
        panic!("expected tabulate");
    };
    let config = args.to_config().unwrap();
    tabulate(&input, &config, Some(&output)).unwrap();
    fs::read_to_string(&output).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_table_independent_of_line_order(lines in Just(LINES.to_vec()).prop_shuffle()) {
        prop_assert_eq!(run(&lines, &["--stdev"]), run(LINES, &["--stdev"]));
    }

    #[test]
    fn prop_every_format_independent_of_line_order(
        lines in Just(LINES.to_vec()).prop_shuffle(),
        format in prop::sample::select(vec!["plain", "latex"]),
    ) {
        prop_assert_eq!(
            run(&lines, &["--format", format]),
            run(LINES, &["--format", format])
        );
    }

    #[test]
    fn prop_decimal_places_apply_to_every_value(places in 0usize..6) {
        let places_arg = places.to_string();
        let table = run(LINES, &["--decimal-places", &places_arg]);
        for line in table.lines().filter(|l| l.ends_with(" ms")) {
            let value = line.trim_end_matches(" ms").split_whitespace().last().unwrap();
            let decimals = value.split('.').nth(1).map_or(0, str::len);
            prop_assert_eq!(decimals, places);
        }
    }
}
