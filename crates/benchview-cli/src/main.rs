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

//! benchview Command Line Interface

use benchview_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str =
    "warn,benchview_core=info,benchview_table=info,benchview_chart=info,benchview_cli=info";

/// benchview - benchmark log aggregation, tables and charts
///
/// # Examples
///
/// ```bash
/// # Plain table of running times per edge count
/// benchview tabulate --input-file mst.jsonl --key num_edges --value-unit ms
///
/// # LaTeX table with standard deviations
/// benchview tabulate --input-file mst.jsonl --key num_edges --value-unit ms \
///     --format latex --stdev
///
/// # Chart written as SVG
/// benchview visualize --input-file fdcon.jsonl --profile fd-con -o fdcon.svg
/// ```
#[derive(Parser)]
#[command(name = "benchview")]
#[command(author, version, about = "benchview - benchmark log aggregation, tables and charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
