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

//! Commands that turn a benchmark log into a table or a chart.

use super::values::{FormatArg, MetricArg, PerArg, UnitArg};
use crate::commands;
use crate::error::Result;
use benchview_chart::ChartConfig;
use benchview_core::{Dispersion, ValueSpec};
use benchview_table::{parse_rename, TableConfig, DEFAULT_DECIMAL_PLACES};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments of `tabulate`.
#[derive(Args, Debug)]
pub struct TabulateArgs {
    /// Benchmark log, one JSON object per line
    #[arg(long, value_name = "FILE")]
    pub input_file: PathBuf,

    /// Record field used as the independent variable
    #[arg(long)]
    pub key: String,

    /// Measured quantity
    #[arg(long, value_enum, default_value_t = MetricArg::TimeNs)]
    pub value: MetricArg,

    /// Display unit of the value
    #[arg(long, value_enum)]
    pub value_unit: UnitArg,

    /// Divide the value by a record count
    #[arg(long, value_enum)]
    pub value_per: Option<PerArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Plain)]
    pub format: FormatArg,

    /// Digits after the decimal point
    #[arg(long, default_value_t = DEFAULT_DECIMAL_PLACES)]
    pub decimal_places: usize,

    /// Column header template for typeset output, with `{}` for the key
    #[arg(long)]
    pub key_template: Option<String>,

    /// Algorithms to leave out
    #[arg(long, num_args = 1.., value_name = "ALGORITHM")]
    pub exclude: Vec<String>,

    /// Display names as old:new
    #[arg(long, num_args = 1.., value_name = "OLD:NEW", value_parser = parse_rename)]
    pub rename: Vec<(String, String)>,

    /// Key values to leave out
    #[arg(long, num_args = 1.., value_name = "KEY")]
    pub exclude_key: Vec<String>,

    /// Show the standard deviation
    #[arg(long)]
    pub stdev: bool,

    /// Show mean ± R standard deviations as a range
    #[arg(long, value_name = "R", requires = "stdev")]
    pub range: Option<f64>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl TabulateArgs {
    fn dispersion(&self) -> Result<Dispersion> {
        Ok(match (self.stdev, self.range) {
            (true, Some(r)) => Dispersion::range(r)?,
            (true, None) => Dispersion::StdDev,
            (false, _) => Dispersion::None,
        })
    }

    /// Build the table configuration.
    ///
    /// # Errors
    ///
    /// Fails on a rotation metric with a time unit and on a non-positive range.
    pub fn to_config(&self) -> Result<TableConfig> {
        let value = ValueSpec::new(
            self.value.into(),
            self.value_unit.into(),
            self.value_per.map(Into::into),
        )?;

        let mut config = TableConfig::new(&self.key, value)
            .with_format(self.format.into())
            .with_decimal_places(self.decimal_places)
            .with_dispersion(self.dispersion()?)
            .with_excluded_algorithms(self.exclude.iter().cloned())
            .with_excluded_keys(self.exclude_key.iter().cloned());
        for (from, to) in &self.rename {
            config = config.with_rename(from, to);
        }
        if let Some(template) = &self.key_template {
            config = config.with_key_template(template);
        }
        Ok(config)
    }
}

/// Table and chart commands.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Aggregate a benchmark log into a table
    ///
    /// Groups records by algorithm and key, reduces repeated trials to their
    /// mean and writes a plain, typeset or dense-grid table.
    Tabulate(TabulateArgs),

    /// Draw a benchmark log as an SVG chart
    ///
    /// The profile selects the axes, the title and the consistency checks.
    /// Without an output file the SVG is written to stdout.
    Visualize {
        /// Benchmark log, one JSON object per line
        #[arg(long, value_name = "FILE")]
        input_file: PathBuf,

        /// Chart profile (see `benchview profiles`)
        #[arg(short, long)]
        profile: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output_file: Option<PathBuf>,

        /// Algorithms to leave out
        #[arg(long, num_args = 1.., value_name = "ALGORITHM")]
        exclude: Vec<String>,

        /// Draw standard-deviation error bars
        #[arg(long)]
        stdev: bool,

        /// Log every plotted point
        #[arg(short, long)]
        verbose: bool,
    },

    /// Draw the shared algorithm legend as an SVG image
    Legend {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output_file: Option<PathBuf>,
    },
}

impl ReportCommands {
    /// Execute the report command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration is invalid, the log cannot be
    /// loaded or the output cannot be written.
    pub fn execute(self) -> Result<()> {
        match self {
            ReportCommands::Tabulate(args) => {
                let config = args.to_config()?;
                commands::tabulate(&args.input_file, &config, args.output.as_deref())
            }
            ReportCommands::Visualize {
                input_file,
                profile,
                output_file,
                exclude,
                stdev,
                verbose,
            } => {
                let config = ChartConfig::new(profile)
                    .with_excluded_algorithms(exclude)
                    .with_error_bars(stdev)
                    .with_verbose(verbose);
                commands::visualize(&input_file, &config, output_file.as_deref())
            }
            ReportCommands::Legend { output_file } => commands::legend(output_file.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchview_core::Unit;
    use benchview_table::OutputFormat;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: ReportCommands,
    }

    fn tabulate_args(args: &[&str]) -> TabulateArgs {
        let mut argv = vec!["benchview", "tabulate"];
        argv.extend_from_slice(args);
        match TestCli::try_parse_from(argv).unwrap().command {
            ReportCommands::Tabulate(args) => args,
            _ => panic!("expected tabulate"),
        }
    }

    #[test]
    fn test_tabulate_config() {
        let args = tabulate_args(&[
            "--input-file", "bench.jsonl",
            "--key", "num_edges",
            "--value-unit", "us",
            "--value-per", "query",
            "--format", "latex",
            "--rename", "Link-cut:LC", "MTR:Move-to-root",
            "--exclude", "Simple",
            "--stdev",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.format, OutputFormat::Typeset);
        assert_eq!(config.value.unit(), Unit::Us);
        assert_eq!(config.display_name("Link-cut"), "LC");
        assert_eq!(config.display_name("MTR"), "Move-to-root");
        assert_eq!(config.excluded_algorithms, vec!["Simple".to_string()]);
        assert_eq!(config.dispersion, Dispersion::StdDev);
    }

    #[test]
    fn test_range_requires_stdev() {
        let argv = [
            "benchview", "tabulate", "--input-file", "f", "--key", "k",
            "--value-unit", "ms", "--range", "2",
        ];
        assert!(TestCli::try_parse_from(argv).is_err());

        let args = tabulate_args(&[
            "--input-file", "f", "--key", "k", "--value-unit", "ms", "--stdev", "--range", "2",
        ]);
        assert_eq!(args.to_config().unwrap().dispersion, Dispersion::Range(2.0));
    }

    #[test]
    fn test_malformed_rename_is_rejected_by_parser() {
        let argv = [
            "benchview", "tabulate", "--input-file", "f", "--key", "k",
            "--value-unit", "ms", "--rename", "nocolon",
        ];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_rotation_metric_needs_rots_unit() {
        let args = tabulate_args(&[
            "--input-file", "f", "--key", "k",
            "--value", "rotation_count", "--value-unit", "ms",
        ]);
        assert!(args.to_config().is_err());
    }
}
