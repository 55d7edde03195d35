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

//! benchview CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **tabulate**: aggregate a benchmark log into a plain, typeset or
//!   dense-grid table
//! - **visualize**: draw a benchmark log as an SVG chart using a named profile
//! - **legend**: draw the shared algorithm legend
//! - **profiles**: list the chart profiles
//!
//! # Examples
//!
//! ```no_run
//! use benchview_cli::commands::tabulate;
//! use benchview_core::{Metric, Unit, ValueSpec};
//! use benchview_table::TableConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchview_cli::error::CliError> {
//! let value = ValueSpec::new(Metric::TimeNs, Unit::Ms, None)?;
//! let config = TableConfig::new("num_edges", value);
//! tabulate(Path::new("mst.jsonl"), &config, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Progress, consistency warnings and verbose point dumps are written to
//! stderr through `tracing`; stdout carries only tables and SVG. Set
//! `RUST_LOG` to change the level.
//!
//! # Input size
//!
//! Logs larger than `BENCHVIEW_MAX_FILE_SIZE` bytes (default 1 GiB) are
//! rejected before reading.

pub mod cli;
pub mod commands;
pub mod error;
