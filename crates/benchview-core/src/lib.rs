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

//! benchview core: from benchmark logs to aggregated values.
//!
//! This crate holds the part of the pipeline shared by tables and charts:
//!
//! - **Record loading**: newline-delimited JSON, with `results` wrappers
//!   expanded into sibling records ([`loader`])
//! - **Grouping**: algorithm → key → samples, in a deterministic order
//!   ([`group`], [`order`])
//! - **Statistics**: mean, sample standard deviation and ranges ([`stats`])
//! - **Value derivation**: metric units and per-edge/query/vertex rates
//!   ([`units`])
//! - **Aggregated grid**: the shape consumed by every renderer ([`grid`])
//!
//! # Example
//!
//! ```
//! use benchview_core::{
//!     AggregatedGrid, Aggregate, CanonicalOrder, Dispersion, GroupingEngine, Metric,
//!     RecordLoader, Unit, ValueSpec,
//! };
//!
//! let input = concat!(
//!     "{\"name\":\"A\",\"time_ns\":1000000,\"num_edges\":10}\n",
//!     "{\"name\":\"A\",\"time_ns\":3000000,\"num_edges\":10}\n",
//! );
//! let records = RecordLoader::new().load_reader(input.as_bytes()).unwrap();
//! let spec = ValueSpec::new(Metric::TimeNs, Unit::Ms, None).unwrap();
//! let grouped = GroupingEngine::new()
//!     .group_by_algorithm(&records, |r| r.key("num_edges"), |r| spec.value(r))
//!     .unwrap();
//! let grid = AggregatedGrid::build(&grouped, &CanonicalOrder::default(), Dispersion::None);
//! assert_eq!(grid.row(0)[0], Aggregate::Point { mean: 2.0 });
//! ```

pub mod error;
pub mod grid;
pub mod group;
pub mod key;
pub mod loader;
pub mod order;
pub mod record;
pub mod stats;
pub mod units;

pub use error::{CoreError, Result};
pub use grid::AggregatedGrid;
pub use group::{GroupedSamples, GroupingEngine};
pub use key::KeyValue;
pub use loader::{expand_line, LineRecords, RecordLoader, DEFAULT_MAX_FILE_SIZE};
pub use order::{CanonicalOrder, DEFAULT_ALGORITHMS};
pub use record::{Record, ALGORITHM_FIELD, RESULTS_FIELD};
pub use stats::{aggregate, mean, sample_stdev, Aggregate, Dispersion};
pub use units::{Metric, PerUnit, Unit, UnitStyle, ValueSpec};
