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

//! Charts for benchview.
//!
//! A chart is described by a named [`Profile`]: which field goes on the x
//! axis, which metric and rate go on the y axis, how the title is derived
//! and which consistency checks run over the input. Charting happens in two
//! steps:
//!
//! 1. [`plan_chart`] turns records into a [`ChartPlan`] of ordered,
//!    coloured series. Consistency problems are reported as
//!    [`Diagnostic`]s and never stop the chart.
//! 2. [`render_svg`] or [`render_to_file`] draws the plan with `plotters`.
//!
//! [`render_legend_svg`] draws the shared legend image on its own.
//!
//! # Example
//!
//! ```
//! use benchview_chart::{plan_chart, render_svg, ChartConfig};
//! use benchview_core::RecordLoader;
//!
//! let input = concat!(
//!     "{\"name\":\"MTR\",\"time_ns\":5000,\"num_vertices\":100,\"num_queries\":10}\n",
//!     "{\"name\":\"MTR\",\"time_ns\":9000,\"num_vertices\":200,\"num_queries\":10}\n",
//! );
//! let records = RecordLoader::new().load_reader(input.as_bytes()).unwrap();
//! let plan = plan_chart(&records, &ChartConfig::new("degenerate")).unwrap().unwrap();
//! assert_eq!(plan.title, "Degenerate queries");
//! assert!(render_svg(&plan).unwrap().contains("MTR"));
//! ```

pub mod diagnostic;
pub mod error;
pub mod legend;
pub mod palette;
pub mod plan;
pub mod profile;
pub mod registry;
pub mod render;
pub mod title;
pub mod validators;

pub use diagnostic::Diagnostic;
pub use error::{ChartError, Result};
pub use legend::{legend_entries, render_legend_svg, render_legend_to_file};
pub use palette::{ColorTable, Rgb, DEFAULT_COLORS};
pub use plan::{load_and_plan, plan_chart, ChartConfig, ChartPlan, PlannedSeries, SeriesPoint};
pub use profile::{Profile, XAxis, YAxis};
pub use registry::{find_profile, profile_names, profiles};
pub use render::{render_svg, render_to_file};
pub use title::TitleSpec;
pub use validators::ConsistencyCheck;
