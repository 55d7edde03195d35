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

//! Visualize command - benchmark log to SVG chart

use super::write_output;
use crate::error::Result;
use benchview_chart::{load_and_plan, render_svg, render_to_file, ChartConfig};
use std::path::Path;
use tracing::info;

/// Plan and render a chart.
///
/// Nothing is written when no record survives filtering; the library has
/// already warned about it.
///
/// # Errors
///
/// Returns `Err` on an unknown profile, an unreadable log, a record missing
/// an axis field, or an output that cannot be written.
pub fn visualize(input: &Path, config: &ChartConfig, output: Option<&Path>) -> Result<()> {
    let Some(plan) = load_and_plan(input, config)? else {
        return Ok(());
    };

    match output {
        Some(path) => {
            render_to_file(&plan, path)?;
            info!("Wrote chart '{}' to '{}'", plan.title, path.display());
        }
        None => write_output(&render_svg(&plan)?, None)?,
    }
    Ok(())
}
