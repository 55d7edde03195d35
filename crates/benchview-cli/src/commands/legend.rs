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

//! Legend command

use super::write_output;
use crate::error::Result;
use benchview_chart::{render_legend_svg, render_legend_to_file, ColorTable};
use std::path::Path;
use tracing::info;

/// Render the algorithm legend to `output`, or to stdout.
///
/// # Errors
///
/// Returns `Err` if rendering fails or the output cannot be written.
pub fn legend(output: Option<&Path>) -> Result<()> {
    let colors = ColorTable::default();
    match output {
        Some(path) => {
            render_legend_to_file(&colors, path)?;
            info!("Wrote legend to '{}'", path.display());
        }
        None => write_output(&render_legend_svg(&colors)?, None)?,
    }
    Ok(())
}
