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

//! A standalone legend image listing every known algorithm colour.

use crate::error::{ChartError, Result};
use crate::palette::{ColorTable, Rgb};
use crate::render::plot_color;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

const FONT: &str = "sans-serif";
const LEGEND_FONT_SIZE: u32 = 16;
const ENTRY_HEIGHT: u32 = 24;
const WIDTH: u32 = 320;
const PADDING: u32 = 40;

/// Algorithm drawn with the same colour as `Petgraph` and left out of the legend.
pub const MERGED_ALGORITHM: &str = "Kruskal (petgraph)";

/// Legend labels that differ from the algorithm name.
const RELABELED: &[(&str, &str)] = &[("Petgraph", "Petgraph or Kruskal")];

/// Legend entries in table order.
pub fn legend_entries(colors: &ColorTable) -> Vec<(String, Rgb)> {
    colors
        .entries()
        .iter()
        .filter(|(name, _)| name != MERGED_ALGORITHM)
        .map(|(name, color)| {
            let label = RELABELED
                .iter()
                .find(|(from, _)| from == name)
                .map_or(name.as_str(), |(_, to)| *to);
            (label.to_string(), *color)
        })
        .collect()
}

/// Render the legend as an SVG document.
pub fn render_legend_svg(colors: &ColorTable) -> Result<String> {
    let entries = legend_entries(colors);
    let height = ENTRY_HEIGHT * entries.len() as u32 + PADDING;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, height)).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(5)
            .build_cartesian_2d(0.0..1.0, 0.0..1.0)
            .map_err(ChartError::render)?;

        for (label, color) in &entries {
            let style = plot_color(*color).stroke_width(2);
            chart
                .draw_series(LineSeries::new(Vec::<(f64, f64)>::new(), style))
                .map_err(ChartError::render)?
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .border_style(BLACK)
            .label_font((FONT, LEGEND_FONT_SIZE))
            .draw()
            .map_err(ChartError::render)?;
        root.present().map_err(ChartError::render)?;
    }
    Ok(svg)
}

/// Render the legend and write it to `path`.
pub fn render_legend_to_file(colors: &ColorTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let svg = render_legend_svg(colors)?;
    fs::write(path, svg).map_err(|e| ChartError::write_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_merge_kruskal_into_petgraph() {
        let entries = legend_entries(&ColorTable::default());
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0], ("Petgraph or Kruskal".to_string(), Rgb::BLACK));
        assert!(entries.iter().all(|(name, _)| name != MERGED_ALGORITHM));
        assert_eq!(entries[1].0, "Link-cut");
    }

    #[test]
    fn test_render_legend() {
        let svg = render_legend_svg(&ColorTable::default()).unwrap();
        assert!(svg.contains("Petgraph or Kruskal"));
        assert!(svg.contains("Stable MTR"));
        assert!(!svg.contains("Kruskal (petgraph)"));
    }
}
