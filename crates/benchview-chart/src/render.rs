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

//! SVG rendering of a [`ChartPlan`].

use crate::error::{ChartError, Result};
use crate::palette::Rgb;
use crate::plan::ChartPlan;
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 28;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 14;
const LEGEND_FONT_SIZE: u32 = 16;

const LINE_WIDTH: u32 = 2;
const ERROR_CAP_WIDTH: u32 = 4;

/// Space above the highest point.
const Y_HEADROOM: f64 = 1.05;

pub(crate) fn plot_color(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// x bounds and whether a log axis can be used with them.
fn x_bounds(plan: &ChartPlan) -> (f64, f64, bool) {
    let (lo, hi) = plan.x_range().unwrap_or((0.0, 1.0));
    let log = plan.log_x && lo > 0.0;
    if lo < hi {
        (lo, hi, log)
    } else if log {
        (lo / 2.0, hi * 2.0, log)
    } else {
        (lo - 1.0, hi + 1.0, log)
    }
}

/// Top of the y axis; the axis always starts at 0.
fn y_top(plan: &ChartPlan) -> f64 {
    let highest = plan
        .series
        .iter()
        .flat_map(|s| {
            s.points.iter().map(move |p| match (s.error_bars, p.stdev) {
                (true, Some(stdev)) => p.mean + stdev,
                _ => p.mean,
            })
        })
        .fold(plan.max_y, f64::max);
    if highest > 0.0 {
        highest * Y_HEADROOM
    } else {
        1.0
    }
}

fn draw<X>(root: &DrawingArea<SVGBackend<'_>, Shift>, plan: &ChartPlan, x_spec: X) -> Result<()>
where
    X: AsRangedCoord<Value = f64>,
    X::CoordDescType: ValueFormatter<f64>,
{
    let top = y_top(plan);
    let mut chart = ChartBuilder::on(root)
        .caption(&plan.title, (FONT, TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_spec, 0.0..top)
        .map_err(ChartError::render)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(plan.x_label.as_str())
            .y_desc(plan.y_label.as_str())
            .label_style((FONT, TICK_LABEL_FONT_SIZE))
            .axis_desc_style((FONT, AXIS_LABEL_FONT_SIZE));
        if let Some(step) = plan.y_tick_step {
            mesh.y_labels((top / step).floor() as usize + 1);
        }
        mesh.draw().map_err(ChartError::render)?;
    }

    for series in &plan.series {
        let style = plot_color(series.color).stroke_width(LINE_WIDTH);
        let points: Vec<(f64, f64)> = series.points.iter().map(|p| (p.x, p.mean)).collect();
        chart
            .draw_series(LineSeries::new(points, style))
            .map_err(ChartError::render)?
            .label(series.algorithm.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        if series.error_bars {
            chart
                .draw_series(series.points.iter().filter_map(|p| {
                    p.stdev.map(|s| {
                        ErrorBar::new_vertical(p.x, p.mean - s, p.mean, p.mean + s, style, ERROR_CAP_WIDTH)
                    })
                }))
                .map_err(ChartError::render)?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, LEGEND_FONT_SIZE))
        .draw()
        .map_err(ChartError::render)?;
    Ok(())
}

/// Render a chart plan as an SVG document.
pub fn render_svg(plan: &ChartPlan) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, plan.size).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::render)?;

        let (lo, hi, log) = x_bounds(plan);
        if log {
            draw(&root, plan, (lo..hi).log_scale())?;
        } else {
            draw(&root, plan, lo..hi)?;
        }
        root.present().map_err(ChartError::render)?;
    }
    debug!("Rendered {} series into {} bytes of SVG", plan.series.len(), svg.len());
    Ok(svg)
}

/// Render a chart plan and write it to `path`.
pub fn render_to_file(plan: &ChartPlan, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg(plan)?;
    fs::write(path, svg).map_err(|e| ChartError::write_error(path, e))
}
