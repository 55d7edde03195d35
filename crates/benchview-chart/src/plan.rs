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

//! Chart planning: from records to ordered, coloured series.
//!
//! Planning does all the data work of a chart: profile lookup, filtering,
//! consistency checks, title derivation, grouping, aggregation and series
//! ordering. The resulting [`ChartPlan`] is plain data that any renderer can
//! draw.

use crate::diagnostic::Diagnostic;
use crate::error::{ChartError, Result};
use crate::palette::{ColorTable, Rgb};
use crate::registry::find_profile;
use crate::title::derive_title;
use benchview_core::{
    AggregatedGrid, CanonicalOrder, Dispersion, GroupingEngine, Record, RecordLoader,
};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// A4 landscape at 100 dpi.
pub const DEFAULT_SIZE: (u32, u32) = (1169, 827);

/// Tick step forced on the y axis when the maximum falls in [`FIXED_TICK_RANGE`].
pub const FIXED_TICK_STEP: f64 = 5.0;

/// Maximum y values for which the tick step is fixed.
pub const FIXED_TICK_RANGE: std::ops::RangeInclusive<f64> = 50.0..=100.0;

/// Configuration of one chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Profile name
    pub profile: String,
    /// Algorithms left out of the chart
    pub excluded_algorithms: Vec<String>,
    /// Draw standard-deviation error bars
    pub error_bars: bool,
    /// Log every plotted point
    pub verbose: bool,
    /// Canonical algorithm order
    pub order: CanonicalOrder,
    /// Series colours
    pub colors: ColorTable,
    /// Image size in pixels
    pub size: (u32, u32),
}

impl ChartConfig {
    /// Default configuration for a profile.
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            excluded_algorithms: Vec::new(),
            error_bars: false,
            verbose: false,
            order: CanonicalOrder::default(),
            colors: ColorTable::default(),
            size: DEFAULT_SIZE,
        }
    }

    /// Adds algorithms to leave out.
    pub fn with_excluded_algorithms<I, S>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_algorithms.extend(algorithms.into_iter().map(Into::into));
        self
    }

    /// Enables or disables error bars.
    pub fn with_error_bars(mut self, enabled: bool) -> Self {
        self.error_bars = enabled;
        self
    }

    /// Enables or disables per-point logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the canonical algorithm order.
    pub fn with_order(mut self, order: CanonicalOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the colour table.
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the image size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Check the configuration before any input is read.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::UnknownProfile`] for an unknown profile and
    /// [`ChartError::Core`] for an empty image size.
    pub fn validate(&self) -> Result<()> {
        find_profile(&self.profile)?;
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(benchview_core::CoreError::invalid_config(
                "size",
                format!("image size must be non-zero, got {}x{}", self.size.0, self.size.1),
            )
            .into());
        }
        Ok(())
    }
}

/// One plotted point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// x coordinate
    pub x: f64,
    /// Mean of the samples
    pub mean: f64,
    /// Sample standard deviation, with at least two samples
    pub stdev: Option<f64>,
}

/// One algorithm's line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSeries {
    /// Algorithm identity
    pub algorithm: String,
    /// Line colour
    pub color: Rgb,
    /// Points by ascending x
    pub points: Vec<SeriesPoint>,
    /// Whether error bars are drawn for this series
    pub error_bars: bool,
}

impl PlannedSeries {
    /// The rightmost mean.
    pub fn last_mean(&self) -> Option<f64> {
        self.points.last().map(|p| p.mean)
    }
}

/// Everything needed to draw a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    /// Profile the chart was planned with
    pub profile: String,
    /// Chart title
    pub title: String,
    /// x axis label
    pub x_label: String,
    /// y axis label
    pub y_label: String,
    /// Logarithmic x axis
    pub log_x: bool,
    /// Series in legend order
    pub series: Vec<PlannedSeries>,
    /// Largest mean across all series
    pub max_y: f64,
    /// Fixed y tick step, or `None` for automatic ticks
    pub y_tick_step: Option<f64>,
    /// Non-fatal findings
    pub diagnostics: Vec<Diagnostic>,
    /// Image size in pixels
    pub size: (u32, u32),
}

impl ChartPlan {
    /// Smallest and largest x across all series.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }
}

/// The fixed y tick step for a maximum, if any.
pub fn tick_step(max_y: f64) -> Option<f64> {
    FIXED_TICK_RANGE.contains(&max_y).then_some(FIXED_TICK_STEP)
}

fn by_last_mean_desc(a: &PlannedSeries, b: &PlannedSeries) -> Ordering {
    let a = a.last_mean().unwrap_or(f64::NEG_INFINITY);
    let b = b.last_mean().unwrap_or(f64::NEG_INFINITY);
    b.total_cmp(&a)
}

fn format_stdev(stdev: Option<f64>) -> String {
    stdev.map_or_else(|| "-".to_string(), |s| format!("{:.3}", s))
}

/// Plan a chart over the given records.
///
/// Returns `Ok(None)` when no record survives the profile's inclusion
/// predicate and the exclusion list.
///
/// # Errors
///
/// Fails on an unknown profile, on records missing an axis field and on
/// non-numeric x values.
pub fn plan_chart(records: &[Record], config: &ChartConfig) -> Result<Option<ChartPlan>> {
    let profile = find_profile(&config.profile)?;
    info!("Planning chart with profile {}", profile.name);

    let excluded: HashSet<&str> = config.excluded_algorithms.iter().map(String::as_str).collect();
    let included: Vec<&Record> = records
        .iter()
        .filter(|r| profile.includes(r.algorithm()) && !excluded.contains(r.algorithm()))
        .collect();
    if included.is_empty() {
        warn!("No valid benchmarks found");
        return Ok(None);
    }

    let mut diagnostics = Vec::new();
    for check in profile.checks {
        diagnostics.extend(check.check(&included));
    }
    let (title, title_diagnostics) = derive_title(&profile.title, &included);
    diagnostics.extend(title_diagnostics);
    for diagnostic in &diagnostics {
        warn!("{}", diagnostic);
    }

    let value = profile.y.value_spec()?;
    let index = profile.x.index;
    let grouped = GroupingEngine::new().group_by_algorithm(
        included.iter().copied(),
        |r| index.extract(r),
        |r| value.value(r),
    )?;
    let grid = AggregatedGrid::build(&grouped, &config.order, Dispersion::StdDev);

    let mut series = Vec::with_capacity(grid.algorithms().len());
    for algorithm in grid.algorithms() {
        let mut points = Vec::new();
        for (key, aggregate) in grid.series(algorithm) {
            let x = key.as_f64().ok_or_else(|| ChartError::NonNumericAxis {
                field: index.source().to_string(),
                algorithm: algorithm.clone(),
                value: key.to_string(),
            })?;
            let Some(mean) = aggregate.mean() else {
                continue;
            };
            let stdev = aggregate.stdev();
            if config.verbose {
                info!(
                    "{:>16}, {:>7}: {:.3}±{}",
                    algorithm,
                    key.to_string(),
                    mean,
                    format_stdev(stdev)
                );
            }
            points.push(SeriesPoint { x, mean, stdev });
        }

        let error_bars = config.error_bars && points.iter().all(|p| p.stdev.is_some());
        series.push(PlannedSeries {
            algorithm: algorithm.clone(),
            color: config.colors.color_for(algorithm),
            points,
            error_bars,
        });
    }
    series.sort_by(by_last_mean_desc);

    let max_y = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.mean))
        .fold(0.0_f64, f64::max);

    Ok(Some(ChartPlan {
        profile: profile.name.to_string(),
        title,
        x_label: profile.x.label.to_string(),
        y_label: profile.y.label.to_string(),
        log_x: profile.x.log_scale,
        series,
        max_y,
        y_tick_step: tick_step(max_y),
        diagnostics,
        size: config.size,
    }))
}

/// Load a log file and plan a chart over it.
///
/// The configuration is validated before the file is opened.
pub fn load_and_plan(path: impl AsRef<Path>, config: &ChartConfig) -> Result<Option<ChartPlan>> {
    config.validate()?;
    let records = RecordLoader::new()
        .with_excluded(config.excluded_algorithms.iter().cloned())
        .load_path(path)?;
    plan_chart(&records, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Vec<serde_json::Value>) -> Vec<Record> {
        values.into_iter().map(|v| Record::try_from(v).unwrap()).collect()
    }

    fn degenerate() -> Vec<Record> {
        records(vec![
            json!({"name": "MTR", "num_vertices": 10, "time_ns": 10000}),
            json!({"name": "MTR", "num_vertices": 10, "time_ns": 30000}),
            json!({"name": "MTR", "num_vertices": 20, "time_ns": 20000}),
            json!({"name": "Link-cut", "num_vertices": 10, "time_ns": 50000}),
            json!({"name": "Link-cut", "num_vertices": 20, "time_ns": 100000}),
            json!({"name": "Link-cut", "num_vertices": 20, "time_ns": 140000}),
        ])
    }

    #[test]
    fn test_plan_orders_by_last_mean() {
        let plan = plan_chart(&degenerate(), &ChartConfig::new("degenerate"))
            .unwrap()
            .unwrap();
        assert_eq!(plan.title, "Degenerate queries");
        assert_eq!(plan.x_label, "n");
        assert_eq!(plan.y_label, "µs/vertex");
        let names: Vec<&str> = plan.series.iter().map(|s| s.algorithm.as_str()).collect();
        assert_eq!(names, vec!["Link-cut", "MTR"]);

        let link_cut = &plan.series[0];
        assert_eq!(link_cut.points[0], SeriesPoint { x: 10.0, mean: 5.0, stdev: None });
        assert_eq!(link_cut.points[1].mean, 6.0);
        assert_eq!(plan.max_y, 6.0);
        assert_eq!(plan.y_tick_step, None);
    }

    #[test]
    fn test_error_bars_need_every_point() {
        let config = ChartConfig::new("degenerate").with_error_bars(true);
        let plan = plan_chart(&degenerate(), &config).unwrap().unwrap();
        assert!(plan.series.iter().all(|s| !s.error_bars));

        let full = records(vec![
            json!({"name": "MTR", "num_vertices": 10, "time_ns": 10000}),
            json!({"name": "MTR", "num_vertices": 10, "time_ns": 30000}),
        ]);
        let plan = plan_chart(&full, &config).unwrap().unwrap();
        assert!(plan.series[0].error_bars);

        let off = plan_chart(&full, &ChartConfig::new("degenerate")).unwrap().unwrap();
        assert!(!off.series[0].error_bars);
    }

    #[test]
    fn test_exclusion_and_empty_plan() {
        let config = ChartConfig::new("degenerate").with_excluded_algorithms(["MTR", "Link-cut"]);
        assert_eq!(plan_chart(&degenerate(), &config).unwrap(), None);
    }

    #[test]
    fn test_colors_follow_table() {
        let plan = plan_chart(&degenerate(), &ChartConfig::new("degenerate"))
            .unwrap()
            .unwrap();
        assert_eq!(plan.series[1].color, Rgb::GREEN);
        assert_eq!(plan.series[0].color, Rgb::BROWN);
    }

    #[test]
    fn test_fixed_tick_step() {
        assert_eq!(tick_step(49.9), None);
        assert_eq!(tick_step(50.0), Some(5.0));
        assert_eq!(tick_step(100.0), Some(5.0));
        assert_eq!(tick_step(100.1), None);
    }

    #[test]
    fn test_diagnostics_and_derived_title() {
        let input = records(vec![
            json!({"name": "MTR", "num_vertices": 10, "num_edges": 20, "time_ns": 2000}),
            json!({"name": "MTR", "num_vertices": 20, "num_edges": 45, "time_ns": 2000}),
        ]);
        let plan = plan_chart(&input, &ChartConfig::new("mst-edge-factor"))
            .unwrap()
            .unwrap();
        assert_eq!(plan.title, "Minimum Spanning forest (n = ?)");
        let ids: Vec<&str> = plan.diagnostics.iter().map(|d| d.check_id()).collect();
        assert_eq!(ids, vec!["vertices-constant", "edge-factor-integer", "title"]);
    }

    #[test]
    fn test_missing_axis_field_is_fatal() {
        let input = records(vec![json!({"name": "MTR", "time_ns": 2000})]);
        let err = plan_chart(&input, &ChartConfig::new("degenerate")).unwrap_err();
        assert!(matches!(err, ChartError::Core(_)));
    }

    #[test]
    fn test_non_numeric_axis() {
        let input = records(vec![
            json!({"name": "MTR", "num_vertices": 10, "std_dev": "high", "time_ns": 2000}),
        ]);
        let err = plan_chart(&input, &ChartConfig::new("degenerate-noisy")).unwrap_err();
        assert_eq!(
            err,
            ChartError::NonNumericAxis {
                field: "std_dev".to_string(),
                algorithm: "MTR".to_string(),
                value: "high".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_profile_validates() {
        assert!(matches!(
            ChartConfig::new("nope").validate(),
            Err(ChartError::UnknownProfile { .. })
        ));
        assert!(ChartConfig::new("cache").with_size(0, 10).validate().is_err());
    }
}
