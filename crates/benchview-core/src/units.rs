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

//! Metric units and per-unit normalization.
//!
//! A displayed value is `metric / unit divisor`, optionally further divided
//! by a size field of the benchmark (`num_edges`, `num_queries` or
//! `num_vertices`) to express a rate. The pairing of metric and unit is
//! checked once, when the [`ValueSpec`] is built.

use crate::error::{CoreError, Result};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The measured quantity read from each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Wall-clock time in nanoseconds (`time_ns`).
    TimeNs,
    /// Number of tree rotations (`rotation_count`).
    RotationCount,
}

impl Metric {
    /// Record field holding the metric.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TimeNs => "time_ns",
            Self::RotationCount => "rotation_count",
        }
    }

    /// Whether the metric is a duration.
    pub fn is_time(&self) -> bool {
        matches!(self, Self::TimeNs)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Display unit of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Milliseconds.
    Ms,
    /// Microseconds.
    Us,
    /// Nanoseconds.
    Ns,
    /// Rotation counts.
    Rots,
}

impl Unit {
    /// Divisor applied to the raw metric.
    pub fn divisor(&self) -> f64 {
        match self {
            Self::Ms => 1_000_000.0,
            Self::Us => 1_000.0,
            Self::Ns | Self::Rots => 1.0,
        }
    }

    /// Short unit name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ms => "ms",
            Self::Us => "us",
            Self::Ns => "ns",
            Self::Rots => "rots",
        }
    }

    /// Whether the unit measures time.
    pub fn is_time(&self) -> bool {
        !matches!(self, Self::Rots)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size field used to turn a total into a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerUnit {
    /// Per edge (`num_edges`).
    Edge,
    /// Per query (`num_queries`).
    Query,
    /// Per vertex (`num_vertices`).
    Vertex,
}

impl PerUnit {
    /// Record field holding the denominator.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Edge => "num_edges",
            Self::Query => "num_queries",
            Self::Vertex => "num_vertices",
        }
    }

    /// Suffix used in unit labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Query => "query",
            Self::Vertex => "vertex",
        }
    }
}

/// Target rendering of a unit label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStyle {
    /// Plain text (`µs`).
    Plain,
    /// Typeset markup (`\textmu{}s`).
    Typeset,
}

/// How to derive one numeric sample from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSpec {
    metric: Metric,
    unit: Unit,
    per: Option<PerUnit>,
}

impl ValueSpec {
    /// Build a value spec, checking that the unit fits the metric.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IncompatibleUnit`] for a rotation metric with a
    /// time unit or a time metric with `rots`.
    pub fn new(metric: Metric, unit: Unit, per: Option<PerUnit>) -> Result<Self> {
        if metric.is_time() != unit.is_time() {
            return Err(CoreError::IncompatibleUnit {
                metric: metric.field().to_string(),
                unit: unit.as_str().to_string(),
            });
        }
        Ok(Self { metric, unit, per })
    }

    /// The metric read from each record.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The display unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The per-unit denominator, if any.
    pub fn per(&self) -> Option<PerUnit> {
        self.per
    }

    /// Derive the sample value of a record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if the metric or the denominator
    /// field is missing from the record.
    pub fn value(&self, record: &Record) -> Result<f64> {
        let value = record.number(self.metric.field())? / self.unit.divisor();
        match self.per {
            Some(per) => Ok(value / record.number(per.field())?),
            None => Ok(value),
        }
    }

    /// Unit label such as `µs/query` or `rotations`.
    pub fn unit_label(&self, style: UnitStyle) -> String {
        let mut label = match (self.unit, style) {
            (Unit::Us, UnitStyle::Plain) => "µs".to_string(),
            (Unit::Us, UnitStyle::Typeset) => r"\textmu{}s".to_string(),
            (Unit::Rots, _) => "rotations".to_string(),
            (unit, _) => unit.as_str().to_string(),
        };
        if let Some(per) = self.per {
            label.push('/');
            label.push_str(per.as_str());
        }
        label
    }
}
