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

//! Chart profiles: declarative descriptions of one kind of chart.
//!
//! A [`Profile`] fixes how the x and y coordinates are read from a record,
//! how the title is derived, which algorithms are included and which
//! consistency checks run over the included records.

use crate::title::TitleSpec;
use crate::validators::ConsistencyCheck;
use benchview_core::{CoreError, KeyValue, Metric, PerUnit, Record, Result, Unit, ValueSpec};
use std::collections::BTreeSet;
use std::fmt;

/// Integer quotient of two integer fields, as in `m / n`.
pub fn field_ratio(record: &Record, numerator: &str, denominator: &str) -> Result<i64> {
    let n = record.integer(numerator)?;
    let d = record.integer(denominator)?;
    n.checked_div(d).ok_or_else(|| CoreError::FieldType {
        field: denominator.to_string(),
        algorithm: record.algorithm().to_string(),
        expected: "a non-zero integer",
    })
}

/// The edge factor `num_edges / num_vertices`, rounded down.
pub fn edge_factor(record: &Record) -> Result<i64> {
    field_ratio(record, "num_edges", "num_vertices")
}

/// Join a sorted set for a message: `10, 20, 30`.
pub fn join_sorted<T: fmt::Display>(values: &BTreeSet<T>) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// How the x coordinate is read from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XIndex {
    /// `num_edges / num_vertices`
    EdgeFactor,
    /// A numeric field of the record.
    Field(&'static str),
}

impl XIndex {
    /// Extract the x coordinate.
    pub fn extract(&self, record: &Record) -> Result<KeyValue> {
        match self {
            Self::EdgeFactor => edge_factor(record).map(KeyValue::Int),
            Self::Field(field) => record.key(field),
        }
    }

    /// Name of the source, for messages.
    pub fn source(&self) -> &'static str {
        match self {
            Self::EdgeFactor => "num_edges/num_vertices",
            Self::Field(field) => field,
        }
    }
}

/// The x axis of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XAxis {
    /// Axis label
    pub label: &'static str,
    /// Whether the axis is logarithmic
    pub log_scale: bool,
    /// Coordinate extractor
    pub index: XIndex,
}

/// The y axis of a profile: a metric in a unit, optionally per size unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YAxis {
    /// Axis label
    pub label: &'static str,
    /// Metric read from each record
    pub metric: Metric,
    /// Display unit
    pub unit: Unit,
    /// Optional denominator
    pub per: Option<PerUnit>,
}

impl YAxis {
    /// The value derivation of this axis.
    pub fn value_spec(&self) -> Result<ValueSpec> {
        ValueSpec::new(self.metric, self.unit, self.per)
    }
}

/// Inclusion predicate that keeps every algorithm.
pub fn include_all(_algorithm: &str) -> bool {
    true
}

/// A named chart profile.
pub struct Profile {
    /// Profile name
    pub name: &'static str,
    /// X axis
    pub x: XAxis,
    /// Y axis
    pub y: YAxis,
    /// Title
    pub title: TitleSpec,
    /// Which algorithms the chart shows
    pub include: fn(&str) -> bool,
    /// Checks run over the included records, in order
    pub checks: &'static [&'static dyn ConsistencyCheck],
}

impl Profile {
    /// Whether records of this algorithm belong to the chart.
    pub fn includes(&self, algorithm: &str) -> bool {
        (self.include)(algorithm)
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("title", &self.title)
            .field(
                "checks",
                &self.checks.iter().map(|c| c.id()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::try_from(value).unwrap()
    }

    #[test]
    fn test_edge_factor_rounds_down() {
        let r = record(json!({"name": "A", "num_edges": 25, "num_vertices": 10}));
        assert_eq!(edge_factor(&r).unwrap(), 2);
    }

    #[test]
    fn test_edge_factor_zero_vertices() {
        let r = record(json!({"name": "A", "num_edges": 25, "num_vertices": 0}));
        assert!(matches!(edge_factor(&r), Err(CoreError::FieldType { .. })));
    }

    #[test]
    fn test_x_index() {
        let r = record(json!({"name": "A", "num_edges": 40, "num_vertices": 10, "std_dev": 0.5}));
        assert_eq!(XIndex::EdgeFactor.extract(&r).unwrap(), KeyValue::Int(4));
        assert_eq!(XIndex::Field("std_dev").extract(&r).unwrap(), KeyValue::Float(0.5));
        assert!(XIndex::Field("num_groups").extract(&r).is_err());
    }

    #[test]
    fn test_y_axis_value() {
        let y = YAxis {
            label: "µs/edge",
            metric: Metric::TimeNs,
            unit: Unit::Us,
            per: Some(PerUnit::Edge),
        };
        let r = record(json!({"name": "A", "time_ns": 8000, "num_edges": 4}));
        assert_eq!(y.value_spec().unwrap().value(&r).unwrap(), 2.0);
    }

    #[test]
    fn test_join_sorted() {
        let set: BTreeSet<i64> = [30, 10, 20].into_iter().collect();
        assert_eq!(join_sorted(&set), "10, 20, 30");
    }
}
