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

//! Enumerated argument values and their library counterparts.

use benchview_core::{Metric, PerUnit, Unit};
use benchview_table::OutputFormat;
use clap::ValueEnum;

/// Table output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Aligned text blocks, one per key
    Plain,
    /// A LaTeX tabular
    #[value(alias = "latex")]
    Typeset,
    /// Whitespace-separated grid of means
    #[value(alias = "pgfdata")]
    DenseGrid,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Self::Plain,
            FormatArg::Typeset => Self::Typeset,
            FormatArg::DenseGrid => Self::DenseGrid,
        }
    }
}

/// Measured quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Running time in nanoseconds
    #[value(name = "time_ns")]
    TimeNs,
    /// Number of tree rotations
    #[value(name = "rotation_count")]
    RotationCount,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::TimeNs => Self::TimeNs,
            MetricArg::RotationCount => Self::RotationCount,
        }
    }
}

/// Display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Ms,
    Us,
    Ns,
    Rots,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Ms => Self::Ms,
            UnitArg::Us => Self::Us,
            UnitArg::Ns => Self::Ns,
            UnitArg::Rots => Self::Rots,
        }
    }
}

/// Per-unit normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PerArg {
    Edge,
    Query,
    Vertex,
}

impl From<PerArg> for PerUnit {
    fn from(arg: PerArg) -> Self {
        match arg {
            PerArg::Edge => Self::Edge,
            PerArg::Query => Self::Query,
            PerArg::Vertex => Self::Vertex,
        }
    }
}
