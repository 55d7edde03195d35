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

//! Reduction of repeated-trial samples to an aggregate statistic.

use crate::error::{CoreError, Result};

/// Which dispersion measure to attach to the mean.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dispersion {
    /// Mean only.
    #[default]
    None,
    /// Mean and sample standard deviation.
    StdDev,
    /// The interval `mean ± r·stdev`.
    Range(f64),
}

impl Dispersion {
    /// Range dispersion with multiplier `r`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] unless `r` is a positive finite number.
    pub fn range(r: f64) -> Result<Self> {
        if r.is_finite() && r > 0.0 {
            Ok(Self::Range(r))
        } else {
            Err(CoreError::invalid_config(
                "range",
                format!("multiplier must be positive, got {}", r),
            ))
        }
    }

    /// Whether any dispersion was requested.
    pub fn is_requested(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// The reduced value for one (algorithm, key) cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregate {
    /// No samples.
    Absent,
    /// Arithmetic mean.
    Point {
        /// Mean of the samples
        mean: f64,
    },
    /// Mean with sample standard deviation.
    Deviation {
        /// Mean of the samples
        mean: f64,
        /// Sample standard deviation (divisor n − 1)
        stdev: f64,
    },
    /// Mean with a symmetric interval around it.
    Range {
        /// Mean of the samples
        mean: f64,
        /// `mean - r·stdev`
        low: f64,
        /// `mean + r·stdev`
        high: f64,
    },
}

impl Aggregate {
    /// The mean, unless the cell is absent.
    pub fn mean(&self) -> Option<f64> {
        match self {
            Self::Absent => None,
            Self::Point { mean } | Self::Deviation { mean, .. } | Self::Range { mean, .. } => {
                Some(*mean)
            }
        }
    }

    /// The standard deviation, if one was computed.
    pub fn stdev(&self) -> Option<f64> {
        match self {
            Self::Deviation { stdev, .. } => Some(*stdev),
            _ => None,
        }
    }

    /// Whether the cell has no samples.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Sample standard deviation; `None` for fewer than two samples.
pub fn sample_stdev(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let mean = mean(samples)?;
    let sum_sq: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
    Some((sum_sq / (samples.len() - 1) as f64).sqrt())
}

/// Reduce samples to an aggregate.
///
/// Dispersion silently degrades to a plain mean when fewer than two
/// samples exist.
pub fn aggregate(samples: &[f64], dispersion: Dispersion) -> Aggregate {
    let Some(mean) = mean(samples) else {
        return Aggregate::Absent;
    };

    match (dispersion, sample_stdev(samples)) {
        (Dispersion::StdDev, Some(stdev)) => Aggregate::Deviation { mean, stdev },
        (Dispersion::Range(r), Some(stdev)) => Aggregate::Range {
            mean,
            low: mean - r * stdev,
            high: mean + r * stdev,
        },
        _ => Aggregate::Point { mean },
    }
}
