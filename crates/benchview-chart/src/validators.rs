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

//! Cross-record consistency checks.
//!
//! Each check inspects the full filtered record set of a chart and reports
//! violated assumptions as [`Diagnostic`]s. Checks never fail: a record that
//! lacks the fields a check needs is reported as a diagnostic too.

use crate::diagnostic::Diagnostic;
use crate::profile::{edge_factor, join_sorted};
use benchview_core::{CoreError, Record};
use std::collections::BTreeSet;

/// A consistency check run over the records of one chart.
pub trait ConsistencyCheck: Send + Sync {
    /// Check identifier
    fn id(&self) -> &'static str;

    /// What the check asserts
    fn description(&self) -> &'static str;

    /// Run the check
    fn check(&self, records: &[&Record]) -> Vec<Diagnostic>;
}

fn unreadable(id: &str, err: &CoreError) -> Diagnostic {
    Diagnostic::warning(id, format!("cannot check record: {}", err))
}

/// All records share one vertex count.
pub struct VerticesConstant;

impl ConsistencyCheck for VerticesConstant {
    fn id(&self) -> &'static str {
        "vertices-constant"
    }

    fn description(&self) -> &'static str {
        "The vertex count is the same across the chart"
    }

    fn check(&self, records: &[&Record]) -> Vec<Diagnostic> {
        let mut counts = BTreeSet::new();
        for record in records {
            match record.key("num_vertices") {
                Ok(n) => {
                    counts.insert(n);
                }
                Err(e) => return vec![unreadable(self.id(), &e)],
            }
        }
        if counts.len() > 1 {
            vec![Diagnostic::warning(
                self.id(),
                format!("Multiple vertex counts: {}", join_sorted(&counts)),
            )]
        } else {
            Vec::new()
        }
    }
}

/// All records share one edge factor `m / n`.
pub struct EdgeFactorConstant;

impl ConsistencyCheck for EdgeFactorConstant {
    fn id(&self) -> &'static str {
        "edge-factor-constant"
    }

    fn description(&self) -> &'static str {
        "The edge factor m/n is the same across the chart"
    }

    fn check(&self, records: &[&Record]) -> Vec<Diagnostic> {
        let mut factors = BTreeSet::new();
        for record in records {
            match edge_factor(record) {
                Ok(f) => {
                    factors.insert(f);
                }
                Err(e) => return vec![unreadable(self.id(), &e)],
            }
        }
        if factors.len() > 1 {
            vec![Diagnostic::warning(
                self.id(),
                format!("Multiple edge factors: {}", join_sorted(&factors)),
            )]
        } else {
            Vec::new()
        }
    }
}

/// Every edge count is a multiple of the vertex count.
pub struct EdgeFactorInteger;

impl ConsistencyCheck for EdgeFactorInteger {
    fn id(&self) -> &'static str {
        "edge-factor-integer"
    }

    fn description(&self) -> &'static str {
        "The edge count m is a multiple of the vertex count n"
    }

    fn check(&self, records: &[&Record]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for record in records {
            let pair = record
                .integer("num_edges")
                .and_then(|m| record.integer("num_vertices").map(|n| (m, n)));
            match pair {
                Ok((m, n)) if n == 0 || m % n != 0 => diagnostics.push(Diagnostic::warning(
                    self.id(),
                    format!("benchmark with m = {} and n = {}: m not a multiple of n", m, n),
                )),
                Ok(_) => {}
                Err(e) => diagnostics.push(unreadable(self.id(), &e)),
            }
        }
        diagnostics
    }
}

/// Every query count is the square of the vertex count.
pub struct QueriesQuadratic;

impl ConsistencyCheck for QueriesQuadratic {
    fn id(&self) -> &'static str {
        "queries-quadratic"
    }

    fn description(&self) -> &'static str {
        "The query count q equals n²"
    }

    fn check(&self, records: &[&Record]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for record in records {
            let pair = record
                .integer("num_queries")
                .and_then(|q| record.integer("num_vertices").map(|n| (q, n)));
            match pair {
                Ok((q, n)) if n.checked_mul(n) != Some(q) => {
                    diagnostics.push(Diagnostic::warning(
                        self.id(),
                        format!("benchmark with q = {} and n = {}: q is not the square of n", q, n),
                    ))
                }
                Ok(_) => {}
                Err(e) => diagnostics.push(unreadable(self.id(), &e)),
            }
        }
        diagnostics
    }
}
