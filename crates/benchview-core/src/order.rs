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

//! Canonical algorithm ordering.
//!
//! Table rows, legend entries and colour assignment all follow one order:
//! the known identifiers in their configured priority, followed by any
//! other identifiers in the order they were first seen in the input.

use std::collections::HashSet;

/// Known algorithm identifiers, in presentation priority.
pub const DEFAULT_ALGORITHMS: &[&str] = &[
    "Kruskal (petgraph)",
    "Link-cut",
    "Greedy Splay",
    "Stable Greedy Splay",
    "2P Splay",
    "Stable 2P Splay",
    "L2P Splay",
    "Stable L2P Splay",
    "MTR",
    "Stable MTR",
    "1-cut",
    "Petgraph",
    "Simple",
    "./stt-cpp/bin/greedy_stt",
    "./stt-cpp/bin/ltp_stt",
    "./stt-cpp/bin/mtr_stt",
    "./dtree/dtree_queries",
    "./tarjan-werneck/connectivity_st_v",
    "./tarjan-werneck/connectivity_st_e",
];

/// An ordered list of known algorithm identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrder {
    known: Vec<String>,
}

impl CanonicalOrder {
    /// Create an order from an explicit priority list.
    pub fn new<I, S>(known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: known.into_iter().map(Into::into).collect(),
        }
    }

    /// The priority list itself.
    pub fn known(&self) -> &[String] {
        &self.known
    }

    /// Order the algorithms actually present.
    ///
    /// `present` must be in first-seen order; duplicates are ignored.
    pub fn resolve<'a, I>(&self, present: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let present: Vec<&str> = present.into_iter().filter(|a| seen.insert(*a)).collect();

        let mut ordered: Vec<String> = self
            .known
            .iter()
            .filter(|k| seen.contains(k.as_str()))
            .cloned()
            .collect();

        ordered.extend(
            present
                .into_iter()
                .filter(|a| !self.known.iter().any(|k| k == a))
                .map(str::to_string),
        );
        ordered
    }
}

impl Default for CanonicalOrder {
    fn default() -> Self {
        Self::new(DEFAULT_ALGORITHMS.iter().copied())
    }
}
