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

//! The aggregated value grid consumed by the renderers.

use crate::group::GroupedSamples;
use crate::order::CanonicalOrder;
use crate::stats::{aggregate, Aggregate, Dispersion};

/// Aggregates for every (key, algorithm) pair, in output order.
///
/// Keys are sorted ascending and algorithms follow the canonical order, so
/// iterating rows and columns directly yields the presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedGrid<K> {
    keys: Vec<K>,
    algorithms: Vec<String>,
    /// `cells[key_index][algorithm_index]`
    cells: Vec<Vec<Aggregate>>,
}

impl<K: Ord + Clone> AggregatedGrid<K> {
    /// Reduce grouped samples to aggregates.
    pub fn build(grouped: &GroupedSamples<K>, order: &CanonicalOrder, dispersion: Dispersion) -> Self {
        let keys = grouped.keys();
        let algorithms = order.resolve(grouped.algorithms());
        let cells = keys
            .iter()
            .map(|key| {
                algorithms
                    .iter()
                    .map(|algo| aggregate(grouped.samples(algo, key), dispersion))
                    .collect()
            })
            .collect();

        Self {
            keys,
            algorithms,
            cells,
        }
    }

    /// Keys, ascending.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Algorithms, in canonical order.
    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// The aggregate of one cell; [`Aggregate::Absent`] for unknown pairs.
    pub fn cell(&self, key: &K, algorithm: &str) -> Aggregate {
        let Ok(k) = self.keys.binary_search(key) else {
            return Aggregate::Absent;
        };
        match self.algorithms.iter().position(|a| a == algorithm) {
            Some(a) => self.cells[k][a],
            None => Aggregate::Absent,
        }
    }

    /// One key's aggregates, aligned with [`algorithms`](Self::algorithms).
    pub fn row(&self, key_index: usize) -> &[Aggregate] {
        &self.cells[key_index]
    }

    /// The first absent cell in row-major order, if any.
    pub fn first_absent(&self) -> Option<(&K, &str)> {
        self.keys.iter().zip(&self.cells).find_map(|(key, row)| {
            row.iter()
                .position(Aggregate::is_absent)
                .map(|a| (key, self.algorithms[a].as_str()))
        })
    }

    /// Present cells of one algorithm, by ascending key.
    pub fn series(&self, algorithm: &str) -> Vec<(&K, Aggregate)> {
        let Some(a) = self.algorithms.iter().position(|x| x == algorithm) else {
            return Vec::new();
        };
        self.keys
            .iter()
            .zip(&self.cells)
            .filter(|(_, row)| !row[a].is_absent())
            .map(|(key, row)| (key, row[a]))
            .collect()
    }

    /// Whether the grid has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped() -> GroupedSamples<i64> {
        let mut g = GroupedSamples::new();
        g.push("Z", 20, 4.0);
        g.push("B", 10, 1.0);
        g.push("B", 10, 3.0);
        g.push("A", 20, 2.0);
        g
    }

    #[test]
    fn test_build_orders_keys_and_algorithms() {
        let grid = AggregatedGrid::build(
            &grouped(),
            &CanonicalOrder::new(["A", "B"]),
            Dispersion::None,
        );
        assert_eq!(grid.keys(), &[10, 20]);
        assert_eq!(grid.algorithms(), &["A", "B", "Z"]);
        assert_eq!(grid.cell(&10, "B"), Aggregate::Point { mean: 2.0 });
        assert_eq!(grid.cell(&10, "A"), Aggregate::Absent);
        assert_eq!(grid.cell(&99, "A"), Aggregate::Absent);
    }

    #[test]
    fn test_first_absent() {
        let grid = AggregatedGrid::build(&grouped(), &CanonicalOrder::new(["A"]), Dispersion::None);
        assert_eq!(grid.first_absent(), Some((&10, "A")));

        let mut full = GroupedSamples::new();
        full.push("A", 1, 1.0);
        full.push("B", 1, 1.0);
        let grid = AggregatedGrid::build(&full, &CanonicalOrder::default(), Dispersion::None);
        assert_eq!(grid.first_absent(), None);
    }

    #[test]
    fn test_series_skips_absent() {
        let grid = AggregatedGrid::build(&grouped(), &CanonicalOrder::default(), Dispersion::StdDev);
        let series = grid.series("B");
        assert_eq!(series.len(), 1);
        assert_eq!(*series[0].0, 10);
        assert!(series[0].1.stdev().is_some());
        assert!(grid.series("missing").is_empty());
    }
}
