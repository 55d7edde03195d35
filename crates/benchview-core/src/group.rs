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

//! Two-level grouping of samples by algorithm and key.
//!
//! The outer level keeps algorithms in first-seen order; the inner level is
//! sorted by key. Samples for a cell are appended in input order and never
//! overwritten.

use crate::error::Result;
use crate::record::Record;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Display;
use tracing::debug;

/// Samples grouped by algorithm identity, then by key.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSamples<K: Ord> {
    order: Vec<String>,
    groups: HashMap<String, BTreeMap<K, Vec<f64>>>,
}

impl<K: Ord + Clone> GroupedSamples<K> {
    /// An empty grouping.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            groups: HashMap::new(),
        }
    }

    /// Append one sample to the (algorithm, key) cell.
    pub fn push(&mut self, algorithm: &str, key: K, sample: f64) {
        if !self.groups.contains_key(algorithm) {
            self.order.push(algorithm.to_string());
        }
        self.groups
            .entry(algorithm.to_string())
            .or_default()
            .entry(key)
            .or_default()
            .push(sample);
    }

    /// Algorithms in first-seen order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Samples of one cell; empty if the cell was never filled.
    pub fn samples(&self, algorithm: &str, key: &K) -> &[f64] {
        self.groups
            .get(algorithm)
            .and_then(|by_key| by_key.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All cells of one algorithm, sorted by key.
    pub fn by_key(&self, algorithm: &str) -> Option<&BTreeMap<K, Vec<f64>>> {
        self.groups.get(algorithm)
    }

    /// Sorted union of the keys of every algorithm.
    pub fn keys(&self) -> Vec<K> {
        let keys: BTreeSet<&K> = self.groups.values().flat_map(|m| m.keys()).collect();
        keys.into_iter().cloned().collect()
    }

    /// Total number of samples.
    pub fn sample_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|m| m.values())
            .map(Vec::len)
            .sum()
    }

    /// Whether no sample was grouped.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K: Ord + Clone> Default for GroupedSamples<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds [`GroupedSamples`] from records.
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    excluded_keys: HashSet<String>,
}

impl GroupingEngine {
    /// An engine that keeps every key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop keys whose string form is in the given set.
    pub fn with_excluded_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Group records by algorithm and key.
    ///
    /// `algorithm` names the outer group, `key` the inner group and `value`
    /// the sample. Any extractor failure aborts grouping.
    pub fn group<'r, K, I, A, F, V>(
        &self,
        records: I,
        algorithm: A,
        key: F,
        value: V,
    ) -> Result<GroupedSamples<K>>
    where
        K: Ord + Clone + Display,
        I: IntoIterator<Item = &'r Record>,
        A: Fn(&Record) -> Result<String>,
        F: Fn(&Record) -> Result<K>,
        V: Fn(&Record) -> Result<f64>,
    {
        let mut grouped = GroupedSamples::new();
        let mut skipped = 0usize;

        for record in records {
            let k = key(record)?;
            if !self.excluded_keys.is_empty() && self.excluded_keys.contains(&k.to_string()) {
                skipped += 1;
                continue;
            }
            let name = algorithm(record)?;
            grouped.push(&name, k, value(record)?);
        }

        debug!(
            "Grouped {} samples for {} algorithms ({} dropped by key exclusion)",
            grouped.sample_count(),
            grouped.order.len(),
            skipped
        );
        Ok(grouped)
    }

    /// Group by the record's algorithm identity.
    pub fn group_by_algorithm<'r, K, I, F, V>(
        &self,
        records: I,
        key: F,
        value: V,
    ) -> Result<GroupedSamples<K>>
    where
        K: Ord + Clone + Display,
        I: IntoIterator<Item = &'r Record>,
        F: Fn(&Record) -> Result<K>,
        V: Fn(&Record) -> Result<f64>,
    {
        self.group(records, |r| Ok(r.algorithm().to_string()), key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::key::KeyValue;
    use serde_json::json;

    fn records() -> Vec<Record> {
        [
            json!({"name": "B", "n": 20, "v": 1.0}),
            json!({"name": "A", "n": 10, "v": 2.0}),
            json!({"name": "B", "n": 10, "v": 3.0}),
            json!({"name": "B", "n": 20, "v": 5.0}),
        ]
        .into_iter()
        .map(|v| Record::try_from(v).unwrap())
        .collect()
    }

    #[test]
    fn test_group_preserves_first_seen_and_input_order() {
        let recs = records();
        let grouped = GroupingEngine::new()
            .group_by_algorithm(&recs, |r| r.key("n"), |r| r.number("v"))
            .unwrap();

        assert_eq!(grouped.algorithms().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(grouped.samples("B", &KeyValue::Int(20)), &[1.0, 5.0]);
        assert_eq!(grouped.samples("A", &KeyValue::Int(10)), &[2.0]);
        assert!(grouped.samples("A", &KeyValue::Int(20)).is_empty());
        assert_eq!(grouped.keys(), vec![KeyValue::Int(10), KeyValue::Int(20)]);
        assert_eq!(grouped.sample_count(), 4);
    }

    #[test]
    fn test_key_exclusion_compares_strings() {
        let recs = records();
        let grouped = GroupingEngine::new()
            .with_excluded_keys(["20"])
            .group_by_algorithm(&recs, |r| r.key("n"), |r| r.number("v"))
            .unwrap();
        assert_eq!(grouped.keys(), vec![KeyValue::Int(10)]);
        assert_eq!(grouped.algorithms().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let recs = records();
        let err = GroupingEngine::new()
            .group_by_algorithm(&recs, |r| r.key("missing"), |r| r.number("v"))
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingField { .. }));
    }

    #[test]
    fn test_custom_algorithm_extractor() {
        let recs = records();
        let grouped = GroupingEngine::new()
            .group(
                &recs,
                |_| Ok("all".to_string()),
                |r| r.key("n"),
                |r| r.number("v"),
            )
            .unwrap();
        assert_eq!(grouped.algorithms().collect::<Vec<_>>(), vec!["all"]);
        assert_eq!(grouped.samples("all", &KeyValue::Int(20)), &[1.0, 5.0]);
    }

    #[test]
    fn test_push_appends() {
        let mut grouped = GroupedSamples::new();
        grouped.push("A", 1u32, 1.0);
        grouped.push("A", 1u32, 1.0);
        assert_eq!(grouped.samples("A", &1), &[1.0, 1.0]);
    }
}
