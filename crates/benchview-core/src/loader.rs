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

//! Line-oriented record loading.
//!
//! Each input line holds one JSON object. A line whose object carries a
//! `results` array expands into one record per array element; every element
//! inherits the outer object's other fields, with the element's own fields
//! winning on collision. Any other object is emitted as a single record.
//!
//! # Examples
//!
//! ```
//! use benchview_core::loader::expand_line;
//!
//! let line = r#"{"seed":5,"results":[{"name":"X","v":1},{"name":"X","v":2}]}"#;
//! let records: Vec<_> = expand_line(line, 1)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(records.len(), 2);
//! assert!(records.iter().all(|r| r.integer("seed").unwrap() == 5));
//! ```

use crate::error::{CoreError, Result};
use crate::record::{Record, RESULTS_FIELD};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Default maximum input size (1 GB).
///
/// Can be overridden via the `BENCHVIEW_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Get the maximum input size from environment or use default.
fn max_file_size() -> u64 {
    std::env::var("BENCHVIEW_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Lazy sequence of the records produced by one input line.
#[derive(Debug)]
pub struct LineRecords {
    line: usize,
    outer: Option<Map<String, Value>>,
    siblings: Option<std::vec::IntoIter<Value>>,
}

impl Iterator for LineRecords {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(siblings) = self.siblings.as_mut() else {
            return self.outer.take().map(Record::from_map);
        };

        let sibling = siblings.next()?;
        let Value::Object(fields) = sibling else {
            return Some(Err(CoreError::malformed(
                self.line,
                "entries of 'results' must be JSON objects",
            )));
        };

        let mut merged = self.outer.clone().unwrap_or_default();
        merged.extend(fields);
        Some(Record::from_map(merged))
    }
}

/// Parse one input line into its flat records.
///
/// `line_number` is 1-based and only used for error messages.
///
/// # Errors
///
/// Returns [`CoreError::MalformedRecord`] if the line is not valid JSON or
/// is not a JSON object. Errors for individual siblings (missing `name`, a
/// non-object entry) are yielded by the iterator.
pub fn expand_line(line: &str, line_number: usize) -> Result<LineRecords> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| CoreError::malformed(line_number, e.to_string()))?;

    let Value::Object(mut outer) = value else {
        return Err(CoreError::malformed(line_number, "expected a JSON object"));
    };

    let siblings = match outer.remove(RESULTS_FIELD) {
        Some(Value::Array(items)) => Some(items.into_iter()),
        Some(other) => {
            // Not a sibling collection: keep the field as ordinary data
            outer.insert(RESULTS_FIELD.to_string(), other);
            None
        }
        None => None,
    };

    Ok(LineRecords {
        line: line_number,
        outer: Some(outer),
        siblings,
    })
}

/// Reads benchmark logs into memory, dropping excluded algorithms.
#[derive(Debug, Clone, Default)]
pub struct RecordLoader {
    excluded: HashSet<String>,
}

impl RecordLoader {
    /// Create a loader that keeps every algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop records produced by the given algorithms.
    pub fn with_excluded<I, S>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(algorithms.into_iter().map(Into::into));
        self
    }

    /// Whether records of this algorithm are dropped.
    pub fn is_excluded(&self, algorithm: &str) -> bool {
        self.excluded.contains(algorithm)
    }

    /// Load every record from a reader of newline-delimited JSON.
    ///
    /// Whitespace-only lines are skipped. The whole input is rejected on the
    /// first malformed line.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.map_err(|e| CoreError::malformed(line_number, e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }

            for record in expand_line(&line, line_number)? {
                let record = record?;
                if self.is_excluded(record.algorithm()) {
                    dropped += 1;
                } else {
                    records.push(record);
                }
            }
        }

        debug!(
            "Loaded {} records ({} dropped by algorithm exclusion)",
            records.len(),
            dropped
        );
        Ok(records)
    }

    /// Load every record from a file, with size validation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file is missing or unreadable and
    /// [`CoreError::FileTooLarge`] if it exceeds `BENCHVIEW_MAX_FILE_SIZE`.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| CoreError::io_error(path, e))?;

        let max = max_file_size();
        if metadata.len() > max {
            return Err(CoreError::FileTooLarge {
                path: path.to_path_buf(),
                actual: metadata.len(),
                max,
            });
        }

        let content = fs::read_to_string(path).map_err(|e| CoreError::io_error(path, e))?;
        debug!("Read {} bytes from '{}'", content.len(), path.display());
        self.load_reader(content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn collect(line: &str) -> Vec<Record> {
        expand_line(line, 1)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_plain_object_is_single_record() {
        let records = collect(r#"{"name":"A","time_ns":1000000,"num_edges":10}"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].algorithm(), "A");
        assert_eq!(records[0].integer("num_edges").unwrap(), 10);
    }

    #[test]
    fn test_results_expand_with_inherited_fields() {
        let records = collect(r#"{"seed":5,"results":[{"name":"X","v":1},{"name":"X","v":2}]}"#);
        assert_eq!(records.len(), 2);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.integer("seed").unwrap(), 5);
            assert_eq!(r.integer("v").unwrap(), i as i64 + 1);
            assert!(r.get("results").is_none());
        }
    }

    #[test]
    fn test_sibling_fields_take_precedence() {
        let records =
            collect(r#"{"name":"outer","num_vertices":10,"results":[{"name":"inner","num_vertices":20}]}"#);
        assert_eq!(records[0].algorithm(), "inner");
        assert_eq!(records[0].integer("num_vertices").unwrap(), 20);
    }

    #[test]
    fn test_outer_name_inherited() {
        let records = collect(r#"{"name":"MTR","results":[{"time_ns":1},{"time_ns":2}]}"#);
        assert!(records.iter().all(|r| r.algorithm() == "MTR"));
    }

    #[test]
    fn test_empty_results_yields_nothing() {
        let records = collect(r#"{"name":"MTR","results":[]}"#);
        assert!(records.is_empty());
    }

    #[test]
    fn test_non_array_results_kept_as_field() {
        let records = collect(r#"{"name":"MTR","results":"n/a"}"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].string("results").unwrap(), "n/a");
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        assert!(matches!(
            expand_line("{not json", 7).unwrap_err(),
            CoreError::MalformedRecord { line: 7, .. }
        ));
        assert!(matches!(
            expand_line("[1,2]", 2).unwrap_err(),
            CoreError::MalformedRecord { line: 2, .. }
        ));
    }

    #[test]
    fn test_non_object_sibling_is_fatal() {
        let input = "{\"name\":\"A\",\"results\":[1]}\n";
        let err = RecordLoader::new().load_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_loader_excludes_algorithms() {
        let input = "{\"name\":\"A\",\"v\":1}\n{\"name\":\"B\",\"v\":2}\n\n{\"name\":\"A\",\"v\":3}\n";
        let loader = RecordLoader::new().with_excluded(["B"]);
        let records = loader.load_reader(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.algorithm() == "A"));
    }

    #[test]
    fn test_empty_exclusion_keeps_everything() {
        let input = "{\"name\":\"A\",\"v\":1}\n{\"name\":\"B\",\"v\":2}\n";
        let plain = RecordLoader::new().load_reader(input.as_bytes()).unwrap();
        let filtered = RecordLoader::new()
            .with_excluded(Vec::<String>::new())
            .load_reader(input.as_bytes())
            .unwrap();
        assert_eq!(plain, filtered);
    }

    #[test]
    fn test_error_reports_line_number() {
        let input = "{\"name\":\"A\"}\n{\"name\":\"B\"\n";
        let err = RecordLoader::new().load_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_load_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"name\":\"A\",\"time_ns\":5}}").unwrap();
        let records = RecordLoader::new().load_path(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_missing_path() {
        let err = RecordLoader::new()
            .load_path("/nonexistent/benchmarks.jsonl")
            .unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
