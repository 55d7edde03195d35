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

//! Chart titles.
//!
//! A title is either a fixed string or a template filled with a value that
//! is expected to be constant across the chart. When it is not, every slot
//! is filled with `?` and a diagnostic is returned; deriving a title never
//! fails.

use crate::diagnostic::Diagnostic;
use crate::profile::field_ratio;
use benchview_core::{CoreError, KeyValue, Record, Result};
use std::collections::BTreeSet;

/// Placeholder for a value that is not constant.
pub const UNKNOWN_SLOT: &str = "?";

const SLOT: &str = "{}";

/// The value shown in a derived title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleField {
    /// `num_vertices`
    Vertices,
    /// `num_edges / num_vertices`
    EdgeFactor,
    /// `num_queries / num_vertices`
    QueryFactor,
    /// `num_queries / num_vertices²`
    QueryFactorSquared,
    /// `(group_size, queries_per_group)`
    GroupSizeAndQueries,
    /// `(num_vertices, num_queries)`
    VerticesAndQueries,
}

impl TitleField {
    /// Read the value from a record.
    pub fn extract(&self, record: &Record) -> Result<KeyValue> {
        match self {
            Self::Vertices => record.key("num_vertices"),
            Self::EdgeFactor => field_ratio(record, "num_edges", "num_vertices").map(KeyValue::Int),
            Self::QueryFactor => {
                field_ratio(record, "num_queries", "num_vertices").map(KeyValue::Int)
            }
            Self::QueryFactorSquared => {
                let q = record.integer("num_queries")?;
                let n = record.integer("num_vertices")?;
                let n2 = n
                    .checked_mul(n)
                    .filter(|v| *v != 0)
                    .ok_or_else(|| CoreError::FieldType {
                        field: "num_vertices".to_string(),
                        algorithm: record.algorithm().to_string(),
                        expected: "a non-zero integer",
                    })?;
                Ok(KeyValue::Int(q / n2))
            }
            Self::GroupSizeAndQueries => Ok(KeyValue::Tuple(vec![
                record.key("group_size")?,
                record.key("queries_per_group")?,
            ])),
            Self::VerticesAndQueries => Ok(KeyValue::Tuple(vec![
                record.key("num_vertices")?,
                record.key("num_queries")?,
            ])),
        }
    }

    /// Plural description used in warnings.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Vertices => "vertex counts",
            Self::EdgeFactor => "edge factors",
            Self::QueryFactor => "query factors",
            Self::QueryFactorSquared => "q/n² factors",
            Self::GroupSizeAndQueries => "group sizes/queries",
            Self::VerticesAndQueries => "vertices/queries",
        }
    }
}

/// How a chart title is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSpec {
    /// A constant title.
    Fixed(&'static str),
    /// A template whose `{}` slots take the components of a constant value.
    Derived {
        /// Template with one `{}` per component
        template: &'static str,
        /// The value filling the slots
        field: TitleField,
    },
}

/// Fill the `{}` slots of a template in order.
pub fn fill_template<S: AsRef<str>>(template: &str, values: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut values = values.iter();
    while let Some(pos) = rest.find(SLOT) {
        out.push_str(&rest[..pos]);
        match values.next() {
            Some(v) => out.push_str(v.as_ref()),
            None => out.push_str(SLOT),
        }
        rest = &rest[pos + SLOT.len()..];
    }
    out.push_str(rest);
    out
}

fn unknown(template: &str) -> String {
    let slots = template.matches(SLOT).count();
    fill_template(template, &vec![UNKNOWN_SLOT; slots])
}

/// Derive the title of a chart over the given records.
pub fn derive_title(spec: &TitleSpec, records: &[&Record]) -> (String, Vec<Diagnostic>) {
    let (template, field) = match spec {
        TitleSpec::Fixed(title) => return (title.to_string(), Vec::new()),
        TitleSpec::Derived { template, field } => (*template, *field),
    };

    let mut values = BTreeSet::new();
    for record in records {
        match field.extract(record) {
            Ok(value) => {
                values.insert(value);
            }
            Err(e) => {
                let diagnostic = Diagnostic::warning("title", format!("cannot derive title: {}", e));
                return (unknown(template), vec![diagnostic]);
            }
        }
    }

    let mut iter = values.iter();
    match (iter.next(), iter.next()) {
        (Some(value), None) => {
            let parts: Vec<String> = value.components().iter().map(|c| c.to_string()).collect();
            (fill_template(template, &parts), Vec::new())
        }
        (None, _) => (unknown(template), Vec::new()),
        (Some(_), Some(_)) => {
            let listed = values
                .iter()
                .map(|v| match v.arity() {
                    1 => v.to_string(),
                    _ => format!("({})", v),
                })
                .collect::<Vec<_>>()
                .join(", ");
            let diagnostic =
                Diagnostic::warning("title", format!("Multiple {}: {}", field.plural(), listed));
            (unknown(template), vec![diagnostic])
        }
    }
}
