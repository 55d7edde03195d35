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

//! Totally ordered key values for the independent variable.
//!
//! Benchmark fields are schema-free, so the grouping key can be an integer
//! (`num_edges`), a float (`path_query_prob`), a string, or a fixed-arity
//! tuple of those (a title deriver reading two fields at once). `KeyValue`
//! gives all of them a single total order so they can index a `BTreeMap`.

use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// A single value of the independent variable.
#[derive(Debug, Clone)]
pub enum KeyValue {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(String),
    /// Fixed-arity tuple of values.
    Tuple(Vec<KeyValue>),
}

impl KeyValue {
    /// Convert a scalar JSON value into a key.
    ///
    /// Returns `None` for `null`, booleans, arrays and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else {
                    n.as_f64().map(Self::number)
                }
            }
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }

    /// A numeric key. Integral floats become `Int`, so `1` and `1.0` share a group.
    pub fn number(x: f64) -> Self {
        if x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
            Self::Int(x as i64)
        } else {
            Self::Float(x)
        }
    }

    /// Numeric view of the key, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Integer view of the key, if it is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Number of slots this value fills in a template.
    pub fn arity(&self) -> usize {
        match self {
            Self::Tuple(items) => items.len(),
            _ => 1,
        }
    }

    /// The individual components, one per template slot.
    pub fn components(&self) -> Vec<&KeyValue> {
        match self {
            Self::Tuple(items) => items.iter().collect(),
            other => vec![other],
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) | Self::Float(_) => 0,
            Self::Str(_) => 1,
            Self::Tuple(_) => 2,
        }
    }
}

impl Ord for KeyValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Tuple(a), Self::Tuple(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                // only reachable for a Float built directly; keeps the order total
                (Some(x), Some(y)) => x
                    .total_cmp(&y)
                    .then_with(|| matches!(a, Self::Float(_)).cmp(&matches!(b, Self::Float(_)))),
                _ => a.rank().cmp(&b.rank()),
            },
        }
    }
}

impl PartialOrd for KeyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for KeyValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for KeyValue {}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Str(s) => write!(f, "{}", s),
            Self::Tuple(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for KeyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for KeyValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for KeyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
