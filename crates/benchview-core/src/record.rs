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

//! Flat benchmark records and their field accessors.
//!
//! A record is a schema-free mapping from field name to scalar value.
//! Only the algorithm identity is checked when the record is built; every
//! other field is looked up by name where it is used, and a lookup failure
//! surfaces as [`CoreError::MissingField`] naming both the field and the
//! algorithm that produced the record.

use crate::error::{CoreError, Result};
use crate::key::KeyValue;
use serde_json::{Map, Value};

/// Name of the field holding the algorithm identity.
pub const ALGORITHM_FIELD: &str = "name";

/// Name of the field that wraps sibling records in a single input line.
pub const RESULTS_FIELD: &str = "results";

/// One flat benchmark observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    algorithm: String,
    fields: Map<String, Value>,
}

impl Record {
    /// Build a record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] if the object has no `name` and
    /// [`CoreError::FieldType`] if `name` is not a string.
    pub fn from_map(fields: Map<String, Value>) -> Result<Self> {
        let algorithm = match fields.get(ALGORITHM_FIELD) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(CoreError::FieldType {
                    field: ALGORITHM_FIELD.to_string(),
                    algorithm: "?".to_string(),
                    expected: "a string",
                })
            }
            None => return Err(CoreError::missing_field(ALGORITHM_FIELD, "?")),
        };
        Ok(Self { algorithm, fields })
    }

    /// Algorithm identity of this record.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// All fields, including the algorithm identity.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Look up a field that must be present.
    pub fn require(&self, field: &str) -> Result<&Value> {
        self.fields
            .get(field)
            .ok_or_else(|| CoreError::missing_field(field, &self.algorithm))
    }

    /// Read a numeric field as `f64`.
    pub fn number(&self, field: &str) -> Result<f64> {
        self.require(field)?
            .as_f64()
            .ok_or_else(|| self.type_error(field, "a number"))
    }

    /// Read an integral field as `i64`.
    pub fn integer(&self, field: &str) -> Result<i64> {
        self.require(field)?
            .as_i64()
            .ok_or_else(|| self.type_error(field, "an integer"))
    }

    /// Read a string field.
    pub fn string(&self, field: &str) -> Result<&str> {
        self.require(field)?
            .as_str()
            .ok_or_else(|| self.type_error(field, "a string"))
    }

    /// Read a scalar field as a grouping key.
    pub fn key(&self, field: &str) -> Result<KeyValue> {
        KeyValue::from_json(self.require(field)?)
            .ok_or_else(|| self.type_error(field, "a number or string"))
    }

    fn type_error(&self, field: &str, expected: &'static str) -> CoreError {
        CoreError::FieldType {
            field: field.to_string(),
            algorithm: self.algorithm.clone(),
            expected,
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Err(CoreError::malformed(0, "expected a JSON object")),
        }
    }
}
