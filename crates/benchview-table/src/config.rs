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

//! Table configuration.
//!
//! A [`TableConfig`] describes everything needed to turn records into a
//! table: which field is the key, how values are derived, which output
//! format to produce and which algorithms or keys to leave out.

use crate::error::{Result, TableError};
use benchview_core::{CanonicalOrder, Dispersion, PerUnit, ValueSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of decimal places.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Placeholder filled with the key value in a column-header template.
pub const TEMPLATE_SLOT: &str = "{}";

/// Table output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One text block per key.
    #[default]
    Plain,
    /// A LaTeX `tabular` with one column per key.
    Typeset,
    /// Whitespace-separated grid for plotting packages.
    DenseGrid,
}

/// Configuration of one tabulation run.
///
/// # Example
///
/// ```
/// use benchview_core::{Dispersion, Metric, Unit, ValueSpec};
/// use benchview_table::{OutputFormat, TableConfig};
///
/// let value = ValueSpec::new(Metric::TimeNs, Unit::Ms, None).unwrap();
/// let config = TableConfig::new("num_edges", value)
///     .with_format(OutputFormat::Typeset)
///     .with_dispersion(Dispersion::StdDev)
///     .with_rename("Petgraph", "Kruskal (petgraph)");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Record field used as the independent variable.
    pub key: String,
    /// How each sample is derived from a record.
    pub value: ValueSpec,
    /// Output format.
    pub format: OutputFormat,
    /// Decimal places of every rendered number.
    pub decimal_places: usize,
    /// Dispersion shown next to the mean.
    pub dispersion: Dispersion,
    /// Algorithms dropped while loading.
    pub excluded_algorithms: Vec<String>,
    /// Key values (string form) dropped before grouping.
    pub excluded_keys: Vec<String>,
    /// Displayed name per algorithm identity.
    pub renames: HashMap<String, String>,
    /// Column-header template for typeset output.
    pub key_template: Option<String>,
    /// Canonical algorithm order.
    pub order: CanonicalOrder,
}

impl TableConfig {
    /// Plain output of `value` keyed by `key`, with default settings.
    pub fn new(key: impl Into<String>, value: ValueSpec) -> Self {
        Self {
            key: key.into(),
            value,
            format: OutputFormat::default(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            dispersion: Dispersion::None,
            excluded_algorithms: Vec::new(),
            excluded_keys: Vec::new(),
            renames: HashMap::new(),
            key_template: None,
            order: CanonicalOrder::default(),
        }
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the number of decimal places.
    pub fn with_decimal_places(mut self, places: usize) -> Self {
        self.decimal_places = places;
        self
    }

    /// Sets the dispersion measure.
    pub fn with_dispersion(mut self, dispersion: Dispersion) -> Self {
        self.dispersion = dispersion;
        self
    }

    /// Adds algorithms to drop.
    pub fn with_excluded_algorithms<I, S>(mut self, algorithms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_algorithms.extend(algorithms.into_iter().map(Into::into));
        self
    }

    /// Adds key values to drop.
    pub fn with_excluded_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Displays algorithm `from` as `to`.
    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.renames.insert(from.into(), to.into());
        self
    }

    /// Sets the typeset column-header template.
    pub fn with_key_template(mut self, template: impl Into<String>) -> Self {
        self.key_template = Some(template.into());
        self
    }

    /// Sets the canonical algorithm order.
    pub fn with_order(mut self, order: CanonicalOrder) -> Self {
        self.order = order;
        self
    }

    /// Displayed name of an algorithm.
    pub fn display_name<'a>(&'a self, algorithm: &'a str) -> &'a str {
        self.renames.get(algorithm).map(String::as_str).unwrap_or(algorithm)
    }

    /// The typeset column-header template, explicit or derived from the key.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] when no template is given and
    /// the key has no default one.
    pub fn resolved_key_template(&self) -> Result<String> {
        if let Some(template) = &self.key_template {
            return Ok(template.clone());
        }
        match self.key.as_str() {
            k if k == PerUnit::Edge.field() || k == PerUnit::Query.field() => {
                Ok("$m = {}$".to_string())
            }
            k if k == PerUnit::Vertex.field() => Ok("$n = {}$".to_string()),
            other => Err(TableError::invalid_config(
                "key_template",
                format!("no default template for key '{}', please give one", other),
            )),
        }
    }

    /// Check the configuration before any input is read.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] when a key template is given for
    /// a format other than typeset, when a template lacks the `{}` slot,
    /// when typeset output has no usable template, or when a range
    /// multiplier is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(TableError::invalid_config("key", "must not be empty"));
        }
        if let Dispersion::Range(r) = self.dispersion {
            if !(r.is_finite() && r > 0.0) {
                return Err(TableError::invalid_config(
                    "range",
                    format!("multiplier must be positive, got {}", r),
                ));
            }
        }
        if self.key_template.is_some() && self.format != OutputFormat::Typeset {
            return Err(TableError::invalid_config(
                "key_template",
                "only supported with the typeset format",
            ));
        }
        if self.format == OutputFormat::Typeset {
            let template = self.resolved_key_template()?;
            if !template.contains(TEMPLATE_SLOT) {
                return Err(TableError::invalid_config(
                    "key_template",
                    format!("'{}' has no '{}' slot for the key", template, TEMPLATE_SLOT),
                ));
            }
        }
        Ok(())
    }
}

/// Parse an `old:new` rename pair.
///
/// The split happens at the first colon, so the new name may contain colons.
///
/// # Errors
///
/// Returns [`TableError::InvalidConfig`] when there is no colon or either
/// side is empty.
pub fn parse_rename(pair: &str) -> Result<(String, String)> {
    match pair.split_once(':') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(TableError::invalid_config(
            "rename",
            format!("expected 'old:new', got '{}'", pair),
        )),
    }
}
