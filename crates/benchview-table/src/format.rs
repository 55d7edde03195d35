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

//! Number and key formatting shared by the table backends.

use benchview_core::KeyValue;

/// Thin-space separator inserted between digit groups in typeset output.
pub const THIN_SEPARATOR: &str = r"\,";

/// Fixed-point number formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimal_places: usize,
}

impl NumberFormat {
    /// Format with the given number of decimal places.
    pub fn new(decimal_places: usize) -> Self {
        Self { decimal_places }
    }

    /// Number of decimal places.
    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    /// Format one value.
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_places, value)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Group the digits of an integer in thousands for typesetting.
///
/// Integers with at most four digits are returned unchanged, so `1000`
/// stays `1000` while `10000` becomes `10\,000`.
pub fn nicify_int(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    if digits.len() <= 4 {
        return format!("{}{}", sign, digits);
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * THIN_SEPARATOR.len() + 1);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push_str(THIN_SEPARATOR);
        }
    }
    out
}

/// Typeset form of a key: integers are nicified, everything else is shown as-is.
pub fn nicify_key(key: &KeyValue) -> String {
    match key.as_int() {
        Some(i) => nicify_int(i),
        None => key.to_string(),
    }
}

/// Fill the `{}` slot of a column-header template.
pub fn apply_template(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_format() {
        assert_eq!(NumberFormat::new(2).format(2.0), "2.00");
        assert_eq!(NumberFormat::new(0).format(2.6), "3");
        assert_eq!(NumberFormat::new(3).format(1.41421356), "1.414");
    }

    #[test]
    fn test_nicify_short_integers_unchanged() {
        assert_eq!(nicify_int(7), "7");
        assert_eq!(nicify_int(1000), "1000");
        assert_eq!(nicify_int(9999), "9999");
    }

    #[test]
    fn test_nicify_groups_from_the_right() {
        assert_eq!(nicify_int(10000), r"10\,000");
        assert_eq!(nicify_int(100000), r"100\,000");
        assert_eq!(nicify_int(1000000), r"1\,000\,000");
        assert_eq!(nicify_int(-25000), r"-25\,000");
    }

    #[test]
    fn test_nicify_key() {
        assert_eq!(nicify_key(&KeyValue::Int(50000)), r"50\,000");
        assert_eq!(nicify_key(&KeyValue::Float(0.5)), "0.5");
        assert_eq!(nicify_key(&KeyValue::from("grid")), "grid");
    }

    #[test]
    fn test_apply_template() {
        assert_eq!(apply_template("$m = {}$", r"10\,000"), r"$m = 10\,000$");
    }
}
