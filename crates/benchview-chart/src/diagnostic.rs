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

//! Non-fatal findings reported while planning a chart.

use std::fmt;

/// A consistency warning raised by a validator or a title deriver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Id of the check that produced the diagnostic
    check_id: String,
    /// Human-readable message
    message: String,
}

impl Diagnostic {
    /// A warning from the check `check_id`.
    pub fn warning(check_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check_id: check_id.into(),
            message: message.into(),
        }
    }

    /// Id of the check that raised it.
    pub fn check_id(&self) -> &str {
        &self.check_id
    }

    /// The warning text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] warning: {}", self.check_id, self.message)
    }
}
