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

//! Profiles command

use super::write_output;
use crate::error::Result;
use benchview_chart::profiles as chart_profiles;

/// One line per profile: name, x axis and y axis.
pub fn profile_listing() -> String {
    let mut profiles: Vec<_> = chart_profiles().iter().collect();
    profiles.sort_by_key(|p| p.name);
    let width = profiles.iter().map(|p| p.name.len()).max().unwrap_or(0);

    let mut output = String::new();
    for profile in profiles {
        output.push_str(&format!(
            "{:<width$}  {} vs {}\n",
            profile.name, profile.y.label, profile.x.label
        ));
    }
    output
}

/// List the chart profiles on stdout.
///
/// # Errors
///
/// Returns `Err` if stdout cannot be written.
pub fn profiles() -> Result<()> {
    write_output(&profile_listing(), None)
}
