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

//! The built-in chart profiles.

use crate::error::{ChartError, Result};
use crate::profile::{include_all, Profile, XAxis, XIndex, YAxis};
use crate::title::{TitleField, TitleSpec};
use crate::validators::{EdgeFactorConstant, EdgeFactorInteger, QueriesQuadratic, VerticesConstant};
use benchview_core::{Metric, PerUnit, Unit};

const X_EDGE_FACTOR: XAxis = XAxis {
    label: "m/n",
    log_scale: false,
    index: XIndex::EdgeFactor,
};

const X_VERTICES: XAxis = XAxis {
    label: "n",
    log_scale: false,
    index: XIndex::Field("num_vertices"),
};

const X_VERTICES_LOG: XAxis = XAxis {
    log_scale: true,
    ..X_VERTICES
};

const X_STD_DEV: XAxis = XAxis {
    label: "σ",
    log_scale: false,
    index: XIndex::Field("std_dev"),
};

const X_NUM_GROUPS: XAxis = XAxis {
    label: "#groups",
    log_scale: false,
    index: XIndex::Field("num_groups"),
};

const X_PATH_PROB: XAxis = XAxis {
    label: "p",
    log_scale: false,
    index: XIndex::Field("path_query_prob"),
};

const Y_MICROS_PER_QUERY: YAxis = YAxis {
    label: "µs/query",
    metric: Metric::TimeNs,
    unit: Unit::Us,
    per: Some(PerUnit::Query),
};

const Y_MICROS_PER_EDGE: YAxis = YAxis {
    label: "µs/edge",
    metric: Metric::TimeNs,
    unit: Unit::Us,
    per: Some(PerUnit::Edge),
};

const Y_MICROS_PER_VERTEX: YAxis = YAxis {
    label: "µs/vertex",
    metric: Metric::TimeNs,
    unit: Unit::Us,
    per: Some(PerUnit::Vertex),
};

const Y_MILLIS: YAxis = YAxis {
    label: "ms",
    metric: Metric::TimeNs,
    unit: Unit::Ms,
    per: None,
};

const Y_ROTATIONS_PER_QUERY: YAxis = YAxis {
    label: "rots/query",
    metric: Metric::RotationCount,
    unit: Unit::Rots,
    per: Some(PerUnit::Query),
};

static PROFILES: [Profile; 10] = [
    Profile {
        name: "mst-edge-factor",
        x: X_EDGE_FACTOR,
        y: Y_MICROS_PER_EDGE,
        title: TitleSpec::Derived {
            template: "Minimum Spanning forest (n = {})",
            field: TitleField::Vertices,
        },
        include: include_all,
        checks: &[&VerticesConstant, &EdgeFactorInteger],
    },
    Profile {
        name: "mst-vertices",
        x: X_VERTICES_LOG,
        y: Y_MICROS_PER_EDGE,
        title: TitleSpec::Derived {
            template: "Minimum Spanning forest (m/n = {})",
            field: TitleField::EdgeFactor,
        },
        include: include_all,
        checks: &[&EdgeFactorConstant, &EdgeFactorInteger],
    },
    Profile {
        name: "fd-con",
        x: X_VERTICES,
        y: Y_MICROS_PER_QUERY,
        title: TitleSpec::Derived {
            template: "Fully-dynamic connectivity (q/n² = {})",
            field: TitleField::QueryFactorSquared,
        },
        include: include_all,
        checks: &[],
    },
    Profile {
        name: "degenerate",
        x: X_VERTICES,
        y: Y_MICROS_PER_VERTEX,
        title: TitleSpec::Fixed("Degenerate queries"),
        include: include_all,
        checks: &[],
    },
    Profile {
        name: "degenerate-noisy",
        x: X_STD_DEV,
        y: Y_MILLIS,
        title: TitleSpec::Derived {
            template: "Noisy degenerate queries (n = {})",
            field: TitleField::Vertices,
        },
        include: include_all,
        checks: &[],
    },
    Profile {
        name: "queries-uniform",
        x: X_VERTICES,
        y: Y_MICROS_PER_QUERY,
        title: TitleSpec::Derived {
            template: "Uniform random queries (q/n = {})",
            field: TitleField::QueryFactor,
        },
        include: include_all,
        checks: &[],
    },
    Profile {
        name: "queries-path-prob",
        x: X_PATH_PROB,
        y: Y_MICROS_PER_QUERY,
        title: TitleSpec::Derived {
            template: "Random queries (n = {}, q = {})",
            field: TitleField::VerticesAndQueries,
        },
        include: include_all,
        checks: &[],
    },
    Profile {
        name: "cache",
        x: X_NUM_GROUPS,
        y: Y_MICROS_PER_QUERY,
        title: TitleSpec::Derived {
            template: "Cache (n/group = {}, q/group = {})",
            field: TitleField::GroupSizeAndQueries,
        },
        include: include_all,
        checks: &[],
    },
    Profile {
        name: "lca",
        x: X_VERTICES,
        y: Y_MICROS_PER_QUERY,
        title: TitleSpec::Derived {
            template: "Uniform LCA queries (q/n = {})",
            field: TitleField::QueryFactor,
        },
        include: include_all,
        checks: &[],
    },
    Profile {
        name: "num_rotations",
        x: X_VERTICES,
        y: Y_ROTATIONS_PER_QUERY,
        title: TitleSpec::Fixed("Rotation count (q=n²)"),
        include: include_all,
        checks: &[&QueriesQuadratic],
    },
];

/// All built-in profiles.
pub fn profiles() -> &'static [Profile] {
    &PROFILES
}

/// Profile names, sorted.
pub fn profile_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PROFILES.iter().map(|p| p.name).collect();
    names.sort_unstable();
    names
}

/// Look up a profile by name.
///
/// # Errors
///
/// Returns [`ChartError::UnknownProfile`] listing the known names.
pub fn find_profile(name: &str) -> Result<&'static Profile> {
    PROFILES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ChartError::UnknownProfile {
            name: name.to_string(),
            available: profile_names().join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_profiles_with_unique_names() {
        let names = profile_names();
        assert_eq!(names.len(), 10);
        let mut dedup = names.clone();
        dedup.dedup();
        assert_eq!(dedup, names);
    }

    #[test]
    fn test_find_profile() {
        let profile = find_profile("mst-vertices").unwrap();
        assert!(profile.x.log_scale);
        assert_eq!(profile.y.label, "µs/edge");
        assert_eq!(
            profile.checks.iter().map(|c| c.id()).collect::<Vec<_>>(),
            vec!["edge-factor-constant", "edge-factor-integer"]
        );
    }

    #[test]
    fn test_unknown_profile() {
        let err = find_profile("histogram").unwrap_err();
        match err {
            ChartError::UnknownProfile { name, available } => {
                assert_eq!(name, "histogram");
                assert!(available.starts_with("cache, degenerate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_y_axes_are_valid_value_specs() {
        for profile in profiles() {
            assert!(profile.y.value_spec().is_ok(), "{}", profile.name);
            assert!(profile.includes("anything"));
        }
    }
}
