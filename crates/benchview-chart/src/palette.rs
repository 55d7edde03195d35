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

//! Per-algorithm series colours.

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const BLUE: Rgb = Rgb(31, 119, 180);
    pub const ORANGE: Rgb = Rgb(255, 127, 14);
    pub const GREEN: Rgb = Rgb(44, 160, 44);
    pub const RED: Rgb = Rgb(214, 39, 40);
    pub const PURPLE: Rgb = Rgb(148, 103, 189);
    pub const BROWN: Rgb = Rgb(140, 86, 75);
    pub const PINK: Rgb = Rgb(227, 119, 194);
    pub const GRAY: Rgb = Rgb(127, 127, 127);
    pub const OLIVE: Rgb = Rgb(188, 189, 34);
    pub const CYAN: Rgb = Rgb(23, 190, 207);
}

/// Colours assigned to algorithms missing from the table, by name hash.
pub const FALLBACK_COLORS: &[Rgb] = &[
    Rgb::BLUE,
    Rgb::ORANGE,
    Rgb::GREEN,
    Rgb::RED,
    Rgb::PURPLE,
    Rgb::BROWN,
    Rgb::PINK,
    Rgb::GRAY,
    Rgb::OLIVE,
    Rgb::CYAN,
];

/// Known algorithms and their colours, in legend order.
pub const DEFAULT_COLORS: &[(&str, Rgb)] = &[
    ("Petgraph", Rgb::BLACK),
    ("Kruskal (petgraph)", Rgb::BLACK),
    ("Link-cut", Rgb::BROWN),
    ("Greedy Splay", Rgb::BLUE),
    ("Stable Greedy Splay", Rgb::CYAN),
    ("2P Splay", Rgb::RED),
    ("Stable 2P Splay", Rgb::ORANGE),
    ("L2P Splay", Rgb::PURPLE),
    ("Stable L2P Splay", Rgb::PINK),
    ("MTR", Rgb::GREEN),
    ("Stable MTR", Rgb::OLIVE),
    ("1-cut", Rgb::GRAY),
    ("Simple", Rgb::GRAY),
];

/// An ordered algorithm → colour table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<(String, Rgb)>,
}

impl ColorTable {
    /// Build a table from ordered entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Rgb)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        }
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[(String, Rgb)] {
        &self.entries
    }

    /// Colour from the table, if the algorithm is listed.
    pub fn get(&self, algorithm: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(name, _)| name == algorithm)
            .map(|(_, color)| *color)
    }

    /// Colour of an algorithm, falling back to a name-derived colour.
    pub fn color_for(&self, algorithm: &str) -> Rgb {
        self.get(algorithm).unwrap_or_else(|| fallback_color(algorithm))
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.iter().copied())
    }
}

/// Deterministic colour for an unlisted algorithm (FNV-1a over the name).
pub fn fallback_color(algorithm: &str) -> Rgb {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in algorithm.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    FALLBACK_COLORS[hash as usize % FALLBACK_COLORS.len()]
}
