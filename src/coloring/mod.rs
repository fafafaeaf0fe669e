// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Four-coloring of graphs.
//!
//! A coloring assigns one of the colors `0..4` to each vertex such that the
//! end vertices of each edge get different colors. The direction of the edges
//! is irrelevant: `u -> v` and `v -> u` both forbid `color[u] == color[v]`,
//! and a self-loop makes a graph uncolorable.
//!
//! Two solvers are provided:
//!
//! - [`four_color_backtrack`] is a complete depth-first search with forward
//!   checking. It finds a coloring iff one exists.
//! - [`four_color_ac3`] alternates arc consistency ([`ac3`]) with fixing the
//!   first undecided vertex to its smallest remaining color. It never
//!   backtracks and may therefore fail on colorable graphs.

mod ac3;
mod backtrack;

pub use self::ac3::{ac3, four_color_ac3};
pub use self::backtrack::four_color_backtrack;

use crate::adjlist::AdjacencyList;

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A color, one of `0..NUM_COLORS`.
pub type Color = u8;

/// The number of available colors.
pub const NUM_COLORS: Color = 4;

/// A set of colors.
///
/// Iteration is in ascending order, so [`ColorSet::first`] is the smallest
/// color in the set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ColorSet(u8);

impl ColorSet {
    /// The empty set.
    pub const EMPTY: ColorSet = ColorSet(0);

    /// The set of all colors.
    pub const ALL: ColorSet = ColorSet((1 << NUM_COLORS) - 1);

    /// Return the set containing only `c`.
    pub fn single(c: Color) -> Self {
        debug_assert!(c < NUM_COLORS, "Invalid color: {}", c);
        ColorSet(1 << c)
    }

    /// Return the number of colors in this set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if this set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if `c` is contained in this set.
    pub fn contains(self, c: Color) -> bool {
        c < NUM_COLORS && self.0 & (1 << c) != 0
    }

    /// Add `c` to this set.
    ///
    /// Returns `true` if `c` had not been contained in the set before.
    pub fn insert(&mut self, c: Color) -> bool {
        debug_assert!(c < NUM_COLORS, "Invalid color: {}", c);
        let old = self.0;
        self.0 |= 1 << c;
        old != self.0
    }

    /// Remove `c` from this set.
    ///
    /// Returns `true` if `c` had been contained in the set.
    pub fn remove(&mut self, c: Color) -> bool {
        let found = self.contains(c);
        if found {
            self.0 &= !(1 << c);
        }
        found
    }

    /// Return the smallest color in this set.
    pub fn first(self) -> Option<Color> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as Color)
        }
    }

    /// Remove and return the smallest color in this set.
    pub fn pop_first(&mut self) -> Option<Color> {
        let c = self.first()?;
        self.0 &= self.0 - 1;
        Some(c)
    }

    /// Return an iterator over the colors in ascending order.
    pub fn iter(self) -> Colors {
        Colors(self)
    }
}

impl fmt::Debug for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl IntoIterator for ColorSet {
    type Item = Color;
    type IntoIter = Colors;

    fn into_iter(self) -> Colors {
        self.iter()
    }
}

/// Iterator over the colors of a [`ColorSet`].
#[derive(Clone)]
pub struct Colors(ColorSet);

impl Iterator for Colors {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for Colors {}

/// Return `true` if `colors` is a proper coloring of `g`.
///
/// This means that `colors` has one entry for each vertex, each entry is a
/// valid color and the end vertices of each edge (including self-loops) have
/// different colors.
pub fn is_proper<W>(g: &AdjacencyList<W>, colors: &[Color]) -> bool {
    colors.len() == g.num_vertices()
        && colors.iter().all(|&c| c < NUM_COLORS)
        && g.iter()
            .all(|(u, mut edges)| edges.all(|e| colors[u] != colors[e.to()]))
}

#[cfg(test)]
mod tests {
    use super::{is_proper, ColorSet};
    use crate::classes::cycle;
    use crate::AdjacencyList;

    #[test]
    fn test_colorset() {
        let mut s = ColorSet::ALL;
        assert_eq!(s.len(), 4);
        assert!(s.remove(0));
        assert!(!s.remove(0));
        assert!(s.remove(2));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(s.first(), Some(1));
        assert_eq!(s.pop_first(), Some(1));
        assert_eq!(s, ColorSet::single(3));
        assert!(s.insert(0));
        assert!(!s.insert(3));
        assert_eq!(format!("{:?}", s), "{0, 3}");

        assert!(ColorSet::EMPTY.is_empty());
        assert_eq!(ColorSet::EMPTY.first(), None);
        assert!(!ColorSet::ALL.contains(4));
        assert_eq!(vec![2u8, 0].into_iter().collect::<ColorSet>(), ColorSet(0b101));
    }

    #[test]
    fn test_is_proper() {
        let g: AdjacencyList = cycle(4);
        assert!(is_proper(&g, &[0, 1, 0, 1]));
        assert!(!is_proper(&g, &[0, 0, 1, 1]));
        assert!(!is_proper(&g, &[0, 1, 0]));
        assert!(!is_proper(&g, &[0, 1, 0, 7]));

        let g = AdjacencyList::from_edges(1, vec![(0, 0, 1)]).unwrap();
        assert!(!is_proper(&g, &[0]));
    }
}
