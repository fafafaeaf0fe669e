// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest path algorithms.
//!
//! Distances are returned as `Option<W>` where `None` stands for an
//! infinite distance, i.e. an unreachable vertex.
//!
//! [`dijkstra`] requires non-negative weights and does not check this
//! itself; use [`AdjacencyList::has_negative_edge`] to decide between it
//! and [`bellman_ford`]. [`floyd_warshall`] does not detect negative cycles
//! either, see [`AllPairs::has_negative_cycle`].
//!
//! Path lengths that do not fit into `W` are clamped to
//! `W::min_value()..=W::max_value()`, the algorithms never overflow.
//!
//! [`AdjacencyList::has_negative_edge`]: crate::AdjacencyList::has_negative_edge

use crate::num::traits::{Bounded, CheckedAdd, Zero};
use crate::Vertex;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

pub mod dijkstra;
pub use self::dijkstra::dijkstra;

pub mod moorebellmanford;
pub use self::moorebellmanford::bellman_ford;

pub mod floydwarshall;
pub use self::floydwarshall::floyd_warshall;

/// Return `a + b` clamped to the range of `W`.
fn clamped_add<W>(a: W, b: W) -> W
where
    W: CheckedAdd + Bounded + Zero + PartialOrd + Copy,
{
    match a.checked_add(&b) {
        Some(s) => s,
        None if b < W::zero() => W::min_value(),
        None => W::max_value(),
    }
}

/// Return `true` if `a + b < d`, evaluated without overflow.
fn is_shorter<W>(a: W, b: W, d: W) -> bool
where
    W: CheckedAdd + Zero + PartialOrd + Copy,
{
    match a.checked_add(&b) {
        Some(s) => s < d,
        None => b < W::zero(),
    }
}

/// Result of a single-source shortest path computation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShortestPaths<W> {
    /// The source vertex.
    pub src: Vertex,
    /// The distance of each vertex from the source, `None` if unreachable.
    pub dist: Vec<Option<W>>,
    /// The predecessor of each vertex on a shortest path.
    ///
    /// This is `None` for the source and for all unreachable vertices.
    pub pred: Vec<Option<Vertex>>,
}

impl<W> ShortestPaths<W>
where
    W: Copy,
{
    pub(crate) fn new(n: usize, src: Vertex) -> Self
    where
        W: Zero,
    {
        let mut dist = vec![None; n];
        dist[src] = Some(W::zero());
        ShortestPaths {
            src,
            dist,
            pred: vec![None; n],
        }
    }

    /// Return the distance of `v` from the source.
    pub fn dist(&self, v: Vertex) -> Option<W> {
        self.dist.get(v).copied().flatten()
    }

    /// Return the predecessor of `v` on a shortest path.
    pub fn pred(&self, v: Vertex) -> Option<Vertex> {
        self.pred.get(v).copied().flatten()
    }

    /// Return `true` if `v` is reachable from the source.
    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.dist(v).is_some()
    }

    /// Return the vertices of a shortest path from the source to `v`.
    ///
    /// The path starts with the source and ends with `v`. Returns `None` if
    /// `v` is not reachable.
    pub fn path_to(&self, v: Vertex) -> Option<Vec<Vertex>> {
        self.dist(v)?;
        let mut path = vec![v];
        let mut u = v;
        while u != self.src {
            u = self.pred(u)?;
            // the predecessors of a graph with negative cycles need not form a tree
            if path.len() > self.pred.len() {
                return None;
            }
            path.push(u);
        }
        path.reverse();
        Some(path)
    }
}

/// Result of an all-pairs shortest path computation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AllPairs<W> {
    /// `dist[u][v]` is the length of a shortest path from `u` to `v`.
    pub dist: Vec<Vec<Option<W>>>,
    /// `pred[u][v]` is the predecessor of `v` on a shortest path from `u`.
    pub pred: Vec<Vec<Option<Vertex>>>,
}

impl<W> AllPairs<W>
where
    W: Copy,
{
    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.dist.len()
    }

    /// Return the length of a shortest path from `u` to `v`.
    pub fn dist(&self, u: Vertex, v: Vertex) -> Option<W> {
        self.dist.get(u).and_then(|row| row.get(v)).copied().flatten()
    }

    /// Return the distances of all vertices from `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a vertex.
    pub fn row(&self, u: Vertex) -> &[Option<W>] {
        &self.dist[u]
    }

    /// Return the predecessor of `v` on a shortest path from `u`.
    pub fn pred(&self, u: Vertex, v: Vertex) -> Option<Vertex> {
        self.pred.get(u).and_then(|row| row.get(v)).copied().flatten()
    }

    /// Return the vertices of a shortest path from `u` to `v`.
    pub fn path(&self, u: Vertex, v: Vertex) -> Option<Vec<Vertex>> {
        self.dist(u, v)?;
        let mut path = vec![v];
        let mut w = v;
        while w != u {
            w = self.pred(u, w)?;
            if path.len() > self.num_vertices() {
                return None;
            }
            path.push(w);
        }
        path.reverse();
        Some(path)
    }

    /// Return `true` if some vertex lies on a negative cycle.
    ///
    /// This is the case iff some diagonal entry is negative.
    pub fn has_negative_cycle(&self) -> bool
    where
        W: Zero + PartialOrd,
    {
        (0..self.num_vertices()).any(|u| self.dist(u, u).map_or(false, |d| d < W::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::{clamped_add, is_shorter, ShortestPaths};

    #[test]
    fn test_clamped_add() {
        assert_eq!(clamped_add(3i64, -5), -2);
        assert_eq!(clamped_add(i64::MAX, 1), i64::MAX);
        assert_eq!(clamped_add(i64::MIN + 1, -2), i64::MIN);
        assert_eq!(clamped_add(i8::MAX, i8::MIN), -1);

        assert!(is_shorter(1i64, 2, 4));
        assert!(!is_shorter(1i64, 2, 3));
        assert!(!is_shorter(i64::MAX, 1, i64::MAX));
        assert!(is_shorter(i64::MIN, -1, i64::MIN));
    }

    #[test]
    fn test_path_to() {
        let sp = ShortestPaths {
            src: 2,
            dist: vec![Some(3), None, Some(0), Some(1)],
            pred: vec![Some(3), None, None, Some(2)],
        };
        assert_eq!(sp.path_to(0), Some(vec![2, 3, 0]));
        assert_eq!(sp.path_to(2), Some(vec![2]));
        assert_eq!(sp.path_to(1), None);
        assert_eq!(sp.path_to(7), None);
        assert!(!sp.is_reachable(1));
    }

    #[test]
    fn test_path_to_cyclic_preds() {
        let sp = ShortestPaths {
            src: 0,
            dist: vec![Some(0), Some(-5), Some(-6)],
            pred: vec![None, Some(2), Some(1)],
        };
        assert_eq!(sp.path_to(1), None);
    }
}
