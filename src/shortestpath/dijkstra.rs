/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start vertex $s
//! \in V$ to all other vertices of a directed graph. Each edge is assigned a
//! non-negative weight $w \colon E \to \mathbb{Z}_+$.
//!
//! This implementation does not use a priority queue. In each step the
//! unfinished vertex with the smallest tentative distance is found by a
//! linear scan, which gives a running time of $O(|V|^2 + |E|)$. For the
//! small and dense graphs this crate is meant for this is usually faster
//! than a heap. Ties are broken in favour of the smallest vertex index.
//!
//! Negative weights are *not* detected. If the graph contains negative
//! edges, the result is unspecified (but the algorithm terminates).
//!
//! # Example
//!
//! ```
//! use rs_wgraph::AdjacencyList;
//! use rs_wgraph::shortestpath::dijkstra;
//!
//! let g = AdjacencyList::from_edges(6, vec![
//!     (0, 1, 7), (0, 2, 9), (0, 5, 14),
//!     (1, 2, 10), (1, 3, 15),
//!     (2, 3, 11), (2, 5, 2),
//!     (3, 4, 6),
//!     (5, 4, 9),
//! ]).unwrap();
//!
//! let sp = dijkstra(&g, 0).unwrap();
//! assert_eq!(sp.dist, vec![Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)]);
//! assert_eq!(sp.path_to(4), Some(vec![0, 2, 5, 4]));
//! ```

use super::{clamped_add, ShortestPaths};
use crate::adjlist::AdjacencyList;
use crate::error::Result;
use crate::Vertex;

use crate::num::traits::{Bounded, CheckedAdd, NumAssign};
use tracing::trace;

/// Run Dijkstra's algorithm from `src`.
///
/// Returns the distances and predecessors of all vertices. Fails only if
/// `src` is not a vertex of `g`. Distances exceeding `W::max_value()` are
/// clamped to it.
pub fn dijkstra<W>(g: &AdjacencyList<W>, src: Vertex) -> Result<ShortestPaths<W>>
where
    W: NumAssign + Ord + Copy + Bounded + CheckedAdd,
{
    g.check_vertex(src)?;

    let mut sp = ShortestPaths::new(g.num_vertices(), src);
    let mut finished = vec![false; g.num_vertices()];

    while let Some((u, du)) = next_min(&sp.dist, &finished) {
        finished[u] = true;
        for e in g.outedges(u) {
            let v = e.to();
            let alt = clamped_add(du, e.weight());
            if sp.dist[v].map_or(true, |dv| alt < dv) {
                trace!(u, v, "relax");
                sp.dist[v] = Some(alt);
                sp.pred[v] = Some(u);
            }
        }
    }

    Ok(sp)
}

/// Return the unfinished vertex with smallest finite distance.
fn next_min<W>(dist: &[Option<W>], finished: &[bool]) -> Option<(Vertex, W)>
where
    W: Ord + Copy,
{
    let mut min: Option<(Vertex, W)> = None;
    for (u, (&d, &fin)) in dist.iter().zip(finished).enumerate() {
        if fin {
            continue;
        }
        if let Some(d) = d {
            if min.map_or(true, |(_, m)| d < m) {
                min = Some((u, d));
            }
        }
    }
    min
}

#[cfg(test)]
mod tests {
    use super::{dijkstra, next_min};
    use crate::{AdjacencyList, Error};

    #[test]
    fn test_next_min_first_wins() {
        let dist = [None, Some(3), Some(1), Some(1), Some(0)];
        assert_eq!(next_min(&dist, &[false, false, false, false, true]), Some((2, 1)));
        assert_eq!(next_min(&dist, &[false, true, true, true, true]), None);
    }

    #[test]
    fn test_triangle() {
        let g = AdjacencyList::from_edges(3, vec![(0, 1, 1), (1, 2, 1), (0, 2, 5)]).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.dist, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(sp.pred, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn test_unreachable() {
        let g = AdjacencyList::from_edges(4, vec![(1, 0, 2), (0, 2, 3)]).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.dist, vec![Some(0), None, Some(3), None]);
        assert_eq!(sp.pred, vec![None, None, Some(0), None]);
    }

    #[test]
    fn test_huge_weights() {
        let g = AdjacencyList::from_edges(3, vec![(0, 1, i64::MAX), (1, 2, 1)]).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.dist, vec![Some(0), Some(i64::MAX), Some(i64::MAX)]);
        assert_eq!(sp.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_invalid_source() {
        let g = AdjacencyList::<i64>::new();
        assert_eq!(
            dijkstra(&g, 0),
            Err(Error::InvalidVertex {
                vertex: 0,
                num_vertices: 0
            })
        );
    }
}
