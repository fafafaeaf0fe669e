// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.

use super::{clamped_add, AllPairs};
use crate::adjlist::AdjacencyList;

use crate::num::traits::{Bounded, CheckedAdd, NumAssign};

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall on a directed graph.
///
/// Runs in $\Theta(|V|^3)$. The diagonal starts at zero, a self-loop only
/// counts if it is negative. Negative cycles are not reported, but they
/// leave a negative entry on the diagonal (see
/// [`AllPairs::has_negative_cycle`]). Around a negative cycle the distances
/// decrease in every round, they are clamped to `W::min_value()`.
///
/// # Example
/// ```
/// use rs_wgraph::AdjacencyList;
/// use rs_wgraph::shortestpath::floyd_warshall;
///
/// let g = AdjacencyList::from_edges(5, vec![
///     (0, 1, 6), (0, 2, 5),
///     (1, 2, 7), (1, 3, 3), (1, 4, -2),
///     (2, 3, -4), (3, 4, 8),
///     (3, 1, -1),
///     (4, 0, 2), (4, 3, 7),
/// ]).unwrap();
///
/// let result = floyd_warshall(&g);
/// let mut s = [[0; 5]; 5];
/// for (i, row) in result.dist.iter().enumerate() {
///     for (j, d) in row.iter().enumerate() {
///         s[i][j] = d.unwrap();
///     }
/// }
/// assert_eq!(s, [[ 0, 0, 5, 1,-2],
///                [ 0, 0, 5, 1,-2],
///                [-5,-5, 0,-4,-7],
///                [-1,-1, 4, 0,-3],
///                [ 2, 2, 7, 3, 0],]);
/// assert!(!result.has_negative_cycle());
/// assert_eq!(result.path(2, 0), Some(vec![2, 3, 1, 4, 0]));
/// ```
pub fn floyd_warshall<W>(g: &AdjacencyList<W>) -> AllPairs<W>
where
    W: NumAssign + Ord + Copy + Bounded + CheckedAdd,
{
    let n = g.num_vertices();
    let mut dist = vec![vec![None; n]; n];
    let mut pred = vec![vec![None; n]; n];

    for u in g.vertices() {
        dist[u][u] = Some(W::zero());
    }

    for (u, v, w) in g.edges() {
        if dist[u][v].map_or(true, |d| w < d) {
            dist[u][v] = Some(w);
            pred[u][v] = Some(u);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dist_ik = match dist[i][k] {
                Some(d) => d,
                None => continue,
            };
            for j in 0..n {
                if let Some(dist_kj) = dist[k][j] {
                    let alt = clamped_add(dist_ik, dist_kj);
                    if dist[i][j].map_or(true, |d| alt < d) {
                        dist[i][j] = Some(alt);
                        pred[i][j] = pred[k][j];
                    }
                }
            }
        }
    }

    AllPairs { dist, pred }
}

#[cfg(test)]
mod tests {
    use super::floyd_warshall;
    use crate::AdjacencyList;

    #[test]
    fn test_triangle() {
        let g = AdjacencyList::from_edges(3, vec![(0, 1, 1), (1, 2, 1), (0, 2, 5)]).unwrap();
        let ap = floyd_warshall(&g);
        assert_eq!(ap.row(0), &[Some(0), Some(1), Some(2)][..]);
        assert_eq!(ap.row(2), &[None, None, Some(0)][..]);
        assert_eq!(ap.path(0, 2), Some(vec![0, 1, 2]));
        assert_eq!(ap.path(2, 0), None);
    }

    #[test]
    fn test_diagonal() {
        let g = AdjacencyList::from_edges(3, vec![(0, 0, 4), (0, 1, 2), (1, 0, 3)]).unwrap();
        let ap = floyd_warshall(&g);
        for u in g.vertices() {
            assert_eq!(ap.dist(u, u), Some(0));
        }
        assert!(!ap.has_negative_cycle());
    }

    #[test]
    fn test_negative_self_loop() {
        let g = AdjacencyList::from_edges(2, vec![(0, 0, -2), (0, 1, 1), (1, 1, 5)]).unwrap();
        let ap = floyd_warshall(&g);
        // the diagonal starts at -2, the loop is relaxed once more in round k = 0
        assert_eq!(ap.dist(0, 0), Some(-4));
        assert_eq!(ap.dist(0, 1), Some(-3));
        assert_eq!(ap.dist(1, 1), Some(0));
        assert!(ap.has_negative_cycle());

        let g = AdjacencyList::from_edges(1, vec![(0, 0, -2)]).unwrap();
        assert_eq!(floyd_warshall(&g).dist(0, 0), Some(-4));
    }

    #[test]
    fn test_negative_cycle() {
        let g = AdjacencyList::from_edges(3, vec![(0, 1, 1), (1, 2, -3), (2, 0, 1)]).unwrap();
        let ap = floyd_warshall(&g);
        assert!(ap.has_negative_cycle());
        assert!(ap.dist(0, 0).unwrap() < 0);
    }

    #[test]
    fn test_dense_negative_cycles() {
        let n = 70;
        let mut edges = vec![];
        for u in 0..n {
            for v in 0..n {
                if u != v {
                    edges.push((u, v, -1i64));
                }
            }
        }
        let g = AdjacencyList::from_edges(n, edges).unwrap();
        let ap = floyd_warshall(&g);
        assert!(ap.has_negative_cycle());
        for u in g.vertices() {
            assert!(ap.dist(u, u).unwrap() < 0);
        }
    }

    #[test]
    fn test_empty() {
        let g = AdjacencyList::<i64>::new();
        let ap = floyd_warshall(&g);
        assert_eq!(ap.num_vertices(), 0);
        assert!(!ap.has_negative_cycle());
    }
}
