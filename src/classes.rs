// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! All graphs are undirected in the sense that each edge is inserted in both
//! directions. All weights are zero.

use crate::adjlist::AdjacencyList;
use crate::num::traits::Zero;
use crate::Vertex;

/// Insert `u -> v` and `v -> u`.
fn connect<W>(g: &mut AdjacencyList<W>, u: Vertex, v: Vertex)
where
    W: Copy + PartialOrd + Zero,
{
    // duplicates of tiny instances (e.g. `cycle(2)`) collapse into one edge
    let _ = g.add_edge(u, v, W::zero());
    let _ = g.add_edge(v, u, W::zero());
}

fn with_vertices<W>(n: usize) -> AdjacencyList<W> {
    let mut g = AdjacencyList::with_capacity(n);
    g.add_vertices(n);
    g
}

/// Returns a path with `m` edges.
pub fn path<W>(m: usize) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let mut g = with_vertices(m + 1);
    for u in 0..m {
        connect(&mut g, u, u + 1);
    }
    g
}

/// Returns a cycle with length `n`.
pub fn cycle<W>(n: usize) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let mut g = with_vertices(n);
    for u in 0..n {
        connect(&mut g, u, (u + 1) % n);
    }
    g
}

/// Returns the complete graph on `n` vertices.
pub fn complete_graph<W>(n: usize) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let mut g = with_vertices(n);
    for u in 0..n {
        for v in u + 1..n {
            connect(&mut g, u, v);
        }
    }
    g
}

/// Returns a complete bipartite graph on `n+m` vertices.
///
/// The edges will run between the first n vertices and the last m vertices.
pub fn complete_bipartite<W>(n: usize, m: usize) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let mut g = with_vertices(n + m);
    for u in 0..n {
        for v in n..n + m {
            connect(&mut g, u, v);
        }
    }
    g
}

/// Returns a star graph with `n` rays.
///
/// The center vertex will be the first vertex. This is equivalent to
/// `complete_bipartite(1,n)`.
pub fn star<W>(n: usize) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    complete_bipartite(1, n)
}

/// Returns a wheel with `n` rim vertices.
///
/// The hub is vertex `0`, the rim is the cycle `1, 2, ..., n, 1`. A wheel
/// with an odd rim is planar and needs four colors.
pub fn wheel<W>(n: usize) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let mut g = with_vertices(n + 1);
    for i in 0..n {
        connect(&mut g, 0, i + 1);
        connect(&mut g, i + 1, (i + 1) % n + 1);
    }
    g
}

/// Returns a hypercube of dimension `d`.
pub fn hypercube<W>(d: u32) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let n = 2usize.pow(d);
    let mut g = with_vertices(n);
    for i in 0..n {
        for bit in 0..d {
            if i & (1 << bit) == 0 {
                connect(&mut g, i, i | (1 << bit));
            }
        }
    }
    g
}

/// Return a grid graph with `n` columns and `m` rows.
///
/// The vertices are created from left to right and from bottom to top. The
/// following is a grid graph with 5 columns and 4 rows.
///
///   15 - 16 - 17 - 18 - 19
///    |    |    |    |    |
///   10 - 11 - 12 - 13 - 14
///    |    |    |    |    |
///    5 -- 6 -- 7 -- 8 -- 9
///    |    |    |    |    |
///    0 -- 1 -- 2 -- 3 -- 4
///
/// ```
/// use rs_wgraph::AdjacencyList;
/// use rs_wgraph::classes;
///
/// let g: AdjacencyList = classes::grid(5, 4);
/// assert_eq!(g.num_vertices(), 20);
/// assert_eq!(g.num_edges(), 2 * (5*3 + 4*4));
///
/// let degrees: Vec<_> = g.vertices().map(|u| g.outedges(u).len()).collect();
/// assert_eq!(degrees.iter().filter(|&&d| d == 2).count(), 4);
/// assert_eq!(degrees.iter().filter(|&&d| d == 3).count(), 10);
/// assert_eq!(degrees.iter().filter(|&&d| d == 4).count(), 6);
/// ```
pub fn grid<W>(n: usize, m: usize) -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let mut g = with_vertices(n * m);
    for y in 0..m {
        for x in 0..n {
            let u = y * n + x;
            if x + 1 < n {
                connect(&mut g, u, u + 1);
            }
            if y + 1 < m {
                connect(&mut g, u, u + n);
            }
        }
    }
    g
}

/// Returns a Peterson graph.
pub fn peterson<W>() -> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    let mut g = with_vertices(10);
    for i in 0..5 {
        connect(&mut g, i, (i + 1) % 5);
        connect(&mut g, i + 5, (i + 2) % 5 + 5);
        connect(&mut g, i, i + 5);
    }
    g
}
