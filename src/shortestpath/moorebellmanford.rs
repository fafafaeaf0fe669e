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

use super::{clamped_add, is_shorter, ShortestPaths};
use crate::adjlist::AdjacencyList;
use crate::error::{Error, Result};
use crate::Vertex;

use crate::num::traits::{Bounded, CheckedAdd, NumAssign};
use tracing::{debug, trace};

/// The shortest-path algorithm by Moore-Bellman-Ford on a directed graph.
///
/// All edges are relaxed in `n - 1` rounds (fewer if some round does not
/// change anything). If afterwards an edge can still be relaxed, the graph
/// contains a negative cycle reachable from `src` and
/// [`Error::NegativeCycle`] is returned. No partial result is returned in
/// this case.
///
/// Edges leaving unreachable vertices are never relaxed. Distances are
/// clamped to the range of `W`. A distance clamped to `W::min_value()` can
/// still be decreased, so it is reported as a negative cycle.
///
/// # Example
///
/// ```
/// use rs_wgraph::{AdjacencyList, Error};
/// use rs_wgraph::shortestpath::bellman_ford;
///
/// let mut g = AdjacencyList::from_edges(7, vec![
///     (0, 1, -8), (1, 4, -3), (2, 0, 2), (2, 1, 1), (2, 5, -3), (3, 1, 0), (3, 2, 5),
///     (4, 3, 8), (5, 3, -1), (6, 3, 4), (6, 4, 6), (6, 5, 3),
/// ]).unwrap();
///
/// let sp = bellman_ford(&g, 6).unwrap();
/// assert_eq!(sp.pred[6], None);
/// for &(u, p) in [(0, 2), (1, 0), (2, 3), (4, 1), (5, 6)].iter() {
///     assert_eq!(sp.pred[u], Some(p));
/// }
///
/// g.remove_edge(3, 2);
/// g.add_edge(3, 2, 1).unwrap();
/// assert!(matches!(bellman_ford(&g, 6), Err(Error::NegativeCycle { .. })));
/// ```
pub fn bellman_ford<W>(g: &AdjacencyList<W>, src: Vertex) -> Result<ShortestPaths<W>>
where
    W: NumAssign + Ord + Copy + Bounded + CheckedAdd,
{
    g.check_vertex(src)?;

    let mut sp = ShortestPaths::new(g.num_vertices(), src);

    for _ in 1..g.num_vertices() {
        let mut changed = false;
        for (u, v, w) in g.edges() {
            // skip source vertices that have not been seen, yet
            let du = match sp.dist[u] {
                Some(du) => du,
                None => continue,
            };
            let alt = clamped_add(du, w);
            if sp.dist[v].map_or(true, |dv| alt < dv) {
                trace!(u, v, "relax");
                sp.dist[v] = Some(alt);
                sp.pred[v] = Some(u);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for (u, v, w) in g.edges() {
        if let Some(du) = sp.dist[u] {
            if sp.dist[v].map_or(true, |dv| is_shorter(du, w, dv)) {
                debug!(src, u, v, "negative cycle detected");
                return Err(Error::NegativeCycle { vertex: v });
            }
        }
    }

    Ok(sp)
}
