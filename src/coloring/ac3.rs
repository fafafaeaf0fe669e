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

//! Four-coloring by arc consistency.

use super::{Color, ColorSet};
use crate::adjlist::AdjacencyList;
use crate::Vertex;

use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Find a four-coloring by arc consistency and greedy splitting.
///
/// Vertex `0` is fixed to color `0` (the colors are symmetric, so this loses
/// no solution), all other vertices start with all four colors. Then
///
/// 1. the domains are made arc consistent with [`ac3`],
/// 2. the first vertex with more than one remaining color is fixed to its
///    smallest remaining color,
///
/// until every domain contains at most one color. A fixed choice is never
/// revised, so the method can fail on colorable graphs.
///
/// The returned vector contains the color of each vertex, or `None` for a
/// vertex whose domain became empty. Such a vertex does not constrain its
/// neighbours any more, the remaining vertices are still colored. Adjacent
/// vertices never get the same color. A vertex with a self-loop always gets
/// `None`.
///
/// # Example
///
/// ```
/// use rs_wgraph::AdjacencyList;
/// use rs_wgraph::classes::cycle;
/// use rs_wgraph::coloring::four_color_ac3;
///
/// let g: AdjacencyList = cycle(4);
/// assert_eq!(four_color_ac3(&g), vec![Some(0), Some(1), Some(0), Some(1)]);
/// ```
pub fn four_color_ac3<W>(g: &AdjacencyList<W>) -> Vec<Option<Color>> {
    let n = g.num_vertices();
    if n == 0 {
        return vec![];
    }

    let neighs = g.neighbors();
    let mut domains = vec![ColorSet::ALL; n];
    domains[0] = ColorSet::single(0);
    for u in g.vertices().filter(|&u| g.has_edge(u, u)) {
        domains[u] = ColorSet::EMPTY;
    }

    loop {
        if !propagate(&neighs, &mut domains) {
            debug!("arc consistency emptied a domain");
        }
        let u = match domains.iter().position(|d| d.len() > 1) {
            Some(u) => u,
            None => break,
        };
        if let Some(c) = domains[u].first() {
            trace!(u, c, "fix color");
            domains[u] = ColorSet::single(c);
        }
    }

    domains
        .iter()
        .map(|d| if d.len() == 1 { d.first() } else { None })
        .collect()
}

/// Make the domains of all vertices arc consistent.
///
/// Every edge `u -> v` (in either direction) is the constraint
/// `color[u] != color[v]`. A color of `u` is removed if it is the only color
/// left for `v`. After a reduction of `u` all arcs pointing to `u` are checked
/// again, until no domain changes.
///
/// An empty domain does not constrain its neighbours. Self-loops are ignored.
/// Returns `false` if some domain became empty.
///
/// # Panics
///
/// Panics if `domains` does not have one entry for each vertex.
///
/// # Example
///
/// ```
/// use rs_wgraph::AdjacencyList;
/// use rs_wgraph::classes::path;
/// use rs_wgraph::coloring::{ac3, ColorSet};
///
/// let g: AdjacencyList = path(2);
/// let mut domains = vec![ColorSet::single(0), [0u8, 1].iter().copied().collect(), ColorSet::ALL];
/// assert!(ac3(&g, &mut domains));
/// assert_eq!(domains[1], ColorSet::single(1));
/// assert_eq!(domains[2], [0u8, 2, 3].iter().copied().collect::<ColorSet>());
/// ```
pub fn ac3<W>(g: &AdjacencyList<W>, domains: &mut [ColorSet]) -> bool {
    assert_eq!(domains.len(), g.num_vertices(), "One domain per vertex required");
    propagate(&g.neighbors(), domains)
}

fn propagate(neighs: &[Vec<Vertex>], domains: &mut [ColorSet]) -> bool {
    let mut queue: VecDeque<(Vertex, Vertex)> = neighs
        .iter()
        .enumerate()
        .flat_map(|(x, ys)| ys.iter().map(move |&y| (x, y)))
        .collect();
    let mut queued: HashSet<(Vertex, Vertex)> = queue.iter().copied().collect();

    let mut consistent = true;
    while let Some((x, y)) = queue.pop_front() {
        queued.remove(&(x, y));
        if revise(domains, x, y) {
            if domains[x].is_empty() {
                debug!(x, y, "domain wiped out");
                consistent = false;
            }
            for &z in neighs[x].iter().filter(|&&z| z != y) {
                if queued.insert((z, x)) {
                    queue.push_back((z, x));
                }
            }
        }
    }

    consistent
}

/// Remove the colors of `x` without support in the domain of `y`.
///
/// Only a single remaining color of `y` leaves a color of `x` unsupported.
fn revise(domains: &mut [ColorSet], x: Vertex, y: Vertex) -> bool {
    let old = domains[x];
    let mut dx = old;
    if domains[y].len() == 1 {
        if let Some(c) = domains[y].first() {
            dx.remove(c);
        }
    }
    if dx != old {
        trace!(x, y, ?old, new = ?dx, "reduce domain");
        domains[x] = dx;
        true
    } else {
        false
    }
}
