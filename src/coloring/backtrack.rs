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

use super::{Color, ColorSet};
use crate::adjlist::AdjacencyList;

use tracing::{debug, trace};

/// A level of the search tree.
struct Frame {
    /// The candidate colors of all vertices when this level was entered.
    domains: Vec<ColorSet>,
    /// The colors of the current vertex that have not been tried, yet.
    untried: ColorSet,
}

/// Find a four-coloring by backtracking.
///
/// The vertices are colored in index order, each one with the smallest
/// candidate color that leads to a solution. Choosing a color removes it
/// from the candidates of all later neighbours (forward checking); a choice
/// that leaves some neighbour without candidates is discarded immediately.
///
/// The search keeps an explicit stack of domain snapshots, one per vertex,
/// so the recursion depth does not grow with the graph.
///
/// Returns `None` if the graph has no four-coloring. The running time is
/// exponential in the worst case.
///
/// # Example
///
/// ```
/// use rs_wgraph::AdjacencyList;
/// use rs_wgraph::classes::{complete_graph, cycle};
/// use rs_wgraph::coloring::four_color_backtrack;
///
/// let g: AdjacencyList = cycle(4);
/// assert_eq!(four_color_backtrack(&g), Some(vec![0, 1, 0, 1]));
///
/// let g: AdjacencyList = complete_graph(5);
/// assert_eq!(four_color_backtrack(&g), None);
/// ```
pub fn four_color_backtrack<W>(g: &AdjacencyList<W>) -> Option<Vec<Color>> {
    let n = g.num_vertices();
    if n == 0 {
        return Some(vec![]);
    }

    if let Some(u) = g.vertices().find(|&u| g.has_edge(u, u)) {
        debug!(u, "self-loop, graph is not colorable");
        return None;
    }

    let neighs = g.neighbors();
    let mut colors = vec![0; n];
    let mut stack = vec![Frame {
        domains: vec![ColorSet::ALL; n],
        untried: ColorSet::ALL,
    }];

    while !stack.is_empty() {
        let cur = stack.len() - 1;
        let frame = &mut stack[cur];

        if cur + 1 == n {
            if let Some(c) = frame.domains[cur].first() {
                colors[cur] = c;
                return Some(colors);
            }
            stack.pop();
            continue;
        }

        let c = match frame.untried.pop_first() {
            Some(c) => c,
            None => {
                trace!(cur, "backtrack");
                stack.pop();
                continue;
            }
        };

        let mut domains = frame.domains.clone();
        let mut feasible = true;
        for &v in neighs[cur].iter().filter(|&&v| v > cur) {
            domains[v].remove(c);
            if domains[v].is_empty() {
                feasible = false;
                break;
            }
        }
        if !feasible {
            continue;
        }

        colors[cur] = c;
        let untried = domains[cur + 1];
        stack.push(Frame { domains, untried });
    }

    debug!(n, "graph is not four-colorable");
    None
}

#[cfg(test)]
mod tests {
    use super::four_color_backtrack;
    use crate::classes::{complete_graph, peterson, wheel};
    use crate::coloring::is_proper;
    use crate::AdjacencyList;

    #[test]
    fn test_trivial() {
        assert_eq!(four_color_backtrack(&AdjacencyList::<i64>::new()), Some(vec![]));

        let mut g = AdjacencyList::<i64>::new();
        g.add_vertex();
        assert_eq!(four_color_backtrack(&g), Some(vec![0]));
        g.add_edge(0, 0, 1).unwrap();
        assert_eq!(four_color_backtrack(&g), None);
    }

    #[test]
    fn test_complete() {
        let g: AdjacencyList = complete_graph(4);
        assert_eq!(four_color_backtrack(&g), Some(vec![0, 1, 2, 3]));
        let g: AdjacencyList = complete_graph(5);
        assert_eq!(four_color_backtrack(&g), None);
    }

    #[test]
    fn test_directed_edges() {
        // constraints hold in both directions
        let g = AdjacencyList::from_edges(3, vec![(1, 0, 1), (2, 0, 1), (2, 1, 1)]).unwrap();
        let colors = four_color_backtrack(&g).unwrap();
        assert_eq!(colors, vec![0, 1, 2]);
    }

    #[test]
    fn test_wheel_and_peterson() {
        // the wheel with an odd rim needs all four colors
        let g: AdjacencyList = wheel(5);
        let colors = four_color_backtrack(&g).unwrap();
        assert!(is_proper(&g, &colors));

        let g: AdjacencyList = peterson();
        let colors = four_color_backtrack(&g).unwrap();
        assert!(is_proper(&g, &colors));
    }
}
