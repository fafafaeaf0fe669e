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

#![forbid(unsafe_code)]

//! A small weighted digraph with shortest path and four-coloring algorithms.
//!
//! A graph is built once by adding vertices and weighted edges to an
//! [`AdjacencyList`]. Afterwards it can be queried for single-source
//! shortest paths ([`shortestpath::dijkstra`],
//! [`shortestpath::bellman_ford`]), all-pairs shortest paths
//! ([`shortestpath::floyd_warshall`]) or a four-coloring
//! ([`coloring::four_color_backtrack`], [`coloring::four_color_ac3`]).
//!
//! # Example
//!
//! ```
//! use rs_wgraph::AdjacencyList;
//!
//! let mut g = AdjacencyList::new();
//! let a = g.add_vertex();
//! let b = g.add_vertex();
//! let c = g.add_vertex();
//! g.add_edge(a, b, 1).unwrap();
//! g.add_edge(b, c, 1).unwrap();
//! g.add_edge(a, c, 5).unwrap();
//!
//! let sp = g.shortest_path_dijkstra(a).unwrap();
//! assert_eq!(sp.dist, vec![Some(0), Some(1), Some(2)]);
//! assert_eq!(sp.pred, vec![None, Some(a), Some(b)]);
//! assert_eq!(sp.path_to(c), Some(vec![a, b, c]));
//! ```

mod num {
    pub use num_traits as traits;
}

/// Identifier of a vertex.
///
/// Vertices are numbered densely `0..n` in the order of creation.
pub type Vertex = usize;

pub mod error;
pub use self::error::{Error, Result};

pub mod edge;
pub use self::edge::Edge;

pub mod adjlist;
pub use self::adjlist::AdjacencyList;

/// Graph classes
pub mod classes;

// # Algorithms

pub mod coloring;
pub mod shortestpath;
