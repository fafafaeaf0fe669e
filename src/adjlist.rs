/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A weighted digraph stored as a vector of ordered edge sets.

use crate::coloring::{self, Color};
use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::shortestpath::{self, AllPairs, ShortestPaths};
use crate::Vertex;

use crate::num::traits::{Bounded, CheckedAdd, NumAssign, Zero};

use std::collections::btree_set::{self, BTreeSet};
use std::iter::{Enumerate, FusedIterator};
use std::ops::Range;
use std::slice;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A weighted digraph.
///
/// Each vertex owns the set of its outgoing edges, ordered by destination.
/// There is at most one edge `u -> v` for each pair of vertices, self-loops
/// are allowed.
///
/// The graph additionally records whether a negative edge has *ever* been
/// added. The flag is not cleared when that edge is removed again, so
/// [`has_negative_edge`](AdjacencyList::has_negative_edge) may report a
/// negative edge that is no longer present, but never misses one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct AdjacencyList<W = i64> {
    adj: Vec<BTreeSet<Edge<W>>>,
    /// Number of negative edges inserted so far.
    neg_edges: usize,
}

/// The serialized form of an [`AdjacencyList`] before validation.
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct RawAdjacencyList<W> {
    adj: Vec<BTreeSet<Edge<W>>>,
    #[serde(default)]
    neg_edges: usize,
}

/// Deserialization rebuilds the graph edge by edge, so destinations out of
/// range are rejected.
#[cfg(feature = "serialize")]
impl<'de, W> serde::Deserialize<'de> for AdjacencyList<W>
where
    W: serde::Deserialize<'de> + Copy + PartialOrd + Zero,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <RawAdjacencyList<W> as serde::Deserialize>::deserialize(deserializer)?;
        let n = raw.adj.len();
        let edges = raw
            .adj
            .into_iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.into_iter().map(move |e| (u, e.to(), e.weight())));
        let mut g = AdjacencyList::from_edges(n, edges).map_err(serde::de::Error::custom)?;
        // keep the flag for negative edges removed before serialization
        g.neg_edges = g.neg_edges.max(raw.neg_edges);
        Ok(g)
    }
}

impl<W> Default for AdjacencyList<W> {
    fn default() -> Self {
        AdjacencyList::new()
    }
}

impl<W> AdjacencyList<W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        AdjacencyList {
            adj: vec![],
            neg_edges: 0,
        }
    }

    /// Create an empty graph with room for `nvertices` vertices.
    pub fn with_capacity(nvertices: usize) -> Self {
        AdjacencyList {
            adj: Vec::with_capacity(nvertices),
            neg_edges: 0,
        }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(BTreeSet::len).sum()
    }

    /// Return `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Add a new vertex without edges and return its index.
    pub fn add_vertex(&mut self) -> Vertex {
        let u = self.adj.len();
        self.adj.push(BTreeSet::new());
        u
    }

    /// Add `n` new vertices and return the range of their indices.
    pub fn add_vertices(&mut self, n: usize) -> Range<Vertex> {
        let first = self.adj.len();
        self.adj.resize_with(first + n, BTreeSet::new);
        first..first + n
    }

    /// Return `Ok(())` if `u` is a vertex of this graph.
    pub fn check_vertex(&self, u: Vertex) -> Result<()> {
        if u < self.adj.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex: u,
                num_vertices: self.adj.len(),
            })
        }
    }

    /// Return `true` if the edge `u -> v` exists.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.adj.get(u).map(|edges| edges.contains(&v)).unwrap_or(false)
    }

    /// Return `true` if a negative edge has been added at some point.
    pub fn has_negative_edge(&self) -> bool {
        self.neg_edges > 0
    }

    /// Return an iterator over all vertex indices.
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.adj.len()
    }

    /// Return an iterator over the outgoing edges of `u`.
    ///
    /// The edges are returned in ascending order of their destination.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a vertex of this graph.
    pub fn outedges(&self, u: Vertex) -> OutEdges<W> {
        OutEdges(self.adj[u].iter())
    }

    /// Return an iterator over all vertices and their outgoing edges.
    pub fn iter(&self) -> Iter<W> {
        Iter(self.adj.iter().enumerate())
    }

    /// Return the symmetric neighbourhood of each vertex.
    ///
    /// `v` is a neighbour of `u` if `u -> v` or `v -> u` is an edge and
    /// `u != v`. Each list is sorted and contains no duplicates.
    pub fn neighbors(&self) -> Vec<Vec<Vertex>> {
        let mut neighs = vec![vec![]; self.adj.len()];
        for (u, edges) in self.adj.iter().enumerate() {
            for e in edges.iter().filter(|e| e.to() != u) {
                neighs[u].push(e.to());
                neighs[e.to()].push(u);
            }
        }
        for n in &mut neighs {
            n.sort_unstable();
            n.dedup();
        }
        neighs
    }
}

impl<W> AdjacencyList<W>
where
    W: Copy + PartialOrd + Zero,
{
    /// Add the edge `u -> v` with weight `w`.
    ///
    /// Fails without modifying the graph if one of the end vertices does not
    /// exist or if there is already an edge `u -> v`. In the latter case the
    /// old weight is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_wgraph::{AdjacencyList, Error};
    ///
    /// let mut g = AdjacencyList::new();
    /// g.add_vertices(2);
    /// assert_eq!(g.add_edge(0, 1, 3), Ok(()));
    /// assert_eq!(g.add_edge(0, 1, 7), Err(Error::DuplicateEdge { src: 0, snk: 1 }));
    /// assert_eq!(g.add_edge(0, 2, 1), Err(Error::InvalidVertex { vertex: 2, num_vertices: 2 }));
    /// assert_eq!(g.weight(0, 1), Some(3));
    /// ```
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, w: W) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !self.adj[u].insert(Edge::new(v, w)) {
            return Err(Error::DuplicateEdge { src: u, snk: v });
        }
        if w < W::zero() {
            self.neg_edges += 1;
        }
        Ok(())
    }

    /// Create a graph with `n` vertices and the given edges.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex, W)>,
    {
        let mut g = AdjacencyList::with_capacity(n);
        g.add_vertices(n);
        for (u, v, w) in edges {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }
}

impl<W> AdjacencyList<W>
where
    W: Copy,
{
    /// Remove the edge `u -> v` and return its weight.
    ///
    /// Returns `None` (and does nothing) if there is no such edge. Removing a
    /// negative edge does not reset [`has_negative_edge`](Self::has_negative_edge).
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Option<W> {
        self.adj.get_mut(u)?.take(&v).map(|e| e.weight())
    }

    /// Return the weight of the edge `u -> v` if it exists.
    pub fn weight(&self, u: Vertex, v: Vertex) -> Option<W> {
        self.adj.get(u)?.get(&v).map(|e| e.weight())
    }

    /// Return an iterator over all edges `(u, v, w)`.
    ///
    /// The edges are ordered by source and then by destination.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, W)> + '_ {
        self.iter()
            .flat_map(|(u, edges)| edges.map(move |e| (u, e.to(), e.weight())))
    }
}

impl<W> AdjacencyList<W>
where
    W: NumAssign + Ord + Copy + Bounded + CheckedAdd,
{
    /// Single-source shortest paths with Dijkstra's algorithm.
    ///
    /// See [`shortestpath::dijkstra`].
    pub fn shortest_path_dijkstra(&self, src: Vertex) -> Result<ShortestPaths<W>> {
        shortestpath::dijkstra(self, src)
    }

    /// Single-source shortest paths with the algorithm of Bellman and Ford.
    ///
    /// See [`shortestpath::bellman_ford`].
    pub fn shortest_path_bellman_ford(&self, src: Vertex) -> Result<ShortestPaths<W>> {
        shortestpath::bellman_ford(self, src)
    }

    /// All-pairs shortest paths with the algorithm of Floyd and Warshall.
    ///
    /// See [`shortestpath::floyd_warshall`].
    pub fn all_pairs_shortest_path(&self) -> AllPairs<W> {
        shortestpath::floyd_warshall(self)
    }
}

impl<W> AdjacencyList<W> {
    /// Four-coloring by backtracking, see [`coloring::four_color_backtrack`].
    pub fn four_color_backtrack(&self) -> Option<Vec<Color>> {
        coloring::four_color_backtrack(self)
    }

    /// Four-coloring by arc consistency, see [`coloring::four_color_ac3`].
    pub fn four_color_ac3(&self) -> Vec<Option<Color>> {
        coloring::four_color_ac3(self)
    }
}

/// Iterator over the outgoing edges of a vertex.
#[derive(Clone)]
pub struct OutEdges<'a, W>(btree_set::Iter<'a, Edge<W>>);

impl<'a, W> Iterator for OutEdges<'a, W> {
    type Item = &'a Edge<W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, W> DoubleEndedIterator for OutEdges<'a, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, W> ExactSizeIterator for OutEdges<'a, W> {}

impl<'a, W> FusedIterator for OutEdges<'a, W> {}

/// Iterator over all vertices together with their outgoing edges.
#[derive(Clone)]
pub struct Iter<'a, W>(Enumerate<slice::Iter<'a, BTreeSet<Edge<W>>>>);

impl<'a, W> Iterator for Iter<'a, W> {
    type Item = (Vertex, OutEdges<'a, W>);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(u, edges)| (u, OutEdges(edges.iter())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, W> ExactSizeIterator for Iter<'a, W> {}

impl<'a, W> IntoIterator for &'a AdjacencyList<W> {
    type Item = (Vertex, OutEdges<'a, W>);
    type IntoIter = Iter<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
