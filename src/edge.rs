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

//! Outgoing edges of an adjacency list.

use crate::Vertex;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// An outgoing edge, i.e. a pair of destination and weight.
///
/// Equality and ordering only look at the destination. Two edges with the
/// same head but different weights are the *same* edge, so an ordered set
/// of edges contains at most one edge per destination.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<W = i64> {
    to: Vertex,
    weight: W,
}

impl<W> Edge<W> {
    /// Create a new edge to `to` with weight `weight`.
    pub fn new(to: Vertex, weight: W) -> Self {
        Edge { to, weight }
    }

    /// Return the destination of this edge.
    pub fn to(&self) -> Vertex {
        self.to
    }
}

impl<W: Copy> Edge<W> {
    /// Return the weight of this edge.
    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<W> PartialEq for Edge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.to == other.to
    }
}

impl<W> Eq for Edge<W> {}

impl<W> PartialOrd for Edge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for Edge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to.cmp(&other.to)
    }
}

impl<W> Hash for Edge<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to.hash(state)
    }
}

// Consistent with `Ord`, so sets of edges can be queried by destination.
impl<W> Borrow<Vertex> for Edge<W> {
    fn borrow(&self) -> &Vertex {
        &self.to
    }
}

impl<W> fmt::Display for Edge<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.to, self.weight)
    }
}
