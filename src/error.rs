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

//! Errors of graph construction and queries.

use crate::Vertex;

use thiserror::Error;

/// Error returned by graph mutation and shortest path queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex index is not in `0..num_vertices`.
    #[error("invalid vertex {vertex}, must be in 0..{num_vertices}")]
    InvalidVertex { vertex: Vertex, num_vertices: usize },

    /// The edge `src -> snk` already exists.
    #[error("duplicate edge {src} -> {snk}")]
    DuplicateEdge { src: Vertex, snk: Vertex },

    /// A negative weight cycle is reachable from the source.
    ///
    /// `vertex` is the head of an edge that could still be relaxed after
    /// `n - 1` rounds.
    #[error("negative weight cycle in graph (detected at vertex {vertex})")]
    NegativeCycle { vertex: Vertex },
}

pub type Result<T> = std::result::Result<T, Error>;
