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

use rs_wgraph::shortestpath::{bellman_ford, dijkstra, floyd_warshall};
use rs_wgraph::{AdjacencyList, Error};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error;

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;

fn random_graph(rng: &mut StdRng, n: usize, density: f64, min_weight: i64) -> AdjacencyList {
    let mut g = AdjacencyList::with_capacity(n);
    g.add_vertices(n);
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(density) {
                g.add_edge(u, v, rng.gen_range(min_weight..=20)).unwrap();
            }
        }
    }
    g
}

#[test]
fn test_abc() -> Result<(), Box<dyn error::Error>> {
    let mut g = AdjacencyList::new();
    assert_eq!(g.add_vertex(), A);
    assert_eq!(g.add_vertex(), B);
    assert_eq!(g.add_vertex(), C);
    g.add_edge(A, B, 1)?;
    g.add_edge(B, C, 1)?;
    g.add_edge(A, C, 5)?;
    assert!(!g.has_negative_edge());

    let sp = g.shortest_path_dijkstra(A)?;
    assert_eq!(sp.dist, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(sp.pred, vec![None, Some(A), Some(B)]);

    let bf = g.shortest_path_bellman_ford(A)?;
    assert_eq!(bf, sp);

    let ap = g.all_pairs_shortest_path();
    assert_eq!(ap.row(A), &sp.dist[..]);

    Ok(())
}

#[test]
fn test_negative_cycle() -> Result<(), Box<dyn error::Error>> {
    let g = AdjacencyList::from_edges(3, vec![(A, B, 1), (B, C, -3), (C, A, 1)])?;
    assert!(g.has_negative_edge());
    for s in g.vertices() {
        match g.shortest_path_bellman_ford(s) {
            Err(Error::NegativeCycle { vertex }) => assert!(vertex < 3),
            res => panic!("expected negative cycle, got {:?}", res),
        }
    }
    assert!(g.all_pairs_shortest_path().has_negative_cycle());
    Ok(())
}

#[test]
fn test_replace_edge() -> Result<(), Box<dyn error::Error>> {
    let mut g = AdjacencyList::from_edges(3, vec![(A, B, 1), (B, C, 1), (A, C, 5)])?;

    assert_eq!(g.add_edge(A, C, 1), Err(Error::DuplicateEdge { src: A, snk: C }));
    assert_eq!(dijkstra(&g, A)?.dist(C), Some(2));

    assert_eq!(g.remove_edge(A, C), Some(5));
    g.add_edge(A, C, 1)?;
    let sp = dijkstra(&g, A)?;
    assert_eq!(sp.dist(C), Some(1));
    assert_eq!(sp.path_to(C), Some(vec![A, C]));
    Ok(())
}

#[test]
fn test_random_nonnegative() -> Result<(), Box<dyn error::Error>> {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let n = rng.gen_range(1..15);
        let g = random_graph(&mut rng, n, 0.25, 0);
        let ap = floyd_warshall(&g);
        for s in g.vertices() {
            let dj = dijkstra(&g, s)?;
            let bf = bellman_ford(&g, s)?;
            assert_eq!(dj.dist, bf.dist);
            assert_eq!(ap.row(s), &dj.dist[..]);
            assert_eq!(ap.dist(s, s), Some(0));

            // each predecessor lies on a shortest path
            for v in g.vertices() {
                if let Some(u) = dj.pred(v) {
                    assert_eq!(dj.dist(u).map(|d| d + g.weight(u, v).unwrap()), dj.dist(v));
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_random_negative() -> Result<(), Box<dyn error::Error>> {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let n = rng.gen_range(1..12);
        let g = random_graph(&mut rng, n, 0.3, -10);
        let ap = floyd_warshall(&g);
        for s in g.vertices() {
            match bellman_ford(&g, s) {
                Ok(bf) => assert_eq!(ap.row(s), &bf.dist[..]),
                Err(Error::NegativeCycle { vertex }) => {
                    // the detected vertex is reachable from s and on or behind a negative cycle
                    assert!(ap.dist(s, vertex).is_some());
                    assert!(ap.has_negative_cycle());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
    Ok(())
}
