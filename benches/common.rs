#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub fn label(index: usize) -> String {
    format!("v{index}")
}

/// Generates edges of a random graph in the Erdős–Rényi model with geometric
/// skipping, so that sparse graphs do not cost quadratic time.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the G(n, p) generator from Batagelj and Brandes, Efficient
        // generation of large random networks (2005).

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn label_graph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> label_graph::Graph {
    let mut graph = label_graph::Graph::with_capacity(vertex_count, 0);

    for i in 0..vertex_count {
        graph.add_vertex(label(i));
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&label(u), &label(v), rng.u64(1..1000));
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<String, u64> {
    let mut graph = UnGraph::with_capacity(vertex_count, 0);

    for i in 0..vertex_count {
        graph.add_node(label(i));
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u64(1..1000));
    }

    graph
}
