//! Strategies for generating graphs with [proptest].
//!
//! Vertices are labeled by [`label`](super::testing::label) with indices
//! starting from zero, so a test can pick a vertex by taking an arbitrary
//! number modulo [`Graph::vertex_count`].

use proptest::{collection::vec, prelude::*, sample};

use crate::{core::weight::Distance, graph::Graph};

use super::testing::{label, Index, MutOp, LABEL_POOL};

/// Graph with at least one and at most `max_vertices` vertices and edges of
/// weight up to `max_weight`. Loops and parallel edges are generated too.
pub fn graph(max_vertices: usize, max_weight: Distance) -> impl Strategy<Value = Graph> {
    (1..=max_vertices.max(1))
        .prop_flat_map(move |n| {
            let edge = (0..n, 0..n, 0..=max_weight);
            (Just(n), vec(edge, 0..=2 * n))
        })
        .prop_map(|(n, edges)| {
            let mut graph = Graph::with_capacity(n, edges.len());

            for i in 0..n {
                graph.add_vertex(label(i));
            }

            for (u, v, weight) in edges {
                graph.add_edge(&label(u), &label(v), weight);
            }

            graph
        })
}

/// Connected graph. A random spanning tree is generated first, some extra
/// edges are then added on top of it.
pub fn connected_graph(max_vertices: usize, max_weight: Distance) -> impl Strategy<Value = Graph> {
    (1..=max_vertices.max(1))
        .prop_flat_map(move |n| {
            let tree_edge = (any::<sample::Index>(), 0..=max_weight);
            let extra_edge = (0..n, 0..n, 0..=max_weight);
            (Just(n), vec(tree_edge, n - 1), vec(extra_edge, 0..=n))
        })
        .prop_map(|(n, tree, extra)| {
            let mut graph = Graph::with_capacity(n, tree.len() + extra.len());

            graph.add_vertex(label(0));

            // Vertex `i` is attached to one of the vertices before it.
            for (i, (parent, weight)) in tree.into_iter().enumerate() {
                let i = i + 1;
                graph.add_edge(&label(parent.index(i)), &label(i), weight);
            }

            for (u, v, weight) in extra {
                graph.add_edge(&label(u), &label(v), weight);
            }

            graph
        })
}

pub fn mut_op() -> impl Strategy<Value = MutOp> {
    let index = || (0..LABEL_POOL).prop_map(Index);

    prop_oneof![
        2 => index().prop_map(MutOp::AddVertex),
        4 => (index(), index(), any::<u8>()).prop_map(|(u, v, w)| MutOp::AddEdge(u, v, w)),
        2 => index().prop_map(MutOp::RemoveVertex),
        2 => (index(), index()).prop_map(|(u, v)| MutOp::RemoveEdge(u, v)),
        1 => any::<usize>().prop_map(|i| MutOp::RemoveEdgeById(Index(i))),
        1 => Just(MutOp::ClearEdges),
        1 => Just(MutOp::Clear),
    ]
}

pub fn mut_ops(max_len: usize) -> impl Strategy<Value = Vec<MutOp>> {
    vec(mut_op(), 0..=max_len)
}
