use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    core::{
        id::{EdgeId, VertexId},
        weight::Distance,
    },
    graph::Graph,
};

/// Number of distinct labels that [`MutOp`] operations refer to.
pub const LABEL_POOL: usize = 32;

pub fn label(index: usize) -> String {
    format!("v{index}")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsistencyCheckError {
    #[error("label index size ({0}) is not equal to vertex count ({1})")]
    LabelsVertexCountMismatch(usize, usize),
    #[error("label {0:?} refers to vertex {1} which does not exist or has a different label")]
    LabelInvalid(String, VertexId),
    #[error("vertex {0} lists edge {1} which does not exist")]
    DanglingEdge(VertexId, EdgeId),
    #[error("vertex {0} lists edge {1} which is not incident to it")]
    EdgeNotIncident(VertexId, EdgeId),
    #[error("edge {0} has endpoint {1} which does not exist")]
    DanglingEndpoint(EdgeId, VertexId),
    #[error("edge {0} is listed {1} times by its endpoint {2}, expected {3}")]
    EdgeMultiplicity(EdgeId, usize, VertexId, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
}

/// Checks that no adjacency list refers to a removed edge or vertex and that
/// every edge is listed by both and only its endpoints.
pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    let vertex_count = graph.vertex_count();

    if graph.labels.len() != vertex_count {
        return Err(ConsistencyCheckError::LabelsVertexCountMismatch(
            graph.labels.len(),
            vertex_count,
        ));
    }

    for (label, &id) in graph.labels.iter() {
        if graph.label(id) != Some(label.as_str()) {
            return Err(ConsistencyCheckError::LabelInvalid(label.clone(), id));
        }
    }

    for (id, vertex) in graph.vertices.iter() {
        for &edge_id in vertex.edges() {
            match graph.edge(edge_id) {
                None => return Err(ConsistencyCheckError::DanglingEdge(id, edge_id)),
                Some(edge) if !edge.is_incident(id) => {
                    return Err(ConsistencyCheckError::EdgeNotIncident(id, edge_id))
                }
                Some(_) => {}
            }
        }
    }

    for (edge_id, edge) in graph.edges.iter() {
        let (u, v) = edge.endpoints();
        let expected = if edge.is_loop() { 2 } else { 1 };

        for endpoint in [u, v] {
            let Some(vertex) = graph.vertex(endpoint) else {
                return Err(ConsistencyCheckError::DanglingEndpoint(edge_id, endpoint));
            };

            let actual = vertex.edges().iter().filter(|&&e| e == edge_id).count();

            if actual != expected {
                return Err(ConsistencyCheckError::EdgeMultiplicity(
                    edge_id, actual, endpoint, expected,
                ));
            }
        }
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    let deg_sum = graph
        .vertices
        .iter()
        .map(|(_, vertex)| vertex.degree())
        .sum::<usize>();

    if deg_sum != 2 * graph.edge_count() {
        return Err(ConsistencyCheckError::HandshakingLemma(
            deg_sum,
            2 * graph.edge_count(),
        ));
    }

    Ok(())
}

/// Distance of the cheapest simple path between two vertices found by
/// enumerating all of them, or `None` if the vertices are not connected.
///
/// Exponential, usable only on tiny graphs.
pub fn brute_force_distance(graph: &Graph, start: &str, end: &str) -> Option<Distance> {
    fn search<'a>(
        graph: &'a Graph,
        curr: &'a str,
        end: &str,
        cost: Distance,
        on_path: &mut FxHashSet<&'a str>,
        best: &mut Option<Distance>,
    ) {
        if curr == end {
            *best = Some(best.map_or(cost, |best| best.min(cost)));
            return;
        }

        for (next, weight) in graph.neighbors(curr) {
            if on_path.insert(next) {
                search(graph, next, end, cost.saturating_add(weight), on_path, best);
                on_path.remove(next);
            }
        }
    }

    let start = graph.find_vertex(start).and_then(|id| graph.label(id))?;
    graph.find_vertex(end)?;

    let mut on_path = FxHashSet::default();
    on_path.insert(start);

    let mut best = None;
    search(graph, start, end, 0, &mut on_path, &mut best);
    best
}

/// Index into a collection of unknown size, taken modulo the size at the time
/// of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }

    pub fn label(&self) -> String {
        label(self.0 % LABEL_POOL)
    }
}

/// A mutation of a [`Graph`] in terms of its public operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum MutOp {
    AddVertex(Index),
    RemoveVertex(Index),
    AddEdge(Index, Index, u8),
    RemoveEdge(Index, Index),
    RemoveEdgeById(Index),
    Clear,
    ClearEdges,
}

impl MutOp {
    pub fn apply(self, graph: &mut Graph) {
        match self {
            MutOp::AddVertex(index) => {
                graph.add_vertex(index.label());
            }
            MutOp::RemoveVertex(index) => {
                graph.remove_vertex(&index.label());
            }
            MutOp::AddEdge(u, v, weight) => {
                graph.add_edge(&u.label(), &v.label(), weight as Distance);
            }
            MutOp::RemoveEdge(u, v) => {
                graph.remove_edge(&u.label(), &v.label());
            }
            MutOp::RemoveEdgeById(index) => {
                let id = index
                    .get(graph.edge_count())
                    .and_then(|nth| graph.edges().nth(nth))
                    .map(|edge| edge.id);

                if let Some(id) = id {
                    graph.remove_edge_by_id(id);
                }
            }
            MutOp::Clear => graph.clear(),
            MutOp::ClearEdges => graph.clear_edges(),
        }
    }

    /// Random operation biased towards growing the graph, but with removals
    /// frequent enough to exercise the cascades.
    #[cfg(test)]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let index = |rng: &mut fastrand::Rng| Index(rng.usize(0..LABEL_POOL));

        match rng.u8(0..100) {
            0..=19 => MutOp::AddVertex(index(rng)),
            20..=59 => MutOp::AddEdge(index(rng), index(rng), rng.u8(..)),
            60..=74 => MutOp::RemoveVertex(index(rng)),
            75..=89 => MutOp::RemoveEdge(index(rng), index(rng)),
            90..=97 => MutOp::RemoveEdgeById(Index(rng.usize(..))),
            98 => MutOp::ClearEdges,
            _ => MutOp::Clear,
        }
    }
}

/// Random graph in the Erdős–Rényi model with loops and parallel edges
/// allowed.
#[cfg(test)]
pub fn random_graph(
    rng: &mut fastrand::Rng,
    max_vertices: usize,
    density: f32,
    max_weight: Distance,
) -> Graph {
    let n = rng.usize(1..=max_vertices);
    let mut graph = Graph::with_capacity(n, 0);

    for i in 0..n {
        graph.add_vertex(label(i));
    }

    for u in 0..n {
        for v in u..n {
            while rng.f32() < density {
                graph.add_edge(&label(u), &label(v), rng.u64(0..=max_weight));

                if rng.bool() {
                    break;
                }
            }
        }
    }

    graph
}
