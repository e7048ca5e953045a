//! Undirected weighted graph with vertices identified by string labels.
//!
//! All vertices and edges are owned by the [`Graph`] in two
//! [arenas](crate::storage::Arena). An adjacency list of a vertex holds only
//! ids of its incident edges, so a single edge record is shared by both of its
//! endpoints and is destroyed exactly once, no matter whether it is removed
//! directly, as a consequence of removing one of its endpoints or when the
//! whole graph is dropped.
//!
//! Mutation operations are tolerant to labels that do not exist. Removing them
//! is a no-op and adding an edge between them creates the vertices on the fly.

mod entities;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

pub use entities::{Edge, Vertex};

use crate::{
    algo::ShortestPaths,
    core::{
        id::{EdgeId, VertexId},
        weight::{Distance, INFINITY},
    },
    storage::Arena,
};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) labels: FxHashMap<String, VertexId>,
    pub(crate) vertices: Arena<VertexId, Vertex>,
    pub(crate) edges: Arena<EdgeId, Edge>,
}

/// Reference to an edge with its endpoints resolved to labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a> {
    pub id: EdgeId,
    pub u: &'a str,
    pub v: &'a str,
    pub weight: Distance,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            labels: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            vertices: Arena::with_capacity(vertex_capacity),
            edges: Arena::with_capacity(edge_capacity),
        }
    }

    /// Adds a vertex with given label unless it already exists.
    ///
    /// Adding an existing label does not touch the vertex nor its edges.
    /// Returns `true` if the vertex was created.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();

        if self.labels.contains_key(&label) {
            return false;
        }

        self.insert_vertex(label);
        true
    }

    /// Removes the vertex together with all its incident edges.
    ///
    /// Returns `false` if there is no vertex with given label.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(id) = self.labels.remove(label) else {
            return false;
        };

        let Some(vertex) = self.vertices.remove(id) else {
            return false;
        };

        let mut removed_edges = 0;

        for edge_id in vertex.edges {
            // A self-loop is listed twice and the second lookup finds nothing.
            let Some(edge) = self.edges.remove(edge_id) else {
                continue;
            };

            removed_edges += 1;

            // The adjacency list of the removed vertex itself is gone already.
            match edge.other_endpoint(id) {
                Some(other) if other != id => {
                    if let Some(other) = self.vertices.get_mut(other) {
                        other.edges.retain(|&e| e != edge_id);
                    }
                }
                _ => {}
            }
        }

        debug!(label, removed_edges, "removed vertex");
        true
    }

    /// Adds an undirected edge with given weight between two vertices,
    /// creating the vertices if they do not exist yet.
    ///
    /// Adding an edge between the same pair of vertices multiple times creates
    /// parallel edges.
    pub fn add_edge(&mut self, label1: &str, label2: &str, weight: Distance) -> EdgeId {
        let u = self.get_or_add_vertex(label1);
        let v = self.get_or_add_vertex(label2);

        let id = self.edges.insert(Edge::new(u, v, weight));

        self.vertices[u].edges.push(id);
        self.vertices[v].edges.push(id);

        trace!(%id, u = label1, v = label2, weight, "added edge");
        id
    }

    /// Removes all edges connecting the two vertices and returns how many were
    /// removed.
    ///
    /// Nothing happens if any of the vertices does not exist.
    pub fn remove_edge(&mut self, label1: &str, label2: &str) -> usize {
        let (Some(&u), Some(&v)) = (self.labels.get(label1), self.labels.get(label2)) else {
            return 0;
        };

        let removed = self
            .edge_ids_between(u, v)
            .into_iter()
            .filter(|&id| self.edges.remove(id).is_some())
            .collect::<FxHashSet<_>>();

        if removed.is_empty() {
            return 0;
        }

        self.vertices[u].edges.retain(|e| !removed.contains(e));

        if u != v {
            self.vertices[v].edges.retain(|e| !removed.contains(e));
        }

        debug!(u = label1, v = label2, removed = removed.len(), "removed edges");
        removed.len()
    }

    /// Removes a single edge and returns its weight, or `None` if the edge
    /// does not exist.
    ///
    /// Unlike [`remove_edge`](Graph::remove_edge), parallel edges between the
    /// same vertices are kept.
    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Option<Distance> {
        let edge = self.edges.remove(id)?;
        let (u, v) = edge.endpoints();

        for endpoint in [u, v] {
            if let Some(vertex) = self.vertices.get_mut(endpoint) {
                vertex.edges.retain(|&e| e != id);
            }

            if u == v {
                break;
            }
        }

        trace!(%id, "removed edge");
        Some(edge.weight)
    }

    /// Adds all edges from the iterator. See [`add_edge`](Graph::add_edge).
    pub fn extend_with_edges<L, I>(&mut self, iter: I)
    where
        L: AsRef<str>,
        I: IntoIterator<Item = (L, L, Distance)>,
    {
        for (u, v, weight) in iter {
            self.add_edge(u.as_ref(), v.as_ref(), weight);
        }
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.vertices.clear();
        self.edges.clear();
    }

    /// Removes all edges, but keeps the vertices.
    pub fn clear_edges(&mut self) {
        self.edges.clear();

        for (_, vertex) in self.vertices.iter_mut() {
            vertex.edges.clear();
        }
    }

    /// Finds the shortest path between two vertices.
    ///
    /// On success, the labels on the path from `start` to `end` (both
    /// included) replace the content of `path` and the total cost of the path
    /// is returned. If any of the vertices does not exist or there is no path
    /// between them, [`INFINITY`] is returned and `path` is left untouched.
    ///
    /// Use [`ShortestPaths`] for more control over the search.
    pub fn shortest_path(&self, start: &str, end: &str, path: &mut Vec<String>) -> Distance {
        let shortest_paths = match ShortestPaths::on(self).goal(end).run(start) {
            Ok(shortest_paths) => shortest_paths,
            Err(error) => {
                debug!(start, end, %error, "shortest path not found");
                return INFINITY;
            }
        };

        match (shortest_paths.dist(end), shortest_paths.path_to(end)) {
            (Some(dist), Some(found)) => {
                path.clear();
                path.extend(found.into_iter().map(str::to_owned));
                dist
            }
            _ => INFINITY,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    /// Labels of all vertices in the order of their ids.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|(_, vertex)| vertex.label())
    }

    /// All edges in the order of their ids.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.edges.iter().map(|(id, edge)| {
            let (u, v) = edge.endpoints();
            self.edge_ref(id, edge, u, v)
        })
    }

    /// Edges incident to the vertex, in the order they were added. The `u`
    /// endpoint of every edge is the vertex itself.
    ///
    /// A self-loop is reported twice. Nothing is reported for a label that
    /// does not exist.
    pub fn incident_edges(&self, label: &str) -> impl Iterator<Item = EdgeRef<'_>> {
        self.labels.get(label).into_iter().flat_map(move |&from| {
            self.vertices[from].edges.iter().filter_map(move |&id| {
                let edge = self.edges.get(id)?;
                let to = edge.other_endpoint(from)?;
                Some(self.edge_ref(id, edge, from, to))
            })
        })
    }

    /// Neighbors of the vertex with the weights of the edges leading to them.
    ///
    /// A neighbor connected by parallel edges is reported once for each edge.
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = (&str, Distance)> {
        self.incident_edges(label).map(|edge| (edge.v, edge.weight))
    }

    /// Number of edges incident to the vertex, self-loops counted twice.
    ///
    /// Returns zero for a label that does not exist.
    pub fn degree(&self, label: &str) -> usize {
        self.find_vertex(label)
            .and_then(|id| self.vertices.get(id))
            .map_or(0, Vertex::degree)
    }

    /// All edges connecting the two vertices.
    pub fn edges_between(&self, label1: &str, label2: &str) -> impl Iterator<Item = EdgeRef<'_>> {
        let ids = match (self.find_vertex(label1), self.find_vertex(label2)) {
            (Some(u), Some(v)) => self.edge_ids_between(u, v),
            _ => Vec::new(),
        };

        ids.into_iter().filter_map(move |id| {
            let edge = self.edges.get(id)?;
            let (u, v) = edge.endpoints();
            Some(self.edge_ref(id, edge, u, v))
        })
    }

    pub fn find_vertex(&self, label: &str) -> Option<VertexId> {
        self.labels.get(label).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(id).map(Vertex::label)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Upper bound on vertex ids, usable as a size of arrays indexed by them.
    pub fn vertex_bound(&self) -> usize {
        self.vertices.bound()
    }

    fn get_or_add_vertex(&mut self, label: &str) -> VertexId {
        match self.labels.get(label) {
            Some(&id) => id,
            None => self.insert_vertex(label.to_owned()),
        }
    }

    fn insert_vertex(&mut self, label: String) -> VertexId {
        let id = self.vertices.insert(Vertex::new(label.clone()));
        trace!(%id, label = label.as_str(), "added vertex");
        self.labels.insert(label, id);
        id
    }

    // Sorted and deduplicated, self-loops are listed twice in the adjacency.
    fn edge_ids_between(&self, u: VertexId, v: VertexId) -> Vec<EdgeId> {
        let Some(vertex) = self.vertices.get(u) else {
            return Vec::new();
        };

        let mut ids = vertex
            .edges
            .iter()
            .copied()
            .filter(|&id| self.edges.get(id).map_or(false, |edge| edge.connects(u, v)))
            .collect::<Vec<_>>();

        ids.sort_unstable();
        ids.dedup();
        ids
    }

    fn edge_ref<'a>(&'a self, id: EdgeId, edge: &Edge, u: VertexId, v: VertexId) -> EdgeRef<'a> {
        EdgeRef {
            id,
            u: &self.vertices[u].label,
            v: &self.vertices[v].label,
            weight: edge.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::{check_consistency, MutOp};

    use super::*;

    fn sorted<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        let mut items = iter.collect::<Vec<_>>();
        items.sort_unstable();
        items
    }

    #[test]
    fn add_vertex_idempotent() {
        let mut graph = Graph::new();

        assert!(graph.add_vertex("a"));
        graph.add_edge("a", "b", 3);

        assert!(!graph.add_vertex("a"));
        assert!(!graph.add_vertex(String::from("a")));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.degree("a"), 1);
        assert_eq!(graph.neighbors("a").collect::<Vec<_>>(), vec![("b", 3)]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_edge_creates_vertices() {
        let mut graph = Graph::new();

        graph.add_edge("a", "b", 1);

        assert!(graph.contains_vertex("a"));
        assert!(graph.contains_vertex("b"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_symmetric() {
        let mut graph = Graph::new();

        let id = graph.add_edge("a", "b", 5);

        let from_a = graph.incident_edges("a").collect::<Vec<_>>();
        let from_b = graph.incident_edges("b").collect::<Vec<_>>();

        assert_eq!(
            from_a,
            vec![EdgeRef {
                id,
                u: "a",
                v: "b",
                weight: 5
            }]
        );
        assert_eq!(
            from_b,
            vec![EdgeRef {
                id,
                u: "b",
                v: "a",
                weight: 5
            }]
        );
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn parallel_edges() {
        let mut graph = Graph::new();

        graph.add_edge("a", "b", 5);
        graph.add_edge("b", "a", 2);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree("a"), 2);

        let mut weights = graph
            .edges_between("a", "b")
            .map(|edge| edge.weight)
            .collect::<Vec<_>>();
        weights.sort_unstable();
        assert_eq!(weights, vec![2, 5]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut graph = Graph::new();

        graph.extend_with_edges([("a", "b", 1), ("a", "c", 2), ("b", "c", 3), ("c", "d", 4)]);

        assert!(graph.remove_vertex("c"));

        assert!(!graph.contains_vertex("c"));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors("a").collect::<Vec<_>>(), vec![("b", 1)]);
        assert_eq!(graph.degree("d"), 0);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_vertex_absent() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 1);

        assert!(!graph.remove_vertex("x"));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn remove_vertex_with_loop_and_parallel_edges() {
        let mut graph = Graph::new();

        graph.add_edge("a", "a", 1);
        graph.add_edge("a", "b", 2);
        graph.add_edge("a", "b", 3);
        graph.add_edge("b", "c", 4);

        assert_eq!(graph.degree("a"), 4);
        assert!(graph.remove_vertex("a"));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors("b").collect::<Vec<_>>(), vec![("c", 4)]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_edge_removes_all_parallel() {
        let mut graph = Graph::new();

        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "a", 2);
        graph.add_edge("a", "c", 3);

        assert_eq!(graph.remove_edge("b", "a"), 2);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges_between("a", "b").count(), 0);
        assert_eq!(graph.neighbors("a").collect::<Vec<_>>(), vec![("c", 3)]);
        assert_eq!(graph.degree("b"), 0);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_edge_absent() {
        let mut graph = Graph::new();

        graph.add_edge("a", "b", 1);
        graph.add_vertex("c");

        assert_eq!(graph.remove_edge("a", "x"), 0);
        assert_eq!(graph.remove_edge("a", "c"), 0);

        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_vertex("x"));
    }

    #[test]
    fn remove_edge_loop() {
        let mut graph = Graph::new();

        graph.add_edge("a", "a", 1);
        graph.add_edge("a", "b", 2);

        assert_eq!(graph.remove_edge("a", "a"), 1);

        assert_eq!(graph.degree("a"), 1);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_edge_by_id_keeps_parallel() {
        let mut graph = Graph::new();

        let first = graph.add_edge("a", "b", 1);
        graph.add_edge("a", "b", 2);

        assert_eq!(graph.remove_edge_by_id(first), Some(1));
        assert_eq!(graph.remove_edge_by_id(first), None);

        assert_eq!(graph.neighbors("a").collect::<Vec<_>>(), vec![("b", 2)]);
        assert_eq!(graph.neighbors("b").collect::<Vec<_>>(), vec![("a", 2)]);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn readd_after_remove() {
        let mut graph = Graph::new();

        graph.add_edge("a", "b", 1);
        graph.remove_vertex("a");
        graph.add_edge("a", "c", 2);

        assert_eq!(sorted(graph.vertices()), vec!["a", "b", "c"]);
        assert_eq!(graph.neighbors("a").collect::<Vec<_>>(), vec![("c", 2)]);
        assert_eq!(graph.degree("b"), 0);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn clear_and_clear_edges() {
        let mut graph = Graph::new();

        graph.extend_with_edges([("a", "b", 1), ("b", "c", 2)]);

        graph.clear_edges();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree("b"), 0);
        check_consistency(&graph).unwrap();

        graph.clear();
        assert!(graph.is_empty());
        assert!(!graph.contains_vertex("a"));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn clone_is_independent() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 1);

        let mut copy = graph.clone();
        copy.remove_vertex("a");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(copy.vertex_count(), 1);
        assert_eq!(copy.edge_count(), 0);
    }

    #[test]
    fn edges_listing() {
        let mut graph = Graph::new();

        graph.extend_with_edges([("a", "b", 1), ("b", "c", 2)]);

        let edges = graph
            .edges()
            .map(|edge| (edge.u, edge.v, edge.weight))
            .collect::<Vec<_>>();
        assert_eq!(edges, vec![("a", "b", 1), ("b", "c", 2)]);
    }

    #[test]
    fn no_dangling_after_random_mutations() {
        let mut rng = fastrand::Rng::with_seed(0x6a09e667f3bcc908);

        for _ in 0..50 {
            let mut graph = Graph::new();

            for _ in 0..200 {
                MutOp::random(&mut rng).apply(&mut graph);
                check_consistency(&graph).unwrap();
            }
        }
    }
}
