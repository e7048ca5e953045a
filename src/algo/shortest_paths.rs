//! Find [single source shortest paths] and their distances in a graph.
//!
//! The search is Dijkstra's algorithm driven by a binary heap. All the state
//! of a search (distances, predecessors and finalized vertices) lives in a
//! table created for each run, so the graph itself is only borrowed
//! immutably and a previous search never influences the next one.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use label_graph::{algo::ShortestPaths, Graph};
//!
//! let mut graph = Graph::new();
//!
//! graph.extend_with_edges([
//!     ("Prague", "Bratislava", 328),
//!     ("Prague", "Nuremberg", 297),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Nuremberg", "Munich", 170),
//!     ("Vienna", "Munich", 402),
//!     ("Vienna", "Florence", 863),
//!     ("Munich", "Florence", 646),
//!     ("Florence", "Rome", 278),
//! ]);
//!
//! let shortest_paths = ShortestPaths::on(&graph).goal("Prague").run("Rome").unwrap();
//! let distance = shortest_paths["Prague"];
//! let path = shortest_paths
//!     .reconstruct("Prague")
//!     .collect::<Vec<_>>()
//!     .join(" - ");
//!
//! assert_eq!(distance, 1391);
//! assert_eq!(path, "Nuremberg - Munich - Florence - Rome");
//! ```

use std::ops::Index;

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::{
    core::{
        id::{IdType, VertexId},
        weight::{Distance, INFINITY},
    },
    graph::Graph,
};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<'a> {
    graph: &'a Graph,
    source: VertexId,
    table: SearchTable,
}

impl<'a> ShortestPaths<'a> {
    /// Label of the vertex where the search was started.
    pub fn source(&self) -> &'a str {
        self.graph.label(self.source).unwrap_or_default()
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before finalizing the
    /// given vertex.
    pub fn dist(&self, to: &str) -> Option<Distance> {
        self.graph
            .find_vertex(to)
            .and_then(|to| self.table.finalized(to))
    }

    /// Returns an iterator over the labels of vertices on the path between the
    /// given vertex and the source vertex, in this order, the given vertex
    /// excluded.
    ///
    /// The iterator is empty if the distance to the vertex is not
    /// [known](ShortestPaths::dist) or if it is the source.
    pub fn reconstruct(&self, to: &str) -> PathReconstruction<'_, 'a> {
        let curr = self
            .graph
            .find_vertex(to)
            .filter(|&to| self.table.finalized(to).is_some());

        PathReconstruction {
            graph: self.graph,
            curr,
            pred: &self.table.pred,
        }
    }

    /// Returns the labels of vertices on the path from the source vertex to
    /// the given vertex, both included, or `None` if the distance to the vertex
    /// is not [known](ShortestPaths::dist).
    pub fn path_to(&self, to: &str) -> Option<Vec<&'a str>> {
        let id = self.graph.find_vertex(to)?;
        self.table.finalized(id)?;

        let mut path = vec![self.graph.label(id)?];
        path.extend(self.reconstruct(to));
        path.reverse();

        Some(path)
    }
}

impl<'a> Index<&str> for ShortestPaths<'a> {
    type Output = Distance;

    fn index(&self, index: &str) -> &Self::Output {
        let id = self
            .graph
            .find_vertex(index)
            .filter(|&id| self.table.finalized(id).is_some());

        match id {
            Some(id) => &self.table.dist[id.as_usize()],
            None => panic!("distance to vertex {index:?} is not known"),
        }
    }
}

/// Order of vertices with equal distances from the source, which determines
/// the path chosen among multiple shortest paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TieBreak {
    /// Given by the structure of the priority queue. Deterministic for the
    /// same sequence of graph mutations, but not specified otherwise.
    #[default]
    Arbitrary,

    /// Vertices with lexicographically smaller labels are finalized first.
    Label,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source vertex does not exist.
    #[error("source vertex does not exist")]
    SourceAbsent,

    /// The specified goal does not exist.
    #[error("goal vertex does not exist")]
    GoalAbsent,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,
}

/// Per-search state of every vertex, indexed by vertex ids.
#[derive(Debug)]
struct SearchTable {
    dist: Vec<Distance>,
    pred: Vec<Option<VertexId>>,
    finalized: FixedBitSet,
}

impl SearchTable {
    /// All vertices unreached, without a predecessor and not finalized.
    fn new(vertex_bound: usize) -> Self {
        Self {
            dist: vec![INFINITY; vertex_bound],
            pred: vec![None; vertex_bound],
            finalized: FixedBitSet::with_capacity(vertex_bound),
        }
    }

    /// Marks the distance of the vertex as final. Returns `false` if it was
    /// final already.
    fn finalize(&mut self, id: VertexId) -> bool {
        if self.finalized.len() <= id.as_usize() {
            self.finalized.grow(id.as_usize() + 1);
        }

        !self.finalized.put(id.as_usize())
    }

    fn is_finalized(&self, id: VertexId) -> bool {
        self.finalized.contains(id.as_usize())
    }

    fn finalized_count(&self) -> usize {
        self.finalized.count_ones(..)
    }

    fn finalized(&self, id: VertexId) -> Option<Distance> {
        if self.is_finalized(id) {
            self.dist.get(id.as_usize()).copied()
        } else {
            None
        }
    }
}

/// Iterator over the labels of vertices on the path from a vertex to the
/// source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'s, 'a> {
    graph: &'a Graph,
    curr: Option<VertexId>,
    pred: &'s [Option<VertexId>],
}

impl<'s, 'a> Iterator for PathReconstruction<'s, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        let pred = self.pred.get(curr.as_usize()).copied().flatten();
        self.curr = pred;
        pred.and_then(|pred| self.graph.label(pred))
    }
}
