//! Undirected weighted graph keyed by string labels, with shortest path
//! queries.
//!
//! The graph is built incrementally by label. Edges are owned by the graph in
//! a single place and both of their endpoints refer to them by id, so removing
//! a vertex or an edge never leaves anything dangling.
//!
//! # Examples
//!
//! ```
//! use label_graph::{Graph, INFINITY};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_edge("a", "b", 7);
//! graph.add_edge("b", "c", 3);
//! graph.add_edge("a", "c", 12);
//!
//! let mut path = Vec::new();
//! let cost = graph.shortest_path("a", "c", &mut path);
//!
//! assert_ne!(cost, INFINITY);
//! assert_eq!(cost, 10);
//! assert_eq!(path, ["a", "b", "c"]);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;
pub mod storage;

pub use crate::{
    core::weight::{Distance, INFINITY},
    graph::Graph,
};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        algo::{ShortestPaths, TieBreak},
        core::{
            id::{EdgeId, VertexId},
            weight::{Distance, INFINITY},
        },
        graph::{EdgeRef, Graph},
    };
}
