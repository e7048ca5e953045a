use crate::core::{
    id::{EdgeId, VertexId},
    weight::Distance,
};

/// Vertex record: its label and ids of the incident edges in the order of
/// their insertion.
///
/// A self-loop is listed twice, once for each of its endpoint slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub(crate) label: String,
    pub(crate) edges: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Undirected edge record. The order of endpoints carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) endpoints: [VertexId; 2],
    pub(crate) weight: Distance,
}

impl Edge {
    pub(crate) fn new(u: VertexId, v: VertexId, weight: Distance) -> Self {
        Self {
            endpoints: [u, v],
            weight,
        }
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.endpoints[0], self.endpoints[1])
    }

    pub fn weight(&self) -> Distance {
        self.weight
    }

    /// Returns the endpoint opposite to `from`, or `None` if the edge is not
    /// incident to `from`.
    pub fn other_endpoint(&self, from: VertexId) -> Option<VertexId> {
        match self.endpoints {
            [u, v] if u == from => Some(v),
            [u, v] if v == from => Some(u),
            _ => None,
        }
    }

    pub fn is_incident(&self, vertex: VertexId) -> bool {
        self.endpoints.contains(&vertex)
    }

    /// Returns `true` if the edge connects exactly the unordered pair.
    pub fn connects(&self, u: VertexId, v: VertexId) -> bool {
        self.endpoints == [u, v] || self.endpoints == [v, u]
    }

    pub fn is_loop(&self) -> bool {
        self.endpoints[0] == self.endpoints[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn other_endpoint() {
        let edge = Edge::new(v(0), v(1), 5);

        assert_eq!(edge.other_endpoint(v(0)), Some(v(1)));
        assert_eq!(edge.other_endpoint(v(1)), Some(v(0)));
        assert_eq!(edge.other_endpoint(v(2)), None);
    }

    #[test]
    fn other_endpoint_loop() {
        let edge = Edge::new(v(3), v(3), 1);

        assert!(edge.is_loop());
        assert_eq!(edge.other_endpoint(v(3)), Some(v(3)));
    }

    #[test]
    fn connects_unordered() {
        let edge = Edge::new(v(0), v(1), 5);

        assert!(edge.connects(v(0), v(1)));
        assert!(edge.connects(v(1), v(0)));
        assert!(!edge.connects(v(0), v(0)));
        assert!(!edge.connects(v(1), v(2)));
    }
}
