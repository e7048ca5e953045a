//! Integer identifiers of vertices and edges inside a [`Graph`](crate::Graph).
//!
//! Labels are the public keys of vertices. The ids are what the graph uses
//! internally to refer to its records, and what adjacency lists and search
//! tables store. An id is valid until the record it identifies is removed,
//! after which the slot may be reused by a newly added record.

use std::{fmt, hash::Hash};

/// A unique identification of a record in an [`Arena`](crate::storage::Arena).
///
/// Ids are dense integers starting at zero, so algorithms can use them to
/// index into contiguous arrays.
pub trait IdType: Clone + Copy + Ord + Hash + fmt::Debug {
    /// Converts an `usize` into the corresponding id.
    fn from_usize(index: usize) -> Self;

    /// Converts the id into the corresponding `usize`.
    fn as_usize(&self) -> usize;
}

/// Identifier of a vertex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

/// Identifier of an edge.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

macro_rules! impl_id {
    ($id_ty:ident, $prefix:literal) => {
        impl IdType for $id_ty {
            fn from_usize(index: usize) -> Self {
                Self(index)
            }

            fn as_usize(&self) -> usize {
                self.0
            }
        }

        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.as_usize()
            }
        }

        impl fmt::Debug for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

impl_id!(VertexId, "v");
impl_id!(EdgeId, "e");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_conversions() {
        let v = VertexId::from(3);
        assert_eq!(v.as_usize(), 3);
        assert_eq!(usize::from(EdgeId::from_usize(7)), 7);
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{:?}", VertexId::from(1)), "v1");
        assert_eq!(EdgeId::from(42).to_string(), "e42");
    }
}
