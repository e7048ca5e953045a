use std::cmp::Ordering;

/// Type of edge weights and path distances.
pub type Distance = u64;

/// Sentinel distance of an unreached vertex, also returned by
/// [`Graph::shortest_path`](crate::Graph::shortest_path) when there is no
/// path.
pub const INFINITY: Distance = Distance::MAX;

/// Adds an edge weight to a distance without wrapping.
///
/// An overflowing sum saturates to [`INFINITY`], which never improves any
/// recorded distance.
pub fn extend_distance(dist: Distance, weight: Distance) -> Distance {
    dist.saturating_add(weight)
}

/// A value paired with its priority. Comparisons consider only the priority.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_distance_saturates() {
        assert_eq!(extend_distance(3, 4), 7);
        assert_eq!(extend_distance(INFINITY - 1, 5), INFINITY);
        assert_eq!(extend_distance(INFINITY, 0), INFINITY);
    }

    #[test]
    fn weighted_ignores_value() {
        assert_eq!(Weighted("a", 1), Weighted("b", 1));
        assert!(Weighted("z", 1) < Weighted("a", 2));
    }
}
