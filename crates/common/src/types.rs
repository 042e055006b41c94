/// Integer edge weight as supplied by callers.
pub type Weight = i32;

/// Distance domain. Wider than [`Weight`] so that no legitimate sum of edge
/// weights can collide with either sentinel below.
pub type Distance = i64;

/// Type alias for a single directed edge: (from, to, weight)
pub type Edge = (usize, usize, Weight);

/// No finite path is known. Half of `i64::MAX`, so `UNREACHABLE + w` cannot
/// overflow for any [`Weight`].
pub const UNREACHABLE: Distance = Distance::MAX / 2;

/// The distance is unbounded below because a negative cycle lies on some
/// path to the node.
pub const NEG_INFINITY: Distance = -UNREACHABLE;

/// Returns true when `distance` is neither sentinel.
pub fn is_finite(distance: Distance) -> bool {
    distance != UNREACHABLE && distance != NEG_INFINITY
}

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn sentinels_are_not_finite() {
        assert!(!is_finite(UNREACHABLE));
        assert!(!is_finite(NEG_INFINITY));
        assert!(is_finite(0));
        assert!(is_finite(NEG_INFINITY + 1));
        assert!(is_finite(UNREACHABLE - 1));
    }
}
