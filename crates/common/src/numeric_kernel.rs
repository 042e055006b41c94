use super::types::{Distance, NEG_INFINITY, UNREACHABLE, Weight};

/// Sentinel-aware addition of two distances.
///
/// Returns `None` when either operand is [`UNREACHABLE`]: an unreachable
/// prefix or suffix never produces a candidate path, so callers can skip the
/// comparison entirely instead of comparing against a poisoned sum.
///
/// Finite sums saturate and are clamped at [`NEG_INFINITY`]. A
/// `NEG_INFINITY` operand therefore always yields `NEG_INFINITY`, and
/// repeated accumulation around a negative cycle cannot overflow.
pub fn add_distances(a: Distance, b: Distance) -> Option<Distance> {
    if a == UNREACHABLE || b == UNREACHABLE {
        return None;
    }
    if a == NEG_INFINITY || b == NEG_INFINITY {
        return Some(NEG_INFINITY);
    }

    Some(a.saturating_add(b).clamp(NEG_INFINITY, UNREACHABLE - 1))
}

/// Extends `distance` by a single edge weight. Same sentinel rules as
/// [`add_distances`].
pub fn extend(distance: Distance, weight: Weight) -> Option<Distance> {
    add_distances(distance, Distance::from(weight))
}
