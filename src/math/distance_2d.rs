use super::{Point2, TOLERANCE};

/// Squared length below which a segment is treated as a single point.
const DEGENERATE_LEN_SQ: f64 = TOLERANCE * TOLERANCE;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn point_to_point_dist(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the minimum distance from `p` to the line segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < DEGENERATE_LEN_SQ {
        // Degenerate segment (zero length).
        return point_to_point_dist(p, a);
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;

    point_to_point_dist(p, &closest)
}
