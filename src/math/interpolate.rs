/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// `t = 0` yields `a`, `t = 1` yields `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Number of vertices to insert so that a segment of length `length` is split
/// into pieces no longer than `max_length`.
///
/// Returns `ceil(length / max_length) - 1`, or `0` when the segment already
/// fits. Callers must ensure `max_length > 0`.
#[must_use]
pub fn subdivision_count(length: f64, max_length: f64) -> f64 {
    if length <= max_length {
        return 0.0;
    }
    ((length / max_length).ceil() - 1.0).max(0.0)
}
