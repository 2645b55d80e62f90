use crate::error::{OperationError, Result};
use crate::geometry::{Polyline, Vertex};
use crate::math::distance_2d::point_to_segment_dist;

/// Reduces the vertex count of each part with the Douglas–Peucker algorithm.
///
/// A vertex is discarded when every vertex of its range lies within
/// `tolerance` of the segment joining the range endpoints. Distances are
/// measured in the XY plane. The first and last vertex of every part are
/// always retained, and parts with two or fewer vertices are not simplified.
///
/// With `remove_degenerate_parts`, any resulting part whose vertices all
/// coincide (fewer than two distinct locations) is dropped from the output.
#[derive(Debug)]
pub struct Generalize<'a> {
    polyline: &'a Polyline,
    tolerance: f64,
    remove_degenerate_parts: bool,
}

impl<'a> Generalize<'a> {
    /// Creates a new generalize operation.
    #[must_use]
    pub fn new(polyline: &'a Polyline, tolerance: f64, remove_degenerate_parts: bool) -> Self {
        Self {
            polyline,
            tolerance,
            remove_degenerate_parts,
        }
    }

    /// Executes the operation, returning a new polyline.
    ///
    /// # Errors
    ///
    /// `OperationError::InvalidArgument` if `tolerance` is negative or NaN.
    pub fn execute(&self) -> Result<Polyline> {
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(OperationError::InvalidArgument {
                parameter: "tolerance",
                value: self.tolerance,
                reason: "must be >= 0",
            }
            .into());
        }

        let src = self.polyline;
        let mut out = Polyline::with_capacity(src.vertex_count(), src.part_count());
        let mut dropped = 0_usize;

        for part in src.parts() {
            let simplified = simplify_part(part, self.tolerance);
            if self.remove_degenerate_parts && is_degenerate(&simplified) {
                dropped += 1;
                continue;
            }
            out.push_part(&simplified);
        }

        tracing::debug!(
            parts_in = src.part_count(),
            parts_out = out.part_count(),
            dropped,
            vertices_in = src.vertex_count(),
            vertices_out = out.vertex_count(),
            tolerance = self.tolerance,
            "generalize complete"
        );
        Ok(out)
    }
}

/// Douglas–Peucker over a single part.
///
/// Uses an explicit work stack of `(first, last)` index ranges so that long
/// parts cannot exhaust the call stack.
fn simplify_part(part: &[Vertex], tolerance: f64) -> Vec<Vertex> {
    let n = part.len();
    if n <= 2 {
        return part.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];
    while let Some((first, last)) = stack.pop() {
        if last <= first + 1 {
            continue;
        }

        let (idx, dist) = farthest_vertex(part, first, last);
        if dist > tolerance {
            keep[idx] = true;
            stack.push((idx, last));
            stack.push((first, idx));
        }
    }

    tracing::trace!(
        vertices_in = n,
        vertices_out = keep.iter().filter(|k| **k).count(),
        "part simplified"
    );

    part.iter()
        .zip(&keep)
        .filter_map(|(v, k)| k.then_some(*v))
        .collect()
}

/// Finds the interior vertex of `first..=last` farthest from the segment
/// `part[first] → part[last]`. Ties resolve to the lowest index.
fn farthest_vertex(part: &[Vertex], first: usize, last: usize) -> (usize, f64) {
    let a = part[first].xy();
    let b = part[last].xy();

    let mut best = (first + 1, f64::NEG_INFINITY);
    for (i, v) in part.iter().enumerate().take(last).skip(first + 1) {
        let d = point_to_segment_dist(&v.xy(), &a, &b);
        if d > best.1 {
            best = (i, d);
        }
    }
    best
}

/// A part is degenerate when it has fewer than two distinct XY locations.
fn is_degenerate(part: &[Vertex]) -> bool {
    match part.first() {
        None => true,
        Some(head) => part.iter().all(|v| v.coincides_with(head)),
    }
}
