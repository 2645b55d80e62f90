use crate::error::{OperationError, Result};
use crate::geometry::{Polyline, Vertex};
use crate::math::distance_2d::point_to_point_dist;
use crate::math::interpolate::{lerp, subdivision_count};

use super::DensifyParams;

/// Inserts interpolated vertices so that no segment exceeds a maximum length.
///
/// Each segment `A → B` of length `d > max_segment_length` receives
/// `ceil(d / max_segment_length) - 1` evenly spaced vertices. Existing
/// vertices and the part structure are never altered, and parts with fewer
/// than two vertices pass through unchanged.
///
/// Lengths are measured in the XY plane. Elevation is interpolated when both
/// segment endpoints carry one.
#[derive(Debug)]
pub struct Densify<'a> {
    polyline: &'a Polyline,
    max_segment_length: f64,
    params: DensifyParams,
}

impl<'a> Densify<'a> {
    /// Creates a new densify operation with default parameters.
    #[must_use]
    pub fn new(polyline: &'a Polyline, max_segment_length: f64) -> Self {
        Self {
            polyline,
            max_segment_length,
            params: DensifyParams::default(),
        }
    }

    /// Overrides the densification parameters.
    #[must_use]
    pub fn with_params(mut self, params: DensifyParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning a new polyline.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidArgument` if `max_segment_length` is not
    ///   finite or not strictly positive
    /// - `OperationError::Failed` if a limit is set in
    ///   `DensifyParams::max_vertices_per_segment` and a segment would need
    ///   more inserted vertices than it allows
    pub fn execute(&self) -> Result<Polyline> {
        let max_len = self.max_segment_length;
        if !max_len.is_finite() || max_len <= 0.0 {
            return Err(OperationError::InvalidArgument {
                parameter: "max_segment_length",
                value: max_len,
                reason: "must be finite and > 0",
            }
            .into());
        }

        let src = self.polyline;
        let mut out = Polyline::with_capacity(src.vertex_count(), src.part_count());
        let mut buf: Vec<Vertex> = Vec::new();
        let mut inserted = 0_usize;

        for part in src.parts() {
            if part.len() < 2 {
                out.push_part(part);
                continue;
            }

            buf.clear();
            buf.push(part[0]);
            for seg in part.windows(2) {
                let (a, b) = (&seg[0], &seg[1]);
                let count = self.insertion_count(a, b)?;
                buf.reserve(count + 1);
                #[allow(clippy::cast_precision_loss)]
                let pieces = (count + 1) as f64;
                for k in 1..=count {
                    #[allow(clippy::cast_precision_loss)]
                    let t = k as f64 / pieces;
                    buf.push(interpolate_vertex(a, b, t));
                }
                buf.push(*b);
                inserted += count;
            }
            out.push_part(&buf);
        }

        tracing::debug!(
            parts = out.part_count(),
            vertices_in = src.vertex_count(),
            inserted,
            max_segment_length = max_len,
            "densify complete"
        );
        Ok(out)
    }

    /// Number of vertices to insert between `a` and `b`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn insertion_count(&self, a: &Vertex, b: &Vertex) -> Result<usize> {
        let d = point_to_point_dist(&a.xy(), &b.xy());
        let count = subdivision_count(d, self.max_segment_length);

        if let Some(limit) = self.params.max_vertices_per_segment {
            if count > limit as f64 {
                return Err(OperationError::Failed(format!(
                    "segment of length {d} needs {count} inserted vertices, limit is {limit}"
                ))
                .into());
            }
        }

        Ok(count as usize)
    }
}

/// Component-wise interpolation between two vertices.
fn interpolate_vertex(a: &Vertex, b: &Vertex, t: f64) -> Vertex {
    let z = match (a.z, b.z) {
        (Some(za), Some(zb)) => Some(lerp(za, zb, t)),
        _ => None,
    };
    Vertex {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
        z,
    }
}
