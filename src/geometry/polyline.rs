use crate::error::{GeometryError, Result};

use super::Vertex;

/// A polyline made of one or more parts (disjoint sub-paths).
///
/// All vertices live in a single contiguous buffer. `part_ends[i]` is the
/// exclusive end offset of part `i` in that buffer, so part `i` spans
/// `part_ends[i - 1]..part_ends[i]` (with an implicit `0` before the first
/// part).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    vertices: Vec<Vertex>,
    part_ends: Vec<usize>,
}

impl Polyline {
    /// Creates a polyline from a list of parts.
    ///
    /// # Errors
    ///
    /// - `GeometryError::EmptyPolyline` if `parts` is empty
    /// - `GeometryError::EmptyPart` if any part has no vertices
    /// - `GeometryError::NonFiniteCoordinate` if any coordinate is NaN or infinite
    pub fn new(parts: Vec<Vec<Vertex>>) -> Result<Self> {
        if parts.is_empty() {
            return Err(GeometryError::EmptyPolyline.into());
        }

        let mut polyline = Self::with_capacity(parts.iter().map(Vec::len).sum(), parts.len());
        for (part_idx, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                return Err(GeometryError::EmptyPart { index: part_idx }.into());
            }
            if let Some(index) = part.iter().position(|v| !v.is_finite()) {
                return Err(GeometryError::NonFiniteCoordinate {
                    part: part_idx,
                    index,
                }
                .into());
            }
            polyline.push_part(&part);
        }
        Ok(polyline)
    }

    /// Creates a single-part polyline.
    ///
    /// # Errors
    ///
    /// Same as [`Polyline::new`].
    pub fn from_vertices<I, V>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Vertex>,
    {
        Self::new(vec![vertices.into_iter().map(Into::into).collect()])
    }

    /// Creates a polyline with no parts.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(vertices: usize, parts: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            part_ends: Vec::with_capacity(parts),
        }
    }

    /// Appends a part. Callers inside the crate are responsible for only
    /// pushing vertices derived from an already validated polyline.
    pub(crate) fn push_part(&mut self, part: &[Vertex]) {
        self.vertices.extend_from_slice(part);
        self.part_ends.push(self.vertices.len());
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.part_ends.len()
    }

    /// Returns the total number of vertices across all parts.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polyline has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.part_ends.is_empty()
    }

    /// Returns the vertices of part `index`, or `None` if out of range.
    #[must_use]
    pub fn part(&self, index: usize) -> Option<&[Vertex]> {
        let end = *self.part_ends.get(index)?;
        let start = if index == 0 {
            0
        } else {
            self.part_ends[index - 1]
        };
        Some(&self.vertices[start..end])
    }

    /// Iterates over the parts in order.
    pub fn parts(&self) -> impl ExactSizeIterator<Item = &[Vertex]> + '_ {
        (0..self.part_ends.len()).map(|i| {
            let start = if i == 0 { 0 } else { self.part_ends[i - 1] };
            &self.vertices[start..self.part_ends[i]]
        })
    }

    /// All vertices of all parts, in part order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns `true` if any vertex carries an elevation.
    #[must_use]
    pub fn has_z(&self) -> bool {
        self.vertices.iter().any(|v| v.z.is_some())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn two_part() -> Polyline {
        Polyline::new(vec![
            vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0)],
            vec![
                Vertex::new(5.0, 5.0),
                Vertex::new(6.0, 5.0),
                Vertex::new(6.0, 6.0),
            ],
        ])
        .unwrap()
    }

    #[test]
    fn parts_preserve_order_and_bounds() {
        let pl = two_part();
        assert_eq!(pl.part_count(), 2);
        assert_eq!(pl.vertex_count(), 5);

        let parts: Vec<&[Vertex]> = pl.parts().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[1][0], Vertex::new(5.0, 5.0));
        assert_eq!(pl.part(1).unwrap(), parts[1]);
        assert!(pl.part(2).is_none());
    }

    #[test]
    fn from_vertices_accepts_tuples() {
        let pl = Polyline::from_vertices([(0.0, 0.0), (3.0, 4.0)]).unwrap();
        assert_eq!(pl.part_count(), 1);
        assert_eq!(pl.part(0).unwrap()[1], Vertex::new(3.0, 4.0));
        assert!(!pl.has_z());

        let pl = Polyline::from_vertices([(0.0, 0.0, 1.0), (3.0, 4.0, 2.0)]).unwrap();
        assert!(pl.has_z());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            Polyline::new(vec![]),
            Err(crate::GeosimpError::Geometry(GeometryError::EmptyPolyline))
        ));
        assert!(matches!(
            Polyline::new(vec![vec![Vertex::new(0.0, 0.0)], vec![]]),
            Err(crate::GeosimpError::Geometry(GeometryError::EmptyPart {
                index: 1
            }))
        ));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let parts = vec![vec![Vertex::new(0.0, 0.0), Vertex::new(f64::NAN, 1.0)]];
        let err = Polyline::new(parts).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            crate::GeosimpError::Geometry(GeometryError::NonFiniteCoordinate { part: 0, index: 1 })
        ));
    }

    #[test]
    fn empty_polyline_has_no_parts() {
        let pl = Polyline::empty();
        assert!(pl.is_empty());
        assert_eq!(pl.parts().count(), 0);
        assert_eq!(pl.vertex_count(), 0);
    }

    #[test]
    fn single_vertex_part_is_allowed() {
        let pl = Polyline::from_vertices([(1.0, 1.0)]).unwrap();
        assert_eq!(pl.part(0).unwrap().len(), 1);
    }
}
