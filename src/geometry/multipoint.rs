use super::{Polyline, Vertex};

/// An insertion-ordered collection of vertices, typically a snapshot of a
/// polyline's vertices for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Multipoint {
    pub points: Vec<Vertex>,
}

impl Multipoint {
    /// Creates a multipoint from the given vertices.
    #[must_use]
    pub fn new(points: Vec<Vertex>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<&Polyline> for Multipoint {
    fn from(polyline: &Polyline) -> Self {
        Self::new(polyline.vertices().to_vec())
    }
}
