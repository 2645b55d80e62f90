use crate::geometry::{Multipoint, Polyline, Vertex};

/// Flattens a polyline into one ordered vertex sequence.
///
/// Part order and per-part vertex order are preserved; shared or repeated
/// vertices are not de-duplicated.
#[derive(Debug)]
pub struct ExtractVertices<'a> {
    polyline: &'a Polyline,
}

impl<'a> ExtractVertices<'a> {
    /// Creates a new `ExtractVertices` query.
    #[must_use]
    pub fn new(polyline: &'a Polyline) -> Self {
        Self { polyline }
    }

    /// Executes the query, returning a snapshot of the vertices.
    #[must_use]
    pub fn execute(&self) -> Vec<Vertex> {
        self.polyline.parts().flatten().copied().collect()
    }

    /// Executes the query, wrapping the result as a [`Multipoint`].
    #[must_use]
    pub fn to_multipoint(&self) -> Multipoint {
        Multipoint::new(self.execute())
    }
}
