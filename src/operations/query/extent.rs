use crate::geometry::{Envelope, Polyline, Vertex};

/// Computes the XY envelope of a polyline.
#[derive(Debug)]
pub struct Extent<'a> {
    polyline: &'a Polyline,
}

impl<'a> Extent<'a> {
    /// Creates a new `Extent` query.
    #[must_use]
    pub fn new(polyline: &'a Polyline) -> Self {
        Self { polyline }
    }

    /// Executes the query. Returns `None` for a polyline without vertices.
    #[must_use]
    pub fn execute(&self) -> Option<Envelope> {
        let mut points = self.polyline.vertices().iter().map(Vertex::xy);
        let first = points.next()?;
        let mut env = Envelope::new(first, first);
        for p in points {
            env.include(&p);
        }
        Some(env)
    }
}
