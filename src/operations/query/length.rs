use crate::geometry::Polyline;
use crate::math::distance_2d::point_to_point_dist;

/// Computes the planar length of a polyline, summed over all parts.
#[derive(Debug)]
pub struct Length<'a> {
    polyline: &'a Polyline,
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(polyline: &'a Polyline) -> Self {
        Self { polyline }
    }

    /// Executes the query, returning the total XY length.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.polyline
            .parts()
            .flat_map(|part| part.windows(2))
            .map(|seg| point_to_point_dist(&seg[0].xy(), &seg[1].xy()))
            .sum()
    }
}
