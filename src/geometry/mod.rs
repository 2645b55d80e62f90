mod envelope;
mod multipoint;
mod polyline;
mod vertex;

pub use envelope::Envelope;
pub use multipoint::Multipoint;
pub use polyline::Polyline;
pub use vertex::Vertex;

/// Well-known id of a spatial reference.
///
/// Carried as metadata only; coordinates are never transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    #[must_use]
    pub const fn new(wkid: u32) -> Self {
        Self { wkid }
    }
}
