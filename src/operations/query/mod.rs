mod extent;
mod extract_vertices;
mod length;

pub use extent::Extent;
pub use extract_vertices::ExtractVertices;
pub use length::Length;
