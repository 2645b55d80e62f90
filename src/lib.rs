pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;
pub mod sample;

pub use error::{GeosimpError, Result};
