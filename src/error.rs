use thiserror::Error;

/// Top-level error type for the Geosimp kernel.
#[derive(Debug, Error)]
pub enum GeosimpError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl GeosimpError {
    /// Returns `true` if the error was caused by a caller-supplied argument
    /// (bad numeric parameter or malformed polyline input).
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Geometry(_) | Self::Operation(OperationError::InvalidArgument { .. }) => true,
            Self::Operation(OperationError::Failed(_)) => false,
        }
    }
}

/// Errors related to the geometry model.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("polyline must contain at least one part")]
    EmptyPolyline,

    #[error("part {index} contains no vertices")]
    EmptyPart { index: usize },

    #[error("vertex {index} of part {part} has a non-finite coordinate")]
    NonFiniteCoordinate { part: usize, index: usize },
}

/// Errors related to simplification operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid argument {parameter} = {value}: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`GeosimpError`].
pub type Result<T> = std::result::Result<T, GeosimpError>;
