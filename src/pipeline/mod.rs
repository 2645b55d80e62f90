//! Command/result wrapper around densify and generalize.
//!
//! A host UI sends a [`SimplifyCommand`] whenever one of its controls
//! changes; the pipeline re-derives the result from the original polyline
//! and returns everything needed to redraw: the result polyline, its
//! vertices as a multipoint, and a status label.

mod params;

pub use params::SimplifyParams;

use crate::error::Result;
use crate::geometry::{Multipoint, Polyline};
use crate::operations::query::ExtractVertices;
use crate::operations::simplify::{Densify, Generalize};

/// Status label shown before any command has been applied.
pub const INITIAL_STATUS: &str = "Adjust a slider to start";

/// A request to recompute the displayed geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimplifyCommand {
    Densify { max_segment_length: f64 },
    Generalize { max_deviation: f64 },
}

impl SimplifyCommand {
    /// Status label describing this command.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Densify { max_segment_length } => {
                format!("Densify. Seg. length: {max_segment_length:.2}")
            }
            Self::Generalize { max_deviation } => {
                format!("Generalize. Deviation: {max_deviation:.2}")
            }
        }
    }
}

/// Result of applying a [`SimplifyCommand`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyOutcome {
    pub polyline: Polyline,
    pub points: Multipoint,
    pub label: String,
}

/// Holds the original polyline and applies commands against it.
#[derive(Debug, Clone)]
pub struct SimplifyPipeline {
    original: Polyline,
    params: SimplifyParams,
}

impl SimplifyPipeline {
    /// Creates a pipeline over `original`.
    #[must_use]
    pub fn new(original: Polyline, params: SimplifyParams) -> Self {
        Self { original, params }
    }

    /// The polyline every command starts from.
    #[must_use]
    pub fn original(&self) -> &Polyline {
        &self.original
    }

    #[must_use]
    pub fn params(&self) -> &SimplifyParams {
        &self.params
    }

    /// Applies `command` to the original polyline.
    ///
    /// Results never feed into later commands: densifying after a
    /// generalize starts again from the original.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` if the command value is outside
    ///   the configured range
    /// - any error from the underlying densify or generalize operation
    pub fn apply(&self, command: &SimplifyCommand) -> Result<SimplifyOutcome> {
        let polyline = match *command {
            SimplifyCommand::Densify { max_segment_length } => {
                self.params.check_segment_length(max_segment_length)?;
                Densify::new(&self.original, max_segment_length)
                    .with_params(self.params.densify)
                    .execute()?
            }
            SimplifyCommand::Generalize { max_deviation } => {
                self.params.check_deviation(max_deviation)?;
                Generalize::new(
                    &self.original,
                    max_deviation,
                    self.params.remove_degenerate_parts,
                )
                .execute()?
            }
        };

        let points = ExtractVertices::new(&polyline).to_multipoint();
        let label = command.label();
        tracing::info!(
            status = %label,
            vertices = polyline.vertex_count(),
            "geometry updated"
        );

        Ok(SimplifyOutcome {
            polyline,
            points,
            label,
        })
    }
}
