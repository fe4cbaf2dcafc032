use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::operations::Tolerances;
use crate::topology::Edge;

/// Derives edges geometrically: every vertex pair whose distance lies in a
/// window around the expected edge length.
///
/// The window must exclude face diagonals and longer chords while absorbing
/// floating-point error. A mis-tuned window silently yields the wrong edge
/// count, so callers should check the count against the expected one.
pub struct EdgesFromDistance<'a> {
    vertices: &'a [Point3],
    expected_length: f64,
    tolerances: Tolerances,
}

impl<'a> EdgesFromDistance<'a> {
    /// Creates a new `EdgesFromDistance` derivation.
    #[must_use]
    pub fn new(vertices: &'a [Point3], expected_length: f64) -> Self {
        Self {
            vertices,
            expected_length,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets custom tolerances; only the edge window is used.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the derivation, returning edges sorted by `(start, end)`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the expected length is not
    /// positive or the window is empty.
    pub fn execute(&self) -> Result<Vec<Edge>> {
        if !(self.expected_length.is_finite() && self.expected_length > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "expected edge length must be positive, got {}",
                self.expected_length
            ))
            .into());
        }
        let lo = self.expected_length * self.tolerances.edge_window_min;
        let hi = self.expected_length * self.tolerances.edge_window_max;
        if lo.is_nan() || hi.is_nan() || lo >= hi {
            return Err(OperationError::InvalidInput(format!(
                "empty edge-length window ({lo}, {hi})"
            ))
            .into());
        }

        let mut edges = Vec::new();
        for (i, a) in self.vertices.iter().enumerate() {
            for (j, b) in self.vertices.iter().enumerate().skip(i + 1) {
                let d = (b - a).norm();
                if d > lo && d < hi {
                    edges.push(Edge::new(i, j)?);
                }
            }
        }
        debug!(
            vertices = self.vertices.len(),
            edges = edges.len(),
            expected_length = self.expected_length,
            "derived edges from distance"
        );
        Ok(edges)
    }
}
