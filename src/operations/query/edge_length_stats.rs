use crate::error::{GeometryError, Result};
use crate::topology::{SolidId, SolidStore};

/// Summary of a solid's edge lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLengths {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Standard deviation divided by the mean.
    pub coefficient_of_variation: f64,
}

impl EdgeLengths {
    /// Summarises a non-empty list of lengths.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the list is empty or the mean
    /// length is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_lengths(lengths: &[f64]) -> Result<Self> {
        if lengths.is_empty() {
            return Err(GeometryError::Degenerate("solid has no edges".into()).into());
        }
        let n = lengths.len() as f64;
        let mean = lengths.iter().sum::<f64>() / n;
        if mean <= 0.0 {
            return Err(GeometryError::Degenerate("edges have zero length".into()).into());
        }
        let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
        Ok(Self {
            min: lengths.iter().copied().fold(f64::INFINITY, f64::min),
            max: lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean,
            coefficient_of_variation: variance.sqrt() / mean,
        })
    }
}

/// Computes edge length statistics of a solid.
pub struct EdgeLengthStats {
    solid: SolidId,
}

impl EdgeLengthStats {
    /// Creates a new `EdgeLengthStats` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or has no edges.
    pub fn execute(&self, store: &SolidStore) -> Result<EdgeLengths> {
        let solid = store.solid(self.solid)?;
        EdgeLengths::from_lengths(&solid.edge_lengths()?)
    }
}
