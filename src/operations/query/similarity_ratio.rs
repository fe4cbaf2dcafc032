use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::Point3;
use crate::operations::Tolerances;
use crate::topology::{SolidId, SolidStore};

/// Measures the uniform scale factor between two solids.
///
/// Two solids are similar when their sorted pairwise vertex distances are
/// proportional. The ratio is `other / solid`, so a value below one means
/// `other` is the smaller of the two. Position and rotation are ignored.
pub struct SimilarityRatio {
    solid: SolidId,
    other: SolidId,
    tolerances: Tolerances,
}

impl SimilarityRatio {
    /// Creates a new `SimilarityRatio` query.
    #[must_use]
    pub fn new(solid: SolidId, other: SolidId) -> Self {
        Self {
            solid,
            other,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets a custom relative tolerance for comparing distances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the query, returning `None` if the solids are not similar.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid is missing or has all of its
    /// vertices at one point.
    pub fn execute(&self, store: &SolidStore) -> Result<Option<f64>> {
        let a = store.solid(self.solid)?;
        let b = store.solid(self.other)?;
        if a.vertices.len() != b.vertices.len() || a.counts() != b.counts() {
            return Ok(None);
        }

        let da = sorted_distances(&a.vertices);
        let db = sorted_distances(&b.vertices);
        let (Some(&longest_a), Some(&longest_b)) = (da.last(), db.last()) else {
            return Ok(None);
        };
        if longest_a <= 0.0 || longest_b <= 0.0 {
            return Err(GeometryError::Degenerate("solid has no extent".into()).into());
        }

        let ratio = longest_b / longest_a;
        let similar = da.iter().zip(&db).all(|(x, y)| {
            (x * ratio - y).abs() <= self.tolerances.coincidence * longest_b
        });
        Ok(similar.then_some(ratio))
    }
}

fn sorted_distances(points: &[Point3]) -> Vec<f64> {
    let mut distances: Vec<f64> = points
        .iter()
        .enumerate()
        .flat_map(|(i, p)| points[i + 1..].iter().map(move |q| (q - p).norm()))
        .collect();
    distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    distances
}
