use std::collections::BTreeSet;

use crate::error::{GeometryError, Result, TopologyError};
use crate::math::signed_distance_to_plane;
use crate::operations::derivation::EdgesFromFaces;
use crate::operations::Tolerances;
use crate::topology::{Edge, SolidId, SolidStore};

use super::edge_length_stats::EdgeLengths;

/// Validates the topological and geometric consistency of a solid.
///
/// A valid solid:
/// - matches the vertex, edge and face counts of its kind, if it has one;
/// - satisfies Euler's formula;
/// - has exactly the edges that bound its faces;
/// - has edges of uniform length;
/// - has planar faces whose vertices are equidistant from the face centroid.
pub struct IsValid {
    solid: SolidId,
    tolerances: Tolerances,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self {
            solid,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets custom tolerances.
    ///
    /// `uniformity` bounds the coefficient of variation of the edge lengths.
    /// `coincidence`, taken relative to the mean edge length, bounds both a
    /// face vertex's distance from the face plane and the spread of its
    /// distances from the face centroid.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the validation, returning `true` if the solid is valid.
    #[must_use]
    pub fn execute(&self, store: &SolidStore) -> bool {
        self.check(store).is_ok()
    }

    /// Runs the validation, reporting the first failed check.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::CountMismatch`, `TopologyError::EulerViolation`
    /// or `TopologyError::InvalidTopology` for structural defects, and
    /// `GeometryError::NonUniformEdges`, `GeometryError::NonPlanarFace` or
    /// `GeometryError::IrregularFace` for geometric ones.
    pub fn check(&self, store: &SolidStore) -> Result<()> {
        let solid = store.solid(self.solid)?;

        if let Some(kind) = solid.kind {
            solid.check_counts(kind.counts())?;
        }
        solid.check_euler()?;

        let declared: BTreeSet<Edge> = solid.edges.iter().copied().collect();
        let bounding: BTreeSet<Edge> = EdgesFromFaces::new(&solid.faces)
            .execute()
            .into_iter()
            .collect();
        if let Some(edge) = declared.difference(&bounding).next() {
            return Err(TopologyError::InvalidTopology(format!(
                "edge ({}, {}) bounds no face",
                edge.start(),
                edge.end()
            ))
            .into());
        }
        if let Some(edge) = bounding.difference(&declared).next() {
            return Err(TopologyError::InvalidTopology(format!(
                "face boundary ({}, {}) is missing from the edge list",
                edge.start(),
                edge.end()
            ))
            .into());
        }

        let lengths = EdgeLengths::from_lengths(&solid.edge_lengths()?)?;
        if lengths.coefficient_of_variation > self.tolerances.uniformity {
            return Err(GeometryError::NonUniformEdges {
                variation: lengths.coefficient_of_variation,
                limit: self.tolerances.uniformity,
            }
            .into());
        }

        let face_bound = self.tolerances.coincidence * lengths.mean;
        for (index, face) in solid.faces.iter().enumerate() {
            let normal = face.normal(&solid.vertices)?.ok_or_else(|| {
                GeometryError::Degenerate(format!("face {index} has no area"))
            })?;
            let origin = face.centroid(&solid.vertices)?;
            let points = face.points(&solid.vertices)?;
            for point in &points {
                let deviation = signed_distance_to_plane(point, &origin, &normal).abs();
                if deviation > face_bound {
                    return Err(GeometryError::NonPlanarFace {
                        face: index,
                        deviation,
                    }
                    .into());
                }
            }

            let radii = points.iter().map(|p| (p - origin).norm());
            let (lo, hi) = radii.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r), hi.max(r))
            });
            if hi - lo > face_bound {
                return Err(GeometryError::IrregularFace {
                    face: index,
                    spread: hi - lo,
                }
                .into());
            }
        }

        Ok(())
    }
}
