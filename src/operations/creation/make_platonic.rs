use tracing::{debug, instrument, warn};

use crate::error::{OperationError, Result, TopologyError};
use crate::math::Point3;
use crate::operations::derivation::{EdgesFromDistance, FindFaceCycles, OrientFaces};
use crate::operations::Tolerances;
use crate::topology::{Adjacency, PlatonicKind, SolidData, SolidId, SolidStore};

use super::vertices::platonic_vertices;

/// Creates one of the five regular solids.
///
/// The vertices come from closed-form coordinates. Edges are recovered as
/// the vertex pairs at the solid's characteristic edge length, faces as
/// the validated cycles of the resulting adjacency graph, and every face is
/// wound outward. Any vertex, edge or face count that differs from the
/// solid's known counts aborts the construction.
pub struct MakePlatonic {
    kind: PlatonicKind,
    scale: f64,
    tolerances: Tolerances,
}

impl MakePlatonic {
    /// Creates a new `MakePlatonic` operation for the canonical unit-scale solid.
    #[must_use]
    pub fn new(kind: PlatonicKind) -> Self {
        Self {
            kind,
            scale: 1.0,
            tolerances: Tolerances::default(),
        }
    }

    /// Scales every vertex (and the edge length) by `scale`.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets custom tolerances, expressed at unit scale.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the operation, creating the solid in the store.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the scale is not a positive
    /// finite number, and `TopologyError::CountMismatch`,
    /// `TopologyError::IrregularVertex` or `TopologyError::EulerViolation`
    /// if the derived topology does not match the solid.
    #[instrument(skip(self, store), fields(kind = %self.kind, scale = self.scale))]
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let solid = self.build()?;
        Ok(store.add_solid(solid))
    }

    fn build(&self) -> Result<SolidData> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "scale must be positive and finite, got {}",
                self.scale
            ))
            .into());
        }
        let counts = self.kind.counts();
        let tolerances = self.tolerances.scaled(self.scale);

        let vertices: Vec<Point3> = platonic_vertices(self.kind)
            .into_iter()
            .map(|p| p * self.scale)
            .collect();

        let edges = EdgesFromDistance::new(&vertices, self.kind.edge_length() * self.scale)
            .with_tolerances(tolerances)
            .execute()?;
        if edges.len() != counts.edges {
            warn!(
                expected = counts.edges,
                actual = edges.len(),
                "edge-length window produced the wrong number of edges"
            );
            return Err(TopologyError::CountMismatch {
                entity: "edge",
                expected: counts.edges,
                actual: edges.len(),
            }
            .into());
        }

        let adjacency = Adjacency::from_edges(vertices.len(), &edges)?;
        let degree = self.kind.vertex_degree();
        if let Some(vertex) = (0..vertices.len()).find(|&v| adjacency.degree(v) != degree) {
            let actual = adjacency.degree(vertex);
            warn!(vertex, expected = degree, actual, "vertex has the wrong number of edges");
            return Err(TopologyError::IrregularVertex {
                vertex,
                expected: degree,
                actual,
            }
            .into());
        }
        let faces = FindFaceCycles::new(&vertices, &adjacency, self.kind.face_sides())
            .with_tolerances(tolerances)
            .with_expected_count(counts.faces)
            .execute()?;
        let faces = OrientFaces::new(&vertices, &faces).execute()?;

        let solid = SolidData::new(vertices, edges, faces).with_kind(Some(self.kind));
        solid.check_counts(counts)?;
        solid.check_euler()?;

        debug!(
            vertices = counts.vertices,
            edges = counts.edges,
            faces = counts.faces,
            "created regular solid"
        );
        Ok(solid)
    }
}
