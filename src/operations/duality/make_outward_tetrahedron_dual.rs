use tracing::{debug, instrument};

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};
use crate::operations::derivation::{EdgesFromFaces, OrientFaces};
use crate::topology::{DualPair, Face, PlatonicKind, SolidData, SolidId, SolidStore};

/// Builds the tetrahedron whose face centroids are the given tetrahedron's
/// vertices.
///
/// With `S` the sum of the four vertices, vertex `i` of the result is
/// `S - 3 v_i`, and face `i` is the triangle opposite it. The centroid of
/// that face is `v_i`, so the input is the (inward) dual of the result. The
/// result's edges are three times as long as the input's.
pub struct MakeOutwardTetrahedronDual {
    solid: SolidId,
}

impl MakeOutwardTetrahedronDual {
    /// Creates a new `MakeOutwardTetrahedronDual` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the operation, inserting the enclosing tetrahedron and
    /// returning its ID.
    ///
    /// # Errors
    ///
    /// See [`execute_pair`](Self::execute_pair).
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        Ok(self.execute_pair(store)?.dual)
    }

    /// Executes the operation, returning the input and the enclosing
    /// tetrahedron.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing, and
    /// `OperationError::InvalidInput` if it does not have the vertex and
    /// face counts of a tetrahedron.
    #[instrument(skip(self, store))]
    pub fn execute_pair(&self, store: &mut SolidStore) -> Result<DualPair> {
        let solid = store.solid(self.solid)?;
        let counts = solid.counts();
        let tetra = PlatonicKind::Tetrahedron.counts();
        if counts.vertices != tetra.vertices || counts.faces != tetra.faces {
            return Err(OperationError::InvalidInput(format!(
                "outward dual needs a tetrahedron, got {} vertices and {} faces",
                counts.vertices, counts.faces
            ))
            .into());
        }

        let sum = solid
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);
        let vertices: Vec<Point3> = solid
            .vertices
            .iter()
            .map(|v| Point3::from(sum - v.coords * 3.0))
            .collect();

        let faces = (0..vertices.len())
            .map(|opposite| {
                Face::new(
                    (0..vertices.len())
                        .filter(|&j| j != opposite)
                        .collect(),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let faces = OrientFaces::new(&vertices, &faces).execute()?;
        let edges = EdgesFromFaces::new(&faces).execute();

        let dual = SolidData::new(vertices, edges, faces).with_kind(solid.kind);
        dual.check_counts(tetra)?;
        dual.check_euler()?;
        debug!(sum = ?sum, "constructed outward tetrahedron dual");

        let id = store.add_solid(dual);
        Ok(DualPair {
            primal: self.solid,
            dual: id,
        })
    }
}
