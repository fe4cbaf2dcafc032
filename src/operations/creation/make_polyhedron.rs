use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::operations::derivation::EdgesFromFaces;
use crate::topology::{Face, PlatonicKind, SolidData, SolidId, SolidStore};

/// Creates a solid from explicit vertex and face lists.
///
/// Edges are derived from the face boundaries. The result must be a closed
/// surface (every edge shared by exactly two faces) satisfying Euler's
/// formula, and must match the counts of `kind` when one is given.
pub struct MakePolyhedron {
    vertices: Vec<Point3>,
    faces: Vec<Vec<usize>>,
    kind: Option<PlatonicKind>,
}

impl MakePolyhedron {
    /// Creates a new `MakePolyhedron` operation.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
        Self {
            vertices,
            faces,
            kind: None,
        }
    }

    /// Declares which regular solid the input describes.
    #[must_use]
    pub fn with_kind(mut self, kind: PlatonicKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Executes the operation, creating the solid in the store.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if a face references a missing
    /// vertex, and a topology error if a face is malformed, the surface is
    /// not closed, Euler's formula fails or the declared kind's counts differ.
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        let n = self.vertices.len();
        if let Some(bad) = self.faces.iter().flatten().find(|&&i| i >= n) {
            return Err(OperationError::InvalidInput(format!(
                "face references vertex {bad}, but only {n} vertices exist"
            ))
            .into());
        }

        let faces = self
            .faces
            .iter()
            .map(|f| Face::new(f.clone()))
            .collect::<Result<Vec<_>>>()?;
        let edges = EdgesFromFaces::new(&faces).execute_closed()?;

        let solid = SolidData::new(self.vertices.clone(), edges, faces).with_kind(self.kind);
        if let Some(kind) = self.kind {
            solid.check_counts(kind.counts())?;
        }
        solid.check_euler()?;

        debug!(counts = ?solid.counts(), "created polyhedron from explicit faces");
        Ok(store.add_solid(solid))
    }
}
