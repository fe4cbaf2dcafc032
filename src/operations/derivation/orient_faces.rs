use crate::error::{GeometryError, Result};
use crate::math::{centroid, Point3};
use crate::topology::Face;

/// Winds every face of a convex solid counter-clockwise as seen from outside.
///
/// A face whose normal points towards the solid's center is reversed,
/// keeping its first vertex in place.
pub struct OrientFaces<'a> {
    vertices: &'a [Point3],
    faces: &'a [Face],
}

impl<'a> OrientFaces<'a> {
    /// Creates a new `OrientFaces` operation.
    #[must_use]
    pub fn new(vertices: &'a [Point3], faces: &'a [Face]) -> Self {
        Self { vertices, faces }
    }

    /// Executes the operation, returning the re-wound faces in input order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if a face has no area or the
    /// vertex list is empty, and an error if a face index is out of range.
    pub fn execute(&self) -> Result<Vec<Face>> {
        let center = centroid(self.vertices)
            .ok_or_else(|| GeometryError::Degenerate("solid has no vertices".into()))?;

        self.faces
            .iter()
            .enumerate()
            .map(|(index, face)| -> Result<Face> {
                let normal = face.normal(self.vertices)?.ok_or_else(|| {
                    GeometryError::Degenerate(format!("face {index} has no area"))
                })?;
                let outward = face.centroid(self.vertices)? - center;
                if normal.dot(&outward) < 0.0 {
                    Ok(face.reversed())
                } else {
                    Ok(face.clone())
                }
            })
            .collect()
    }
}
