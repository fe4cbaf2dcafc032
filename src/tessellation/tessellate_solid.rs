use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::topology::{SolidId, SolidStore};

use super::{index, TriangleMesh};

/// Tessellates all faces of a solid into a combined triangle mesh.
///
/// Faces are convex and planar, so each is split into a triangle fan from
/// its first vertex. Vertices are duplicated per face and carry the face
/// normal, which gives flat shading.
pub struct TessellateSolid {
    solid: SolidId,
}

impl TessellateSolid {
    /// Creates a new `TessellateSolid` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing, a face has no area, or the
    /// mesh outgrows `u32` indices.
    pub fn execute(&self, store: &SolidStore) -> Result<TriangleMesh> {
        let solid = store.solid(self.solid)?;

        let mut combined = TriangleMesh::default();
        for (face_index, face) in solid.faces.iter().enumerate() {
            let normal = face.normal(&solid.vertices)?.ok_or_else(|| {
                GeometryError::Degenerate(format!("face {face_index} has no area"))
            })?;
            let points = face.points(&solid.vertices)?;

            let mut mesh = TriangleMesh {
                normals: vec![normal; points.len()],
                vertices: points,
                indices: Vec::new(),
            };
            for k in 1..mesh.vertices.len() - 1 {
                mesh.indices.push([0, index(k)?, index(k + 1)?]);
            }
            combined.merge(&mesh)?;
        }

        debug!(
            faces = solid.faces.len(),
            triangles = combined.triangle_count(),
            "tessellated solid"
        );
        Ok(combined)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakePlatonic;
    use crate::topology::PlatonicKind;
    use approx::assert_relative_eq;

    #[test]
    fn triangle_counts() {
        let mut store = SolidStore::new();
        for kind in PlatonicKind::ALL {
            let id = MakePlatonic::new(kind).execute(&mut store).unwrap();
            let mesh = TessellateSolid::new(id).execute(&store).unwrap();
            let counts = kind.counts();
            assert_eq!(mesh.triangle_count(), counts.faces * (kind.face_sides() - 2));
            assert_eq!(mesh.vertices.len(), counts.faces * kind.face_sides());
            assert_eq!(mesh.normals.len(), mesh.vertices.len());
        }
    }

    #[test]
    fn triangles_face_outward() {
        let mut store = SolidStore::new();
        let id = MakePlatonic::new(PlatonicKind::Dodecahedron)
            .execute(&mut store)
            .unwrap();
        let mesh = TessellateSolid::new(id).execute(&store).unwrap();
        for &[a, b, c] in &mesh.indices {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let pa = mesh.vertices[a];
            let winding = (mesh.vertices[b] - pa).cross(&(mesh.vertices[c] - pa));
            assert!(winding.dot(&pa.coords) > 0.0);
            assert!(winding.normalize().dot(&mesh.normals[a]) > 1.0 - 1e-9);
        }
    }

    #[test]
    fn normals_are_unit_length() {
        let mut store = SolidStore::new();
        let id = MakePlatonic::new(PlatonicKind::Octahedron)
            .execute(&mut store)
            .unwrap();
        let mesh = TessellateSolid::new(id).execute(&store).unwrap();
        for normal in &mesh.normals {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
        }
    }
}
