mod tessellate_edges;
mod tessellate_solid;

pub use tessellate_edges::TessellateEdges;
pub use tessellate_solid::TessellateSolid;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};

/// A polyline, handed to a renderer as a line strip.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

/// A flat-shaded triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals, one per vertex.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a counter-clockwise triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends another mesh, offsetting its indices.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the combined mesh has more
    /// vertices than `u32` indices can address.
    pub fn merge(&mut self, other: &TriangleMesh) -> Result<()> {
        let offset = index(self.vertices.len())?;
        index(self.vertices.len() + other.vertices.len())?;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
        );
        Ok(())
    }
}

/// Converts a vertex position into a mesh index.
fn index(i: usize) -> Result<u32> {
    u32::try_from(i)
        .map_err(|_| OperationError::Failed(format!("mesh index {i} exceeds u32 range")).into())
}
