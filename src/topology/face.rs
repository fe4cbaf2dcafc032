use crate::error::{Result, TopologyError};
use crate::math::{centroid, polygon_normal, Point3, Vector3};

use super::edge::Edge;

/// A planar polygon given as an ordered loop of vertex indices.
///
/// Consecutive indices (wrapping around) are adjacent along the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    vertices: Vec<usize>,
}

impl Face {
    /// Creates a face from a boundary loop.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if the loop has fewer than
    /// three vertices or visits a vertex twice.
    pub fn new(vertices: Vec<usize>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(TopologyError::InvalidTopology(format!(
                "face needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        let mut sorted = vertices.clone();
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(
                TopologyError::InvalidTopology(format!("face {vertices:?} repeats a vertex")).into(),
            );
        }
        Ok(Self { vertices })
    }

    /// The boundary loop.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a face has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `vertex` lies on this face.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Number of vertices shared with `other`.
    #[must_use]
    pub fn shared_vertex_count(&self, other: &Face) -> usize {
        self.vertices.iter().filter(|v| other.contains(**v)).count()
    }

    /// The boundary edges, in loop order.
    pub fn boundary_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        // Faces never repeat a vertex, so every consecutive pair is a valid edge.
        (0..n).filter_map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]).ok())
    }

    /// The same loop traversed in the opposite direction, keeping the first vertex.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len());
        vertices.push(self.vertices[0]);
        vertices.extend(self.vertices[1..].iter().rev());
        Self { vertices }
    }

    /// Resolves the face's vertex positions.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if an index is out of range.
    pub fn points(&self, vertices: &[Point3]) -> Result<Vec<Point3>> {
        self.vertices
            .iter()
            .map(|&i| -> Result<Point3> {
                vertices.get(i).copied().ok_or_else(|| {
                    TopologyError::InvalidTopology(format!("vertex index {i} out of range")).into()
                })
            })
            .collect()
    }

    /// Arithmetic mean of the face's vertices.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if an index is out of range.
    pub fn centroid(&self, vertices: &[Point3]) -> Result<Point3> {
        let points = self.points(vertices)?;
        centroid(&points)
            .ok_or_else(|| TopologyError::InvalidTopology("face has no vertices".into()).into())
    }

    /// Unit normal following the boundary winding, or `None` for a
    /// degenerate face.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if an index is out of range.
    pub fn normal(&self, vertices: &[Point3]) -> Result<Option<Vector3>> {
        Ok(polygon_normal(&self.points(vertices)?))
    }
}
