use crate::error::Result;
use crate::topology::{Edge, Face};

/// Derives edges between faces: faces `i` and `j` are joined when their
/// vertex sets intersect in exactly two vertices, i.e. they share an edge.
///
/// Applied to a solid's faces this yields the edge set of its dual, with
/// face indices standing in for dual vertex indices.
pub struct FaceAdjacencyEdges<'a> {
    faces: &'a [Face],
}

impl<'a> FaceAdjacencyEdges<'a> {
    /// Creates a new `FaceAdjacencyEdges` derivation.
    #[must_use]
    pub fn new(faces: &'a [Face]) -> Self {
        Self { faces }
    }

    /// Executes the derivation, returning edges sorted by `(start, end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge cannot be formed.
    pub fn execute(&self) -> Result<Vec<Edge>> {
        let mut edges = Vec::new();
        for (i, a) in self.faces.iter().enumerate() {
            for (j, b) in self.faces.iter().enumerate().skip(i + 1) {
                if a.shared_vertex_count(b) == 2 {
                    edges.push(Edge::new(i, j)?);
                }
            }
        }
        Ok(edges)
    }
}
