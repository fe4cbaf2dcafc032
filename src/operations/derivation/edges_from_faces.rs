use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, TopologyError};
use crate::topology::{Edge, Face};

/// Derives the unique edge set of a solid from its faces.
///
/// Every consecutive vertex pair of every face boundary (wrapping around)
/// becomes an edge; edges shared by two faces are reported once.
pub struct EdgesFromFaces<'a> {
    faces: &'a [Face],
}

impl<'a> EdgesFromFaces<'a> {
    /// Creates a new `EdgesFromFaces` derivation.
    #[must_use]
    pub fn new(faces: &'a [Face]) -> Self {
        Self { faces }
    }

    /// Executes the derivation, returning edges sorted by `(start, end)`.
    #[must_use]
    pub fn execute(&self) -> Vec<Edge> {
        let edges: BTreeSet<Edge> = self.faces.iter().flat_map(Face::boundary_edges).collect();
        edges.into_iter().collect()
    }

    /// Like [`execute`](Self::execute), but also fails if any edge borders
    /// a number of faces other than two.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` naming the first edge that
    /// is not shared by exactly two faces.
    pub fn execute_closed(&self) -> Result<Vec<Edge>> {
        let mut uses = BTreeMap::<Edge, usize>::new();
        for edge in self.faces.iter().flat_map(Face::boundary_edges) {
            *uses.entry(edge).or_default() += 1;
        }
        if let Some((edge, count)) = uses.iter().find(|(_, count)| **count != 2) {
            return Err(TopologyError::InvalidTopology(format!(
                "edge ({}, {}) borders {count} faces, expected 2",
                edge.start(),
                edge.end()
            ))
            .into());
        }
        Ok(uses.into_keys().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tetrahedron_faces() -> Vec<Face> {
        vec![
            Face::new(vec![0, 1, 2]).unwrap(),
            Face::new(vec![0, 1, 3]).unwrap(),
            Face::new(vec![0, 2, 3]).unwrap(),
            Face::new(vec![1, 2, 3]).unwrap(),
        ]
    }

    #[test]
    fn shared_edges_are_not_duplicated() {
        let edges = EdgesFromFaces::new(&tetrahedron_faces()).execute();
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], Edge::new(0, 1).unwrap());
    }

    #[test]
    fn closed_surface_passes() {
        let faces = tetrahedron_faces();
        assert_eq!(EdgesFromFaces::new(&faces).execute_closed().unwrap().len(), 6);
    }

    #[test]
    fn open_surface_is_rejected() {
        let all = tetrahedron_faces();
        let faces = &all[..3];
        assert!(EdgesFromFaces::new(faces).execute_closed().is_err());
        assert_eq!(EdgesFromFaces::new(faces).execute().len(), 6);
    }
}
