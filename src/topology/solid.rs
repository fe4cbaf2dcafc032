use tracing::warn;

use crate::error::{Result, TopologyError};
use crate::math::Point3;

use super::edge::Edge;
use super::face::Face;
use super::kind::{Counts, PlatonicKind};

slotmap::new_key_type! {
    /// Unique identifier for a solid in the solid store.
    pub struct SolidId;
}

/// A polyhedron: vertex positions plus the edges and faces over them.
///
/// Edges and faces refer to vertices by their index in `vertices`.
#[derive(Debug, Clone, Default)]
pub struct SolidData {
    /// The regular solid this polyhedron realises, if known.
    pub kind: Option<PlatonicKind>,
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Unique unordered edges.
    pub edges: Vec<Edge>,
    /// Boundary loops, wound counter-clockwise seen from outside.
    pub faces: Vec<Face>,
}

impl SolidData {
    /// Creates a solid of unknown kind.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, edges: Vec<Edge>, faces: Vec<Face>) -> Self {
        Self {
            kind: None,
            vertices,
            edges,
            faces,
        }
    }

    /// Tags the solid with its regular kind.
    #[must_use]
    pub fn with_kind(mut self, kind: Option<PlatonicKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Vertex, edge and face counts.
    #[must_use]
    pub fn counts(&self) -> Counts {
        Counts::new(self.vertices.len(), self.edges.len(), self.faces.len())
    }

    /// `V - E + F`.
    #[must_use]
    pub fn euler_characteristic(&self) -> i64 {
        self.counts().euler_characteristic()
    }

    /// Euclidean length of an edge.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if the edge references a
    /// vertex that does not exist.
    pub fn edge_length(&self, edge: &Edge) -> Result<f64> {
        let a = self.vertex(edge.start())?;
        let b = self.vertex(edge.end())?;
        Ok((b - a).norm())
    }

    /// Lengths of all edges, in edge order.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge references a missing vertex.
    pub fn edge_lengths(&self) -> Result<Vec<f64>> {
        self.edges.iter().map(|e| self.edge_length(e)).collect()
    }

    /// Position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if the index is out of range.
    pub fn vertex(&self, index: usize) -> Result<Point3> {
        self.vertices.get(index).copied().ok_or_else(|| {
            TopologyError::InvalidTopology(format!("vertex index {index} out of range")).into()
        })
    }

    /// Fails unless the solid has exactly the expected counts.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::CountMismatch` naming the first entity whose
    /// count differs.
    pub fn check_counts(&self, expected: Counts) -> Result<()> {
        let actual = self.counts();
        for (entity, want, got) in [
            ("vertex", expected.vertices, actual.vertices),
            ("edge", expected.edges, actual.edges),
            ("face", expected.faces, actual.faces),
        ] {
            if want != got {
                warn!(entity, expected = want, actual = got, "solid count mismatch");
                return Err(TopologyError::CountMismatch {
                    entity,
                    expected: want,
                    actual: got,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Fails unless `V - E + F = 2`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EulerViolation` with the offending counts.
    pub fn check_euler(&self) -> Result<()> {
        let counts = self.counts();
        if counts.euler_characteristic() == 2 {
            return Ok(());
        }
        warn!(
            vertices = counts.vertices,
            edges = counts.edges,
            faces = counts.faces,
            "Euler's formula violated"
        );
        Err(TopologyError::EulerViolation {
            vertices: counts.vertices,
            edges: counts.edges,
            faces: counts.faces,
        }
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlatonError;

    fn triangle_pair() -> SolidData {
        // Two triangles glued back to back: V=3, E=3, F=2.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let faces = vec![
            Face::new(vec![0, 1, 2]).unwrap(),
            Face::new(vec![0, 2, 1]).unwrap(),
        ];
        let edges = vec![
            Edge::new(0, 1).unwrap(),
            Edge::new(1, 2).unwrap(),
            Edge::new(0, 2).unwrap(),
        ];
        SolidData::new(vertices, edges, faces)
    }

    #[test]
    fn counts_and_euler() {
        let solid = triangle_pair();
        assert_eq!(solid.counts(), Counts::new(3, 3, 2));
        assert_eq!(solid.euler_characteristic(), 2);
        assert!(solid.check_euler().is_ok());
    }

    #[test]
    fn count_mismatch_reports_expected_and_actual() {
        let solid = triangle_pair();
        let err = solid.check_counts(Counts::new(3, 4, 2)).unwrap_err();
        assert!(matches!(
            err,
            PlatonError::Topology(TopologyError::CountMismatch {
                entity: "edge",
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn euler_violation_is_reported() {
        let mut solid = triangle_pair();
        solid.faces.pop();
        assert!(matches!(
            solid.check_euler(),
            Err(PlatonError::Topology(TopologyError::EulerViolation { faces: 1, .. }))
        ));
    }

    #[test]
    fn edge_lengths() {
        let solid = triangle_pair();
        let lengths = solid.edge_lengths().unwrap();
        assert!((lengths[0] - 1.0).abs() < 1e-12);
        assert!((lengths[1] - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!(solid.vertex(9).is_err());
    }
}
