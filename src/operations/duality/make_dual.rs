use tracing::{debug, instrument, warn};

use crate::error::{Result, TopologyError};
use crate::math::{order_polygon_vertices, Point3};
use crate::operations::derivation::{EdgesFromFaces, FaceAdjacencyEdges, OrientFaces};
use crate::topology::{DualPair, Face, PlatonicKind, SolidData, SolidId, SolidStore};

/// Builds the dual of a solid by the face-centroid construction.
///
/// 1. Dual vertex `i` is the centroid of primal face `i`.
/// 2. For every primal vertex, the primal faces containing it form one dual
///    face. Every primal vertex must lie on the same number of faces.
/// 3. Each dual face is put into boundary order by angular sort around its
///    centroid, then wound outward.
/// 4. Dual edges are derived from the dual faces and must coincide with the
///    pairs of primal faces sharing an edge.
///
/// A primal tagged with a regular kind must also have that kind's number of
/// faces around every vertex.
///
/// The dual of a solid centered at the origin lies inside it; for the
/// tetrahedron this is the inward dual (see
/// [`MakeOutwardTetrahedronDual`](super::MakeOutwardTetrahedronDual) for
/// the enclosing one).
pub struct MakeDual {
    solid: SolidId,
}

impl MakeDual {
    /// Creates a new `MakeDual` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the operation, inserting the dual and returning its ID.
    ///
    /// # Errors
    ///
    /// See [`execute_pair`](Self::execute_pair).
    pub fn execute(&self, store: &mut SolidStore) -> Result<SolidId> {
        Ok(self.execute_pair(store)?.dual)
    }

    /// Executes the operation, returning the primal and its new dual.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store,
    /// `TopologyError::IrregularVertex` if primal vertices lie on differing
    /// numbers of faces (or on a number other than the tagged kind's), and `TopologyError::CountMismatch` if the dual's
    /// counts do not mirror the primal's.
    #[instrument(skip(self, store))]
    pub fn execute_pair(&self, store: &mut SolidStore) -> Result<DualPair> {
        let dual = build_dual(store.solid(self.solid)?)?;
        let id = store.add_solid(dual);
        Ok(DualPair {
            primal: self.solid,
            dual: id,
        })
    }
}

fn build_dual(primal: &SolidData) -> Result<SolidData> {
    let vertices = primal
        .faces
        .iter()
        .map(|face| face.centroid(&primal.vertices))
        .collect::<Result<Vec<Point3>>>()?;

    let incidence = vertex_face_incidence(primal)?;
    let degree = regular_degree(&incidence, primal.kind.map(PlatonicKind::vertex_degree))?;

    let faces = incidence
        .iter()
        .map(|around| -> Result<Face> { Face::new(order_polygon_vertices(around, &vertices)?) })
        .collect::<Result<Vec<_>>>()?;
    let faces = OrientFaces::new(&vertices, &faces).execute()?;

    let edges = EdgesFromFaces::new(&faces).execute();
    let shared = FaceAdjacencyEdges::new(&primal.faces).execute()?;
    if edges != shared {
        return Err(TopologyError::InvalidTopology(format!(
            "dual faces give {} edges but {} primal face pairs share an edge",
            edges.len(),
            shared.len()
        ))
        .into());
    }

    let dual = SolidData::new(vertices, edges, faces).with_kind(primal.kind.map(PlatonicKind::dual));
    dual.check_counts(primal.counts().dual())?;
    dual.check_euler()?;

    debug!(
        face_sides = degree,
        counts = ?dual.counts(),
        "constructed dual"
    );
    Ok(dual)
}

/// For every vertex, the indices of the faces containing it, ascending.
fn vertex_face_incidence(solid: &SolidData) -> Result<Vec<Vec<usize>>> {
    let mut incidence = vec![Vec::new(); solid.vertices.len()];
    for (face_index, face) in solid.faces.iter().enumerate() {
        for &v in face.vertices() {
            incidence
                .get_mut(v)
                .ok_or_else(|| {
                    TopologyError::InvalidTopology(format!("face {face_index} references vertex {v}"))
                })?
                .push(face_index);
        }
    }
    Ok(incidence)
}

/// The common number of faces around every vertex. With `known` set, that
/// number must equal it.
fn regular_degree(incidence: &[Vec<usize>], known: Option<usize>) -> Result<usize> {
    let expected = known.unwrap_or_else(|| incidence.first().map_or(0, Vec::len));
    if expected < 3 {
        return Err(TopologyError::InvalidTopology(format!(
            "vertices lie on {expected} faces, at least 3 are needed"
        ))
        .into());
    }
    if let Some((vertex, around)) = incidence
        .iter()
        .enumerate()
        .find(|(_, around)| around.len() != expected)
    {
        warn!(vertex, expected, actual = around.len(), "irregular vertex");
        return Err(TopologyError::IrregularVertex {
            vertex,
            expected,
            actual: around.len(),
        }
        .into());
    }
    Ok(expected)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlatonError;
    use crate::operations::creation::{MakePlatonic, MakePolyhedron};
    use approx::assert_relative_eq;

    #[test]
    fn cube_dual_is_unit_octahedron() {
        let mut store = SolidStore::new();
        let cube = MakePlatonic::new(PlatonicKind::Cube)
            .execute(&mut store)
            .unwrap();
        let pair = MakeDual::new(cube).execute_pair(&mut store).unwrap();
        assert_eq!(pair.primal, cube);

        let octa = store.solid(pair.dual).unwrap();
        assert_eq!(octa.kind, Some(PlatonicKind::Octahedron));
        assert_eq!(octa.counts(), PlatonicKind::Octahedron.counts());

        let expected = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        for target in expected {
            assert!(
                octa.vertices.iter().any(|v| (v - target).norm() < 1e-12),
                "missing centroid {target}"
            );
        }
    }

    #[test]
    fn dual_vertices_are_index_aligned_centroids() {
        let mut store = SolidStore::new();
        let icosa = MakePlatonic::new(PlatonicKind::Icosahedron)
            .execute(&mut store)
            .unwrap();
        let dodeca = MakeDual::new(icosa).execute(&mut store).unwrap();

        let primal = store.solid(icosa).unwrap();
        let dual = store.solid(dodeca).unwrap();
        for (face, vertex) in primal.faces.iter().zip(&dual.vertices) {
            let c = face.centroid(&primal.vertices).unwrap();
            assert!((c - vertex).norm() < 1e-12);
        }
    }

    #[test]
    fn icosahedron_dual_pentagons_are_ordered() {
        let mut store = SolidStore::new();
        let icosa = MakePlatonic::new(PlatonicKind::Icosahedron)
            .execute(&mut store)
            .unwrap();
        let dodeca = MakeDual::new(icosa).execute(&mut store).unwrap();
        let solid = store.solid(dodeca).unwrap();

        assert_eq!(solid.counts(), PlatonicKind::Dodecahedron.counts());
        let lengths = solid.edge_lengths().unwrap();
        for length in &lengths {
            assert_relative_eq!(*length, lengths[0], epsilon = 1e-9);
        }
        for face in &solid.faces {
            assert_eq!(face.len(), 5);
            // Consecutive boundary vertices are edges, not diagonals.
            for edge in face.boundary_edges() {
                assert!(solid.edges.contains(&edge));
            }
        }
    }

    #[test]
    fn every_kind_dualises() {
        let mut store = SolidStore::new();
        for kind in PlatonicKind::ALL {
            let primal = MakePlatonic::new(kind).execute(&mut store).unwrap();
            let dual = MakeDual::new(primal).execute(&mut store).unwrap();
            let a = store.solid(primal).unwrap().counts();
            let b = store.solid(dual).unwrap().counts();
            assert_eq!(b.vertices, a.faces, "{kind}");
            assert_eq!(b.faces, a.vertices, "{kind}");
            assert_eq!(b.edges, a.edges, "{kind}");
            assert_eq!(store.solid(dual).unwrap().kind, Some(kind.dual()));
        }
    }

    #[test]
    fn tetrahedron_inward_dual_is_a_third() {
        let mut store = SolidStore::new();
        let tetra = MakePlatonic::new(PlatonicKind::Tetrahedron)
            .execute(&mut store)
            .unwrap();
        let dual = MakeDual::new(tetra).execute(&mut store).unwrap();
        let original = store.solid(tetra).unwrap().edge_lengths().unwrap()[0];
        for length in store.solid(dual).unwrap().edge_lengths().unwrap() {
            assert_relative_eq!(length / original, 1.0 / 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn irregular_solid_is_rejected() {
        // Triangular bipyramid: apexes lie on 3 faces, equator vertices on 4.
        let vertices = vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-0.5, 0.866, 0.0),
            Point3::new(-0.5, -0.866, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        let faces = vec![
            vec![0, 1, 3],
            vec![1, 2, 3],
            vec![2, 0, 3],
            vec![1, 0, 4],
            vec![2, 1, 4],
            vec![0, 2, 4],
        ];
        let mut store = SolidStore::new();
        let id = MakePolyhedron::new(vertices, faces)
            .execute(&mut store)
            .unwrap();
        assert!(matches!(
            MakeDual::new(id).execute(&mut store),
            Err(PlatonError::Topology(TopologyError::IrregularVertex { .. }))
        ));
    }

    #[test]
    fn mislabelled_kind_is_rejected() {
        let mut store = SolidStore::new();
        let octa = MakePlatonic::new(PlatonicKind::Octahedron)
            .execute(&mut store)
            .unwrap();
        let relabelled = store
            .solid(octa)
            .unwrap()
            .clone()
            .with_kind(Some(PlatonicKind::Cube));
        let id = store.add_solid(relabelled);
        assert!(matches!(
            MakeDual::new(id).execute(&mut store),
            Err(PlatonError::Topology(TopologyError::IrregularVertex {
                vertex: 0,
                expected: 3,
                actual: 4,
            }))
        ));
    }

    #[test]
    fn degree_follows_known_kind() {
        let incidence = vec![vec![0, 1, 2, 3]; 6];
        assert_eq!(regular_degree(&incidence, None).unwrap(), 4);
        assert_eq!(regular_degree(&incidence, Some(4)).unwrap(), 4);
        assert!(matches!(
            regular_degree(&incidence, Some(5)),
            Err(PlatonError::Topology(TopologyError::IrregularVertex {
                expected: 5,
                actual: 4,
                ..
            }))
        ));
        assert!(regular_degree(&vec![vec![0, 1]; 4], None).is_err());
    }

    #[test]
    fn missing_solid() {
        let mut store = SolidStore::new();
        let id = MakePlatonic::new(PlatonicKind::Cube)
            .execute(&mut store)
            .unwrap();
        store.remove_solid(id);
        assert!(MakeDual::new(id).execute(&mut store).is_err());
    }
}
