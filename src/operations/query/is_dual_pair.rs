use crate::error::Result;
use crate::operations::Tolerances;
use crate::topology::{SolidId, SolidStore};

/// Checks whether one solid is the centroid dual of another.
///
/// The pair must swap vertex and face counts, share the edge count, and the
/// dual's vertex `i` must coincide with the centroid of the primal's face `i`.
pub struct IsDualPair {
    primal: SolidId,
    dual: SolidId,
    tolerances: Tolerances,
}

impl IsDualPair {
    /// Creates a new `IsDualPair` query.
    #[must_use]
    pub fn new(primal: SolidId, dual: SolidId) -> Self {
        Self {
            primal,
            dual,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets a custom coincidence tolerance.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid is missing or a primal face
    /// references a missing vertex.
    pub fn execute(&self, store: &SolidStore) -> Result<bool> {
        let primal = store.solid(self.primal)?;
        let dual = store.solid(self.dual)?;

        if dual.counts() != primal.counts().dual() {
            return Ok(false);
        }

        for (face, vertex) in primal.faces.iter().zip(&dual.vertices) {
            let centroid = face.centroid(&primal.vertices)?;
            if (centroid - vertex).norm() > self.tolerances.coincidence {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakePlatonic;
    use crate::operations::duality::{MakeDual, MakeOutwardTetrahedronDual};
    use crate::topology::PlatonicKind;

    #[test]
    fn centroid_duals_pair_up() {
        let mut store = SolidStore::new();
        for kind in PlatonicKind::ALL {
            let solid = MakePlatonic::new(kind).execute(&mut store).unwrap();
            let pair = MakeDual::new(solid).execute_pair(&mut store).unwrap();
            assert!(IsDualPair::new(pair.primal, pair.dual).execute(&store).unwrap());
            // Swapped roles break the centroid correspondence.
            assert!(!IsDualPair::new(pair.dual, pair.primal).execute(&store).unwrap());
        }
    }

    #[test]
    fn mismatched_counts_are_not_dual() {
        let mut store = SolidStore::new();
        let cube = MakePlatonic::new(PlatonicKind::Cube)
            .execute(&mut store)
            .unwrap();
        let icosahedron = MakePlatonic::new(PlatonicKind::Icosahedron)
            .execute(&mut store)
            .unwrap();
        assert!(!IsDualPair::new(cube, icosahedron).execute(&store).unwrap());
    }

    #[test]
    fn outward_dual_is_reversed_pair() {
        let mut store = SolidStore::new();
        let tetrahedron = MakePlatonic::new(PlatonicKind::Tetrahedron)
            .execute(&mut store)
            .unwrap();
        let outward = MakeOutwardTetrahedronDual::new(tetrahedron)
            .execute(&mut store)
            .unwrap();
        // The original vertices are the centroids of the outward faces.
        assert!(IsDualPair::new(outward, tetrahedron).execute(&store).unwrap());
    }
}
