pub mod adjacency;
pub mod edge;
pub mod face;
pub mod kind;
pub mod solid;

pub use adjacency::Adjacency;
pub use edge::Edge;
pub use face::Face;
pub use kind::{Counts, PlatonicKind};
pub use solid::{SolidData, SolidId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all solids.
///
/// Solids are computed once and never mutated afterwards; operations that
/// derive a new solid (such as a dual) insert it alongside its parent.
#[derive(Debug, Default)]
pub struct SolidStore {
    solids: SlotMap<SolidId, SolidData>,
}

/// A solid together with its dual.
///
/// The dual's vertex `i` is the centroid of the primal's face `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualPair {
    /// The solid that was dualised.
    pub primal: SolidId,
    /// The solid built from its face centroids.
    pub dual: SolidId,
}

impl SolidStore {
    /// Creates a new, empty solid store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    /// Removes a solid, returning its data if it was present.
    pub fn remove_solid(&mut self, id: SolidId) -> Option<SolidData> {
        self.solids.remove(id)
    }

    /// Number of solids in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Returns `true` if the store holds no solids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}
