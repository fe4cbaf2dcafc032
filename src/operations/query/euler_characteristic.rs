use crate::error::Result;
use crate::topology::{SolidId, SolidStore};

/// Computes `V - E + F` for a solid.
pub struct EulerCharacteristic {
    solid: SolidId,
}

impl EulerCharacteristic {
    /// Creates a new `EulerCharacteristic` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is not in the store.
    pub fn execute(&self, store: &SolidStore) -> Result<i64> {
        Ok(store.solid(self.solid)?.euler_characteristic())
    }
}
