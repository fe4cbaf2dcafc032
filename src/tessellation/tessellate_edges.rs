use crate::error::Result;
use crate::topology::{SolidId, SolidStore};

use super::Polyline;

/// Produces one two-point polyline per edge of a solid, for wireframes.
pub struct TessellateEdges {
    solid: SolidId,
}

impl TessellateEdges {
    /// Creates a new `TessellateEdges` operation.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid is missing or an edge references a
    /// missing vertex.
    pub fn execute(&self, store: &SolidStore) -> Result<Vec<Polyline>> {
        let solid = store.solid(self.solid)?;
        solid
            .edges
            .iter()
            .map(|edge| -> Result<Polyline> {
                Ok(Polyline {
                    points: vec![solid.vertex(edge.start())?, solid.vertex(edge.end())?],
                })
            })
            .collect()
    }
}
