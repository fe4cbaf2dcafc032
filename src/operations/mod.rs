pub mod creation;
pub mod derivation;
pub mod duality;
pub mod query;

/// Tolerances controlling topology derivation and validation.
///
/// Absolute values are expressed in the unit scale of the canonical
/// constructions (edge lengths between roughly 1 and 3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Lower bound of the edge-length window, relative to the expected length.
    pub edge_window_min: f64,
    /// Upper bound of the edge-length window, relative to the expected length.
    pub edge_window_max: f64,
    /// Maximum absolute deviation between the edge lengths of a face candidate.
    pub polygon_edge: f64,
    /// Maximum distance of a face candidate's vertex from its plane.
    pub planarity: f64,
    /// Maximum coefficient of variation of a solid's edge lengths.
    pub uniformity: f64,
    /// Distance below which two points are considered coincident.
    pub coincidence: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            edge_window_min: 0.9,
            edge_window_max: 1.1,
            polygon_edge: 0.1,
            planarity: 0.1,
            uniformity: 1e-4,
            coincidence: 1e-6,
        }
    }
}

impl Tolerances {
    /// Scales the absolute tolerances by `factor`, for solids built at a
    /// scale other than the canonical one.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            polygon_edge: self.polygon_edge * factor,
            planarity: self.planarity * factor,
            coincidence: self.coincidence * factor,
            ..self
        }
    }
}
