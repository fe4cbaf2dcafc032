use std::cmp::Ordering;

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::{interior_angle_degrees, regular_polygon_at_vertex};
use crate::math::Point2;
use crate::topology::PlatonicKind;

/// How regular polygons fit together around a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexClass {
    /// Angle sum below 360°: the polygons fold up into a convex corner.
    Convex(PlatonicKind),
    /// Angle sum of exactly 360°: the polygons tile the plane.
    Flat,
    /// Angle sum above 360°: the polygons cannot meet without overlapping.
    Excess,
}

/// `count` regular polygons with `sides` sides meeting at one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexConfiguration {
    sides: usize,
    count: usize,
}

impl VertexConfiguration {
    /// Creates a configuration.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `sides < 3` or `count < 3`.
    pub fn new(sides: usize, count: usize) -> Result<Self> {
        if sides < 3 || count < 3 {
            return Err(OperationError::InvalidInput(format!(
                "need at least 3 polygons of at least 3 sides, got {count} of {sides}"
            ))
            .into());
        }
        Ok(Self { sides, count })
    }

    #[must_use]
    pub fn sides(&self) -> usize {
        self.sides
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Interior angle of one polygon, in degrees.
    #[must_use]
    pub fn interior_angle(&self) -> f64 {
        interior_angle_degrees(self.sides)
    }

    /// Sum of the interior angles at the shared vertex, in degrees.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn angle_sum(&self) -> f64 {
        self.count as f64 * self.interior_angle()
    }

    /// Classifies the configuration.
    ///
    /// `count · (sides − 2) · 180 / sides` compared with 360 reduces to
    /// `count · (sides − 2)` compared with `2 · sides`, which is exact.
    /// Either product overflowing `usize` means an angle sum far above 360°.
    #[must_use]
    pub fn classify(&self) -> VertexClass {
        let lhs = self.count.checked_mul(self.sides - 2);
        let rhs = self.sides.checked_mul(2);
        let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
            return VertexClass::Excess;
        };
        match lhs.cmp(&rhs) {
            Ordering::Less => PlatonicKind::from_schlafli(self.sides, self.count)
                .map_or(VertexClass::Excess, VertexClass::Convex),
            Ordering::Equal => VertexClass::Flat,
            Ordering::Greater => VertexClass::Excess,
        }
    }

    /// Lays the polygons out flat around a shared vertex at the origin.
    ///
    /// Polygon `i` starts at heading `i` times the interior angle, so each
    /// polygon shares an edge with the next. For a convex configuration a
    /// wedge of `360° − angle_sum` is left open between the last polygon and
    /// the first.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`regular_polygon_at_vertex`].
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&self, edge_length: f64) -> Result<Vec<Vec<Point2>>> {
        let step = self.interior_angle().to_radians();
        (0..self.count)
            .map(|i| regular_polygon_at_vertex(self.sides, edge_length, i as f64 * step))
            .collect()
    }
}

/// Enumerates vertex configurations up to a bound.
///
/// Every convex configuration is one of the five regular solids; the
/// enumeration makes that visible for any bound.
pub struct VertexConfigurations {
    max_sides: usize,
    max_count: usize,
}

impl VertexConfigurations {
    /// Creates a new enumeration over `3..=max_sides` sides and
    /// `3..=max_count` polygons per vertex.
    #[must_use]
    pub fn new(max_sides: usize, max_count: usize) -> Self {
        Self {
            max_sides,
            max_count,
        }
    }

    /// Executes the enumeration, ordered by sides then count.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either bound is below 3.
    pub fn execute(&self) -> Result<Vec<(VertexConfiguration, VertexClass)>> {
        if self.max_sides < 3 || self.max_count < 3 {
            return Err(OperationError::InvalidInput(format!(
                "bounds must be at least 3, got {} sides and {} per vertex",
                self.max_sides, self.max_count
            ))
            .into());
        }
        let mut configurations = Vec::new();
        for sides in 3..=self.max_sides {
            for count in 3..=self.max_count {
                let configuration = VertexConfiguration::new(sides, count)?;
                configurations.push((configuration, configuration.classify()));
            }
        }
        Ok(configurations)
    }
}
