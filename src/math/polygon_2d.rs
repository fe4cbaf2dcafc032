use super::{Point2, Vector2};
use crate::error::{OperationError, Result};

/// Interior angle of a regular polygon with `sides` sides, in degrees.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn interior_angle_degrees(sides: usize) -> f64 {
    (sides as f64 - 2.0) * 180.0 / sides as f64
}

/// Computes the signed area of a planar polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Lays out a regular polygon with one vertex at the origin.
///
/// Walks `sides` edges of length `edge_length`, starting in the direction
/// `heading` (radians) and turning left by the exterior angle after each
/// edge. The polygon lies counter-clockwise on the left of its first edge,
/// so its interior angle at the origin spans `heading` to
/// `heading + interior angle`.
///
/// Returns the `sides` distinct vertices, starting with the origin.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `sides < 3` or the edge length
/// is not positive.
pub fn regular_polygon_at_vertex(sides: usize, edge_length: f64, heading: f64) -> Result<Vec<Point2>> {
    if sides < 3 {
        return Err(OperationError::InvalidInput(format!(
            "a polygon needs at least 3 sides, got {sides}"
        ))
        .into());
    }
    if edge_length.is_nan() || edge_length <= 0.0 {
        return Err(
            OperationError::InvalidInput("polygon edge length must be positive".into()).into(),
        );
    }

    let exterior = (180.0 - interior_angle_degrees(sides)).to_radians();
    let mut vertices = Vec::with_capacity(sides);
    let mut current = Point2::origin();
    let mut angle = heading;

    vertices.push(current);
    for _ in 1..sides {
        current += Vector2::new(angle.cos(), angle.sin()) * edge_length;
        vertices.push(current);
        angle += exterior;
    }
    Ok(vertices)
}
