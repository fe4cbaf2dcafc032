use std::cmp::Ordering;

use super::{Point3, Vector3, TOLERANCE};
use crate::error::{Result, TopologyError};

/// Arithmetic mean of a set of points, or `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Finds a unit direction perpendicular to the given vector.
///
/// Returns the Z axis for a zero-length input.
#[must_use]
pub fn perpendicular_dir(v: &Vector3) -> Vector3 {
    let len = v.norm();
    if len < TOLERANCE {
        return Vector3::z();
    }
    let unit = v / len;
    let candidate = if unit.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let perp = unit.cross(&candidate);
    perp / perp.norm()
}

/// Unit normal of a polygon using Newell's method.
///
/// The direction follows the right-hand rule over the boundary order.
/// Returns `None` if the polygon has no area relative to its extent.
#[must_use]
pub fn polygon_normal(points: &[Point3]) -> Option<Vector3> {
    if points.len() < 3 {
        return None;
    }
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    // Newell's vector has twice the polygon's area as its length.
    let extent = points
        .iter()
        .map(|p| (p - points[0]).norm_squared())
        .fold(0.0, f64::max);
    let len = normal.norm();
    if len <= TOLERANCE * extent {
        return None;
    }
    Some(normal / len)
}

/// Signed distance from `point` to the plane through `origin` with unit `normal`.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, origin: &Point3, normal: &Vector3) -> f64 {
    (point - origin).dot(normal)
}

/// Signed distance from `point` to the plane through `a`, `b` and `c`.
///
/// Returns `None` if the three points are collinear, judged relative to the
/// lengths of `b - a` and `c - a`.
#[must_use]
pub fn signed_distance_to_plane_of(point: &Point3, a: &Point3, b: &Point3, c: &Point3) -> Option<f64> {
    let (ab, ac) = (b - a, c - a);
    let normal = ab.cross(&ac);
    let len = normal.norm();
    if len <= TOLERANCE * ab.norm() * ac.norm() {
        return None;
    }
    Some(signed_distance_to_plane(point, a, &(normal / len)))
}

/// Unit normal of the plane spanned by `center`-relative vectors.
///
/// Crosses the first vector with each following one and keeps the first
/// non-degenerate result. If every pair is parallel (collinear input) the
/// normal falls back to a fixed perpendicular of the first vector; the
/// resulting angular order is then only an approximation.
fn spanning_normal(center: &Point3, points: &[Point3]) -> Vector3 {
    let Some(first) = points.first() else {
        return Vector3::z();
    };
    let v0 = first - center;
    for p in &points[1..] {
        let v = p - center;
        let n = v0.cross(&v);
        let len = n.norm();
        if len > TOLERANCE * v0.norm() * v.norm() {
            return n / len;
        }
    }
    perpendicular_dir(&v0)
}

/// Orders the vertices of a planar convex polygon into a boundary loop.
///
/// `indices` name the polygon's vertices in `vertices`, in any order. Each
/// vertex is projected onto the polygon plane and sorted by its signed angle
/// (`atan2` of cross and dot products) from the first vertex around the
/// polygon centroid. The first index of the input stays first in the output.
///
/// # Errors
///
/// Returns `TopologyError::InvalidTopology` if an index is out of range.
pub fn order_polygon_vertices(indices: &[usize], vertices: &[Point3]) -> Result<Vec<usize>> {
    let points = indices
        .iter()
        .map(|&i| {
            vertices.get(i).copied().ok_or_else(|| {
                TopologyError::InvalidTopology(format!("vertex index {i} out of range"))
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let Some(center) = centroid(&points) else {
        return Ok(Vec::new());
    };
    if points.len() < 3 {
        return Ok(indices.to_vec());
    }

    let normal = spanning_normal(&center, &points);
    let v0 = points[0] - center;

    let mut keyed: Vec<(f64, usize)> = indices
        .iter()
        .zip(&points)
        .map(|(&idx, p)| {
            let v = p - center;
            let projected = v - normal * v.dot(&normal);
            let angle = v0.cross(&projected).dot(&normal).atan2(v0.dot(&projected));
            (angle, idx)
        })
        .collect();

    // The first vertex sits at angle zero; everything else lands in (-pi, pi].
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    let start = keyed
        .iter()
        .position(|&(_, idx)| idx == indices[0])
        .unwrap_or(0);
    keyed.rotate_left(start);

    Ok(keyed.into_iter().map(|(_, idx)| idx).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn is_cyclic_neighbour(order: &[usize], a: usize, b: usize) -> bool {
        let n = order.len();
        let pa = order.iter().position(|&v| v == a).unwrap();
        let pb = order.iter().position(|&v| v == b).unwrap();
        (pa + 1) % n == pb || (pb + 1) % n == pa
    }

    #[test]
    fn centroid_of_square() {
        let c = centroid(&[
            p(1.0, 1.0, 1.0),
            p(1.0, -1.0, 1.0),
            p(-1.0, -1.0, 1.0),
            p(-1.0, 1.0, 1.0),
        ])
        .unwrap();
        assert!((c - p(0.0, 0.0, 1.0)).norm() < TOLERANCE);
        assert!(centroid(&[]).is_none());
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        for v in [Vector3::x(), Vector3::y(), Vector3::new(1.0, 2.0, 3.0)] {
            let perp = perpendicular_dir(&v);
            assert!(perp.dot(&v).abs() < TOLERANCE);
            assert!((perp.norm() - 1.0).abs() < TOLERANCE);
        }
        assert_eq!(perpendicular_dir(&Vector3::zeros()), Vector3::z());
    }

    #[test]
    fn newell_normal_follows_winding() {
        let ccw = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        let n = polygon_normal(&ccw).unwrap();
        assert!((n - Vector3::z()).norm() < TOLERANCE);

        let mut cw = ccw;
        cw.reverse();
        let n = polygon_normal(&cw).unwrap();
        assert!((n + Vector3::z()).norm() < TOLERANCE);

        assert!(polygon_normal(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]).is_none());
    }

    #[test]
    fn tiny_polygons_keep_their_normal() {
        let s = 1e-7;
        let tiny = [p(0.0, 0.0, 0.0), p(s, 0.0, 0.0), p(s, s, 0.0), p(0.0, s, 0.0)];
        let n = polygon_normal(&tiny).unwrap();
        assert!((n - Vector3::z()).norm() < TOLERANCE);

        let d = signed_distance_to_plane_of(&p(0.0, 0.0, s), &tiny[0], &tiny[1], &tiny[3]).unwrap();
        assert!((d - s).abs() < s * 1e-9);

        let line = [p(0.0, 0.0, 0.0), p(s, 0.0, 0.0), p(2.0 * s, 0.0, 0.0)];
        assert!(polygon_normal(&line).is_none());
        assert!(signed_distance_to_plane_of(&tiny[0], &line[0], &line[1], &line[2]).is_none());
    }

    #[test]
    fn plane_distance_is_signed() {
        let d = signed_distance_to_plane(&p(0.0, 0.0, 2.0), &p(5.0, 5.0, 0.0), &Vector3::z());
        assert!((d - 2.0).abs() < TOLERANCE);
        let d = signed_distance_to_plane(&p(0.0, 0.0, -1.0), &p(0.0, 0.0, 0.0), &Vector3::z());
        assert!((d + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn plane_through_three_points() {
        let d = signed_distance_to_plane_of(
            &p(0.3, 0.4, -2.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert!((d + 2.0).abs() < TOLERANCE);
        let collinear = signed_distance_to_plane_of(
            &p(0.0, 0.0, 1.0),
            &p(0.0, 0.0, 0.0),
            &p(1.0, 0.0, 0.0),
            &p(2.0, 0.0, 0.0),
        );
        assert!(collinear.is_none());
    }

    #[test]
    fn orders_shuffled_pentagon() {
        let vertices: Vec<Point3> = (0..5)
            .map(|k| {
                let a = f64::from(k) * std::f64::consts::TAU / 5.0;
                p(a.cos(), a.sin(), 3.0)
            })
            .collect();
        let order = order_polygon_vertices(&[0, 2, 4, 1, 3], &vertices).unwrap();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], 0);
        for k in 0..5 {
            assert!(is_cyclic_neighbour(&order, k, (k + 1) % 5));
        }
    }

    #[test]
    fn orders_square_starting_with_diagonal_pair() {
        // The first two vectors are antiparallel, so the normal must come
        // from a later pair.
        let vertices = vec![
            p(1.0, 0.0, 0.0),
            p(-1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, -1.0, 0.0),
        ];
        let order = order_polygon_vertices(&[0, 1, 2, 3], &vertices).unwrap();
        assert!(is_cyclic_neighbour(&order, 0, 2));
        assert!(is_cyclic_neighbour(&order, 2, 1));
        assert!(is_cyclic_neighbour(&order, 1, 3));
        assert!(is_cyclic_neighbour(&order, 3, 0));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let vertices = vec![p(0.0, 0.0, 0.0)];
        assert!(order_polygon_vertices(&[0, 3], &vertices).is_err());
    }

    #[test]
    fn collinear_input_does_not_panic() {
        let vertices = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        let order = order_polygon_vertices(&[2, 0, 1], &vertices).unwrap();
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], 2);
    }
}
