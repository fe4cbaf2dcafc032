use crate::math::{Point3, PHI};
use crate::topology::PlatonicKind;

/// The 8 sign combinations `(±1, ±1, ±1)`.
///
/// Ordered with `x` varying slowest: `(-1, -1, -1), (-1, -1, 1), ...`.
#[must_use]
pub fn cube_vertices() -> Vec<Point3> {
    let mut vertices = Vec::with_capacity(8);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                vertices.push(Point3::new(x, y, z));
            }
        }
    }
    vertices
}

/// The 6 signed unit basis vectors `(±1, 0, 0), (0, ±1, 0), (0, 0, ±1)`.
#[must_use]
pub fn octahedron_vertices() -> Vec<Point3> {
    vec![
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(-1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
    ]
}

/// Keeps the points whose coordinate product is `+1`.
///
/// Applied to the cube's vertices this picks every other corner: no two of
/// the four survivors share a cube edge, and all six pairwise distances
/// equal `2 sqrt(2)`.
#[must_use]
pub fn select_tetrahedron_vertices(cube: &[Point3]) -> Vec<Point3> {
    cube.iter()
        .filter(|p| (p.x * p.y * p.z - 1.0).abs() < 1e-9)
        .copied()
        .collect()
}

/// The 4 alternate cube corners with `x * y * z = 1`.
#[must_use]
pub fn tetrahedron_vertices() -> Vec<Point3> {
    select_tetrahedron_vertices(&cube_vertices())
}

/// Three mutually perpendicular golden rectangles:
/// `(0, ±1, ±φ), (±1, ±φ, 0), (±φ, 0, ±1)`.
#[must_use]
pub fn icosahedron_vertices() -> Vec<Point3> {
    golden_rectangles(1.0, PHI)
}

/// The cube's 8 corners plus three golden rectangles
/// `(0, ±1/φ, ±φ), (±1/φ, ±φ, 0), (±φ, 0, ±1/φ)`.
#[must_use]
pub fn dodecahedron_vertices() -> Vec<Point3> {
    let mut vertices = cube_vertices();
    vertices.extend(golden_rectangles(1.0 / PHI, PHI));
    vertices
}

/// Canonical vertices of any regular solid.
#[must_use]
pub fn platonic_vertices(kind: PlatonicKind) -> Vec<Point3> {
    match kind {
        PlatonicKind::Tetrahedron => tetrahedron_vertices(),
        PlatonicKind::Cube => cube_vertices(),
        PlatonicKind::Octahedron => octahedron_vertices(),
        PlatonicKind::Dodecahedron => dodecahedron_vertices(),
        PlatonicKind::Icosahedron => icosahedron_vertices(),
    }
}

/// Corners of the three rectangles `(0, ±a, ±b)`, `(±a, ±b, 0)`, `(±b, 0, ±a)`.
fn golden_rectangles(a: f64, b: f64) -> Vec<Point3> {
    let mut vertices = Vec::with_capacity(12);
    for (s, t) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
        vertices.push(Point3::new(0.0, s * a, t * b));
    }
    for (s, t) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
        vertices.push(Point3::new(s * a, t * b, 0.0));
    }
    for (s, t) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
        vertices.push(Point3::new(s * b, 0.0, t * a));
    }
    vertices
}
