use std::fmt;

use crate::math::PHI;

/// The five convex regular polyhedra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlatonicKind {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

/// Vertex, edge and face counts of a polyhedron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Counts {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
}

impl Counts {
    /// Creates a new count triple.
    #[must_use]
    pub fn new(vertices: usize, edges: usize, faces: usize) -> Self {
        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// `V - E + F`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }

    /// Counts of the dual polyhedron: vertices and faces swap places.
    #[must_use]
    pub fn dual(&self) -> Self {
        Self::new(self.faces, self.edges, self.vertices)
    }
}

impl PlatonicKind {
    /// All five kinds in order of increasing face count.
    pub const ALL: [PlatonicKind; 5] = [
        PlatonicKind::Tetrahedron,
        PlatonicKind::Cube,
        PlatonicKind::Octahedron,
        PlatonicKind::Dodecahedron,
        PlatonicKind::Icosahedron,
    ];

    /// Schläfli symbol `{p, q}`: `p`-gon faces, `q` of them at every vertex.
    #[must_use]
    pub fn schlafli(self) -> (usize, usize) {
        match self {
            Self::Tetrahedron => (3, 3),
            Self::Cube => (4, 3),
            Self::Octahedron => (3, 4),
            Self::Dodecahedron => (5, 3),
            Self::Icosahedron => (3, 5),
        }
    }

    /// Looks up the kind with Schläfli symbol `{sides, per_vertex}`.
    #[must_use]
    pub fn from_schlafli(sides: usize, per_vertex: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.schlafli() == (sides, per_vertex))
    }

    /// Number of sides of each face.
    #[must_use]
    pub fn face_sides(self) -> usize {
        self.schlafli().0
    }

    /// Number of faces (and edges) meeting at each vertex.
    #[must_use]
    pub fn vertex_degree(self) -> usize {
        self.schlafli().1
    }

    /// Expected vertex, edge and face counts.
    #[must_use]
    pub fn counts(self) -> Counts {
        match self {
            Self::Tetrahedron => Counts::new(4, 6, 4),
            Self::Cube => Counts::new(8, 12, 6),
            Self::Octahedron => Counts::new(6, 12, 8),
            Self::Dodecahedron => Counts::new(20, 30, 12),
            Self::Icosahedron => Counts::new(12, 30, 20),
        }
    }

    /// The dual kind.
    #[must_use]
    pub fn dual(self) -> Self {
        match self {
            Self::Tetrahedron => Self::Tetrahedron,
            Self::Cube => Self::Octahedron,
            Self::Octahedron => Self::Cube,
            Self::Dodecahedron => Self::Icosahedron,
            Self::Icosahedron => Self::Dodecahedron,
        }
    }

    /// Edge length of the canonical unit-scale construction.
    ///
    /// Cube `(±1, ±1, ±1)`: 2. Octahedron `(±1, 0, 0)`: `sqrt(2)`.
    /// Tetrahedron (alternate cube vertices): `2 sqrt(2)`. Icosahedron
    /// `(0, ±1, ±φ)`: 2. Dodecahedron: `2 / φ`.
    #[must_use]
    pub fn edge_length(self) -> f64 {
        match self {
            Self::Tetrahedron => 2.0 * std::f64::consts::SQRT_2,
            Self::Cube | Self::Icosahedron => 2.0,
            Self::Octahedron => std::f64::consts::SQRT_2,
            Self::Dodecahedron => 2.0 / PHI,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Cube => "cube",
            Self::Octahedron => "octahedron",
            Self::Dodecahedron => "dodecahedron",
            Self::Icosahedron => "icosahedron",
        }
    }
}

impl fmt::Display for PlatonicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_satisfy_euler() {
        for kind in PlatonicKind::ALL {
            assert_eq!(kind.counts().euler_characteristic(), 2, "{kind}");
        }
    }

    #[test]
    fn dual_is_an_involution() {
        for kind in PlatonicKind::ALL {
            assert_eq!(kind.dual().dual(), kind);
            assert_eq!(kind.dual().counts(), kind.counts().dual());
        }
    }

    #[test]
    fn schlafli_round_trip() {
        for kind in PlatonicKind::ALL {
            let (p, q) = kind.schlafli();
            assert_eq!(PlatonicKind::from_schlafli(p, q), Some(kind));
            // Every edge borders two faces: p * F = 2 * E = q * V.
            let counts = kind.counts();
            assert_eq!(p * counts.faces, 2 * counts.edges);
            assert_eq!(q * counts.vertices, 2 * counts.edges);
        }
        assert_eq!(PlatonicKind::from_schlafli(6, 3), None);
    }
}
