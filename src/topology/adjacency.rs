use crate::error::{Result, TopologyError};

use super::edge::Edge;

/// Vertex adjacency graph of a solid.
///
/// Vertices are the indices `0..n`; each entry lists the neighbours of one
/// vertex in ascending order.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Builds the graph over `vertex_count` vertices from an edge list.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if an edge names a vertex
    /// outside `0..vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> Result<Self> {
        let mut neighbors = vec![Vec::new(); vertex_count];
        for edge in edges {
            if edge.end() >= vertex_count {
                return Err(TopologyError::InvalidTopology(format!(
                    "edge ({}, {}) references a vertex beyond {vertex_count}",
                    edge.start(),
                    edge.end()
                ))
                .into());
            }
            neighbors[edge.start()].push(edge.end());
            neighbors[edge.end()].push(edge.start());
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }
        Ok(Self { neighbors })
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbours of `vertex`; empty for an unknown vertex.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.neighbors
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of neighbours of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns `true` if `a` and `b` share an edge.
    #[must_use]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Vec<Edge> {
        vec![
            Edge::new(0, 1).unwrap(),
            Edge::new(1, 2).unwrap(),
            Edge::new(2, 3).unwrap(),
            Edge::new(3, 0).unwrap(),
        ]
    }

    #[test]
    fn neighbours_are_symmetric_and_sorted() {
        let adjacency = Adjacency::from_edges(4, &square()).unwrap();
        assert_eq!(adjacency.neighbors(0), &[1, 3]);
        assert!(adjacency.are_adjacent(2, 3));
        assert!(adjacency.are_adjacent(3, 2));
        assert!(!adjacency.are_adjacent(0, 2));
        assert!((0..4).all(|v| adjacency.degree(v) == 2));
    }

    #[test]
    fn irregular_graph() {
        let mut edges = square();
        edges.push(Edge::new(0, 2).unwrap());
        let adjacency = Adjacency::from_edges(4, &edges).unwrap();
        assert_eq!(adjacency.degree(0), 3);
        assert_eq!(adjacency.degree(1), 2);
        assert_eq!(adjacency.degree(9), 0);
    }

    #[test]
    fn edge_out_of_range() {
        assert!(Adjacency::from_edges(3, &square()).is_err());
    }

    #[test]
    fn unknown_vertex_has_no_neighbours() {
        let adjacency = Adjacency::from_edges(4, &square()).unwrap();
        assert!(adjacency.neighbors(10).is_empty());
    }
}
