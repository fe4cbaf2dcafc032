use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{OperationError, Result, TopologyError};
use crate::math::{signed_distance_to_plane_of, Point3};
use crate::operations::Tolerances;
use crate::topology::{Adjacency, Face};

/// Reconstructs faces as cycles of the vertex adjacency graph.
///
/// Runs a depth-first search from every directed edge `(start, second)`,
/// extending the path one unvisited neighbour at a time until it holds
/// `cycle_length` vertices. A path closes into a candidate when its last
/// vertex is adjacent to `start`. Candidates must then be geometrically
/// valid faces: all sides of near-equal length and all vertices close to
/// the plane through the first three. The same face is found once per
/// starting vertex and direction; each cycle is reduced to a canonical
/// form (see [`canonical_cycle`]) so it is reported once.
///
/// With vertex degree `q` the branching factor is at most `q - 1`, so the
/// search is tiny for any regular solid.
pub struct FindFaceCycles<'a> {
    vertices: &'a [Point3],
    adjacency: &'a Adjacency,
    cycle_length: usize,
    expected_count: Option<usize>,
    tolerances: Tolerances,
}

impl<'a> FindFaceCycles<'a> {
    /// Creates a new `FindFaceCycles` search for faces with `cycle_length` sides.
    #[must_use]
    pub fn new(vertices: &'a [Point3], adjacency: &'a Adjacency, cycle_length: usize) -> Self {
        Self {
            vertices,
            adjacency,
            cycle_length,
            expected_count: None,
            tolerances: Tolerances::default(),
        }
    }

    /// Requires the search to find exactly `count` faces.
    #[must_use]
    pub fn with_expected_count(mut self, count: usize) -> Self {
        self.expected_count = Some(count);
        self
    }

    /// Sets custom tolerances for the edge-length and planarity checks.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the search, returning faces ordered by their canonical form.
    ///
    /// Each face starts at its smallest vertex index and runs in the
    /// direction whose second vertex is smaller.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the cycle length is below 3
    /// or the graph and vertex list disagree in size, and
    /// `TopologyError::CountMismatch` if an expected count was set and the
    /// search found a different number of faces.
    pub fn execute(&self) -> Result<Vec<Face>> {
        if self.cycle_length < 3 {
            return Err(OperationError::InvalidInput(format!(
                "face cycles need at least 3 vertices, got {}",
                self.cycle_length
            ))
            .into());
        }
        if self.adjacency.len() != self.vertices.len() {
            return Err(OperationError::InvalidInput(format!(
                "adjacency covers {} vertices but {} were given",
                self.adjacency.len(),
                self.vertices.len()
            ))
            .into());
        }

        let mut found = BTreeSet::new();
        let mut visited = vec![false; self.vertices.len()];
        let mut path = Vec::with_capacity(self.cycle_length);

        for start in 0..self.vertices.len() {
            for &second in self.adjacency.neighbors(start) {
                visited[start] = true;
                visited[second] = true;
                path.push(start);
                path.push(second);
                self.extend(&mut path, &mut visited, &mut found);
                path.clear();
                visited[start] = false;
                visited[second] = false;
            }
        }

        debug!(
            cycle_length = self.cycle_length,
            faces = found.len(),
            "found face cycles"
        );

        if let Some(expected) = self.expected_count {
            if found.len() != expected {
                warn!(
                    cycle_length = self.cycle_length,
                    expected,
                    actual = found.len(),
                    "face cycle search found the wrong number of faces"
                );
                return Err(TopologyError::CountMismatch {
                    entity: "face",
                    expected,
                    actual: found.len(),
                }
                .into());
            }
        }

        found.into_iter().map(Face::new).collect()
    }

    fn extend(&self, path: &mut Vec<usize>, visited: &mut [bool], found: &mut BTreeSet<Vec<usize>>) {
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return;
        };
        if path.len() == self.cycle_length {
            if self.adjacency.are_adjacent(last, first) && self.is_regular_polygon(path) {
                found.insert(canonical_cycle(path));
            }
            return;
        }
        for &next in self.adjacency.neighbors(last) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            path.push(next);
            self.extend(path, visited, found);
            path.pop();
            visited[next] = false;
        }
    }

    fn is_regular_polygon(&self, cycle: &[usize]) -> bool {
        let points: Vec<Point3> = cycle.iter().map(|&i| self.vertices[i]).collect();
        let n = points.len();

        let sides: Vec<f64> = (0..n)
            .map(|i| (points[(i + 1) % n] - points[i]).norm())
            .collect();
        let reference = sides[0];
        if sides
            .iter()
            .any(|s| (s - reference).abs() > self.tolerances.polygon_edge)
        {
            return false;
        }

        points.iter().all(|p| {
            signed_distance_to_plane_of(p, &points[0], &points[1], &points[2])
                .is_some_and(|d| d.abs() <= self.tolerances.planarity)
        })
    }
}

/// Canonical form of a cycle of vertex indices.
///
/// Rotates the cycle to start at its smallest index, in both traversal
/// directions, and keeps the lexicographically smaller of the two. Two
/// cycles describe the same loop exactly when their canonical forms match.
#[must_use]
pub fn canonical_cycle(cycle: &[usize]) -> Vec<usize> {
    let Some((min_pos, _)) = cycle.iter().enumerate().min_by_key(|&(_, v)| *v) else {
        return Vec::new();
    };
    let n = cycle.len();
    let forward: Vec<usize> = (0..n).map(|k| cycle[(min_pos + k) % n]).collect();
    let backward: Vec<usize> = (0..n).map(|k| cycle[(min_pos + n - k) % n]).collect();
    forward.min(backward)
}
