use crate::error::{Result, TopologyError};

/// An unordered pair of vertex indices.
///
/// Stored normalized with `start < end`, so two edges over the same
/// vertices always compare equal regardless of traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    start: usize,
    end: usize,
}

impl Edge {
    /// Creates the edge between vertices `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if `a == b`.
    pub fn new(a: usize, b: usize) -> Result<Self> {
        if a == b {
            return Err(
                TopologyError::InvalidTopology(format!("edge endpoints coincide at vertex {a}"))
                    .into(),
            );
        }
        Ok(Self {
            start: a.min(b),
            end: a.max(b),
        })
    }

    /// The smaller vertex index.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The larger vertex index.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }
}
