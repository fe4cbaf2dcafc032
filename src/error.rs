use thiserror::Error;

/// Top-level error type for the Platonic solid library.
#[derive(Debug, Error)]
pub enum PlatonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("edge lengths are not uniform: coefficient of variation {variation:e} exceeds {limit:e}")]
    NonUniformEdges { variation: f64, limit: f64 },

    #[error("face {face} is not planar: vertex deviates {deviation} from its plane")]
    NonPlanarFace { face: usize, deviation: f64 },

    #[error("face {face} is not regular: circumradii differ by {spread}")]
    IrregularFace { face: usize, spread: f64 },
}

/// Errors related to topological derivation and validation.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("{entity} count mismatch: expected {expected}, found {actual}")]
    CountMismatch {
        entity: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Euler's formula violated: V - E + F = {vertices} - {edges} + {faces} != 2")]
    EulerViolation {
        vertices: usize,
        edges: usize,
        faces: usize,
    },

    #[error("vertex {vertex} is shared by {actual} faces, expected {expected}")]
    IrregularVertex {
        vertex: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`PlatonError`].
pub type Result<T> = std::result::Result<T, PlatonError>;
