pub mod error;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{PlatonError, Result};
