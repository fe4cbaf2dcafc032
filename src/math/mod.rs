pub mod polygon_2d;
pub mod polygon_3d;

pub use polygon_3d::{
    centroid, order_polygon_vertices, perpendicular_dir, polygon_normal, signed_distance_to_plane,
    signed_distance_to_plane_of,
};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// The golden ratio `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;
