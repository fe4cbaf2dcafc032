mod edge_length_stats;
mod euler_characteristic;
mod is_dual_pair;
mod is_valid;
mod similarity_ratio;
mod vertex_configurations;

pub use edge_length_stats::{EdgeLengthStats, EdgeLengths};
pub use euler_characteristic::EulerCharacteristic;
pub use is_dual_pair::IsDualPair;
pub use is_valid::IsValid;
pub use similarity_ratio::SimilarityRatio;
pub use vertex_configurations::{VertexClass, VertexConfiguration, VertexConfigurations};
