mod edges_from_distance;
mod edges_from_faces;
mod face_adjacency_edges;
mod find_face_cycles;
mod orient_faces;

pub use edges_from_distance::EdgesFromDistance;
pub use edges_from_faces::EdgesFromFaces;
pub use face_adjacency_edges::FaceAdjacencyEdges;
pub use find_face_cycles::{canonical_cycle, FindFaceCycles};
pub use orient_faces::OrientFaces;
