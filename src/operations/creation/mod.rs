mod make_platonic;
mod make_polyhedron;
mod vertices;

pub use make_platonic::MakePlatonic;
pub use make_polyhedron::MakePolyhedron;
pub use vertices::{
    cube_vertices, dodecahedron_vertices, icosahedron_vertices, octahedron_vertices,
    platonic_vertices, select_tetrahedron_vertices, tetrahedron_vertices,
};
