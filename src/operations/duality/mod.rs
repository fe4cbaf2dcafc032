mod make_dual;
mod make_outward_tetrahedron_dual;

pub use make_dual::MakeDual;
pub use make_outward_tetrahedron_dual::MakeOutwardTetrahedronDual;
