use crate::material::MaterialLibrary;
use crate::mesh::{Mesh, MeshOptions};

mod buffer_test;

/// Two unit quads side by side, a material per quad.
const PLANES_OBJ: &str = include_str!("planes.obj");

/// The material library referenced by the planes fixture.
const PLANES_MTL: &str = include_str!("planes.mtl");

/// Parse the planes fixture with default options.
fn planes_mesh() -> Mesh {
    Mesh::parse(PLANES_OBJ, &MeshOptions::default()).expect("failed to parse planes.obj")
}

/// Parse the planes fixture and bind its material library.
fn planes_mesh_with_materials() -> Mesh {
    let mut mesh = planes_mesh();
    let library = MaterialLibrary::parse(PLANES_MTL).expect("failed to parse planes.mtl");
    mesh.add_material_library(&library);
    mesh
}
