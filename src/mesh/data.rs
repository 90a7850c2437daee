//! The CPU-side mesh container.

use std::collections::HashMap;
use std::sync::Arc;

use crate::material::{Material, MaterialLibrary};

/// A deduplicated mesh built from OBJ text.
///
/// All pools are flat: positions and normals hold 3 floats per vertex,
/// texture coordinates hold [`Mesh::texcoord_stride`] floats per vertex
/// (and stay empty when the source had no `vt` lines). Each unique
/// (position, texcoord, normal, material) combination is stored exactly
/// once; faces reference it through the index buckets.
///
/// Indices are grouped into one bucket per material in first-use order,
/// with bucket 0 reserved for faces seen before any `usemtl`. The combined
/// [`Mesh::indices`] list concatenates all buckets in bucket order.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Optional label, e.g. the source file's basename.
    pub name: Option<String>,
    /// Vertex positions, 3 floats per vertex.
    pub positions: Vec<f32>,
    /// Vertex normals, 3 floats per vertex.
    pub normals: Vec<f32>,
    /// Texture coordinates, `texcoord_stride` floats per vertex. Empty when
    /// the source declared none.
    pub texcoords: Vec<f32>,
    /// 2, or 3 when the third ("w") component was requested at parse time.
    pub texcoord_stride: usize,
    /// Material registry index per vertex; -1 before any `usemtl`.
    pub vertex_material_indices: Vec<i32>,
    /// All index buckets concatenated in bucket order.
    pub indices: Vec<u32>,
    /// One index list per material bucket. Bucket 0 always exists.
    pub indices_per_material: Vec<Vec<u32>>,
    /// Material names in first-use order (bucket order).
    pub material_names: Vec<String>,
    /// Material name to bucket/registry index.
    pub material_indices: HashMap<String, usize>,
    /// Materials bound via [`Mesh::add_material_library`], by registry index.
    pub materials_by_index: HashMap<usize, Arc<Material>>,
    /// Tangents, 3 floats per vertex. Empty until derived.
    pub tangents: Vec<f32>,
    /// Bitangents, 3 floats per vertex. Empty until derived.
    pub bitangents: Vec<f32>,
}

impl Mesh {
    /// Number of unique vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of indices in the combined list.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles in the combined list.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the source declared any texture coordinates.
    #[inline]
    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    /// Bind a parsed material library to this mesh.
    ///
    /// Every library material whose name was activated by a `usemtl`
    /// directive becomes reachable through its registry index; materials
    /// the mesh never referenced are ignored. The mesh shares the records,
    /// it does not own the library.
    pub fn add_material_library(&mut self, library: &MaterialLibrary) {
        for (name, material) in &library.materials {
            if let Some(&index) = self.material_indices.get(name) {
                self.materials_by_index.insert(index, Arc::clone(material));
            }
        }
    }

    /// Serialize the combined index list as little-endian u16 bytes, ready
    /// for an element-array buffer upload.
    pub fn pack_index_buffer(&self) -> Vec<u8> {
        let indices: Vec<u16> = self.indices.iter().map(|&i| i as u16).collect();
        bytemuck::cast_slice(&indices).to_vec()
    }

    /// Serialize the index buckets for the given material indices, in the
    /// given order, as little-endian u16 bytes.
    pub fn pack_index_buffer_for_materials(&self, material_indices: &[usize]) -> Vec<u8> {
        let indices: Vec<u16> = material_indices
            .iter()
            .filter_map(|&index| self.indices_per_material.get(index))
            .flatten()
            .map(|&i| i as u16)
            .collect();
        bytemuck::cast_slice(&indices).to_vec()
    }
}
