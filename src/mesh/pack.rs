//! Layout-driven vertex buffer packing.
//!
//! [`Mesh::pack_vertex_buffer`] serializes selected mesh and material
//! fields into one tightly strided little-endian buffer. Attribute keys
//! are an enum, so the per-vertex dispatch is a plain match — no string
//! comparison in the hot loop.

use std::collections::HashSet;

use crate::layout::{AttributeKey, Layout, ScalarType};
use crate::material::Material;

use super::data::Mesh;

impl Mesh {
    /// Serialize one interleaved vertex buffer according to `layout`.
    ///
    /// The buffer holds `vertex_count * layout.stride()` bytes. Geometry
    /// attributes read the mesh pools (missing pools and components
    /// zero-fill); material-derived attributes resolve the vertex's
    /// material through [`Mesh::materials_by_index`]. A vertex whose
    /// material is unresolved gets zero bytes for those attributes and a
    /// warning naming the material, once per material index per call.
    pub fn pack_vertex_buffer(&self, layout: &Layout) -> Vec<u8> {
        let vertex_count = self.vertex_count();
        let stride = layout.stride();
        let mut buffer = vec![0u8; vertex_count * stride];
        let mut warned: HashSet<i32> = HashSet::new();

        for i in 0..vertex_count {
            for attribute in layout.attributes() {
                let slot = match layout.slot(attribute.key) {
                    Some(slot) => slot,
                    None => continue,
                };
                let count = attribute.component_count;
                let mut values = [0.0f32; 4];

                match attribute.key {
                    AttributeKey::Position => self.fetch(&self.positions, i, 3, &mut values),
                    AttributeKey::Normal => self.fetch(&self.normals, i, 3, &mut values),
                    AttributeKey::Tangent => self.fetch(&self.tangents, i, 3, &mut values),
                    AttributeKey::Bitangent => self.fetch(&self.bitangents, i, 3, &mut values),
                    AttributeKey::Uv => {
                        self.fetch(&self.texcoords, i, self.texcoord_stride, &mut values)
                    }
                    AttributeKey::MaterialIndex => {
                        values[0] = self.vertex_material_indices[i] as f32;
                    }
                    AttributeKey::MaterialEnabled => {
                        values[0] = if self.material_for(i).is_some() { 1.0 } else { 0.0 };
                    }
                    key => match self.material_for(i) {
                        Some(material) => material_values(material, key, &mut values),
                        None => {
                            let index = self.vertex_material_indices[i];
                            if warned.insert(index) {
                                let name = usize::try_from(index)
                                    .ok()
                                    .and_then(|index| self.material_names.get(index))
                                    .map(String::as_str)
                                    .unwrap_or("<default>");
                                log::warn!(
                                    "material {name:?} not found in mesh; \
                                     did you forget to call add_material_library?"
                                );
                            }
                            // Leave this attribute's bytes zeroed.
                        }
                    },
                }

                write_components(
                    &mut buffer[i * stride + slot.offset..],
                    &values[..count],
                    attribute.scalar_type,
                );
            }
        }

        buffer
    }

    /// Copy up to 4 components for vertex `i` from a flat pool, zero-filling
    /// whatever the pool does not cover.
    fn fetch(&self, pool: &[f32], i: usize, pool_stride: usize, values: &mut [f32; 4]) {
        for (component, value) in values.iter_mut().enumerate() {
            if component < pool_stride {
                *value = pool.get(i * pool_stride + component).copied().unwrap_or(0.0);
            }
        }
    }

    /// The bound material for vertex `i`, if its index resolves.
    fn material_for(&self, i: usize) -> Option<&Material> {
        let index = self.vertex_material_indices[i];
        if index < 0 {
            return None;
        }
        self.materials_by_index
            .get(&(index as usize))
            .map(AsRef::as_ref)
    }
}

/// Source values for a material-derived attribute key.
fn material_values(material: &Material, key: AttributeKey, values: &mut [f32; 4]) {
    match key {
        AttributeKey::Ambient => values[..3].copy_from_slice(&material.ambient),
        AttributeKey::Diffuse => values[..3].copy_from_slice(&material.diffuse),
        AttributeKey::Specular => values[..3].copy_from_slice(&material.specular),
        AttributeKey::Emissive => values[..3].copy_from_slice(&material.emissive),
        AttributeKey::TransmissionFilter => {
            values[..3].copy_from_slice(&material.transmission_filter)
        }
        AttributeKey::SpecularExponent => values[0] = material.specular_exponent,
        AttributeKey::Dissolve => values[0] = material.dissolve,
        AttributeKey::Illumination => values[0] = material.illumination as f32,
        AttributeKey::RefractionIndex => values[0] = material.refraction_index,
        AttributeKey::Sharpness => values[0] = material.sharpness,
        AttributeKey::AntiAliasing => values[0] = if material.anti_aliasing { 1.0 } else { 0.0 },
        // Geometry keys and MaterialIndex/MaterialEnabled are handled by
        // the caller.
        _ => {}
    }
}

/// Write components little-endian, converting to the declared scalar type.
fn write_components(out: &mut [u8], values: &[f32], scalar: ScalarType) {
    let mut offset = 0;
    for &value in values {
        match scalar {
            ScalarType::Float32 => {
                out[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
                offset += 4;
            }
            ScalarType::Int16 => {
                out[offset..offset + 2].copy_from_slice(&(value as i16).to_le_bytes());
                offset += 2;
            }
            ScalarType::Uint16 => {
                out[offset..offset + 2].copy_from_slice(&(value as u16).to_le_bytes());
                offset += 2;
            }
            ScalarType::Int8 => {
                out[offset] = (value as i8) as u8;
                offset += 1;
            }
            ScalarType::Uint8 => {
                out[offset] = value as u8;
                offset += 1;
            }
        }
    }
}
