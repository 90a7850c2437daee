//! Attribute layout definitions for packed vertex buffers.
//!
//! A [`Layout`] describes how selected mesh and material fields are packed
//! into one interleaved buffer, C-struct style: an ordered list of
//! [`Attribute`]s, each with a computed byte offset, sharing a single
//! stride. The same layout answers everything a vertex-attribute binding
//! call needs: size, scalar type, normalized flag, stride, and offset.
//!
//! Offsets are padded so that every attribute starts at a multiple of its
//! scalar size, and the stride is padded to a multiple of the largest
//! scalar size in the layout. Both paddings emit a warning since they
//! usually indicate a suboptimal attribute order.
//!
//! # Example
//!
//! ```
//! use wavefront_mesh::layout::{Attribute, Layout};
//!
//! let layout = Layout::new(vec![
//!     Attribute::position(),
//!     Attribute::normal(),
//!     Attribute::uv(),
//! ]).unwrap();
//! assert_eq!(layout.stride(), 32);
//! assert_eq!(layout.slot(wavefront_mesh::layout::AttributeKey::Uv).unwrap().offset, 24);
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// Scalar component type of a packed attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Signed 8-bit integer, values in [-128, 127].
    Int8,
    /// Unsigned 8-bit integer, values in [0, 255].
    Uint8,
    /// Signed 16-bit integer, values in [-32768, 32767].
    Int16,
    /// Unsigned 16-bit integer, values in [0, 65535].
    Uint16,
    /// 32-bit floating point number.
    Float32,
}

impl ScalarType {
    /// Size in bytes of one scalar of this type.
    pub fn size(&self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Float32 => 4,
        }
    }
}

/// Identifies what a packed attribute is sourced from.
///
/// Geometry keys read the mesh's flat pools directly. `MaterialIndex` reads
/// the per-vertex material index. The remaining keys are resolved through
/// the material bound for each vertex; when no material library has been
/// bound for that index the attribute's bytes stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Vertex position x, y, z.
    Position,
    /// Vertex normal x, y, z.
    Normal,
    /// Tangent x, y, z (zero unless tangents have been derived).
    Tangent,
    /// Bitangent x, y, z (zero unless tangents have been derived).
    Bitangent,
    /// Texture coordinates u, v.
    Uv,
    /// Index into the mesh's material registry (-1 before any `usemtl`).
    MaterialIndex,
    /// 1 when the vertex's material index resolves to a bound material.
    MaterialEnabled,
    /// Material ambient reflectivity (Ka).
    Ambient,
    /// Material diffuse reflectivity (Kd).
    Diffuse,
    /// Material specular reflectivity (Ks).
    Specular,
    /// Material specular exponent (Ns).
    SpecularExponent,
    /// Material emissive color (Ke).
    Emissive,
    /// Material transmission filter (Tf).
    TransmissionFilter,
    /// Material dissolve factor (d).
    Dissolve,
    /// Material illumination model id (illum).
    Illumination,
    /// Material optical density (Ni).
    RefractionIndex,
    /// Material reflection sharpness.
    Sharpness,
    /// Material anti-aliasing flag (map_aat).
    AntiAliasing,
}

/// Describes how one vertex attribute is packed into the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    /// What this attribute is sourced from.
    pub key: AttributeKey,
    /// Number of components per vertex. Must be 1, 2, 3, or 4.
    pub component_count: usize,
    /// Scalar type of each component.
    pub scalar_type: ScalarType,
    /// Whether integer data should be normalized when cast to float by the
    /// consuming vertex-attribute binding. No effect on `Float32`.
    pub normalized: bool,
}

impl Attribute {
    /// Create an attribute. Prefer the named constructors below, which
    /// reproduce the canonical component counts and types for each key.
    pub fn new(
        key: AttributeKey,
        component_count: usize,
        scalar_type: ScalarType,
        normalized: bool,
    ) -> Self {
        debug_assert!((1..=4).contains(&component_count));
        Self {
            key,
            component_count,
            scalar_type,
            normalized,
        }
    }

    /// Size in bytes of one component.
    pub fn size_of_type(&self) -> usize {
        self.scalar_type.size()
    }

    /// Total size in bytes of this attribute per vertex.
    pub fn size_in_bytes(&self) -> usize {
        self.size_of_type() * self.component_count
    }

    /// Position as 3 floats.
    pub fn position() -> Self {
        Self::new(AttributeKey::Position, 3, ScalarType::Float32, false)
    }

    /// Normal as 3 floats.
    pub fn normal() -> Self {
        Self::new(AttributeKey::Normal, 3, ScalarType::Float32, false)
    }

    /// Tangent as 3 floats. Zero-filled unless the mesh derived tangents.
    pub fn tangent() -> Self {
        Self::new(AttributeKey::Tangent, 3, ScalarType::Float32, false)
    }

    /// Bitangent as 3 floats. Zero-filled unless the mesh derived tangents.
    pub fn bitangent() -> Self {
        Self::new(AttributeKey::Bitangent, 3, ScalarType::Float32, false)
    }

    /// Texture coordinates as 2 floats.
    pub fn uv() -> Self {
        Self::new(AttributeKey::Uv, 2, ScalarType::Float32, false)
    }

    /// Material registry index as a signed 16-bit integer.
    pub fn material_index() -> Self {
        Self::new(AttributeKey::MaterialIndex, 1, ScalarType::Int16, false)
    }

    /// Material-resolved flag as an unsigned 16-bit integer.
    pub fn material_enabled() -> Self {
        Self::new(AttributeKey::MaterialEnabled, 1, ScalarType::Uint16, false)
    }

    /// Ambient reflectivity as 3 floats.
    pub fn ambient() -> Self {
        Self::new(AttributeKey::Ambient, 3, ScalarType::Float32, false)
    }

    /// Diffuse reflectivity as 3 floats.
    pub fn diffuse() -> Self {
        Self::new(AttributeKey::Diffuse, 3, ScalarType::Float32, false)
    }

    /// Specular reflectivity as 3 floats.
    pub fn specular() -> Self {
        Self::new(AttributeKey::Specular, 3, ScalarType::Float32, false)
    }

    /// Specular exponent as 1 float.
    pub fn specular_exponent() -> Self {
        Self::new(AttributeKey::SpecularExponent, 1, ScalarType::Float32, false)
    }

    /// Emissive color as 3 floats.
    pub fn emissive() -> Self {
        Self::new(AttributeKey::Emissive, 3, ScalarType::Float32, false)
    }

    /// Transmission filter as 3 floats.
    pub fn transmission_filter() -> Self {
        Self::new(AttributeKey::TransmissionFilter, 3, ScalarType::Float32, false)
    }

    /// Dissolve factor as 1 float.
    pub fn dissolve() -> Self {
        Self::new(AttributeKey::Dissolve, 1, ScalarType::Float32, false)
    }

    /// Illumination model id as an unsigned 16-bit integer.
    pub fn illumination() -> Self {
        Self::new(AttributeKey::Illumination, 1, ScalarType::Uint16, false)
    }

    /// Optical density as 1 float.
    pub fn refraction_index() -> Self {
        Self::new(AttributeKey::RefractionIndex, 1, ScalarType::Float32, false)
    }

    /// Reflection sharpness as 1 float.
    pub fn sharpness() -> Self {
        Self::new(AttributeKey::Sharpness, 1, ScalarType::Float32, false)
    }

    /// Anti-aliasing flag as an unsigned 16-bit integer.
    pub fn anti_aliasing() -> Self {
        Self::new(AttributeKey::AntiAliasing, 1, ScalarType::Uint16, false)
    }
}

/// Error building a [`Layout`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The same attribute key appeared more than once.
    #[error("found duplicate attribute: {0:?}")]
    DuplicateAttribute(AttributeKey),
}

/// One attribute's resolved placement within a [`Layout`].
///
/// Carries everything a vertex-attribute binding call needs for this
/// attribute: component count, scalar type, normalized flag, the shared
/// stride, and the byte offset within each vertex record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeSlot {
    /// The attribute as declared.
    pub attribute: Attribute,
    /// Byte offset of this attribute within a vertex record.
    pub offset: usize,
    /// Byte span of one full vertex record (shared by all attributes).
    pub stride: usize,
}

/// An ordered attribute schema with computed offsets and stride.
///
/// Built once and immutable thereafter. Construction fails on a repeated
/// attribute key.
#[derive(Debug, Clone)]
pub struct Layout {
    attributes: Vec<Attribute>,
    slots: HashMap<AttributeKey, AttributeSlot>,
    stride: usize,
}

impl Layout {
    /// Build a layout from an ordered attribute list.
    ///
    /// Offsets are assigned in declaration order. If the running offset is
    /// not a multiple of the next attribute's scalar size, padding is
    /// inserted up to the next multiple. The final stride is padded to a
    /// multiple of the largest scalar size seen.
    pub fn new(attributes: Vec<Attribute>) -> Result<Self, LayoutError> {
        let mut slots = HashMap::with_capacity(attributes.len());
        let mut offset = 0usize;
        let mut max_scalar_size = 0usize;

        for attribute in &attributes {
            if slots.contains_key(&attribute.key) {
                return Err(LayoutError::DuplicateAttribute(attribute.key));
            }
            let align = attribute.size_of_type();
            if offset % align != 0 {
                offset += align - offset % align;
                log::warn!(
                    "layout requires padding before {:?} attribute",
                    attribute.key
                );
            }
            slots.insert(
                attribute.key,
                AttributeSlot {
                    attribute: *attribute,
                    offset,
                    stride: 0,
                },
            );
            offset += attribute.size_in_bytes();
            max_scalar_size = max_scalar_size.max(align);
        }

        // Differently sized attributes share one buffer, so the stride must
        // be a multiple of the largest scalar size.
        if max_scalar_size > 0 && offset % max_scalar_size != 0 {
            offset += max_scalar_size - offset % max_scalar_size;
            log::warn!("layout requires padding at the back");
        }

        let stride = offset;
        for slot in slots.values_mut() {
            slot.stride = stride;
        }

        Ok(Self {
            attributes,
            slots,
            stride,
        })
    }

    /// The attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Byte span of one packed vertex record.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Resolved placement for an attribute key, if the layout contains it.
    pub fn slot(&self, key: AttributeKey) -> Option<&AttributeSlot> {
        self.slots.get(&key)
    }

    /// Whether the layout contains an attribute with this key.
    pub fn has_attribute(&self, key: AttributeKey) -> bool {
        self.slots.contains_key(&key)
    }
}
