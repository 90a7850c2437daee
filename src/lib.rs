//! # wavefront-mesh
//!
//! CPU-side Wavefront OBJ/MTL toolkit:
//!
//! - [`mesh::Mesh`] — parses OBJ geometry text into deduplicated flat
//!   vertex pools with one index bucket per material
//! - [`material::MaterialLibrary`] — parses companion MTL text into a
//!   name-keyed table of [`material::Material`] records
//! - [`layout::Layout`] — caller-declared attribute schema with computed
//!   byte offsets and stride, used by [`mesh::Mesh::pack_vertex_buffer`]
//!   to serialize an interleaved vertex buffer
//!
//! Retrieval of the source text and texture images, GPU buffer upload, and
//! scene/camera math are the caller's responsibility; this crate is pure
//! synchronous in-memory transformation.

pub mod layout;
pub mod material;
pub mod mesh;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
