//! OBJ geometry parsing and CPU-side mesh data.
//!
//! This module provides:
//!
//! - [`Mesh`] — deduplicated flat vertex pools with one index bucket per
//!   material, built by [`Mesh::parse`] from OBJ text
//! - [`MeshOptions`] — parse-time configuration (third texcoord component,
//!   eager tangent derivation)
//! - [`Mesh::calculate_tangents_and_bitangents`] — per-vertex tangent-space
//!   basis derivation
//! - [`Mesh::pack_vertex_buffer`] — serialization into one interleaved
//!   buffer driven by a [`crate::layout::Layout`]
//!
//! A parsed mesh may be mutated exactly twice after construction: once by
//! [`Mesh::add_material_library`] to bind resolved materials, and once by
//! tangent derivation. Everything else is read-only.

mod data;
mod error;
mod pack;
mod parser;
mod tangent;
#[cfg(test)]
mod tests;

pub use data::Mesh;
pub use error::MeshError;
pub use parser::MeshOptions;
