//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur while building or post-processing a [`super::Mesh`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Tangent derivation needs positions, normals, and texture coordinates
    /// to all be present.
    #[error("missing attributes for calculating tangents and bitangents")]
    MissingTangentAttributes,
}
