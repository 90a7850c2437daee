//! Per-vertex tangent-space basis derivation.
//!
//! For each triangle, the object-space edge vectors and their UV-space
//! deltas give a closed-form tangent and bitangent. Each is
//! Gram-Schmidt-orthogonalized against the vertex normal, normalized, and
//! summed into that vertex's running total — one contribution per incident
//! triangle, never divided by the triangle count. Handedness is not
//! corrected.

use nalgebra::Vector3;

use super::data::Mesh;
use super::error::MeshError;

/// UV determinants below this are treated as degenerate.
const MIN_UV_DETERMINANT: f32 = 1e-4;

impl Mesh {
    /// Derive tangents and bitangents for every vertex.
    ///
    /// Fills [`Mesh::tangents`] and [`Mesh::bitangents`] with 3 floats per
    /// vertex, parallel to the position pool. Fails fast with
    /// [`MeshError::MissingTangentAttributes`] when positions, normals, or
    /// texture coordinates are absent.
    pub fn calculate_tangents_and_bitangents(&mut self) -> Result<(), MeshError> {
        if self.positions.is_empty() || self.normals.is_empty() || self.texcoords.is_empty() {
            return Err(MeshError::MissingTangentAttributes);
        }

        let mut tangents = vec![0.0f32; self.positions.len()];
        let mut bitangents = vec![0.0f32; self.positions.len()];

        let position = |i: usize| {
            Vector3::new(
                self.positions[i * 3],
                self.positions[i * 3 + 1],
                self.positions[i * 3 + 2],
            )
        };
        let normal = |i: usize| {
            Vector3::new(
                self.normals[i * 3],
                self.normals[i * 3 + 1],
                self.normals[i * 3 + 2],
            )
        };
        // Faces parsed before the first vt line leave the texcoord pool
        // shorter than the position pool; such vertices read as (0, 0).
        let uv = |i: usize| {
            let fetch = |component: usize| {
                self.texcoords
                    .get(i * self.texcoord_stride + component)
                    .copied()
                    .unwrap_or(0.0)
            };
            (fetch(0), fetch(1))
        };

        for triangle in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            );

            let edge1 = position(i1) - position(i0);
            let edge2 = position(i2) - position(i0);
            let (u0, v0) = uv(i0);
            let (du1, dv1) = (uv(i1).0 - u0, uv(i1).1 - v0);
            let (du2, dv2) = (uv(i2).0 - u0, uv(i2).1 - v0);

            let r_inv = du1 * dv2 - dv1 * du2;
            let guarded = if r_inv.abs() < MIN_UV_DETERMINANT {
                1.0
            } else {
                r_inv
            };
            let r = 1.0 / guarded.abs();

            let tangent = (edge1 * dv2 - edge2 * dv1) * r;
            let bitangent = (edge2 * du1 - edge1 * du2) * r;

            for &index in &[i0, i1, i2] {
                let n = normal(index);
                let t = (tangent - n * n.dot(&tangent)).normalize();
                let b = (bitangent - n * n.dot(&bitangent)).normalize();
                for component in 0..3 {
                    tangents[index * 3 + component] += t[component];
                    bitangents[index * 3 + component] += b[component];
                }
            }
        }

        self.tangents = tangents;
        self.bitangents = bitangents;
        Ok(())
    }
}
