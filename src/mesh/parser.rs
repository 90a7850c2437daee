//! OBJ geometry directive parsing.
//!
//! The parser walks the text line by line, appending `v`/`vn`/`vt`
//! components to flat pools, and resolves `f` lines against those pools.
//! Face vertex-groups (`16/92/11`) are deduplicated while parsing: the
//! group string combined with the active material index keys a map from
//! seen groups to their assigned output index, so each unique
//! (position, texcoord, normal, material) combination is materialized once
//! no matter how many faces reference it.

use std::collections::HashMap;

use super::data::Mesh;
use super::error::MeshError;

/// Parse-time configuration for [`Mesh::parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshOptions {
    /// Keep a third ("w") texture coordinate component. Source lines that
    /// supply only u and v get a default w of 0; when disabled, a supplied
    /// third component is truncated away.
    pub enable_w_texcoord: bool,
    /// Derive tangents and bitangents immediately after parsing. Requires
    /// the source to have normals and texture coordinates.
    pub calc_tangents_and_bitangents: bool,
}

impl Mesh {
    /// Parse OBJ text into a deduplicated mesh.
    ///
    /// Recognizes `v`, `vn`, `vt`, `usemtl`, and `f` directives; comment
    /// and blank lines are ignored and any other directive is skipped with
    /// a warning. Numeric tokens are not validated — garbage values parse
    /// to NaN, and absent or unparseable face index fields zero-fill the
    /// components they would have copied.
    pub fn parse(data: &str, options: &MeshOptions) -> Result<Self, MeshError> {
        let texcoord_stride = if options.enable_w_texcoord { 3 } else { 2 };

        // Raw pools, filled verbatim from the v/vn/vt sections.
        let mut position_pool: Vec<f32> = Vec::new();
        let mut normal_pool: Vec<f32> = Vec::new();
        let mut texcoord_pool: Vec<f32> = Vec::new();

        let mut material_names: Vec<String> = Vec::new();
        let mut material_indices: HashMap<String, usize> = HashMap::new();
        let mut current_material: i32 = -1;
        let mut current_bucket: usize = 0;

        // Deduplicated output.
        let mut positions: Vec<f32> = Vec::new();
        let mut normals: Vec<f32> = Vec::new();
        let mut texcoords: Vec<f32> = Vec::new();
        let mut vertex_material_indices: Vec<i32> = Vec::new();
        let mut buckets: Vec<Vec<u32>> = vec![Vec::new()];
        let mut seen: HashMap<String, u32> = HashMap::new();
        let mut next_index: u32 = 0;

        for line in data.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let directive = tokens.next().unwrap_or_default();
            let rest: Vec<&str> = tokens.collect();

            match directive {
                "v" => position_pool.extend(rest.iter().map(|t| float(t))),
                "vn" => normal_pool.extend(rest.iter().map(|t| float(t))),
                "vt" => {
                    // Truncate or default the third component so the pool
                    // stays uniformly strided.
                    let take = rest.len().min(texcoord_stride);
                    texcoord_pool.extend(rest[..take].iter().map(|t| float(t)));
                    for _ in take..texcoord_stride {
                        texcoord_pool.push(0.0);
                    }
                }
                "usemtl" => {
                    let name = rest.first().copied().unwrap_or_default();
                    let index = match material_indices.get(name) {
                        Some(&index) => index,
                        None => {
                            let index = material_names.len();
                            material_names.push(name.to_string());
                            material_indices.insert(name.to_string(), index);
                            // Bucket 0 pre-exists for the default material.
                            if index > 0 {
                                buckets.push(Vec::new());
                            }
                            index
                        }
                    };
                    current_material = index as i32;
                    current_bucket = index;
                }
                "f" => {
                    if rest.len() < 3 {
                        log::warn!("face with fewer than 3 vertex groups: {line:?}");
                        continue;
                    }
                    for triangle in triangulate(&rest) {
                        for group in triangle {
                            let key = format!("{group},{current_material}");
                            if let Some(&index) = seen.get(&key) {
                                buckets[current_bucket].push(index);
                                continue;
                            }
                            let fields: Vec<&str> = group.split('/').collect();
                            // The normal index is the last field: either the
                            // 3rd (v/vt/vn) or the 2nd (v//vn or v/vn with no
                            // texcoords in the file).
                            copy_components(&position_pool, fields[0], 3, 3, &mut positions);
                            if !texcoord_pool.is_empty() {
                                copy_components(
                                    &texcoord_pool,
                                    fields.get(1).copied().unwrap_or_default(),
                                    texcoord_stride,
                                    texcoord_stride,
                                    &mut texcoords,
                                );
                            }
                            copy_components(
                                &normal_pool,
                                fields.last().copied().unwrap_or_default(),
                                3,
                                3,
                                &mut normals,
                            );
                            vertex_material_indices.push(current_material);
                            seen.insert(key, next_index);
                            buckets[current_bucket].push(next_index);
                            next_index += 1;
                        }
                    }
                }
                _ => {
                    log::warn!("don't know how to parse the OBJ directive: {directive:?}");
                }
            }
        }

        let indices: Vec<u32> = buckets.iter().flatten().copied().collect();

        let mut mesh = Mesh {
            name: None,
            positions,
            normals,
            texcoords,
            texcoord_stride,
            vertex_material_indices,
            indices,
            indices_per_material: buckets,
            material_names,
            material_indices,
            materials_by_index: HashMap::new(),
            tangents: Vec::new(),
            bitangents: Vec::new(),
        };

        if options.calc_tangents_and_bitangents {
            mesh.calculate_tangents_and_bitangents()?;
        }

        Ok(mesh)
    }
}

/// Numeric OBJ tokens are not validated; garbage propagates as NaN.
fn float(token: &str) -> f32 {
    token.parse().unwrap_or(f32::NAN)
}

/// Copy `count` components for a 1-based pool index into `out`.
///
/// Absent, unparseable, or out-of-range indices zero-fill instead.
fn copy_components(pool: &[f32], index_token: &str, stride: usize, count: usize, out: &mut Vec<f32>) {
    let base = match index_token.parse::<usize>() {
        Ok(index) if index >= 1 => (index - 1) * stride,
        _ => {
            out.extend(std::iter::repeat(0.0).take(count));
            return;
        }
    };
    for component in 0..count {
        out.push(pool.get(base + component).copied().unwrap_or(0.0));
    }
}

/// Decompose an ordered face vertex-group list (length >= 3) into triangles.
///
/// A quad splits along the v0-v2 diagonal; longer faces fan out from v0.
pub(crate) fn triangulate<'a>(groups: &[&'a str]) -> Vec<[&'a str; 3]> {
    debug_assert!(groups.len() >= 3);
    match groups.len() {
        3 => vec![[groups[0], groups[1], groups[2]]],
        4 => vec![
            [groups[0], groups[1], groups[2]],
            [groups[2], groups[3], groups[0]],
        ],
        n => (1..n - 1)
            .map(|i| [groups[0], groups[i], groups[i + 1]])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangulate_triangle_passthrough() {
        assert_eq!(triangulate(&["a", "b", "c"]), vec![["a", "b", "c"]]);
    }

    #[test]
    fn test_triangulate_quad_diagonal() {
        assert_eq!(
            triangulate(&["a", "b", "c", "d"]),
            vec![["a", "b", "c"], ["c", "d", "a"]]
        );
    }

    #[test]
    fn test_triangulate_fan() {
        assert_eq!(
            triangulate(&["a", "b", "c", "d", "e"]),
            vec![["a", "b", "c"], ["a", "c", "d"], ["a", "d", "e"]]
        );
    }

    #[test]
    fn test_copy_components_zero_fills_bad_index() {
        let pool = [1.0, 2.0, 3.0];
        let mut out = Vec::new();
        copy_components(&pool, "", 3, 3, &mut out);
        copy_components(&pool, "x", 3, 3, &mut out);
        assert_eq!(out, vec![0.0; 6]);
    }

    #[test]
    fn test_copy_components_fetches_one_based() {
        let pool = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = Vec::new();
        copy_components(&pool, "2", 3, 3, &mut out);
        assert_eq!(out, vec![4.0, 5.0, 6.0]);
    }
}
