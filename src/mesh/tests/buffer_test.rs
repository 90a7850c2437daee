//! Integration test: packed vertex and index buffers, end to end.

use crate::layout::{Attribute, AttributeKey, Layout};

use super::{planes_mesh, planes_mesh_with_materials};

fn read_f32(buffer: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        buffer[offset],
        buffer[offset + 1],
        buffer[offset + 2],
        buffer[offset + 3],
    ])
}

#[test]
fn test_add_material_library_binds_referenced_materials() {
    let mesh = planes_mesh_with_materials();

    assert_eq!(mesh.materials_by_index.len(), 2);
    assert_eq!(mesh.materials_by_index[&0].name, "red");
    assert_eq!(mesh.materials_by_index[&0].diffuse, [0.8, 0.1, 0.1]);
    assert_eq!(mesh.materials_by_index[&1].name, "blue");
    assert_eq!(mesh.materials_by_index[&1].dissolve, 0.5);
}

#[test]
fn test_pack_vertex_buffer_end_to_end() {
    let mesh = planes_mesh_with_materials();
    let layout = Layout::new(vec![
        Attribute::position(),
        Attribute::uv(),
        Attribute::diffuse(),
        Attribute::specular_exponent(),
        Attribute::material_index(),
        Attribute::material_enabled(),
    ])
    .unwrap();

    // 12 + 8 + 12 + 4 + 2 + 2 = 40 bytes, no padding needed.
    assert_eq!(layout.stride(), 40);
    let buffer = mesh.pack_vertex_buffer(&layout);
    assert_eq!(buffer.len(), mesh.vertex_count() * 40);

    let diffuse = layout.slot(AttributeKey::Diffuse).unwrap().offset;
    let exponent = layout.slot(AttributeKey::SpecularExponent).unwrap().offset;
    let index = layout.slot(AttributeKey::MaterialIndex).unwrap().offset;
    let enabled = layout.slot(AttributeKey::MaterialEnabled).unwrap().offset;

    // Vertex 0 belongs to "red", vertex 4 to "blue".
    assert_eq!(read_f32(&buffer, diffuse), 0.8);
    assert_eq!(read_f32(&buffer, exponent), 50.0);
    assert_eq!(i16::from_le_bytes([buffer[index], buffer[index + 1]]), 0);
    assert_eq!(u16::from_le_bytes([buffer[enabled], buffer[enabled + 1]]), 1);

    let base = 4 * 40;
    assert_eq!(read_f32(&buffer, base + diffuse), 0.1);
    assert_eq!(read_f32(&buffer, base + diffuse + 8), 0.8);
    assert_eq!(
        i16::from_le_bytes([buffer[base + index], buffer[base + index + 1]]),
        1
    );
    // Position flows through untouched.
    assert_eq!(read_f32(&buffer, base), 1.0);
}

#[test]
fn test_pack_index_buffer_u16_little_endian() {
    let mesh = planes_mesh();
    let buffer = mesh.pack_index_buffer();

    assert_eq!(buffer.len(), mesh.index_count() * 2);
    let first: Vec<u16> = buffer
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(first, vec![0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4]);
}

#[test]
fn test_pack_index_buffer_for_materials_selects_buckets() {
    let mesh = planes_mesh();

    // Reversed material order reverses the bucket order in the output.
    let buffer = mesh.pack_index_buffer_for_materials(&[1, 0]);
    let indices: Vec<u16> = buffer
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(indices, vec![4, 5, 6, 6, 7, 4, 0, 1, 2, 2, 3, 0]);

    // Unknown bucket indices are skipped.
    let missing = mesh.pack_index_buffer_for_materials(&[7]);
    assert!(missing.is_empty());
}
