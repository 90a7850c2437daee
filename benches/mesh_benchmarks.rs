use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;

use wavefront_mesh::layout::{Attribute, Layout};
use wavefront_mesh::mesh::{Mesh, MeshOptions};

/// Build a synthetic OBJ grid of `n` by `n` quads with full v/vt/vn data
/// and a material change every 8 rows.
fn grid_obj(n: usize) -> String {
    let mut out = String::new();
    for y in 0..=n {
        for x in 0..=n {
            let (u, v) = (x as f32 / n as f32, y as f32 / n as f32);
            let _ = writeln!(out, "v {u} {v} 0");
            let _ = writeln!(out, "vt {u} {v}");
            let _ = writeln!(out, "vn 0 0 1");
        }
    }
    for y in 0..n {
        if y % 8 == 0 {
            let _ = writeln!(out, "usemtl band{}", y / 8);
        }
        for x in 0..n {
            let a = y * (n + 1) + x + 1;
            let b = a + 1;
            let c = b + n + 1;
            let d = a + n + 1;
            let _ = writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c} {d}/{d}/{d}");
        }
    }
    out
}

fn geometry_layout() -> Layout {
    Layout::new(vec![
        Attribute::position(),
        Attribute::normal(),
        Attribute::uv(),
        Attribute::material_index(),
        Attribute::material_enabled(),
    ])
    .unwrap_or_else(|e| panic!("layout: {e}"))
}

// ---------------------------------------------------------------------------
// OBJ parsing
// ---------------------------------------------------------------------------

fn bench_parse_grid_small(c: &mut Criterion) {
    let source = grid_obj(16);
    c.bench_function("parse_grid_16x16", |b| {
        b.iter(|| Mesh::parse(black_box(&source), &MeshOptions::default()));
    });
}

fn bench_parse_grid_large(c: &mut Criterion) {
    let source = grid_obj(64);
    c.bench_function("parse_grid_64x64", |b| {
        b.iter(|| Mesh::parse(black_box(&source), &MeshOptions::default()));
    });
}

fn bench_parse_grid_with_tangents(c: &mut Criterion) {
    let source = grid_obj(32);
    let options = MeshOptions {
        calc_tangents_and_bitangents: true,
        ..MeshOptions::default()
    };
    c.bench_function("parse_grid_32x32_tangents", |b| {
        b.iter(|| Mesh::parse(black_box(&source), &options));
    });
}

// ---------------------------------------------------------------------------
// Buffer packing
// ---------------------------------------------------------------------------

fn bench_pack_vertex_buffer(c: &mut Criterion) {
    let source = grid_obj(32);
    let mesh = Mesh::parse(&source, &MeshOptions::default()).unwrap_or_else(|e| panic!("{e}"));
    let layout = geometry_layout();
    c.bench_function("pack_vertex_buffer_32x32", |b| {
        b.iter(|| black_box(&mesh).pack_vertex_buffer(black_box(&layout)));
    });
}

fn bench_pack_index_buffer(c: &mut Criterion) {
    let source = grid_obj(32);
    let mesh = Mesh::parse(&source, &MeshOptions::default()).unwrap_or_else(|e| panic!("{e}"));
    c.bench_function("pack_index_buffer_32x32", |b| {
        b.iter(|| black_box(&mesh).pack_index_buffer());
    });
}

// ---------------------------------------------------------------------------
// Layout construction
// ---------------------------------------------------------------------------

fn bench_layout_build(c: &mut Criterion) {
    c.bench_function("layout_build_geometry", |b| {
        b.iter(|| black_box(geometry_layout()));
    });
}

criterion_group!(
    benches,
    bench_parse_grid_small,
    bench_parse_grid_large,
    bench_parse_grid_with_tangents,
    bench_pack_vertex_buffer,
    bench_pack_index_buffer,
    bench_layout_build,
);
criterion_main!(benches);
