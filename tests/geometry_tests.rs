// Host-side tests for sphere mesh generation.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec3;

#[test]
fn counts_for_scene_spheres() {
    let mesh = uv_sphere(1.0, 64, 64);
    assert_eq!(mesh.vertices.len(), 65 * 65);
    assert_eq!(mesh.indices.len(), 24192);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn vertices_sit_on_the_surface() {
    for radius in [1.0_f32, 10.0] {
        let mesh = uv_sphere(radius, 16, 12);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            assert!((p.length() - radius).abs() < 1e-4 * radius);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(p) > 0.0);
        }
    }
}

#[test]
fn triangles_face_outward() {
    let mesh = uv_sphere(1.0, 8, 6);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "inward triangle {tri:?}");
    }
}

#[test]
fn poles_and_seam() {
    let mesh = uv_sphere(2.0, 8, 4);
    let north = &mesh.vertices[0];
    let south = &mesh.vertices[mesh.vertices.len() - 1];
    assert!((north.position[1] - 2.0).abs() < 1e-5);
    assert!((south.position[1] + 2.0).abs() < 1e-5);
    assert_eq!(north.uv[1], 1.0);
    assert_eq!(south.uv[1], 0.0);

    // First and last column of a middle row share a position but not a u
    let row = 9;
    let first = &mesh.vertices[2 * row];
    let last = &mesh.vertices[2 * row + 8];
    assert!(Vec3::from_array(first.position).distance(Vec3::from_array(last.position)) < 1e-5);
    assert_eq!(first.uv[0], 0.0);
    assert_eq!(last.uv[0], 1.0);
}

#[test]
fn tiny_segment_counts_are_clamped() {
    let mesh = uv_sphere(1.0, 0, 0);
    assert_eq!(mesh.vertices.len(), 4 * 3);
    assert_eq!(mesh.indices.len(), 3 * 6);
}
