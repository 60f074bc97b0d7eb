// Host-side tests for the light rig and scene camera.

#![allow(dead_code)]
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod lighting {
        include!("../src/core/lighting.rs");
    }
}

use crate::core::camera::*;
use crate::core::lighting::*;
use glam::{Vec3, Vec4Swizzles};
use std::f32::consts::FRAC_PI_2;

#[test]
fn lights_are_evenly_spaced_on_a_circle() {
    let p = rig_light_positions();
    assert!(p[0].abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
    for v in p {
        assert!((v.length() - LIGHT_RADIUS).abs() < 1e-4);
        assert_eq!(v.y, 0.0);
    }
    for i in 0..LIGHT_COUNT {
        let a = p[i].normalize();
        let b = p[(i + 1) % LIGHT_COUNT].normalize();
        assert!((a.dot(b) + 0.5).abs() < 1e-5, "120 degrees apart");
    }
}

#[test]
fn light_colors_are_primaries() {
    for c in LIGHT_COLORS {
        assert_eq!(c.iter().sum::<f32>(), 1.0);
    }
}

#[test]
fn directions_follow_rig_rotation() {
    let rest = light_directions(0.0, 0.0);
    assert!(rest[0].abs_diff_eq(Vec3::X, 1e-5));

    let turned = light_directions(0.0, FRAC_PI_2);
    assert!(turned[0].abs_diff_eq(Vec3::NEG_Z, 1e-5));

    for d in light_directions(0.37, -2.5) {
        assert!((d.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn tilted_rig_leaves_the_xz_plane() {
    let dirs = light_directions(0.5, 0.0);
    assert!(dirs.iter().any(|d| d.y.abs() > 0.1));
}

#[test]
fn scene_camera_looks_down_negative_z() {
    let cam = Camera::scene(16.0 / 9.0);
    assert_eq!(cam.eye, CAMERA_EYE);
    let eye_in_view = cam.view_matrix() * cam.eye.extend(1.0);
    assert!(eye_in_view.xyz().length() < 1e-5);
    let origin_in_view = cam.view_matrix() * Vec3::ZERO.extend(1.0);
    assert!(origin_in_view.z < 0.0);
}

#[test]
fn target_projects_to_screen_center() {
    let mut cam = Camera::scene(1.0);
    cam.look_at(Vec3::new(-0.5, 0.25, -0.5));
    let clip = cam.view_projection() * cam.target.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn viewport_sets_aspect() {
    let mut cam = Camera::scene(1.0);
    cam.set_viewport(800, 400);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(0, 400);
    assert_eq!(cam.aspect, 2.0);
}
