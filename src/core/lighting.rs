use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::PI;

pub const LIGHT_COUNT: usize = 3;
pub const LIGHT_RADIUS: f32 = 5.0;
pub const LIGHT_INTENSITY: f32 = 5.0;

// Red, blue, green at 0, 120 and 240 degrees
pub const LIGHT_COLORS: [[f32; 3]; LIGHT_COUNT] =
    [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]];

/// Light positions inside the rig, evenly spaced on the XZ circle.
pub fn rig_light_positions() -> [Vec3; LIGHT_COUNT] {
    std::array::from_fn(|i| {
        let angle = i as f32 * 2.0 * PI / LIGHT_COUNT as f32;
        Vec3::new(angle.cos() * LIGHT_RADIUS, 0.0, angle.sin() * LIGHT_RADIUS)
    })
}

/// Rig orientation for the given accumulated rotation (X applied before Y
/// in the parent frame, like an XYZ Euler with zero Z).
#[inline]
pub fn rig_rotation(rotation_x: f32, rotation_y: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation_x, rotation_y, 0.0)
}

/// World-space unit vectors pointing from the origin toward each light.
///
/// The lights aim at the origin, so this is the direction light arrives from.
pub fn light_directions(rotation_x: f32, rotation_y: f32) -> [Vec3; LIGHT_COUNT] {
    let q = rig_rotation(rotation_x, rotation_y);
    rig_light_positions().map(|p| (q * p).normalize())
}
