use super::bars::{bar_styles, BarStyle};
use super::constants::SAMPLE_SCALE;
use super::params::AnimationParams;
use crate::input::PointerState;
use glam::Vec3;

/// Orb placement; owned by the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshTransform {
    pub position: Vec3,
    pub rotation_y: f32,
}

/// Rotation of the group holding the three lights. Accumulates without bound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightRigTransform {
    pub rotation_x: f32,
    pub rotation_y: f32,
}

/// The two scalars the orb shaders read every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShaderUniforms {
    pub time: f32,
    pub audio_level: f32,
}

/// Everything one tick reads.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Seconds since the loop started.
    pub elapsed: f32,
    pub pointer: PointerState,
    /// Byte magnitudes from the analyser; `None` until the track has loaded.
    pub frequency_bins: Option<&'a [u8]>,
    /// Whether the music checkbox is ticked.
    pub bars_enabled: bool,
}

/// Mean magnitude normalized to [0, 1). Empty input reads as silence.
#[inline]
pub fn audio_level(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32 / SAMPLE_SCALE
}

/// Where the orb drifts to for a given pointer: away from it horizontally,
/// toward it vertically.
#[inline]
pub fn mesh_target(pointer: PointerState) -> Vec3 {
    Vec3::new(-pointer.x, pointer.y, -pointer.x)
}

/// Persistent per-frame state and the update policy that mutates it.
pub struct Animator {
    params: AnimationParams,
    bar_count: usize,
    pub mesh: MeshTransform,
    pub lights: LightRigTransform,
    pub uniforms: ShaderUniforms,
}

impl Animator {
    /// `bar_count` is fixed for the lifetime of the animator.
    pub fn new(params: AnimationParams, bar_count: usize) -> Self {
        Self {
            params,
            bar_count,
            mesh: MeshTransform::default(),
            lights: LightRigTransform::default(),
            uniforms: ShaderUniforms::default(),
        }
    }

    /// Advance one frame.
    ///
    /// `bars_out` is cleared and, when frequency data is present, refilled with
    /// one style per bar. Without frequency data the audio level is left at its
    /// previous value and no bar styles are produced.
    pub fn tick(&mut self, input: &FrameInput<'_>, bars_out: &mut Vec<BarStyle>) {
        bars_out.clear();
        if let Some(bins) = input.frequency_bins {
            self.uniforms.audio_level = audio_level(bins);
            bar_styles(bins, self.bar_count, input.bars_enabled, bars_out);
        }

        self.mesh.rotation_y = input.elapsed * self.params.rotation_speed;
        self.mesh.position = self
            .mesh
            .position
            .lerp(mesh_target(input.pointer), self.params.smoothing_factor);

        self.lights.rotation_y += input.pointer.x * self.params.light_drag;
        self.lights.rotation_x += input.pointer.y * self.params.light_drag;

        self.uniforms.time = input.elapsed;
    }

    /// The camera keeps the orb centered.
    #[inline]
    pub fn camera_target(&self) -> Vec3 {
        self.mesh.position
    }
}
