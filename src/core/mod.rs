pub mod animate;
pub mod bars;
pub mod camera;
pub mod constants;
pub mod geometry;
pub mod lighting;
pub mod params;
pub mod playback;
pub mod runner;
pub mod texture;

pub use animate::*;
pub use params::{AnimationParams, ParamsError};

// Shaders bundled as string constants
pub static ORB_WGSL: &str = include_str!("../../shaders/orb.wgsl");
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
