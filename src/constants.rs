// Page wiring and render tuning constants used by the web frontend.

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const BGM_CHECKBOX_ID: &str = "bgm";
pub const BAR_SELECTOR: &str = ".bgm hr";

// Assets
pub const MATCAP_URL: &str = "/assets/matcap3.png";
pub const STARS_URL: &str = "/assets/stars.jpg";
pub const BGM_URL: &str = "/assets/bgm.mp3";

// Canvas backing store never exceeds 2x CSS pixels
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Geometry
pub const ORB_RADIUS: f32 = 1.0;
pub const STARS_RADIUS: f32 = 10.0;
pub const SPHERE_SEGMENTS: u32 = 64;

// Background behind the starfield (only visible if the sphere fails to draw)
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
