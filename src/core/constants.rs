// Animation and UI tuning constants shared by the frame loop and its tests.

// Mesh follow and spin
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.001; // lerp factor applied once per frame
pub const DEFAULT_ROTATION_SPEED: f32 = 0.1; // radians per second around Y
pub const DEFAULT_LIGHT_DRAG: f32 = 0.001; // light rig radians per pointer unit per frame

// Frequency bars (f64, written straight into inline styles)
pub const BAR_BASELINE_PX: f64 = 2.0;
pub const BAR_MAX_PX: f64 = 20.0;
pub const SAMPLE_SCALE: f32 = 256.0; // byte magnitudes are normalized by this

// Bar colour ramp
pub const BAR_GREEN_PER_PX: f64 = 5.0;
pub const BAR_RED_KNEE_PX: f64 = 10.0;
pub const BAR_RED_PER_PX: f64 = 25.5;
pub const BAR_CHANNEL_MAX: f64 = 255.0;

// Pointer mapping: normalized device coords are scaled into [-3, 3]
pub const POINTER_RANGE: f32 = 3.0;

// Audio
pub const ANALYSER_FFT_SIZE: u32 = 512;
pub const BGM_VOLUME: f32 = 0.5;
