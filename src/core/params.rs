use super::constants::{DEFAULT_LIGHT_DRAG, DEFAULT_ROTATION_SPEED, DEFAULT_SMOOTHING_FACTOR};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be in (0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f32 },
    #[error("could not parse `{key}={value}` as a number")]
    InvalidNumber { key: String, value: String },
}

/// Tunables for the per-frame update.
///
/// The position follow is a plain per-frame lerp, so `smoothing_factor`
/// behaves differently at 60 Hz and 144 Hz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    pub smoothing_factor: f32,
    pub rotation_speed: f32,
    pub light_drag: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            light_drag: DEFAULT_LIGHT_DRAG,
        }
    }
}

impl AnimationParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("smoothing_factor", self.smoothing_factor),
            ("rotation_speed", self.rotation_speed),
            ("light_drag", self.light_drag),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NotFinite { name, value });
            }
        }
        if self.smoothing_factor <= 0.0 || self.smoothing_factor > 1.0 {
            return Err(ParamsError::OutOfRange {
                name: "smoothing_factor",
                value: self.smoothing_factor,
            });
        }
        Ok(())
    }

    /// Apply overrides from a URL query string such as `?smoothing=0.01&spin=0.3`.
    ///
    /// Recognized keys: `smoothing`, `spin`, `drag`. Unknown keys are ignored.
    pub fn with_query(mut self, query: &str) -> Result<Self, ParamsError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match key {
                "smoothing" => &mut self.smoothing_factor,
                "spin" => &mut self.rotation_speed,
                "drag" => &mut self.light_drag,
                _ => continue,
            };
            *slot = raw
                .trim()
                .parse::<f32>()
                .map_err(|_| ParamsError::InvalidNumber {
                    key: key.to_string(),
                    value: raw.to_string(),
                })?;
        }
        self.validate()?;
        Ok(self)
    }
}
