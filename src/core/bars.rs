use super::constants::{
    BAR_BASELINE_PX, BAR_CHANNEL_MAX, BAR_GREEN_PER_PX, BAR_MAX_PX, BAR_RED_KNEE_PX,
    BAR_RED_PER_PX, SAMPLE_SCALE,
};

/// Border colour of a frequency bar, channels in 0..=255 (not necessarily integral).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl BarColor {
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarStyle {
    pub height_px: f64,
    pub color: BarColor,
}

impl BarStyle {
    pub fn css_height(&self) -> String {
        format!("{}px", self.height_px)
    }

    pub fn css_border(&self) -> String {
        format!("1px solid {}", self.color.css())
    }
}

/// Distance of `slot` from the middle bar, plus the middle index itself.
#[inline]
pub fn center_distance(slot: usize, bar_count: usize) -> (usize, usize) {
    let center = bar_count / 2;
    (slot.abs_diff(center), center)
}

/// Height in CSS pixels for one bar.
///
/// Bars fan out symmetrically from the center slot: the center samples the
/// lowest bin and is the most reactive, outer slots sample higher bins and are
/// attenuated linearly down to the baseline. With a single bar there is no
/// falloff (the ratio is taken as 0 instead of 0/0).
pub fn bar_height(slot: usize, bar_count: usize, bins: &[u8], enabled: bool) -> f64 {
    if !enabled || bar_count == 0 {
        return BAR_BASELINE_PX;
    }
    let (adjusted, center) = center_distance(slot, bar_count);
    let stride = bins.len() / bar_count;
    let sample = f64::from(bins.get(adjusted * stride).copied().unwrap_or(0));
    let falloff = if center == 0 {
        0.0
    } else {
        adjusted as f64 / center as f64
    };
    ((sample / f64::from(SAMPLE_SCALE)) * BAR_MAX_PX * (1.0 - falloff)).max(BAR_BASELINE_PX)
}

/// White at rest, green through the middle, red near the top.
pub fn bar_color(height_px: f64) -> BarColor {
    let green = (height_px * BAR_GREEN_PER_PX).floor();
    let red = ((height_px - BAR_RED_KNEE_PX) * BAR_RED_PER_PX).max(0.0);
    let white = (BAR_CHANNEL_MAX - green - red).max(0.0);
    BarColor {
        r: red + white,
        g: green + white,
        b: white,
    }
}

/// Fill `out` with one style per bar. `out` is cleared first.
pub fn bar_styles(bins: &[u8], bar_count: usize, enabled: bool, out: &mut Vec<BarStyle>) {
    out.clear();
    out.extend((0..bar_count).map(|slot| {
        let height_px = bar_height(slot, bar_count, bins, enabled);
        BarStyle {
            height_px,
            color: bar_color(height_px),
        }
    }));
}
