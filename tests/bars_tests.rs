// Host-side tests for the frequency bar layout and colour ramp.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod bars {
        include!("../src/core/bars.rs");
    }
}

use crate::core::bars::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn color_ramp_hits_known_points() {
    assert_eq!(
        bar_color(0.0),
        BarColor {
            r: 255.0,
            g: 255.0,
            b: 255.0
        }
    );
    assert_eq!(
        bar_color(10.0),
        BarColor {
            r: 205.0,
            g: 255.0,
            b: 205.0
        }
    );
    assert_eq!(
        bar_color(20.0),
        BarColor {
            r: 255.0,
            g: 100.0,
            b: 0.0
        }
    );
}

#[test]
fn color_channels_stay_in_byte_range() {
    for i in 0..=200 {
        let c = bar_color(i as f64 * 0.1);
        for ch in [c.r, c.g, c.b] {
            assert!((0.0..=255.0).contains(&ch), "channel {ch} at height {i}");
        }
    }
}

#[test]
fn disabled_bars_sit_at_baseline() {
    let bins = [255u8; 256];
    for slot in 0..7 {
        assert_eq!(bar_height(slot, 7, &bins, false), 2.0);
    }
}

#[test]
fn loud_spectrum_peaks_in_the_middle() {
    let bins = [255u8; 256];
    let h: Vec<f64> = (0..5).map(|s| bar_height(s, 5, &bins, true)).collect();
    assert!(approx(h[2], 255.0 / 256.0 * 20.0));
    assert!(approx(h[1], 255.0 / 256.0 * 10.0));
    assert!(approx(h[0], 2.0));
    assert_eq!(h[1], h[3]);
    assert_eq!(h[0], h[4]);
}

fn assert_falls_off(bins: &[u8], n: usize) {
    let center = n / 2;
    for slot in center..n - 1 {
        assert!(
            bar_height(slot, n, bins, true) >= bar_height(slot + 1, n, bins, true),
            "n={n} slot={slot}"
        );
    }
    for slot in 1..=center {
        assert!(
            bar_height(slot, n, bins, true) >= bar_height(slot - 1, n, bins, true),
            "n={n} slot={slot}"
        );
    }
}

#[test]
fn heights_fall_off_away_from_center() {
    assert_falls_off(&[200u8; 256], 9);
}

#[test]
fn decreasing_spectrum_falls_off_too() {
    let bins: Vec<u8> = (0..256).map(|i| 255 - i as u8).collect();
    for n in [1, 2, 3, 4, 7, 8, 9, 16, 33] {
        assert_falls_off(&bins, n);
    }
}

#[test]
fn heights_never_drop_below_baseline() {
    let silent = [0u8; 256];
    for slot in 0..5 {
        assert_eq!(bar_height(slot, 5, &silent, true), 2.0);
    }
}

#[test]
fn single_bar_has_no_falloff() {
    let mut bins = [0u8; 256];
    bins[0] = 128;
    assert!(approx(bar_height(0, 1, &bins, true), 10.0));
}

#[test]
fn more_bars_than_bins_reuse_the_first_bin() {
    let bins = [200u8, 0, 0];
    assert!(approx(bar_height(2, 5, &bins, true), 15.625));
    assert!(approx(bar_height(1, 5, &bins, true), 7.8125));
}

#[test]
fn empty_spectrum_reads_as_silence() {
    assert_eq!(bar_height(0, 3, &[], true), 2.0);
    assert_eq!(bar_height(1, 3, &[], true), 2.0);
}

#[test]
fn bar_styles_refills_output() {
    let bins = [255u8; 256];
    let mut out = vec![
        BarStyle {
            height_px: 99.0,
            color: bar_color(0.0)
        };
        12
    ];
    bar_styles(&bins, 5, true, &mut out);
    assert_eq!(out.len(), 5);
    assert!(approx(out[2].height_px, 255.0 / 256.0 * 20.0));
    assert_eq!(out[2].color, bar_color(out[2].height_px));

    bar_styles(&bins, 0, true, &mut out);
    assert!(out.is_empty());
}

#[test]
fn heights_keep_double_precision() {
    let bins = [200u8; 256];
    let h = bar_height(1, 7, &bins, true);
    let expected = (200.0 / 256.0) * 20.0 * (1.0 - 2.0 / 3.0);
    assert_eq!(h, expected);
    let style = BarStyle {
        height_px: h,
        color: bar_color(h),
    };
    assert_eq!(style.css_height(), format!("{expected}px"));
    assert!(style.css_height().len() > "5.208333px".len());
}

#[test]
fn css_strings() {
    let style = BarStyle {
        height_px: 2.0,
        color: bar_color(2.0),
    };
    assert_eq!(style.css_height(), "2px");
    assert_eq!(style.css_border(), "1px solid rgb(245, 255, 245)");
}
