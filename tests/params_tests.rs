// Host-side tests for animation tunables and query-string overrides.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
}

use crate::core::params::*;

#[test]
fn defaults_are_valid() {
    let p = AnimationParams::default();
    assert_eq!(p.smoothing_factor, 0.001);
    assert_eq!(p.rotation_speed, 0.1);
    assert_eq!(p.light_drag, 0.001);
    assert!(p.validate().is_ok());
}

#[test]
fn empty_query_keeps_defaults() {
    let p = AnimationParams::default();
    assert_eq!(p.with_query(""), Ok(p));
    assert_eq!(p.with_query("?"), Ok(p));
}

#[test]
fn query_overrides_known_keys() {
    let p = AnimationParams::default()
        .with_query("?smoothing=0.05&spin=-0.3&drag=0.01&theme=dark")
        .expect("valid query");
    assert_eq!(p.smoothing_factor, 0.05);
    assert_eq!(p.rotation_speed, -0.3);
    assert_eq!(p.light_drag, 0.01);
}

#[test]
fn query_without_question_mark() {
    let p = AnimationParams::default()
        .with_query("spin=1")
        .expect("valid query");
    assert_eq!(p.rotation_speed, 1.0);
}

#[test]
fn bad_number_is_reported() {
    let err = AnimationParams::default()
        .with_query("?spin=fast")
        .unwrap_err();
    assert_eq!(
        err,
        ParamsError::InvalidNumber {
            key: "spin".into(),
            value: "fast".into()
        }
    );
    assert_eq!(err.to_string(), "could not parse `spin=fast` as a number");
}

#[test]
fn smoothing_must_be_a_fraction() {
    for q in ["smoothing=0", "smoothing=1.5", "smoothing=-0.1"] {
        assert!(matches!(
            AnimationParams::default().with_query(q),
            Err(ParamsError::OutOfRange { name: "smoothing_factor", .. })
        ));
    }
    assert!(AnimationParams::default().with_query("smoothing=1").is_ok());
}

#[test]
fn non_finite_values_rejected() {
    let p = AnimationParams {
        light_drag: f32::NAN,
        ..AnimationParams::default()
    };
    assert!(matches!(
        p.validate(),
        Err(ParamsError::NotFinite { name: "light_drag", .. })
    ));
    assert!(AnimationParams::default().with_query("spin=inf").is_err());
}
