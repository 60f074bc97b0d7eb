// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}
mod input {
    include!("../src/input.rs");
}

use crate::input::*;

#[test]
fn corners_map_to_pointer_range() {
    assert_eq!(
        pointer_from_client(0.0, 0.0, 800.0, 600.0),
        PointerState { x: -3.0, y: 3.0 }
    );
    assert_eq!(
        pointer_from_client(800.0, 600.0, 800.0, 600.0),
        PointerState { x: 3.0, y: -3.0 }
    );
}

#[test]
fn center_is_rest_position() {
    assert_eq!(
        pointer_from_client(400.0, 300.0, 800.0, 600.0),
        PointerState::default()
    );
}

#[test]
fn y_axis_points_up() {
    let top = pointer_from_client(10.0, 100.0, 800.0, 600.0);
    let bottom = pointer_from_client(10.0, 500.0, 800.0, 600.0);
    assert!(top.y > bottom.y);
}

#[test]
fn degenerate_viewport_is_rest_on_that_axis() {
    let p = pointer_from_client(50.0, 150.0, 0.0, 600.0);
    assert_eq!(p.x, 0.0);
    assert_eq!(p.y, 1.5);
    let q = pointer_from_client(200.0, 50.0, 800.0, 0.0);
    assert_eq!(q.x, -1.5);
    assert_eq!(q.y, 0.0);
}

#[test]
fn only_space_toggles_audio() {
    assert!(is_audio_toggle_key("Space"));
    for code in ["KeyS", "Enter", " ", "space", ""] {
        assert!(!is_audio_toggle_key(code), "{code:?}");
    }
}
