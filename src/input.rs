use crate::core::constants::POINTER_RANGE;

/// Latest pointer position, roughly in [-3, 3] on both axes (+y is up).
///
/// Written by the mousemove listener, read once per frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Map client pixel coordinates over a `width` x `height` viewport to pointer space.
///
/// A degenerate viewport maps to the rest position on that axis.
#[inline]
pub fn pointer_from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> PointerState {
    let x = if width > 0.0 {
        ((client_x / width) * 2.0 - 1.0) * POINTER_RANGE
    } else {
        0.0
    };
    let y = if height > 0.0 {
        (-(client_y / height) * 2.0 + 1.0) * POINTER_RANGE
    } else {
        0.0
    };
    PointerState { x, y }
}

pub const AUDIO_TOGGLE_CODE: &str = "Space";

/// `KeyboardEvent.code` that flips the background music checkbox.
#[inline]
pub fn is_audio_toggle_key(code: &str) -> bool {
    code == AUDIO_TOGGLE_CODE
}
