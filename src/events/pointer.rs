use crate::input::{pointer_from_client, PointerState};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Track the mouse over the whole window. Sole writer of `pointer`.
pub fn wire_pointer_move(pointer: Rc<Cell<PointerState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (w, h) = viewport_size(&win);
        pointer.set(pointer_from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w,
            h,
        ));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
