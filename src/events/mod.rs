pub mod keyboard;
pub mod pointer;

use crate::audio::BgmPlayer;
use crate::core::runner::StopHandle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use keyboard::wire_audio_toggle_key;
pub use pointer::wire_pointer_move;

// Checkbox change -> play/pause
pub fn wire_bgm_checkbox(checkbox: web::HtmlInputElement, player: Rc<RefCell<BgmPlayer>>) {
    let cb = checkbox.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        player.borrow_mut().handle_toggle(cb.checked());
    }) as Box<dyn FnMut(_)>);
    _ = checkbox.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Stop the frame loop when the page is being torn down (not when cached)
pub fn wire_pagehide(stop: StopHandle) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            if stop.stop_on_pagehide(ev.persisted()) {
                log::info!("[loop] pagehide, stopping");
            } else {
                log::info!("[loop] pagehide into back/forward cache, keeping loop");
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
