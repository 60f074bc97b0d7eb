use crate::audio::BgmPlayer;
use crate::input::is_audio_toggle_key;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    checkbox: &web::HtmlInputElement,
    player: &Rc<RefCell<BgmPlayer>>,
) {
    if !is_audio_toggle_key(&ev.code()) {
        return;
    }
    // Flips the box even while it is disabled; playback ignores it until loaded
    let checked = !checkbox.checked();
    checkbox.set_checked(checked);
    log::info!("[keys] music={}", checked);
    player.borrow_mut().handle_toggle(checked);
    ev.prevent_default();
}

// Space toggles the music checkbox
pub fn wire_audio_toggle_key(checkbox: web::HtmlInputElement, player: Rc<RefCell<BgmPlayer>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &checkbox, &player);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
