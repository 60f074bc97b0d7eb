#![cfg(target_arch = "wasm32")]
use crate::core::bars::BarStyle;
use crate::core::camera::Camera;
use crate::core::runner::{FrameLoop, InstantClock};
use crate::core::{AnimationParams, Animator};
use crate::input::PointerState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn read_params() -> AnimationParams {
    let query = dom::query_string();
    match AnimationParams::default().with_query(&query) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[params] ignoring {:?}: {}", query, e);
            AnimationParams::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = read_params();
    log::info!(
        "[params] smoothing={} spin={} drag={}",
        params.smoothing_factor,
        params.rotation_speed,
        params.light_drag
    );

    // Audio: the context stays suspended until the first user toggle
    let audio_ctx = web::AudioContext::new().map_err(assets::js_err)?;
    let player = Rc::new(RefCell::new(audio::BgmPlayer::new(audio_ctx)?));
    let analyser: audio::AnalyserSlot = Rc::new(RefCell::new(None));

    let checkbox = dom::bgm_checkbox(&document);
    let bars = dom::collect_bars(&document);
    match &checkbox {
        Some(cb) => cb.set_disabled(true),
        None => log::warn!("[dom] no #{} checkbox", constants::BGM_CHECKBOX_ID),
    }
    log::info!("[dom] {} bars", bars.len());

    audio::load_bgm(
        player.clone(),
        analyser.clone(),
        checkbox.clone(),
        constants::BGM_URL,
    );
    let matcap = assets::load_texture(constants::MATCAP_URL);
    let starfield = assets::load_texture(constants::STARS_URL);

    let pointer = Rc::new(Cell::new(PointerState::default()));
    events::wire_pointer_move(pointer.clone());
    if let Some(cb) = &checkbox {
        events::wire_bgm_checkbox(cb.clone(), player.clone());
        events::wire_audio_toggle_key(cb.clone(), player.clone());
    }

    let frame_loop = Rc::new(RefCell::new(FrameLoop::new()));
    events::wire_pagehide(frame_loop.borrow().handle());

    let gpu = frame::init_gpu(&canvas).await;
    let mut camera = Camera::scene(1.0);
    if let Some(g) = &gpu {
        let (w, h) = g.size();
        camera.set_viewport(w, h);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator: Animator::new(params, bars.len()),
        clock: InstantClock::start(),
        camera,
        pointer,
        checkbox,
        analyser,
        bar_styles: Vec::<BarStyle>::with_capacity(bars.len()),
        bars,
        freq_buf: Vec::new(),
        canvas,
        gpu,
        matcap,
        starfield,
    }));
    frame::start_loop(frame_ctx, frame_loop);
    Ok(())
}
