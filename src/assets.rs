use crate::core::texture::{decode_rgba, DecodedImage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded image waiting for the next frame to upload it.
pub type TextureSlot = Rc<RefCell<Option<DecodedImage>>>;

pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub async fn fetch_array_buffer(url: &str) -> anyhow::Result<js_sys::ArrayBuffer> {
    let win = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_val = JsFuture::from(win.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_val.dyn_into().map_err(js_err)?;

    if !resp.ok() {
        anyhow::bail!("HTTP {} {} for {}", resp.status(), resp.status_text(), url);
    }

    let buf_promise = resp.array_buffer().map_err(js_err)?;
    let buf_val = JsFuture::from(buf_promise).await.map_err(js_err)?;
    buf_val.dyn_into().map_err(js_err)
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let buf = fetch_array_buffer(url).await?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode an image in the background. On failure the slot stays
/// empty and the placeholder texture remains bound.
pub fn load_texture(url: &'static str) -> TextureSlot {
    let slot: TextureSlot = Rc::new(RefCell::new(None));
    let slot_task = slot.clone();
    spawn_local(async move {
        let decoded = match fetch_bytes(url).await {
            Ok(bytes) => decode_rgba(&bytes),
            Err(e) => Err(e),
        };
        match decoded {
            Ok(img) => {
                log::info!("[assets] {} loaded ({}x{})", url, img.width, img.height);
                *slot_task.borrow_mut() = Some(img);
            }
            Err(e) => log::warn!("[assets] {} unavailable: {:?}", url, e),
        }
    });
    slot
}
