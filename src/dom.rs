use crate::constants::{BAR_SELECTOR, BGM_CHECKBOX_ID, MAX_PIXEL_RATIO};
use crate::core::bars::BarStyle;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_RATIO)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = pixel_ratio(&w);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// The music checkbox, if the page has one.
pub fn bgm_checkbox(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(BGM_CHECKBOX_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Bar elements in document order. Read once; later DOM changes are not seen.
pub fn collect_bars(document: &web::Document) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(BAR_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn apply_bar_styles(bars: &[web::HtmlElement], styles: &[BarStyle]) {
    for (el, style) in bars.iter().zip(styles) {
        let css = el.style();
        _ = css.set_property("height", &style.css_height());
        _ = css.set_property("border-left", &style.css_border());
    }
}

/// `location.search` of the page, empty when unavailable.
pub fn query_string() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
