use crate::assets::TextureSlot;
use crate::audio::{self, AnalyserSlot};
use crate::core::bars::BarStyle;
use crate::core::camera::Camera;
use crate::core::runner::{Clock, FrameLoop, InstantClock, LoopState};
use crate::core::{Animator, FrameInput};
use crate::dom;
use crate::input::PointerState;
use crate::render::{self, SceneUniforms};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback owns or reads.
pub struct FrameContext<'a> {
    pub animator: Animator,
    pub clock: InstantClock,
    pub camera: Camera,

    // Written by event listeners, read here
    pub pointer: Rc<Cell<PointerState>>,
    pub checkbox: Option<web::HtmlInputElement>,
    pub analyser: AnalyserSlot,

    pub bars: Vec<web::HtmlElement>,
    pub freq_buf: Vec<u8>,
    pub bar_styles: Vec<BarStyle>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub matcap: TextureSlot,
    pub starfield: TextureSlot,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.clock.elapsed_secs();
        let bars_enabled = self.checkbox.as_ref().is_some_and(|cb| cb.checked());

        {
            let analyser = self.analyser.borrow();
            let bins = match analyser.as_ref() {
                Some(a) => {
                    audio::read_frequency_data(a, &mut self.freq_buf);
                    Some(self.freq_buf.as_slice())
                }
                None => None,
            };
            let input = FrameInput {
                elapsed,
                pointer: self.pointer.get(),
                frequency_bins: bins,
                bars_enabled,
            };
            self.animator.tick(&input, &mut self.bar_styles);
        }
        if !self.bar_styles.is_empty() {
            dom::apply_bar_styles(&self.bars, &self.bar_styles);
        }

        self.camera.look_at(self.animator.camera_target());

        if let Some(g) = &mut self.gpu {
            if let Some(img) = self.matcap.borrow_mut().take() {
                g.set_matcap(&img);
            }
            if let Some(img) = self.starfield.borrow_mut().take() {
                g.set_starfield(&img);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let (w, h) = g.size();
            self.camera.set_viewport(w, h);

            let uniforms = SceneUniforms::new(
                &self.camera,
                &self.animator.mesh,
                &self.animator.lights,
                &self.animator.uniforms,
            );
            match g.render(&uniforms) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost, reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until `frame_loop` is stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, frame_loop: Rc<RefCell<FrameLoop>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let state = frame_loop
            .borrow_mut()
            .step(|| frame_ctx.borrow_mut().frame());
        if state == LoopState::Stopped {
            log::info!("[loop] stopped after {} frames", frame_loop.borrow().ticks());
            // Drop the self-referencing callback, freeing the frame context and GPU state
            drop(tick_clone.borrow_mut().take());
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
