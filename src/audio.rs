use crate::assets::{fetch_array_buffer, js_err};
use crate::core::constants::{ANALYSER_FFT_SIZE, BGM_VOLUME};
use crate::core::playback::{toggle_action, PlaybackClock, ToggleAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Analyser shared with the frame loop; empty until the track has decoded.
pub type AnalyserSlot = Rc<RefCell<Option<web::AnalyserNode>>>;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

// Create analyser sized for 256 frequency bins
pub fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<web::AnalyserNode> {
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(js_err)?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    Ok(analyser)
}

/// Read the current byte spectrum into `buf`, resizing it to the bin count.
pub fn read_frequency_data(analyser: &web::AnalyserNode, buf: &mut Vec<u8>) {
    let bins = analyser.frequency_bin_count() as usize;
    if buf.len() != bins {
        buf.resize(bins, 0);
    }
    analyser.get_byte_frequency_data(buf);
}

pub async fn decode_track(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let data = fetch_array_buffer(url).await?;
    let promise = audio_ctx.decode_audio_data(&data).map_err(js_err)?;
    let decoded = JsFuture::from(promise).await.map_err(js_err)?;
    decoded.dyn_into().map_err(js_err)
}

/// Looping background track: source -> volume -> destination (+ analyser).
pub struct BgmPlayer {
    ctx: web::AudioContext,
    output: web::GainNode,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    clock: PlaybackClock,
}

impl BgmPlayer {
    pub fn new(ctx: web::AudioContext) -> anyhow::Result<Self> {
        let output = create_gain(&ctx, BGM_VOLUME, "Music volume")?;
        output
            .connect_with_audio_node(&ctx.destination())
            .map_err(js_err)?;
        Ok(Self {
            ctx,
            output,
            buffer: None,
            source: None,
            clock: PlaybackClock::new(0.0),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.buffer.is_some()
    }

    /// Install the decoded track and tap its output with `analyser`.
    pub fn attach(&mut self, buffer: web::AudioBuffer, analyser: &web::AnalyserNode) {
        self.clock = PlaybackClock::new(buffer.duration());
        self.buffer = Some(buffer);
        _ = self.output.connect_with_audio_node(analyser);
    }

    pub fn handle_toggle(&mut self, checked: bool) {
        match toggle_action(checked, self.is_loaded()) {
            ToggleAction::Play => {
                if let Err(e) = self.play() {
                    log::error!("[audio] play failed: {:?}", e);
                }
            }
            ToggleAction::Pause => self.pause(),
            ToggleAction::Ignore => log::info!("[audio] track not loaded yet"),
        }
    }

    fn play(&mut self) -> anyhow::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };
        if self.clock.is_playing() {
            return Ok(());
        }
        // Autoplay policy keeps the context suspended until a user gesture
        _ = self.ctx.resume();
        let src = web::AudioBufferSourceNode::new(&self.ctx).map_err(js_err)?;
        src.set_buffer(Some(buffer));
        src.set_loop(true);
        src.connect_with_audio_node(&self.output).map_err(js_err)?;
        let now = self.ctx.current_time();
        let offset = self.clock.start(now).unwrap_or(0.0);
        #[allow(deprecated)]
        let started = src.start_with_when_and_grain_offset(now, offset);
        started.map_err(js_err)?;
        self.source = Some(src);
        log::info!("[audio] playing from {:.2}s", offset);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(src) = self.source.take() {
            #[allow(deprecated)]
            let _ = src.stop();
            _ = src.disconnect();
        }
        if self.clock.pause(self.ctx.current_time()) {
            log::info!("[audio] paused at {:.2}s", self.clock.offset());
        }
    }
}

/// Fetch and decode the track in the background. On success the analyser is
/// published to the frame loop and the checkbox becomes usable; on failure
/// both stay inert.
pub fn load_bgm(
    player: Rc<RefCell<BgmPlayer>>,
    analyser_slot: AnalyserSlot,
    checkbox: Option<web::HtmlInputElement>,
    url: &'static str,
) {
    spawn_local(async move {
        let ctx = player.borrow().ctx.clone();
        let buffer = match decode_track(&ctx, url).await {
            Ok(b) => b,
            Err(e) => {
                log::warn!("[audio] {} unavailable: {:?}", url, e);
                return;
            }
        };
        let analyser = match create_analyser(&ctx) {
            Ok(a) => a,
            Err(e) => {
                log::error!("[audio] AnalyserNode error: {:?}", e);
                return;
            }
        };
        log::info!(
            "[audio] {} decoded ({:.1}s, {} bins)",
            url,
            buffer.duration(),
            analyser.frequency_bin_count()
        );
        player.borrow_mut().attach(buffer, &analyser);
        *analyser_slot.borrow_mut() = Some(analyser);
        if let Some(cb) = &checkbox {
            cb.set_disabled(false);
        }
    });
}
