/// What the music checkbox should do to playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    /// Checked before the track finished loading.
    Ignore,
}

#[inline]
pub fn toggle_action(checked: bool, buffer_loaded: bool) -> ToggleAction {
    match (checked, buffer_loaded) {
        (true, true) => ToggleAction::Play,
        (true, false) => ToggleAction::Ignore,
        (false, _) => ToggleAction::Pause,
    }
}

/// Position bookkeeping for a looped buffer that can be paused and resumed.
///
/// WebAudio sources are one-shot, so resuming means starting a fresh source
/// at the remembered offset. Times are audio-context seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackClock {
    duration: f64,
    offset: f64,
    started_at: Option<f64>,
}

impl PlaybackClock {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            offset: 0.0,
            started_at: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Offset into the buffer at which playback (re)starts.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Mark playback as started at `now`. Returns the buffer offset to start
    /// from, or `None` if already playing.
    pub fn start(&mut self, now: f64) -> Option<f64> {
        if self.started_at.is_some() {
            return None;
        }
        self.started_at = Some(now);
        Some(self.offset)
    }

    /// Mark playback as paused at `now`, folding the played time into the
    /// offset. Returns `false` if nothing was playing.
    pub fn pause(&mut self, now: f64) -> bool {
        let Some(started) = self.started_at.take() else {
            return false;
        };
        self.offset += (now - started).max(0.0);
        if self.duration > 0.0 {
            self.offset %= self.duration;
        }
        true
    }
}
