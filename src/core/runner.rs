use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Cloneable cancellation token for a [`FrameLoop`]. Stopping is permanent.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    /// `pagehide` handler. A page going into the back/forward cache
    /// (`persisted`) is restored later and keeps its loop; only real unloads
    /// stop it. Returns whether the loop was stopped.
    pub fn stop_on_pagehide(&self, persisted: bool) -> bool {
        if !persisted {
            self.stop();
        }
        !persisted
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Monotonic seconds since some fixed start.
pub trait Clock {
    fn elapsed_secs(&self) -> f32;
}

pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Hand-driven clock for deterministic stepping.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: Cell<f32>,
}

impl ManualClock {
    pub fn advance(&self, dt_secs: f32) {
        self.secs.set(self.secs.get() + dt_secs.max(0.0));
    }
}

impl Clock for ManualClock {
    fn elapsed_secs(&self) -> f32 {
        self.secs.get()
    }
}

/// Frame loop bookkeeping, independent of who schedules the frames.
///
/// The browser drives it from `requestAnimationFrame`; tests drive it with
/// [`FrameLoop::run_ticks`].
#[derive(Debug, Default)]
pub struct FrameLoop {
    handle: StopHandle,
    ticks: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> StopHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> LoopState {
        if self.handle.is_stopped() {
            LoopState::Stopped
        } else {
            LoopState::Running
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick if still running. Returns the state after the tick, which
    /// tells the scheduler whether to request another frame.
    pub fn step(&mut self, tick: impl FnOnce()) -> LoopState {
        if self.state() == LoopState::Stopped {
            return LoopState::Stopped;
        }
        tick();
        self.ticks += 1;
        self.state()
    }

    /// Run up to `max_ticks` ticks back to back, stopping early if the handle
    /// is stopped. Returns how many ticks ran.
    pub fn run_ticks(&mut self, max_ticks: u64, mut tick: impl FnMut(u64)) -> u64 {
        let mut ran = 0;
        while ran < max_ticks {
            let index = self.ticks;
            let state = self.step(|| tick(index));
            if self.ticks > index {
                ran += 1;
            }
            if state == LoopState::Stopped {
                break;
            }
        }
        ran
    }
}
