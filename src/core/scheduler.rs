// Frame loop bookkeeping that does not depend on the browser.

use instant::Instant;
use std::time::Duration;

/// Simulation clock. The origin is the first frame timestamp it sees.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeBase {
    origin_ms: Option<f64>,
}

impl TimeBase {
    /// Seconds since the first timestamp passed in. Never negative.
    pub fn elapsed_secs(&mut self, timestamp_ms: f64) -> f32 {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        ((timestamp_ms - origin) / 1000.0).max(0.0) as f32
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.origin_ms.is_some()
    }

    pub fn reset(&mut self) {
        self.origin_ms = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Idle/Running state machine around a host frame request id.
///
/// The host requests a frame, hands the id to [`FrameScheduler::schedule`],
/// and asks [`FrameScheduler::begin_frame`] whether the callback may run.
/// [`FrameScheduler::stop`] returns the outstanding id so the host can
/// cancel it; callbacks arriving after that are rejected.
#[derive(Debug)]
pub struct FrameScheduler {
    state: LoopState,
    pending: Option<i32>,
    frames: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    /// Returns false if the loop was already running.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        self.pending = None;
        self.frames = 0;
        true
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Records the id of the next requested frame. Ignored while idle.
    pub fn schedule(&mut self, handle: i32) {
        if self.is_running() {
            self.pending = Some(handle);
        }
    }

    #[inline]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    /// Called at the top of every frame callback.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if !self.is_running() {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Moves to idle and hands back the request that still has to be cancelled.
    pub fn stop(&mut self) -> Option<i32> {
        self.state = LoopState::Idle;
        self.pending.take()
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Counts frames and reports an average rate once per `interval`.
#[derive(Debug)]
pub struct FrameStats {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            frames: 0,
        }
    }

    /// Returns frames per second when a full interval has elapsed.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;
        let elapsed = if now > start {
            now - start
        } else {
            Duration::ZERO
        };
        if elapsed < self.interval || elapsed.is_zero() {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = Some(now);
        self.frames = 0;
        Some(fps)
    }
}
