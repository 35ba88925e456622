//! Frame loop control
//!
//! The loop is a chain of one-shot frame callbacks. Each callback runs one
//! tick and asks the scheduler for the next frame, but only while the loop is
//! `Running`. Stopping cancels the pending request, so the chain ends there.

use crate::platform::{FrameHandle, FrameScheduler};

/// Loop state. There is no pause: a loop runs until it is stopped for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Scheduling state for one mounted backdrop
#[derive(Debug)]
pub struct AnimationLoop {
    state: LoopState,
    /// Outstanding frame request, if any
    pending: Option<FrameHandle>,
    /// Ticks run so far
    frames: u64,
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Called when a scheduled frame fires. Returns whether the tick should run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.is_running() {
            self.frames += 1;
            true
        } else {
            false
        }
    }

    /// Request the next frame if still running and none is outstanding
    pub fn schedule<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if self.is_running() && self.pending.is_none() {
            self.pending = Some(scheduler.request_frame());
        }
    }

    /// Stop for good, cancelling any outstanding request
    pub fn stop<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        if self.state == LoopState::Running {
            log::debug!("Animation loop stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }
}
