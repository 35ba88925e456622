//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (`requestAnimationFrame` on web, manual elsewhere)
//! - Mounting onto a canvas and listening for window resizes (web)

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::collections::VecDeque;

use crate::backdrop::Backdrop;
use crate::renderer::Surface;

/// Identifies an outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// One-shot "call me before the next paint" requests
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven by hand, for tests and headless runs
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    queue: VecDeque<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests not yet fired or cancelled
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Total requests ever made
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Requests removed by `cancel_frame`
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Dispatch the oldest request, returning its handle
    pub fn fire_next(&mut self) -> Option<FrameHandle> {
        self.queue.pop_front()
    }

    /// Dispatch up to `n` frames to `backdrop`, returning how many ran
    pub fn run_frames<S: Surface>(&mut self, backdrop: &mut Backdrop<S>, n: usize) -> usize {
        let mut ran = 0;
        for _ in 0..n {
            if self.fire_next().is_none() || !backdrop.frame(self) {
                break;
            }
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.queue.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queue.len();
        self.queue.retain(|h| *h != handle);
        if self.queue.len() < before {
            self.cancelled += 1;
        }
    }
}
