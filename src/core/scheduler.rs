use std::thread;
use std::time::{Duration, Instant};

use crate::traits::FrameScheduler;

/// Drives the frame callback at a fixed wall-clock cadence.
///
/// Stand-in for a display's refresh signal on hosts without one: each
/// interval runs the callback once and sleeps out the remainder.
#[derive(Debug)]
pub struct FixedStepScheduler {
    interval: Duration,
    max_frames: Option<u64>,
}

impl FixedStepScheduler {
    /// Schedule `hz` callbacks per second with no frame cap.
    pub fn new(hz: f32) -> Self {
        Self {
            interval: Duration::from_secs_f32(1.0 / hz),
            max_frames: None,
        }
    }

    /// Stop driving after `frames` callbacks even if still registered.
    pub fn with_frame_cap(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn drive(&mut self, frame: &mut dyn FnMut() -> bool) {
        let mut count = 0u64;
        loop {
            if let Some(max) = self.max_frames {
                if count >= max {
                    break;
                }
            }

            let deadline = Instant::now() + self.interval;
            if !frame() {
                break;
            }
            count += 1;

            let now = Instant::now();
            if now < deadline {
                thread::sleep(deadline - now);
            }
        }
    }
}

/// Invokes the frame callback a fixed number of times with no pacing.
///
/// Used by tests and headless batch runs where wall-clock pacing is
/// irrelevant.
#[derive(Debug)]
pub struct ManualScheduler {
    frames: u64,
}

impl ManualScheduler {
    pub fn new(frames: u64) -> Self {
        Self { frames }
    }
}

impl FrameScheduler for ManualScheduler {
    fn drive(&mut self, frame: &mut dyn FnMut() -> bool) {
        for _ in 0..self.frames {
            if !frame() {
                break;
            }
        }
    }
}
