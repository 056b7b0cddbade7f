#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::Resource;
use log::warn;
use std::fmt;

// Sampling schedule: every frame at startup, then every 25th, then every 1000th
pub const DENSE_SAMPLE_FRAMES: u64 = 25;
pub const MEDIUM_SAMPLE_INTERVAL: u64 = 25;
pub const MEDIUM_SAMPLE_LIMIT: u64 = 1000;
pub const SPARSE_SAMPLE_INTERVAL: u64 = 1000;

pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.9;

/// Decides whether a frame should emit a diagnostic line.
///
/// Startup frames are all sampled, the early steady state every 25 frames up
/// to frame 1000, and the long run every 1000 frames.
#[must_use]
pub fn should_sample(frame_index: u64) -> bool {
    frame_index < DENSE_SAMPLE_FRAMES
        || (frame_index % MEDIUM_SAMPLE_INTERVAL == 0 && frame_index <= MEDIUM_SAMPLE_LIMIT)
        || frame_index % SPARSE_SAMPLE_INTERVAL == 0
}

/// How the FPS estimate reacts to new frame deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FpsSmoothing {
    /// FPS is the instantaneous `1 / delta` of the latest frame.
    #[default]
    None,
    /// Exponential moving average; `factor` is the weight of the previous value.
    Exponential { factor: f64 },
}

impl FpsSmoothing {
    /// Builds an exponential mode with `factor` clamped into `[0, 1)`.
    /// A non-finite factor falls back to [`DEFAULT_SMOOTHING_FACTOR`].
    #[must_use]
    pub fn exponential(factor: f64) -> Self {
        let factor = if factor.is_finite() {
            factor.clamp(0.0, 0.999)
        } else {
            DEFAULT_SMOOTHING_FACTOR
        };
        Self::Exponential { factor }
    }

    fn apply(self, previous: f64, candidate: f64) -> f64 {
        match self {
            Self::None => candidate,
            Self::Exponential { factor } => {
                // 0 means unknown on either side, so there is nothing to blend
                if previous <= 0.0 || candidate <= 0.0 {
                    candidate
                } else {
                    factor * previous + (1.0 - factor) * candidate
                }
            }
        }
    }
}

/// Immutable record of the clock state after one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub frame_index: u64,
    pub elapsed_time: f64,
    pub smoothed_fps: f64,
    /// The delta exactly as the loop driver supplied it.
    pub delta_seconds: f64,
}

impl FrameSnapshot {
    /// `false` while the FPS estimate is 0, i.e. unknown or just started.
    #[must_use]
    pub fn fps_known(&self) -> bool {
        self.smoothed_fps > 0.0
    }

    #[must_use]
    pub fn should_sample(&self) -> bool {
        should_sample(self.frame_index)
    }
}

impl fmt::Display for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame # {:3}: delta = {:.4} ", self.frame_index, self.delta_seconds)?;
        if self.fps_known() {
            write!(f, "({:.2} FPS)", self.smoothed_fps)?;
        } else {
            write!(f, "(-- FPS)")?;
        }
        write!(f, ", time = {:.2}", self.elapsed_time)
    }
}

/// Tracks elapsed time, frame count and FPS for one update/render loop.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameClock {
    elapsed_time: f64,
    frame_index: Option<u64>,
    smoothed_fps: f64,
    smoothing: FpsSmoothing,
    last: Option<FrameSnapshot>,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_smoothing(smoothing: FpsSmoothing) -> Self {
        Self {
            smoothing,
            ..Self::default()
        }
    }

    /// Records one frame that took `delta_seconds` since the previous one.
    ///
    /// The first frame adds no time. Negative or non-finite deltas add no
    /// time either, so `elapsed_time` never decreases. The FPS estimate is
    /// always finite; anything that would not be is reported as 0.
    pub fn advance(&mut self, delta_seconds: f64) -> FrameSnapshot {
        let first = self.frame_index.is_none();
        let frame_index = self.frame_index.map_or(0, |index| index + 1);
        self.frame_index = Some(frame_index);

        let valid_delta = delta_seconds.is_finite() && delta_seconds >= 0.0;
        if !valid_delta {
            warn!("frame {frame_index}: ignoring invalid delta {delta_seconds}");
        }

        if !first && valid_delta {
            self.elapsed_time += delta_seconds;
        }

        let candidate = if delta_seconds > 0.0 {
            let fps = 1.0 / delta_seconds;
            if fps.is_finite() { fps } else { 0.0 }
        } else {
            0.0
        };

        let fps = self.smoothing.apply(self.smoothed_fps, candidate);
        self.smoothed_fps = if fps.is_finite() && fps > 0.0 { fps } else { 0.0 };

        let snapshot = FrameSnapshot {
            frame_index,
            elapsed_time: self.elapsed_time,
            smoothed_fps: self.smoothed_fps,
            delta_seconds,
        };
        self.last = Some(snapshot);
        snapshot
    }

    /// Index of the latest frame, `None` before the first `advance`.
    #[must_use]
    pub fn frame_index(&self) -> Option<u64> {
        self.frame_index
    }

    #[must_use]
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    #[must_use]
    pub fn fps(&self) -> f64 {
        self.smoothed_fps
    }

    #[must_use]
    pub fn smoothing(&self) -> FpsSmoothing {
        self.smoothing
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        self.last
    }

    /// Returns to the freshly constructed state, keeping the smoothing mode.
    pub fn reset(&mut self) {
        *self = Self::with_smoothing(self.smoothing);
    }
}
