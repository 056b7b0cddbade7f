pub mod loader;

use serde::{Deserialize, Serialize};

use crate::clock::FpsSmoothing;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub frame_loop: FrameLoopConfig,
    pub logging: LoggingConfig,
}

// Pacing and clock settings for the frame loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameLoopConfig {
    pub target_fps: f64,
    pub max_frames: Option<u64>,
    pub smoothing_factor: Option<f64>,
    pub warmup_ms: u64,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            max_frames: None,
            smoothing_factor: None,
            warmup_ms: 500,
        }
    }
}

impl FrameLoopConfig {
    #[must_use]
    pub fn smoothing(&self) -> FpsSmoothing {
        self.smoothing_factor
            .map_or(FpsSmoothing::None, FpsSmoothing::exponential)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            file: None,
        }
    }
}
