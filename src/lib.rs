pub mod app;
pub mod clock;
pub mod config;
pub mod context;
pub mod screen;

#[cfg(test)]
mod tests;

pub use clock::{FpsSmoothing, FrameClock, FrameSnapshot, should_sample};
