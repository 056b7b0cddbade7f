#![warn(clippy::all, clippy::pedantic)]

pub mod sampling_tests;
pub mod screen_tests;
