#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::clock::{FrameClock, FrameSnapshot};
use crate::config::Config;
use crate::context::{ReadySignal, RenderContext, Viewport};
use crate::screen::{GameScreen, Screen, ScreenPhase};

pub type AppResult<T> = anyhow::Result<T>;

pub struct App {
    pub world: World,
    pub screen: Box<dyn Screen>,
    pub should_quit: bool,
    pub max_frames: Option<u64>,
    pub phase: ScreenPhase,
}

impl App {
    pub fn new(config: &Config, assets: ReadySignal) -> Self {
        Self::with_screen(config, assets, Box::new(GameScreen::new()))
    }

    pub fn with_screen(config: &Config, assets: ReadySignal, screen: Box<dyn Screen>) -> Self {
        let mut world = World::new();
        world.insert_resource(FrameClock::with_smoothing(config.frame_loop.smoothing()));
        world.insert_resource(RenderContext::new(
            Viewport::default(),
            assets,
        ));

        let max_frames = config.frame_loop.max_frames;
        let mut app = Self {
            world,
            screen,
            // A zero frame limit never enters the loop
            should_quit: max_frames == Some(0),
            max_frames,
            phase: ScreenPhase::Loading,
        };

        app.screen.show(&mut app.world);
        app
    }

    /// Runs one frame: advance the clock, then render the active screen.
    pub fn tick(&mut self, delta_seconds: f64) -> FrameSnapshot {
        let snapshot = self.world.resource_mut::<FrameClock>().advance(delta_seconds);
        self.phase = self.screen.render(&mut self.world, &snapshot);

        if let Some(max_frames) = self.max_frames {
            if snapshot.frame_index + 1 >= max_frames {
                debug!("Reached frame limit of {max_frames}");
                self.should_quit = true;
            }
        }

        snapshot
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.world
            .resource_mut::<RenderContext>()
            .viewport
            .resize(width, height);
        self.screen.resize(width, height);
    }

    pub fn clock(&self) -> &FrameClock {
        self.world.resource::<FrameClock>()
    }

    pub fn shutdown(&mut self) {
        self.screen.hide();
        self.screen.dispose();

        let clock = self.clock();
        let frames = clock.frame_index().map_or(0, |index| index + 1);
        info!(
            "Ran {frames} frames in {:.2}s (last {:.2} FPS)",
            clock.elapsed_time(),
            clock.fps()
        );
    }
}

/// Time budget of one frame, or zero to run unpaced.
#[must_use]
pub fn frame_duration(target_fps: f64) -> Duration {
    if !(target_fps.is_finite() && target_fps > 0.0) {
        return Duration::ZERO;
    }

    Duration::try_from_secs_f64(1.0 / target_fps).unwrap_or_else(|_| {
        warn!("Target FPS {target_fps} is too low to pace, running unpaced");
        Duration::ZERO
    })
}

/// Real-time loop: measures each frame with `Instant` and sleeps off what is
/// left of the frame budget.
pub fn run_app(app: &mut App, frame_duration: Duration) {
    let mut last_frame = Instant::now();

    while !app.should_quit {
        let frame_start = Instant::now();
        let delta_seconds = frame_start.duration_since(last_frame).as_secs_f64();
        last_frame = frame_start;

        app.tick(delta_seconds);

        let spent = frame_start.elapsed();
        if spent < frame_duration {
            sleep(frame_duration - spent);
        }
    }
}
