#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::debug;

use crate::clock::FrameSnapshot;
use crate::context::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenPhase {
    #[default]
    Loading,
    Running,
}

/// One view of the game. The app owns the active screen and drives its
/// lifecycle: `show` once, `render` every frame, `resize` on window changes,
/// then `hide` and `dispose` on shutdown.
pub trait Screen {
    fn name(&self) -> &'static str;

    fn show(&mut self, _world: &mut World) {
        debug!("{} shown", self.name());
    }

    fn render(&mut self, world: &mut World, snapshot: &FrameSnapshot) -> ScreenPhase;

    fn resize(&mut self, width: u32, height: u32) {
        debug!("{} resized to {width}x{height}", self.name());
    }

    fn hide(&mut self) {
        debug!("{} hidden", self.name());
    }

    fn dispose(&mut self) {
        debug!("Disposing of {}", self.name());
    }
}

/// Main game view. Waits for its assets, then processes frames.
#[derive(Debug, Default)]
pub struct GameScreen {
    phase: ScreenPhase,
    loading_logged: bool,
    running_frames: u64,
    size: Option<(u32, u32)>,
}

impl GameScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    /// Frames rendered since the assets became ready.
    #[must_use]
    pub fn running_frames(&self) -> u64 {
        self.running_frames
    }

    #[must_use]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }
}

impl Screen for GameScreen {
    fn name(&self) -> &'static str {
        "GameScreen"
    }

    fn render(&mut self, world: &mut World, snapshot: &FrameSnapshot) -> ScreenPhase {
        if snapshot.should_sample() {
            debug!("{snapshot}");
        }

        let ready = world
            .get_resource_mut::<RenderContext>()
            .is_some_and(|mut context| context.assets.poll());

        if ready {
            if self.phase == ScreenPhase::Loading {
                debug!(
                    "Assets ready after {} frames, leaving loading screen",
                    snapshot.frame_index
                );
            }
            self.phase = ScreenPhase::Running;
            self.running_frames += 1;
        } else if !self.loading_logged {
            debug!("LOADING...");
            self.loading_logged = true;
        }

        self.phase
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!("GameScreen resized to {width}x{height}");
        self.size = Some((width, height));
    }
}
