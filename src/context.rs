#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};
use log::debug;

/// Size of the window the screens draw into, in pixels. Zero until the first
/// resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    screen_width: u32,
    screen_height: u32,
}

impl Viewport {
    pub fn resize(&mut self, screen_width: u32, screen_height: u32) {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
        debug!("Viewport resized to {screen_width}x{screen_height}");
    }

    #[must_use]
    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}

/// Worker side of a one-shot readiness signal.
#[derive(Debug)]
pub struct ReadyHandle {
    sender: Sender<()>,
}

impl ReadyHandle {
    pub fn signal(self) {
        // The loop may already be gone, nothing to report then
        let _ = self.sender.try_send(());
    }
}

/// Loop side of a one-shot readiness signal. Polling never blocks and the
/// answer latches once it turns true.
#[derive(Debug)]
pub struct ReadySignal {
    receiver: Receiver<()>,
    ready: bool,
}

impl ReadySignal {
    #[must_use]
    pub fn channel() -> (ReadyHandle, ReadySignal) {
        let (sender, receiver) = bounded(1);
        (
            ReadyHandle { sender },
            ReadySignal {
                receiver,
                ready: false,
            },
        )
    }

    /// A signal that reports ready from the start.
    #[must_use]
    pub fn ready() -> Self {
        let (handle, mut signal) = Self::channel();
        handle.signal();
        signal.poll();
        signal
    }

    /// Checks for the worker's signal without blocking.
    pub fn poll(&mut self) -> bool {
        if !self.ready {
            match self.receiver.try_recv() {
                Ok(()) => {
                    debug!("Ready signal received");
                    self.ready = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => {}
            }
        }
        self.ready
    }
}

/// Long-lived resources shared by the screens, built once at startup.
#[derive(Resource, Debug)]
pub struct RenderContext {
    pub viewport: Viewport,
    pub assets: ReadySignal,
}

impl RenderContext {
    #[must_use]
    pub fn new(viewport: Viewport, assets: ReadySignal) -> Self {
        debug!("Render context created");
        Self { viewport, assets }
    }
}
