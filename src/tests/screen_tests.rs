#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::clock::FrameClock;
    use crate::context::ReadySignal;
    use crate::screen::{GameScreen, Screen, ScreenPhase};
    use crate::tests::test_utils::create_test_world;

    #[test]
    fn test_game_screen_starts_loading() {
        let screen = GameScreen::new();
        assert_eq!(screen.phase(), ScreenPhase::Loading);
        assert_eq!(screen.running_frames(), 0);
        assert_eq!(screen.size(), None);
    }

    #[test]
    fn test_stays_loading_until_ready() {
        let (handle, signal) = ReadySignal::channel();
        let mut world = create_test_world(signal);
        let mut clock = FrameClock::new();
        let mut screen = GameScreen::new();
        screen.show(&mut world);

        for _ in 0..3 {
            let snapshot = clock.advance(0.016);
            assert_eq!(screen.render(&mut world, &snapshot), ScreenPhase::Loading);
        }
        assert_eq!(screen.running_frames(), 0);

        handle.signal();

        for _ in 0..2 {
            let snapshot = clock.advance(0.016);
            assert_eq!(screen.render(&mut world, &snapshot), ScreenPhase::Running);
        }
        assert_eq!(screen.running_frames(), 2);
    }

    #[test]
    fn test_ready_assets_run_immediately() {
        let mut world = create_test_world(ReadySignal::ready());
        let mut clock = FrameClock::new();
        let mut screen = GameScreen::new();

        let snapshot = clock.advance(0.0);
        assert_eq!(screen.render(&mut world, &snapshot), ScreenPhase::Running);
        assert_eq!(screen.running_frames(), 1);
    }

    #[test]
    fn test_missing_context_keeps_loading() {
        let mut world = bevy_ecs::world::World::new();
        let mut clock = FrameClock::new();
        let mut screen = GameScreen::new();

        let snapshot = clock.advance(0.016);
        assert_eq!(screen.render(&mut world, &snapshot), ScreenPhase::Loading);
    }

    #[test]
    fn test_resize_records_size() {
        let mut screen = GameScreen::new();
        screen.resize(800, 600);
        assert_eq!(screen.size(), Some((800, 600)));
    }

    #[test]
    fn test_lifecycle_defaults() {
        let mut screen = GameScreen::new();
        assert_eq!(screen.name(), "GameScreen");
        screen.hide();
        screen.dispose();
        assert_eq!(screen.phase(), ScreenPhase::Loading);
    }
}
