#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::clock::{FrameClock, should_sample};

    #[test]
    fn test_startup_frames_are_sampled() {
        for frame in 0..25 {
            assert!(should_sample(frame), "frame {frame} should be sampled");
        }
    }

    #[test]
    fn test_sampling_boundaries() {
        assert!(should_sample(0));
        assert!(should_sample(24));
        assert!(should_sample(25));
        assert!(!should_sample(26));
        assert!(should_sample(1000));
        assert!(!should_sample(1001));
        assert!(!should_sample(1025));
        assert!(should_sample(2000));
        assert!(!should_sample(2025));
    }

    #[test]
    fn test_medium_density_every_25_frames() {
        let sampled: Vec<u64> = (25..=1000).filter(|frame| should_sample(*frame)).collect();
        assert_eq!(sampled.len(), 40);
        assert!(sampled.iter().all(|frame| frame % 25 == 0));
    }

    #[test]
    fn test_sparse_sampling_after_1000() {
        let sampled: Vec<u64> = (1001..=10_000)
            .filter(|frame| should_sample(*frame))
            .collect();
        assert_eq!(sampled, vec![2000, 3000, 4000, 5000, 6000, 7000, 8000, 9000, 10_000]);
        assert!(should_sample(u64::MAX - u64::MAX % 1000));
    }

    #[test]
    fn test_snapshot_uses_predicate() {
        let mut clock = FrameClock::new();
        for _ in 0..=26 {
            let snapshot = clock.advance(0.016);
            assert_eq!(snapshot.should_sample(), should_sample(snapshot.frame_index));
        }
        assert!(!clock.snapshot().is_some_and(|snapshot| snapshot.should_sample()));
    }
}
