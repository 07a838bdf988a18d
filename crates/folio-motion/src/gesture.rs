//! Vertical swipe recognition for section-to-section navigation.

use crate::config::GestureConfig;

/// Swipe direction.
///
/// `Up` means the finger moved up the screen, which advances to the next
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
}

impl SwipeDirection {
    /// Section index reached from `current` out of `count` sections.
    ///
    /// `None` when already at the last (Up) or first (Down) section.
    pub fn step(self, current: usize, count: usize) -> Option<usize> {
        match self {
            SwipeDirection::Up if current + 1 < count => Some(current + 1),
            SwipeDirection::Down if current > 0 && current <= count => Some(current - 1),
            _ => None,
        }
    }
}

/// Touch start/end tracker.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: f64,
    start_y: f64,
}

impl SwipeTracker {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            threshold: config.swipe_threshold_px,
            start_y: 0.0,
        }
    }

    /// Handle touch start (screen Y of the first changed touch).
    pub fn touch_start(&mut self, screen_y: f64) {
        self.start_y = screen_y;
    }

    /// Handle touch end; returns the swipe if travel exceeded the threshold.
    pub fn touch_end(&mut self, screen_y: f64) -> Option<SwipeDirection> {
        let diff = self.start_y - screen_y;
        if diff.abs() <= self.threshold {
            return None;
        }
        let direction = if diff > 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        };
        tracing::debug!(?direction, travel = diff, "swipe recognized");
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(&GestureConfig::default())
    }

    #[test]
    fn upward_swipe() {
        let mut t = tracker();
        t.touch_start(600.0);
        assert_eq!(t.touch_end(400.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn downward_swipe() {
        let mut t = tracker();
        t.touch_start(200.0);
        assert_eq!(t.touch_end(300.0), Some(SwipeDirection::Down));
    }

    #[test]
    fn travel_at_threshold_is_not_a_swipe() {
        let mut t = tracker();
        t.touch_start(200.0);
        assert_eq!(t.touch_end(250.0), None);
        t.touch_start(200.0);
        assert_eq!(t.touch_end(149.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn step_bounds() {
        assert_eq!(SwipeDirection::Up.step(0, 4), Some(1));
        assert_eq!(SwipeDirection::Up.step(3, 4), None);
        assert_eq!(SwipeDirection::Down.step(0, 4), None);
        assert_eq!(SwipeDirection::Down.step(3, 4), Some(2));
        assert_eq!(SwipeDirection::Up.step(0, 0), None);
    }

    proptest! {
        #[test]
        fn step_stays_in_range(current in 0usize..10, count in 0usize..10, up in any::<bool>()) {
            let dir = if up { SwipeDirection::Up } else { SwipeDirection::Down };
            if let Some(next) = dir.step(current, count) {
                prop_assert!(next < count);
                prop_assert_eq!(next.abs_diff(current), 1);
            }
        }

        #[test]
        fn swipe_past_last_is_noop(count in 1usize..10) {
            prop_assert_eq!(SwipeDirection::Up.step(count - 1, count), None);
        }
    }
}
