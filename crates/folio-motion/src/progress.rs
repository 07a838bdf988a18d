//! Scroll progress bar and navbar scroll state

/// Percentage of the document scrolled, clamped to [0, 100].
///
/// When the document is no taller than the viewport there is nothing to
/// scroll and the bar reads 0%.
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = document_height - viewport_height;
    if max_scroll <= 0.0 || !max_scroll.is_finite() || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// CSS width value for a progress percentage (`"42.5%"`).
pub fn width_css(percent: f64) -> String {
    format!("{}%", percent)
}

/// Whether the navbar should carry the `scrolled` marker.
pub fn navbar_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// Coalesces animation-frame requests.
///
/// At most one frame is pending at a time; the flag is cleared when the
/// frame callback starts, not when it finishes.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the caller should schedule a frame now.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called at the start of the scheduled frame.
    pub fn begin_frame(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

/// Pending-timer bookkeeping for a trailing-edge debounce.
///
/// Holds the handle of the one timeout that may still fire. Re-arming hands
/// back the superseded handle so the caller can cancel it.
#[derive(Debug, Default)]
pub struct DebounceSlot {
    pending: Option<i32>,
}

impl DebounceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `handle` as the pending timeout, returning the one it replaces.
    pub fn rearm(&mut self, handle: i32) -> Option<i32> {
        self.pending.replace(handle)
    }

    /// Called when the pending timeout runs.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_progress_midway() {
        assert!((scroll_progress(500.0, 2000.0, 1000.0) - 50.0).abs() < 1e-9);
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_progress_degenerate_document() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_progress_overscroll_clamped() {
        // Elastic overscroll on mobile reports values past both ends
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1100.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_width_css() {
        assert_eq!(width_css(50.0), "50%");
        assert_eq!(width_css(12.5), "12.5%");
    }

    #[test]
    fn test_navbar_scrolled() {
        assert!(!navbar_scrolled(100.0, 100.0));
        assert!(navbar_scrolled(100.5, 100.0));
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.begin_frame();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_debounce_slot_keeps_only_latest() {
        let mut slot = DebounceSlot::new();
        assert_eq!(slot.rearm(1), None);
        assert_eq!(slot.rearm(2), Some(1));
        assert_eq!(slot.rearm(3), Some(2));
        assert_eq!(slot.pending(), Some(3));

        slot.fired();
        assert_eq!(slot.pending(), None);
        assert_eq!(slot.rearm(4), None);
    }

    proptest! {
        #[test]
        fn debounce_burst_cancels_every_superseded_timer(
            handles in proptest::collection::vec(any::<i32>(), 1..50),
        ) {
            let mut slot = DebounceSlot::new();
            let mut cancelled = Vec::new();
            for &h in &handles {
                cancelled.extend(slot.rearm(h));
            }
            prop_assert_eq!(&cancelled[..], &handles[..handles.len() - 1]);
            prop_assert_eq!(slot.pending(), handles.last().copied());
        }

        #[test]
        fn progress_matches_clamped_ratio(
            doc in 1000.0f64..50_000.0,
            viewport in 100.0f64..999.0,
            frac in 0.0f64..=1.0,
        ) {
            let max_scroll = doc - viewport;
            let s = frac * max_scroll;
            let p = scroll_progress(s, doc, viewport);
            prop_assert!((0.0..=100.0).contains(&p));
            prop_assert!((p - (s / max_scroll * 100.0).clamp(0.0, 100.0)).abs() < 1e-9);
        }
    }
}
