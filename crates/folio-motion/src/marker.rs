//! Exclusive "active" marker over an ordered group of elements
//!
//! Nav links, page dots, filter buttons, year buttons and timeline items all
//! follow the same rule: marking one clears every other member of the same
//! group. Groups never affect each other.

/// Which member of a group carries the active marker, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveMarker {
    len: usize,
    active: Option<usize>,
}

impl ActiveMarker {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    /// Start with `index` marked (ignored when out of range).
    pub fn with_active(len: usize, index: usize) -> Self {
        let mut marker = Self::new(len);
        marker.activate(index);
        marker
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Mark `index`, clearing the rest. Returns false when out of range,
    /// in which case the current marking is kept.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Clear the whole group.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Per-member marker state, in group order.
    pub fn states(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.is_active(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_is_exclusive() {
        let mut marker = ActiveMarker::new(4);
        marker.activate(1);
        marker.activate(3);

        let states: Vec<bool> = marker.states().collect();
        assert_eq!(states, vec![false, false, false, true]);
    }

    #[test]
    fn test_out_of_range_keeps_current() {
        let mut marker = ActiveMarker::with_active(3, 2);
        assert!(!marker.activate(7));
        assert_eq!(marker.active(), Some(2));
    }

    #[test]
    fn test_empty_group() {
        let mut marker = ActiveMarker::new(0);
        assert!(marker.is_empty());
        assert!(!marker.activate(0));
        assert_eq!(marker.states().count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut marker = ActiveMarker::with_active(2, 0);
        marker.clear();
        assert!(marker.states().all(|s| !s));
    }
}
