//! Section tracking
//!
//! Owns the "current section index" shared by dot navigation and swipe
//! navigation, and decides which nav link / page dot should carry the
//! active marker.
//!
//! Two sources write the highlighting:
//! - the section visibility observer (`observe_intersecting`), which also
//!   moves the current index
//! - the debounced scroll path (`midpoint_highlight` + `Highlight::markers`),
//!   which only re-highlights
//!
//! Neither is authoritative; whichever ran last wins.

use crate::config::PageConfig;
use crate::gesture::SwipeDirection;
use crate::marker::ActiveMarker;

/// Vertical extent of a section relative to the viewport top (CSS px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether this section straddles the horizontal line at `y`.
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Block alignment for a programmatic scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
    End,
}

/// Nav link / page dot pair that should be active for one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub index: usize,
    pub name: String,
}

impl Highlight {
    /// `href` of the matching nav link (`#about`)
    pub fn nav_href(&self) -> String {
        format!("#{}", self.name)
    }

    /// `data-section` value of the matching page dot
    pub fn dot_section(&self) -> &str {
        &self.name
    }

    /// Markers for the nav links (by `href`) and page dots (by
    /// `data-section`), in document order. The first member of each group
    /// that points at this section is active and every other one is cleared.
    pub fn markers(
        &self,
        link_hrefs: &[Option<String>],
        dot_sections: &[Option<String>],
    ) -> HighlightMarkers {
        HighlightMarkers {
            links: marker_for(link_hrefs, &self.nav_href()),
            dots: marker_for(dot_sections, self.dot_section()),
        }
    }
}

/// Nav-link and page-dot state for one highlighted section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMarkers {
    pub links: ActiveMarker,
    pub dots: ActiveMarker,
}

fn marker_for(values: &[Option<String>], wanted: &str) -> ActiveMarker {
    let mut marker = ActiveMarker::new(values.len());
    if let Some(index) = values.iter().position(|v| v.as_deref() == Some(wanted)) {
        marker.activate(index);
    }
    marker
}

/// Current-section state for the page
#[derive(Debug, Clone)]
pub struct SectionTracker {
    names: Vec<String>,
    start_aligned: Vec<String>,
    current: usize,
}

impl SectionTracker {
    pub fn new(names: Vec<String>, start_aligned: Vec<String>) -> Self {
        Self {
            names,
            start_aligned,
            current: 0,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(
            config.sections.clone(),
            config.navigation.start_aligned_sections.clone(),
        )
    }

    /// Index of the section considered current
    pub fn current(&self) -> usize {
        self.current
    }

    /// Configured name for a section position
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Record that the observer saw section `index` cross its threshold.
    pub fn observe_intersecting(&mut self, index: usize) {
        tracing::debug!(index, previous = self.current, "section intersecting");
        self.current = index;
    }

    /// Record a page-dot click. The index moves immediately, without
    /// waiting for the scroll to arrive.
    pub fn select_dot(&mut self, index: usize, section: &str) -> ScrollAlign {
        tracing::debug!(index, section, "page dot selected");
        self.current = index;
        self.alignment_for(section)
    }

    /// Block alignment used when scrolling to `section` from a page dot.
    pub fn alignment_for(&self, section: &str) -> ScrollAlign {
        if self.start_aligned.iter().any(|s| s == section) {
            ScrollAlign::Start
        } else {
            ScrollAlign::Center
        }
    }

    /// Section straddling the vertical midpoint of the viewport.
    ///
    /// Sections are tested in document order and the last match wins.
    /// `None` means no section qualifies (e.g. mid-transition) and the
    /// caller must leave the existing highlighting untouched.
    pub fn midpoint_match(bounds: &[SectionBounds], viewport_height: f64) -> Option<usize> {
        let midpoint = viewport_height * 0.5;
        bounds
            .iter()
            .enumerate()
            .filter(|(_, b)| b.straddles(midpoint))
            .map(|(i, _)| i)
            .last()
    }

    /// Highlight target for section `index`.
    ///
    /// `element_id` is the section element's own id; when absent or empty
    /// the configured name for that position is used.
    pub fn highlight(&self, index: usize, element_id: Option<&str>) -> Option<Highlight> {
        let name = match element_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.name(index)?.to_string(),
        };
        Some(Highlight { index, name })
    }

    /// Highlight for the section straddling the viewport midpoint.
    ///
    /// `section_ids` runs parallel to `bounds`. `None` leaves the current
    /// highlighting as it is.
    pub fn midpoint_highlight(
        &self,
        bounds: &[SectionBounds],
        section_ids: &[String],
        viewport_height: f64,
    ) -> Option<Highlight> {
        let index = Self::midpoint_match(bounds, viewport_height)?;
        self.highlight(index, section_ids.get(index).map(String::as_str))
    }

    /// Section a swipe should move to, given `section_count` tracked sections.
    pub fn swipe_target(&self, direction: SwipeDirection, section_count: usize) -> Option<usize> {
        direction.step(self.current, section_count)
    }
}
