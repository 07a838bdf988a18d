//! Page motion rules for the portfolio site
//!
//! Platform-agnostic state machines and formulas behind the page behaviors:
//! section tracking, scroll progress, the typewriter greeting, timeline
//! filtering, entrance animations, navigation and swipe handling.
//!
//! Nothing here touches the DOM. `folio-ui` reads element geometry and
//! attributes, feeds them in, and writes the results back as classes and
//! inline styles.
//!
//! # Architecture
//!
//! ```text
//! browser events ──► folio-ui behaviors ──► folio-motion rules ──► class/style writes
//!                                                 │
//!                                                 ▼
//!                                   PageConfig (page_settings.yaml)
//! ```

pub mod config;
pub mod entrance;
pub mod error;
pub mod filter;
pub mod gesture;
pub mod marker;
pub mod nav;
pub mod progress;
pub mod section;
pub mod typewriter;

pub use config::{global_config, PageConfig, ViewportSize};
pub use entrance::{AboutLayout, AboutReveal, OneShotGate, RevealStep, RevealTarget, RevealTrigger};
pub use error::{FolioError, FolioResult};
pub use filter::{EntryVisibility, FilterGroup, FilterSelection, TimelineEntry};
pub use gesture::{SwipeDirection, SwipeTracker};
pub use marker::ActiveMarker;
pub use nav::MenuState;
pub use progress::{DebounceSlot, FrameGate};
pub use section::{Highlight, HighlightMarkers, ScrollAlign, SectionBounds, SectionTracker};
pub use typewriter::{Frame, Typewriter};

/// Marker class added to a section once its observer has seen it
pub const VISIBLE_CLASS: &str = "visible";

/// Marker class on the navbar once the page is scrolled past the offset
pub const SCROLLED_CLASS: &str = "scrolled";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_classes_are_distinct() {
        let classes = [
            VISIBLE_CLASS,
            SCROLLED_CLASS,
            nav::ACTIVE_CLASS,
            nav::OPEN_CLASS,
            entrance::FLY_IN_CLASS,
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
