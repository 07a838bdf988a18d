//! Page controller
//!
//! Owns the transient page state every behavior shares:
//!
//! 1. SECTION INDEX: written by the section observer and dot clicks, read by
//!    swipe navigation
//! 2. ONE-SHOT GATE: the about reveal, armed by its observer or the forced
//!    fallback
//! 3. PENDING TIMERS: the about reveal's staggered timeouts
//!
//! All callbacks run on the browser's single thread, so the state sits in
//! an `Rc<RefCell<_>>`. Borrows are kept to the state update itself and never
//! held across DOM writes.

use std::cell::RefCell;
use std::rc::Rc;

use folio_motion::{
    global_config, AboutReveal, FolioResult, FrameGate, MenuState, PageConfig, SectionTracker,
    SwipeTracker, Typewriter,
};
use web_sys::{Document, Window};

use crate::behaviors;
use crate::dom;
use crate::timers::TimerGroup;

/// Mutable state shared by the behaviors
pub struct PageState {
    pub tracker: SectionTracker,
    pub about: AboutReveal,
    pub about_timers: TimerGroup,
    pub swipe: SwipeTracker,
    pub frame_gate: FrameGate,
    pub menu: MenuState,
    pub typewriter: Typewriter,
}

pub type SharedState = Rc<RefCell<PageState>>;

/// Everything a behavior needs to attach itself
pub struct PageController {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
    pub state: SharedState,
}

impl PageController {
    pub fn new(window: Window, document: Document, config: PageConfig) -> Self {
        let state = PageState {
            tracker: SectionTracker::from_config(&config),
            about: AboutReveal::new(&config.about_reveal),
            about_timers: TimerGroup::new(window.clone()),
            swipe: SwipeTracker::new(&config.gesture),
            frame_gate: FrameGate::new(),
            menu: MenuState::default(),
            typewriter: Typewriter::new(&config.typewriter),
        };

        Self {
            window,
            document,
            config: Rc::new(config),
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Attach every behavior. A behavior that cannot attach is logged and
    /// skipped; the others still install.
    pub fn install(&self) {
        let installers: [(&str, fn(&PageController) -> FolioResult<()>); 14] = [
            ("section-observer", behaviors::sections::install_observer),
            ("page-dots", behaviors::sections::install_dot_navigation),
            ("section-highlight", behaviors::sections::install_scroll_highlight),
            ("typewriter", behaviors::typewriter::install),
            ("timeline-filters", behaviors::timeline::install_filters),
            ("section-entrance", behaviors::entrance::install_sections),
            ("about-reveal", behaviors::entrance::install_about_reveal),
            ("nav-highlight", behaviors::navigation::install_link_highlight),
            ("smooth-anchors", behaviors::navigation::install_smooth_anchors),
            ("scroll-progress", behaviors::progress::install),
            ("navbar-state", behaviors::progress::install_navbar_state),
            ("mobile-menu", behaviors::navigation::install_menu),
            ("timeline-items", behaviors::timeline::install_item_selection),
            ("touch-swipe", behaviors::touch::install),
        ];

        for (name, install) in installers {
            match install(self) {
                Ok(()) => {}
                Err(err) if err.is_fatal_for_behavior() => {
                    tracing::warn!(behavior = name, error = %err, "behavior disabled");
                }
                Err(err) => {
                    tracing::warn!(behavior = name, error = %err, "behavior degraded");
                }
            }
        }

        tracing::info!("page behaviors installed");
    }
}

/// Install once the document has been parsed.
pub fn boot() -> FolioResult<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if document.ready_state() == "loading" {
        let target_document = document.clone();
        let mut pending = Some(window.clone());
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(window) = pending.take() {
                start_controller(window, target_document.clone());
            }
        })?;
    } else {
        start_controller(window, document);
    }
    Ok(())
}

fn start_controller(window: Window, document: Document) {
    let controller = PageController::new(window, document, global_config().clone());
    controller.install();
}
