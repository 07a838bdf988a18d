//! Scroll progress bar and navbar scroll state.

use std::rc::Rc;

use folio_motion::progress::{navbar_scrolled, scroll_progress, width_css};
use folio_motion::{FolioError, FolioResult, SCROLLED_CLASS};
use web_sys::{Document, Element, Window};

use crate::controller::PageController;
use crate::dom;
use crate::selectors::{NAVBAR_ID, SCROLL_INDICATOR};
use crate::timers::{self, Debouncer};

fn update_indicator(window: &Window, document: &Document, indicator: &Element) {
    let viewport_height = dom::viewport_size(window).height;
    let percent = scroll_progress(
        dom::scroll_y(window),
        dom::document_height(document),
        viewport_height,
    );
    dom::set_style(indicator, "width", &width_css(percent));
}

/// Keep the indicator width in step with scroll position.
///
/// Two paths update it: the debounced scroll handler, and a passive
/// listener that coalesces updates into one animation frame at a time.
pub fn install(ctrl: &PageController) -> FolioResult<()> {
    let indicator = dom::query(&ctrl.document, SCROLL_INDICATOR)
        .ok_or(FolioError::MissingElement(SCROLL_INDICATOR))?;

    let debounced = {
        let window = ctrl.window.clone();
        let document = ctrl.document.clone();
        let indicator = indicator.clone();
        Debouncer::new(ctrl.window.clone(), ctrl.config.scroll.debounce_ms, move || {
            update_indicator(&window, &document, &indicator)
        })
    };
    dom::listen(&ctrl.window, "scroll", move |_| debounced.trigger())?;

    let window = ctrl.window.clone();
    let document = ctrl.document.clone();
    let state = Rc::clone(&ctrl.state);
    dom::listen_passive(&ctrl.window, "scroll", move |_| {
        if !state.borrow_mut().frame_gate.request() {
            return;
        }

        let frame_window = window.clone();
        let frame_document = document.clone();
        let frame_indicator = indicator.clone();
        let frame_state = Rc::clone(&state);
        let scheduled = timers::request_frame(&window, move || {
            frame_state.borrow_mut().frame_gate.begin_frame();
            update_indicator(&frame_window, &frame_document, &frame_indicator);
        });
        if let Err(err) = scheduled {
            tracing::warn!(error = %err, "progress frame not scheduled");
            state.borrow_mut().frame_gate.begin_frame();
        }
    })
}

/// Mark the navbar `scrolled` once the page is past the configured offset.
pub fn install_navbar_state(ctrl: &PageController) -> FolioResult<()> {
    let navbar = ctrl
        .document
        .get_element_by_id(NAVBAR_ID)
        .ok_or(FolioError::MissingElement("#navbar"))?;

    let window = ctrl.window.clone();
    let offset = ctrl.config.scroll.navbar_scrolled_offset;
    let debounced = Debouncer::new(ctrl.window.clone(), ctrl.config.scroll.debounce_ms, move || {
        let scrolled = navbar_scrolled(dom::scroll_y(&window), offset);
        dom::set_class(&navbar, SCROLLED_CLASS, scrolled);
    });

    dom::listen(&ctrl.window, "scroll", move |_| debounced.trigger())
}
