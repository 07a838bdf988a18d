//! Section tracking: visibility observer, page-dot navigation and the
//! debounced midpoint highlighter.

use std::rc::Rc;

use folio_motion::config::ObserverConfig;
use folio_motion::nav::ACTIVE_CLASS;
use folio_motion::{ActiveMarker, FolioResult, SectionBounds, VISIBLE_CLASS};
use web_sys::{Element, ScrollBehavior};

use crate::controller::PageController;
use crate::dom;
use crate::selectors::{DOT_SECTION_ATTR, NAV_LINKS, PAGE_DOTS, TRACKED_SECTIONS};
use crate::timers::Debouncer;

/// Record the section the observer reports and move the dot highlight to it.
pub fn install_observer(ctrl: &PageController) -> FolioResult<()> {
    let sections = dom::query_all(&ctrl.document, TRACKED_SECTIONS);
    if sections.is_empty() {
        tracing::debug!("no tracked sections, section observer not attached");
        return Ok(());
    }

    let dots = dom::query_all(&ctrl.document, PAGE_DOTS);
    let state = Rc::clone(&ctrl.state);
    let observed = sections.clone();
    let options: &ObserverConfig = &ctrl.config.section_observer;

    dom::observe_intersecting(&sections, options, move |target| {
        let Some(index) = dom::index_of(&observed, target) else {
            return;
        };
        dom::add_class(target, VISIBLE_CLASS);
        dom::apply_marker(&dots, &ActiveMarker::with_active(dots.len(), index), ACTIVE_CLASS);
        state.borrow_mut().tracker.observe_intersecting(index);
    })?;

    tracing::debug!(count = sections.len(), "section observer attached");
    Ok(())
}

/// Clicking a dot scrolls to its section and takes the highlight at once.
pub fn install_dot_navigation(ctrl: &PageController) -> FolioResult<()> {
    let dots = Rc::new(dom::query_all(&ctrl.document, PAGE_DOTS));

    for (index, dot) in dots.iter().enumerate() {
        let dots = Rc::clone(&dots);
        let clicked = dot.clone();
        let document = ctrl.document.clone();
        let state = Rc::clone(&ctrl.state);

        dom::listen(dot, "click", move |_| {
            let Some(section) = clicked.get_attribute(DOT_SECTION_ATTR) else {
                return;
            };
            let Some(target) = document.get_element_by_id(&section) else {
                return;
            };

            let align = state.borrow_mut().tracker.select_dot(index, &section);
            dom::scroll_into_view(&target, ScrollBehavior::Smooth, Some(align));
            dom::apply_marker(&dots, &ActiveMarker::with_active(dots.len(), index), ACTIVE_CLASS);
        })?;
    }
    Ok(())
}

/// On scroll (debounced), highlight the nav link and dot of the section
/// straddling the viewport midpoint.
pub fn install_scroll_highlight(ctrl: &PageController) -> FolioResult<()> {
    let window = ctrl.window.clone();
    let document = ctrl.document.clone();
    let state = Rc::clone(&ctrl.state);

    let debouncer = Debouncer::new(ctrl.window.clone(), ctrl.config.scroll.debounce_ms, move || {
        let sections = dom::query_all(&document, TRACKED_SECTIONS);
        let bounds = bounds_of(&sections);
        let ids: Vec<String> = sections.iter().map(Element::id).collect();
        let viewport_height = dom::viewport_size(&window).height;

        let current = state.borrow().tracker.midpoint_highlight(&bounds, &ids, viewport_height);
        let Some(highlight) = current else {
            return;
        };
        tracing::debug!(section = %highlight.name, "current section");

        let links = dom::query_all(&document, NAV_LINKS);
        let dots = dom::query_all(&document, PAGE_DOTS);
        let markers = highlight.markers(
            &attribute_values(&links, "href"),
            &attribute_values(&dots, DOT_SECTION_ATTR),
        );
        dom::apply_marker(&links, &markers.links, ACTIVE_CLASS);
        dom::apply_marker(&dots, &markers.dots, ACTIVE_CLASS);
    });

    dom::listen(&ctrl.window, "scroll", move |_| debouncer.trigger())
}

fn attribute_values(elements: &[Element], name: &str) -> Vec<Option<String>> {
    elements.iter().map(|e| e.get_attribute(name)).collect()
}

fn bounds_of(sections: &[Element]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|s| {
            let rect = s.get_bounding_client_rect();
            SectionBounds::new(rect.top(), rect.bottom())
        })
        .collect()
}
