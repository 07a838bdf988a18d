//! Timeline filter buttons and timeline item selection.

use std::rc::Rc;

use folio_motion::nav::ACTIVE_CLASS;
use folio_motion::{
    ActiveMarker, FilterGroup, FilterSelection, FolioResult, ScrollAlign, TimelineEntry,
};
use web_sys::{Document, Element, ScrollBehavior};

use crate::controller::PageController;
use crate::dom;
use crate::selectors::{
    CATEGORY_ATTR, FILTER_BUTTONS, TIMELINE_ITEMS, TIMELINE_SECTION_ID, YEAR_ATTR, YEAR_BUTTONS,
};
use crate::timers;

/// Wire the filter groups once injected timeline content has had time to
/// appear, then show every entry.
pub fn install_filters(ctrl: &PageController) -> FolioResult<()> {
    let document = ctrl.document.clone();
    timers::set_timeout(&ctrl.window, ctrl.config.timeline.init_delay_ms, move || {
        let items = Rc::new(dom::query_all(&document, TIMELINE_ITEMS));
        let groups = [
            (FilterGroup::Category, FILTER_BUTTONS),
            (FilterGroup::Year, YEAR_BUTTONS),
        ];
        for (group, selector) in groups {
            let buttons = dom::query_all(&document, selector);
            if let Err(err) = wire_group(&document, group, buttons, Rc::clone(&items)) {
                tracing::warn!(?group, error = %err, "filter group not wired");
            }
        }
        apply_filter(&items, &FilterSelection::All);
    })?;
    Ok(())
}

fn wire_group(
    document: &Document,
    group: FilterGroup,
    buttons: Vec<Element>,
    items: Rc<Vec<Element>>,
) -> FolioResult<()> {
    let buttons = Rc::new(buttons);

    for (index, button) in buttons.iter().enumerate() {
        let buttons = Rc::clone(&buttons);
        let items = Rc::clone(&items);
        let clicked = button.clone();
        let document = document.clone();

        dom::listen(button, "click", move |event| {
            event.prevent_default();
            dom::apply_marker(
                &buttons,
                &ActiveMarker::with_active(buttons.len(), index),
                ACTIVE_CLASS,
            );

            let value = clicked
                .get_attribute(group.value_attribute())
                .unwrap_or_default();
            apply_filter(&items, &group.selection(&value));

            if group.scrolls_to_timeline() {
                if let Some(timeline) = document.get_element_by_id(TIMELINE_SECTION_ID) {
                    dom::scroll_into_view(
                        &timeline,
                        ScrollBehavior::Instant,
                        Some(ScrollAlign::End),
                    );
                }
            }
        })?;
    }
    Ok(())
}

fn apply_filter(items: &[Element], selection: &FilterSelection) {
    let entries: Vec<TimelineEntry> = items
        .iter()
        .map(|item| TimelineEntry {
            category: item.get_attribute(CATEGORY_ATTR),
            year: item.get_attribute(YEAR_ATTR),
        })
        .collect();

    for (item, visibility) in items.iter().zip(selection.apply(&entries)) {
        dom::set_style(item, "display", visibility.display);
        dom::set_style(item, "visibility", visibility.visibility);
    }
}

/// Clicking a timeline item makes it the only active one.
pub fn install_item_selection(ctrl: &PageController) -> FolioResult<()> {
    for item in dom::query_all(&ctrl.document, TIMELINE_ITEMS) {
        let document = ctrl.document.clone();
        let clicked = item.clone();

        dom::listen(&item, "click", move |_| {
            // Re-query: entries may have been added since load
            let items = dom::query_all(&document, TIMELINE_ITEMS);
            let mut marker = ActiveMarker::new(items.len());
            if let Some(index) = dom::index_of(&items, &clicked) {
                marker.activate(index);
            }
            dom::apply_marker(&items, &marker, ACTIVE_CLASS);
        })?;
    }
    Ok(())
}
