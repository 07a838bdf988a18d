//! Navigation controls: mobile menu, smooth in-page anchors and nav-link
//! highlighting.

use std::rc::Rc;

use folio_motion::nav::{
    fragment_target, link_takes_highlight, LinkTraits, ACTIVE_CLASS, OPEN_CLASS,
};
use folio_motion::{ActiveMarker, FolioResult, ScrollAlign};
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior};

use crate::controller::PageController;
use crate::dom;
use crate::selectors::{FRAGMENT_ANCHORS, NAV_LINKS, NAV_LINKS_CONTAINER, NAV_TOGGLE};
use crate::timers::Debouncer;

/// Hamburger toggle and close-on-link-click for mobile. The resize close
/// only needs the link list and attaches even without a toggle.
pub fn install_menu(ctrl: &PageController) -> FolioResult<()> {
    let Some(list) = dom::query(&ctrl.document, NAV_LINKS_CONTAINER) else {
        tracing::debug!("no nav links container, menu not attached");
        return Ok(());
    };

    install_resize_close(ctrl)?;

    let Some(toggle) = dom::query(&ctrl.document, NAV_TOGGLE) else {
        tracing::debug!("no hamburger toggle");
        return Ok(());
    };

    {
        let state = Rc::clone(&ctrl.state);
        let list = list.clone();
        dom::listen(&toggle, "click", move |_| {
            let open = state.borrow_mut().menu.toggle();
            dom::set_class(&list, OPEN_CLASS, open);
        })?;
    }

    for link in dom::query_all(&ctrl.document, NAV_LINKS) {
        let state = Rc::clone(&ctrl.state);
        let list = list.clone();
        dom::listen(&link, "click", move |_| {
            state.borrow_mut().menu.close();
            dom::remove_class(&list, OPEN_CLASS);
        })?;
    }
    Ok(())
}

/// Debounced resize: close the menu on mobile-width viewports.
fn install_resize_close(ctrl: &PageController) -> FolioResult<()> {
    let window = ctrl.window.clone();
    let document = ctrl.document.clone();
    let state = Rc::clone(&ctrl.state);
    let mobile_max_width = ctrl.config.navigation.mobile_max_width;

    let on_resize = Debouncer::new(
        ctrl.window.clone(),
        ctrl.config.scroll.resize_debounce_ms,
        move || {
            let width = dom::viewport_size(&window).width;
            if state.borrow_mut().menu.on_resize(width, mobile_max_width) {
                for nav in dom::query_all(&document, NAV_LINKS_CONTAINER) {
                    dom::remove_class(&nav, OPEN_CLASS);
                }
            }
        },
    );
    dom::listen(&ctrl.window, "resize", move |_| on_resize.trigger())
}

/// In-page fragment links scroll smoothly instead of jumping.
pub fn install_smooth_anchors(ctrl: &PageController) -> FolioResult<()> {
    for anchor in dom::query_all(&ctrl.document, FRAGMENT_ANCHORS) {
        let document = ctrl.document.clone();
        let clicked = anchor.clone();

        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = clicked.get_attribute("href").unwrap_or_default();
            let target = fragment_target(&href).and_then(|id| document.get_element_by_id(id));
            if let Some(target) = target {
                dom::scroll_into_view(&target, ScrollBehavior::Smooth, Some(ScrollAlign::Start));
            }
        })?;
    }
    Ok(())
}

/// Clicks inside the nav list move the active marker to the clicked link,
/// except for new-tab links and the contact/resume buttons.
pub fn install_link_highlight(ctrl: &PageController) -> FolioResult<()> {
    let Some(container) = dom::query(&ctrl.document, NAV_LINKS_CONTAINER) else {
        tracing::debug!("no nav links container");
        return Ok(());
    };

    let links = Rc::new(dom::query_all(&ctrl.document, NAV_LINKS));
    dom::listen(&container, "click", move |event| {
        let Some(link) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
        else {
            return;
        };

        let target = link.get_attribute("target");
        let class_name = link.class_name();
        let traits = LinkTraits {
            target: target.as_deref(),
            class_name: &class_name,
        };
        if !link_takes_highlight(traits) {
            return;
        }

        let mut marker = ActiveMarker::new(links.len());
        if let Some(index) = dom::index_of(&links, &link) {
            marker.activate(index);
        }
        dom::apply_marker(&links, &marker, ACTIVE_CLASS);
    })
}
