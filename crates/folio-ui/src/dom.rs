//! DOM access helpers
//!
//! Lookups return `Option`/empty `Vec` instead of failing, so a missing
//! element only disables the behavior that wanted it. Class and style writes
//! ignore host rejections (they only fail for malformed tokens, and every
//! token here is a constant).

use folio_motion::config::ObserverConfig;
use folio_motion::{ActiveMarker, FolioError, FolioResult, ScrollAlign, ViewportSize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// Map a rejected host call into a behavior error
pub fn js_err(err: JsValue) -> FolioError {
    FolioError::Dom(format!("{:?}", err))
}

pub fn window() -> FolioResult<Window> {
    web_sys::window().ok_or(FolioError::NoWindow)
}

pub fn document(window: &Window) -> FolioResult<Document> {
    window.document().ok_or(FolioError::NoWindow)
}

// =============================================================================
// LOOKUPS
// =============================================================================

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// Position of `element` within `group`
pub fn index_of(group: &[Element], element: &Element) -> Option<usize> {
    group.iter().position(|e| e == element)
}

// =============================================================================
// CLASSES & STYLES
// =============================================================================

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Write an exclusive marker's state onto its element group.
pub fn apply_marker(group: &[Element], marker: &ActiveMarker, class: &str) {
    for (element, on) in group.iter().zip(marker.states()) {
        set_class(element, class, on);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

// =============================================================================
// VIEWPORT & SCROLLING
// =============================================================================

pub fn viewport_size(window: &Window) -> ViewportSize {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    ViewportSize::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn document_height(document: &Document) -> f64 {
    document
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Scroll `element` into view. `align: None` keeps the browser default.
pub fn scroll_into_view(element: &Element, behavior: ScrollBehavior, align: Option<ScrollAlign>) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(behavior);
    if let Some(align) = align {
        options.set_block(match align {
            ScrollAlign::Start => ScrollLogicalPosition::Start,
            ScrollAlign::Center => ScrollLogicalPosition::Center,
            ScrollAlign::End => ScrollLogicalPosition::End,
        });
    }
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

// =============================================================================
// EVENTS & OBSERVERS
// =============================================================================

/// Attach a page-lifetime event listener.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> FolioResult<()> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    callback.forget();
    Ok(())
}

/// Attach a page-lifetime passive listener (never calls `preventDefault`).
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> FolioResult<()> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);

    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    callback.forget();
    Ok(())
}

/// Observe `elements` and call `on_entry` for every reported entry that is
/// intersecting. The observer lives for the rest of the page.
pub fn observe_intersecting(
    elements: &[Element],
    options: &ObserverConfig,
    mut on_entry: impl FnMut(&Element) + 'static,
) -> FolioResult<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_entry(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_err)?;
    for element in elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(observer)
}
