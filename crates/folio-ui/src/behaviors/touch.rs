//! Vertical swipe navigation between tracked sections.

use std::rc::Rc;

use folio_motion::FolioResult;
use wasm_bindgen::JsCast;
use web_sys::{Event, ScrollBehavior, TouchEvent};

use crate::controller::PageController;
use crate::dom;
use crate::selectors::TRACKED_SECTIONS;

fn changed_touch_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_y()))
}

pub fn install(ctrl: &PageController) -> FolioResult<()> {
    let sections = Rc::new(dom::query_all(&ctrl.document, TRACKED_SECTIONS));

    {
        let state = Rc::clone(&ctrl.state);
        dom::listen(&ctrl.document, "touchstart", move |event| {
            if let Some(y) = changed_touch_y(&event) {
                state.borrow_mut().swipe.touch_start(y);
            }
        })?;
    }

    let state = Rc::clone(&ctrl.state);
    dom::listen(&ctrl.document, "touchend", move |event| {
        let Some(y) = changed_touch_y(&event) else {
            return;
        };

        let target = {
            let mut state = state.borrow_mut();
            state
                .swipe
                .touch_end(y)
                .and_then(|direction| state.tracker.swipe_target(direction, sections.len()))
        };

        if let Some(section) = target.and_then(|i| sections.get(i)) {
            dom::scroll_into_view(section, ScrollBehavior::Smooth, None);
        }
    })
}
