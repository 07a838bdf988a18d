//! Typewriter greeting loop.

use std::rc::Rc;

use folio_motion::FolioResult;
use web_sys::{Element, Window};

use crate::controller::{PageController, SharedState};
use crate::selectors::TYPEWRITER_ID;
use crate::timers;

/// Start the loop after the configured delay. Runs for the page lifetime.
pub fn install(ctrl: &PageController) -> FolioResult<()> {
    let Some(element) = ctrl.document.get_element_by_id(TYPEWRITER_ID) else {
        tracing::debug!("no typewriter element");
        return Ok(());
    };

    let start_delay = ctrl.state.borrow().typewriter.start_delay_ms();
    let window = ctrl.window.clone();
    let state = Rc::clone(&ctrl.state);
    timers::set_timeout(&ctrl.window, start_delay, move || step(window, element, state))?;
    Ok(())
}

fn step(window: Window, element: Element, state: SharedState) {
    let frame = state.borrow_mut().typewriter.tick();
    element.set_text_content(Some(&frame.text));

    let next_window = window.clone();
    let scheduled = timers::set_timeout(&window, frame.delay_ms, move || {
        step(next_window, element, state)
    });
    if let Err(err) = scheduled {
        tracing::warn!(error = %err, "typewriter stopped");
    }
}
