//! Timeouts, debouncing and animation frames
//!
//! One-off callbacks are handed to the host as one-shot closures
//! (`Closure::once_into_js`), which free themselves after running. The
//! debouncer reuses a single long-lived closure instead, since most of its
//! timeouts are cancelled before they run.

use std::cell::RefCell;
use std::rc::Rc;

use folio_motion::{DebounceSlot, FolioResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::dom::js_err;

fn clamp_delay(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// Run `f` once after `delay_ms`. Returns the host timer handle.
pub fn set_timeout(window: &Window, delay_ms: u32, f: impl FnOnce() + 'static) -> FolioResult<i32> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            clamp_delay(delay_ms),
        )
        .map_err(js_err)
}

/// Run `f` before the next repaint.
pub fn request_frame(window: &Window, f: impl FnOnce() + 'static) -> FolioResult<i32> {
    let callback = Closure::once_into_js(f);
    window
        .request_animation_frame(callback.unchecked_ref())
        .map_err(js_err)
}

/// Ordered collection of pending timeouts that can be cancelled together.
pub struct TimerGroup {
    window: Window,
    handles: Vec<i32>,
}

impl TimerGroup {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            handles: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay_ms: u32, f: impl FnOnce() + 'static) -> FolioResult<()> {
        let handle = set_timeout(&self.window, delay_ms, f)?;
        self.handles.push(handle);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel everything still pending. Already-fired handles are no-ops.
    pub fn clear_all(&mut self) {
        for handle in self.handles.drain(..) {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

/// Trailing-edge debounce: `action` runs once `delay_ms` after the last
/// `trigger()`.
///
/// One host function is built up front and handed to every `setTimeout`, so
/// cancelled timeouts leave nothing behind.
#[derive(Clone)]
pub struct Debouncer {
    window: Window,
    delay_ms: u32,
    slot: Rc<RefCell<DebounceSlot>>,
    callback: Rc<Closure<dyn FnMut()>>,
}

impl Debouncer {
    pub fn new(window: Window, delay_ms: u32, action: impl Fn() + 'static) -> Self {
        let slot = Rc::new(RefCell::new(DebounceSlot::new()));
        let fired = Rc::clone(&slot);
        let callback = Closure::<dyn FnMut()>::new(move || {
            fired.borrow_mut().fired();
            action();
        });

        Self {
            window,
            delay_ms,
            slot,
            callback: Rc::new(callback),
        }
    }

    pub fn trigger(&self) {
        let function: &JsValue = (*self.callback).as_ref();
        let scheduled = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                function.unchecked_ref(),
                clamp_delay(self.delay_ms),
            )
            .map_err(js_err);

        match scheduled {
            Ok(handle) => {
                let superseded = self.slot.borrow_mut().rearm(handle);
                if let Some(old) = superseded {
                    self.window.clear_timeout_with_handle(old);
                }
            }
            Err(err) => tracing::warn!(error = %err, "debounced callback not scheduled"),
        }
    }
}
