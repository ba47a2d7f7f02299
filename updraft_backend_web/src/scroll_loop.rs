// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Passive `scroll` listener tick source.
//!
//! [`ScrollLoop`] drives section controllers from the browser's `scroll`
//! event. The listener is registered **passive** so it can never delay the
//! browser's own scroll handling, and each event is translated into a
//! [`ScrollTick`] carrying the page offset, a `performance.now()` timestamp,
//! and the current viewport dimensions.
//!
//! One `ScrollLoop` serves the whole page: sections subscribe through the
//! single user callback rather than each registering their own listener.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::AddEventListenerOptions;

use updraft_core::viewport::Viewport;

// Direct global binding instead of `web_sys::Window::performance()` —
// avoids fetching (and unwrapping) the Performance object on every event.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;
}

/// One scroll notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTick {
    /// Vertical page scroll offset in logical pixels.
    pub offset: f64,
    /// `performance.now()` timestamp in milliseconds.
    pub timestamp_ms: f64,
    /// Viewport dimensions at event time.
    pub viewport: Viewport,
}

/// A passive window `scroll` listener that emits [`ScrollTick`] events.
///
/// Create with [`ScrollLoop::new`], then call [`start`](Self::start) to
/// register the listener. [`stop`](Self::stop) (or dropping the loop)
/// removes it; timers already scheduled from earlier ticks may still fire
/// afterwards, which is safe because delivery is generation-guarded in
/// `updraft_core`.
pub struct ScrollLoop {
    inner: Rc<ScrollInner>,
}

type ScrollClosure = Closure<dyn FnMut(web_sys::Event)>;

struct ScrollInner {
    /// The JS closure registered as the scroll listener.
    closure: RefCell<Option<ScrollClosure>>,

    /// The user-supplied callback that receives [`ScrollTick`] events.
    callback: RefCell<Box<dyn FnMut(ScrollTick)>>,

    /// Whether the listener is currently registered.
    running: Cell<bool>,
}

impl ScrollLoop {
    /// Creates a new `ScrollLoop` that is **not yet listening**.
    ///
    /// `callback` will receive a [`ScrollTick`] on each scroll event once
    /// [`start`](Self::start) is called.
    pub fn new(callback: impl FnMut(ScrollTick) + 'static) -> Self {
        Self {
            inner: Rc::new(ScrollInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
            }),
        }
    }

    /// Registers the passive scroll listener.
    ///
    /// If already listening, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if !inner.running.get() {
                return;
            }
            let tick = ScrollTick {
                offset: current_offset(),
                timestamp_ms: performance_now(),
                viewport: crate::viewport(),
            };
            // The borrow is scoped so it doesn't overlap with `closure`.
            inner.callback.borrow_mut()(tick);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &options,
        );
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Removes the scroll listener.
    ///
    /// Can be restarted by calling [`start`](Self::start) again.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        if let (Some(window), Some(closure)) =
            (web_sys::window(), self.inner.closure.borrow().as_ref())
        {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }

    /// Returns `true` if the listener is currently registered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for ScrollLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for ScrollLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollLoop")
            .field("running", &self.inner.running.get())
            .finish_non_exhaustive()
    }
}

/// Reads the current vertical page offset.
fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
