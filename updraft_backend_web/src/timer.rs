// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout`-based delivery of staggered reveals.
//!
//! Scheduled reveals are fire-and-forget: nothing cancels a timer when a
//! section unmounts or the route changes. Instead, every firing funnels
//! through [`SectionController::deliver_reveal`], which drops deliveries
//! whose generation is stale, so a late timer can never mutate state for a
//! no-longer-rendered element.
//!
//! [`SectionController::deliver_reveal`]: updraft_core::section::SectionController::deliver_reveal

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use updraft_core::reveal::RevealState;
use updraft_core::section::{ElementId, SectionController};
use updraft_core::sequencer::ScheduledReveal;

/// Schedules one reveal with `setTimeout`.
///
/// When the timer fires, the reveal is handed to the controller; if it is
/// still current, `present` is called with the resulting transition. Stale
/// reveals are dropped silently. The closure is one-shot and freed after
/// the timer fires.
pub fn schedule_reveal(
    section: &Rc<RefCell<SectionController>>,
    reveal: ScheduledReveal,
    present: impl FnOnce(ElementId, RevealState) + 'static,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let section = Rc::clone(section);
    let fired = Closure::once_into_js(move || {
        if let Some((element, state)) = section.borrow_mut().deliver_reveal(reveal) {
            present(element, state);
        }
    });
    let delay = i32::try_from(reveal.delay_ms).unwrap_or(i32::MAX);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(fired.unchecked_ref(), delay);
}
