// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for updraft.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`ScrollLoop`]: passive `scroll` listener delivering [`ScrollTick`]s
//! - [`DomRevealPresenter`]: DOM element management and measurement
//! - [`schedule_reveal`]: `setTimeout`-based delivery of staggered reveals

#![no_std]

extern crate alloc;

mod presenter;
mod scroll_loop;
mod timer;

pub use presenter::DomRevealPresenter;
pub use scroll_loop::{ScrollLoop, ScrollTick};
pub use timer::schedule_reveal;
pub use updraft_core::backend::RevealPresenter;

use updraft_core::viewport::Viewport;

/// Returns the current time in milliseconds from `performance.now()`.
#[must_use]
pub fn now_ms() -> f64 {
    scroll_loop::performance_now()
}

/// Reads the current viewport dimensions from the window's inner size.
///
/// Dimensions that cannot be read report `0.0`, which downstream probes
/// treat as "nothing visible".
#[must_use]
pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height)
}
