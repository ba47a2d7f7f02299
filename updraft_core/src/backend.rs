// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Updraft splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Scroll source** — Delivers scroll notifications (offset, viewport,
//!   timestamp) via a platform mechanism (e.g. a passive DOM `scroll`
//!   listener). This is backend-specific and not abstracted by a trait
//!   because registration and lifecycle differ across platforms.
//!
//! - **Measurement** — Supplies viewport-relative element bounds on demand,
//!   fed into [`SectionController::handle_scroll`] as the `measure` closure.
//!   A measurement that cannot be taken returns `None` and the element is
//!   skipped for that event.
//!
//! - **Timers** — Runs each [`ScheduledReveal`] after its delay and hands
//!   the firing back to [`SectionController::deliver_reveal`], which guards
//!   against stale deliveries. Backends never need to cancel timers.
//!
//! - **Presenter** — Implements the [`RevealPresenter`] trait to apply
//!   transitions to a platform-native element tree (e.g. CSS
//!   transform/opacity on DOM nodes).
//!
//! # Crate boundaries
//!
//! `updraft_core` owns the data model, the state machines, and this
//! contract module. Backend crates depend on `updraft_core` and provide
//! platform glue. Application code depends on both and wires them together
//! in a scroll handler:
//!
//! ```rust,ignore
//! fn on_scroll(tick: ScrollTick) {
//!     let input = ScrollInput {
//!         offset: tick.offset,
//!         viewport: tick.viewport,
//!         section_in_view: presenter.section_in_view(&tick.viewport),
//!     };
//!     let changes = controller.handle_scroll(&input, |id| presenter.measure(id));
//!     presenter.apply(&changes);
//!     for reveal in &changes.scheduled {
//!         timer.schedule(*reveal); // fires into deliver_reveal() later
//!     }
//! }
//! ```
//!
//! [`SectionController::handle_scroll`]: crate::section::SectionController::handle_scroll
//! [`SectionController::deliver_reveal`]: crate::section::SectionController::deliver_reveal
//! [`ScheduledReveal`]: crate::sequencer::ScheduledReveal

use crate::section::RevealChanges;

/// Applies reveal transitions to a platform-native element tree.
///
/// Both DOM-based presenters and test doubles implement this trait, enabling
/// generic scroll handlers and deterministic simulation.
pub trait RevealPresenter {
    /// Applies the immediate transitions in `changes` to the backing
    /// elements.
    ///
    /// Scheduled reveals are *not* applied here; they flow through the
    /// backend's timer mechanism first. Elements that no longer exist are
    /// skipped silently — presentation degrades to "no animation", never to
    /// an error.
    fn apply(&mut self, changes: &RevealChanges);
}
