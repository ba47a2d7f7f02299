// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core state machines for scroll-direction-driven reveal animation.
//!
//! `updraft_core` provides the building blocks for sections of a page that
//! reveal their content with a staggered entrance animation as the user
//! scrolls, and hide it again when the scroll direction reverses. It is
//! `no_std` compatible (with `alloc`) and contains no platform calls; browser
//! glue lives in `updraft_backend_web`.
//!
//! # Architecture
//!
//! The crate is organized around a per-section controller that turns scroll
//! notifications into incremental state changes:
//!
//! ```text
//!   Backend (scroll source)
//!       │
//!       ▼
//!   ScrollInput ──► SectionController::handle_scroll() ──► RevealChanges
//!                        │                                     │
//!            ScrollTracker (direction)              immediate transitions
//!            RevealThresholds (per element)                    +
//!            RevealSequencer (stagger)               ScheduledReveal commands
//!                                                              │
//!                                                              ▼
//!                          timer fires ──► SectionController::deliver_reveal()
//!                                                              │
//!                                                              ▼
//!                                                   RevealPresenter::apply()
//! ```
//!
//! **[`scroll`]** — Single-slot scroll offset memory and coarse up/down
//! direction derivation.
//!
//! **[`reveal`]** — The hidden/visible/exiting state machine for one tracked
//! element, driven by direction plus viewport-relative position thresholds.
//!
//! **[`sequencer`]** — Staggered activation of still-hidden siblings when a
//! section enters view, emitted as generation-tagged schedule commands.
//!
//! **[`section`]** — The per-section controller owning tracker, sequencer,
//! and element slots, with generational handles that make stale timer
//! delivery a guaranteed no-op.
//!
//! **[`motion`]** — Responsive distance/duration selection and the mapping
//! from reveal state to a concrete visual transform.
//!
//! **[`viewport`]** — Viewport dimensions and the coarse narrow/wide
//! classification.
//!
//! **[`backend`]** — The [`RevealPresenter`](backend::RevealPresenter) trait
//! that platform backends implement to apply reveal changes to a native
//! element tree.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! reveal-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod motion;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod sequencer;
pub mod trace;
pub mod viewport;
