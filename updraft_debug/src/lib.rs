// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing trace sinks for updraft diagnostics.
//!
//! This crate provides [`TraceSink`](updraft_core::trace::TraceSink)
//! implementations for development:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.

pub mod pretty;
