// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the reveal loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! scroll-handler instrumentation calls at each stage. All method bodies
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

use crate::reveal::RevealState;
use crate::scroll::ScrollDirection;
use crate::section::{ElementId, Generation};
use crate::sequencer::ScheduledReveal;

/// Emitted when a scroll sample flips the derived direction.
#[derive(Clone, Copy, Debug)]
pub struct DirectionEvent {
    /// The newly derived direction.
    pub direction: ScrollDirection,
    /// The offset sample that produced it.
    pub offset: f64,
}

/// Emitted for each immediate state transition.
#[derive(Clone, Copy, Debug)]
pub struct TransitionEvent {
    /// The element that transitioned.
    pub element: ElementId,
    /// Its new state.
    pub state: RevealState,
}

/// Emitted when the sequencer schedules a delayed reveal.
#[derive(Clone, Copy, Debug)]
pub struct ScheduleEvent {
    /// The scheduled reveal command.
    pub reveal: ScheduledReveal,
}

/// Emitted when a timer fires and its reveal is applied.
#[derive(Clone, Copy, Debug)]
pub struct DeliverEvent {
    /// The element that became visible.
    pub element: ElementId,
}

/// Emitted when a timer fires but its reveal is stale and dropped.
#[derive(Clone, Copy, Debug)]
pub struct StaleRevealEvent {
    /// The reveal that was dropped.
    pub reveal: ScheduledReveal,
    /// The section generation at delivery time.
    pub current_generation: Generation,
}

/// Receives reveal-loop events.
///
/// All methods are optional; the default bodies do nothing.
pub trait TraceSink {
    /// A scroll sample flipped the direction signal.
    fn on_direction(&mut self, event: &DirectionEvent) {
        let _ = event;
    }

    /// An element transitioned state synchronously.
    fn on_transition(&mut self, event: &TransitionEvent) {
        let _ = event;
    }

    /// A delayed reveal was scheduled.
    fn on_schedule(&mut self, event: &ScheduleEvent) {
        let _ = event;
    }

    /// A delayed reveal was delivered and applied.
    fn on_deliver(&mut self, event: &DeliverEvent) {
        let _ = event;
    }

    /// A delayed reveal was dropped as stale.
    fn on_stale_reveal(&mut self, event: &StaleRevealEvent) {
        let _ = event;
    }
}

/// Zero-overhead wrapper over an optional [`TraceSink`].
///
/// Constructed fresh per event-handler invocation, mirroring how the caller
/// borrows its sink.
#[derive(Default)]
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a ()>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("Tracer");
        #[cfg(feature = "trace")]
        s.field("enabled", &self.sink.is_some());
        s.finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer backed by `sink`.
    ///
    /// With the `trace` feature disabled the sink is ignored entirely.
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            let _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that records nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Forwards a direction event.
    pub fn direction(&mut self, event: &DirectionEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_direction(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    /// Forwards a transition event.
    pub fn transition(&mut self, event: &TransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_transition(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    /// Forwards a schedule event.
    pub fn schedule(&mut self, event: &ScheduleEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_schedule(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    /// Forwards a deliver event.
    pub fn deliver(&mut self, event: &DeliverEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_deliver(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    /// Forwards a stale-reveal event.
    pub fn stale_reveal(&mut self, event: &StaleRevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_stale_reveal(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct CountingSink {
        directions: Vec<ScrollDirection>,
        transitions: usize,
        stale: usize,
    }

    impl TraceSink for CountingSink {
        fn on_direction(&mut self, event: &DirectionEvent) {
            self.directions.push(event.direction);
        }

        fn on_transition(&mut self, _event: &TransitionEvent) {
            self.transitions += 1;
        }

        fn on_stale_reveal(&mut self, _event: &StaleRevealEvent) {
            self.stale += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let mut sink = CountingSink::default();
        let mut tracer = Tracer::new(&mut sink);
        tracer.direction(&DirectionEvent {
            direction: ScrollDirection::Up,
            offset: 120.0,
        });
        drop(tracer);
        assert_eq!(sink.directions, alloc::vec![ScrollDirection::Up]);
    }

    #[test]
    fn disabled_tracer_records_nothing() {
        let mut tracer = Tracer::disabled();
        tracer.direction(&DirectionEvent {
            direction: ScrollDirection::Down,
            offset: 0.0,
        });
        // Nothing to assert beyond "does not panic": there is no sink.
    }
}
