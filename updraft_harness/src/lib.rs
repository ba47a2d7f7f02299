// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic simulation pieces for exercising updraft controllers
//! without a browser.
//!
//! [`SimClock`] is a manual-advance millisecond clock, [`TimerQueue`] holds
//! scheduled reveals until their due time, and [`ScrollScript`] replays a
//! list of scroll steps into a [`SectionController`], recording every
//! transition with its timestamp. Together they make the full reveal loop —
//! scroll sampling, cascade scheduling, delayed delivery, stale-timer
//! dropping — reproducible in ordinary unit tests.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use updraft_core::reveal::RevealState;
use updraft_core::section::{ElementId, ScrollInput, SectionController};
use updraft_core::sequencer::ScheduledReveal;
use updraft_core::viewport::Viewport;

/// Manual-advance clock in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimClock {
    now_ms: f64,
}

impl SimClock {
    /// Creates a clock at `t = 0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { now_ms: 0.0 }
    }

    /// Returns the current time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Advances the clock by `delta_ms` (negative deltas are ignored).
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
    }
}

/// A reveal waiting in the queue.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingReveal {
    due_ms: f64,
    reveal: ScheduledReveal,
}

/// Ordered queue of scheduled reveals, fired by advancing time.
///
/// Timers are never cancelled — exactly like the browser backend. Stale
/// entries are dropped at delivery by the controller's generation guard.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    pending: Vec<PendingReveal>,
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Enqueues a reveal scheduled at `now_ms`.
    pub fn schedule(&mut self, now_ms: f64, reveal: ScheduledReveal) {
        self.pending.push(PendingReveal {
            due_ms: now_ms + f64::from(reveal.delay_ms),
            reveal,
        });
    }

    /// Removes and returns every reveal due at or before `now_ms`, with its
    /// due time, ordered by due time (insertion order breaks ties).
    pub fn fire_due(&mut self, now_ms: f64) -> Vec<(f64, ScheduledReveal)> {
        let mut due: Vec<(f64, ScheduledReveal)> = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for entry in self.pending.drain(..) {
            if entry.due_ms <= now_ms {
                due.push((entry.due_ms, entry.reveal));
            } else {
                remaining.push(entry);
            }
        }
        self.pending = remaining;
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due
    }

    /// Returns the number of reveals still waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// One step of a scripted scroll session.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollStep {
    /// Absolute time of the scroll event in milliseconds.
    pub at_ms: f64,
    /// Page scroll offset at this step.
    pub offset: f64,
    /// Whether the section root intersects the viewport at this step.
    pub in_view: bool,
    /// Per-element bounds indexed by [`ElementId::index`]; `None` entries
    /// are unmeasurable and skipped.
    pub bounds: Vec<Option<Rect>>,
}

/// One recorded transition, tagged with the simulated time it occurred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRecord {
    /// Simulated time of the transition in milliseconds.
    pub at_ms: f64,
    /// The element that transitioned.
    pub element: ElementId,
    /// Its new state.
    pub state: RevealState,
}

/// Replays scroll steps into a controller, firing due timers in between.
///
/// Steps must be in ascending `at_ms` order. Timers left pending after the
/// last step are fired at their due times before the replay returns.
#[derive(Clone, Debug, Default)]
pub struct ScrollScript {
    steps: Vec<ScrollStep>,
}

impl ScrollScript {
    /// Creates an empty script.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step.
    pub fn push(&mut self, step: ScrollStep) {
        self.steps.push(step);
    }

    /// Replays the script and returns every transition in time order.
    pub fn replay(
        &self,
        controller: &mut SectionController,
        viewport: Viewport,
    ) -> Vec<TransitionRecord> {
        let mut timers = TimerQueue::new();
        let mut records = Vec::new();

        for step in &self.steps {
            Self::drain_due(controller, &mut timers, step.at_ms, &mut records);

            let input = ScrollInput {
                offset: step.offset,
                viewport,
                section_in_view: step.in_view,
            };
            let changes = controller.handle_scroll(&input, |id| {
                step.bounds.get(id.index() as usize).copied().flatten()
            });
            for (element, state) in changes.transitions {
                records.push(TransitionRecord {
                    at_ms: step.at_ms,
                    element,
                    state,
                });
            }
            for reveal in changes.scheduled {
                timers.schedule(step.at_ms, reveal);
            }
        }

        Self::drain_due(controller, &mut timers, f64::INFINITY, &mut records);
        records
    }

    fn drain_due(
        controller: &mut SectionController,
        timers: &mut TimerQueue,
        now_ms: f64,
        records: &mut Vec<TransitionRecord>,
    ) {
        for (due_ms, reveal) in timers.fire_due(now_ms) {
            if let Some((element, state)) = controller.deliver_reveal(reveal) {
                records.push(TransitionRecord {
                    at_ms: due_ms,
                    element,
                    state,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use updraft_core::section::SectionConfig;

    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn bounds_at(top: f64) -> Rect {
        Rect::new(0.0, top, 400.0, top + 200.0)
    }

    fn controller_with(n: usize) -> (SectionController, Vec<ElementId>) {
        let mut c = SectionController::new(SectionConfig::default());
        let ids = (0..n).map(|_| c.add_element()).collect();
        (c, ids)
    }

    #[test]
    fn clock_advances_monotonically() {
        let mut clock = SimClock::new();
        clock.advance(16.0);
        clock.advance(-5.0);
        assert_eq!(clock.now_ms(), 16.0);
    }

    #[test]
    fn timer_queue_fires_in_due_order() {
        let (mut c, _) = controller_with(3);
        let changes = c.handle_scroll(
            &ScrollInput {
                offset: 100.0,
                viewport: VIEWPORT,
                section_in_view: true,
            },
            |_| Some(bounds_at(500.0)),
        );

        let mut queue = TimerQueue::new();
        for reveal in changes.scheduled {
            queue.schedule(0.0, reveal);
        }
        assert_eq!(queue.len(), 3);

        // Nothing due before the first delay elapses beyond 0.
        let due = queue.fire_due(0.0);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].0, 0.0);

        let due = queue.fire_due(1000.0);
        assert_eq!(due.len(), 2);
        assert!(due[0].0 < due[1].0, "due order must be preserved");
        assert!(queue.is_empty());
    }

    /// Scenario: a section with three children enters view scrolling down;
    /// the children become visible at t ≈ 0, 150, 300 ms.
    #[test]
    fn staggered_entrance_cascade() {
        let (mut c, ids) = controller_with(3);
        let mut script = ScrollScript::new();
        script.push(ScrollStep {
            at_ms: 0.0,
            offset: 100.0,
            in_view: true,
            bounds: vec![Some(bounds_at(500.0)); 3],
        });

        let records = script.replay(&mut c, VIEWPORT);
        assert_eq!(records.len(), 3);
        let expected = [(0.0, ids[0]), (150.0, ids[1]), (300.0, ids[2])];
        for (record, (at_ms, element)) in records.iter().zip(expected) {
            assert_eq!(record.at_ms, at_ms);
            assert_eq!(record.element, element);
            assert_eq!(record.state, RevealState::Visible);
        }
    }

    /// Scenario: a visible element starts exiting when the user scrolls up
    /// with the element's top past 75% of an 800 px viewport (top > 600).
    #[test]
    fn upward_scroll_past_exit_line_exits() {
        let (mut c, ids) = controller_with(1);
        let mut script = ScrollScript::new();
        script.push(ScrollStep {
            at_ms: 0.0,
            offset: 400.0,
            in_view: true,
            bounds: vec![Some(bounds_at(300.0))],
        });
        script.push(ScrollStep {
            at_ms: 500.0,
            offset: 380.0,
            in_view: true,
            bounds: vec![Some(bounds_at(620.0))],
        });

        let records = script.replay(&mut c, VIEWPORT);
        assert_eq!(
            records.last(),
            Some(&TransitionRecord {
                at_ms: 500.0,
                element: ids[0],
                state: RevealState::Exiting,
            })
        );
        assert_eq!(c.state_of(ids[0]), Some(RevealState::Exiting));
    }

    /// Scenario: the section unmounts right after scheduling a cascade; the
    /// pending timers fire into a reset controller and mutate nothing.
    #[test]
    fn reset_between_schedule_and_delivery_drops_reveals() {
        let (mut c, ids) = controller_with(2);
        let changes = c.handle_scroll(
            &ScrollInput {
                offset: 100.0,
                viewport: VIEWPORT,
                section_in_view: true,
            },
            |_| Some(bounds_at(500.0)),
        );
        let mut timers = TimerQueue::new();
        for reveal in changes.scheduled {
            timers.schedule(0.0, reveal);
        }

        // Unmount before any timer fires.
        let _ = c.reset();

        for (_, reveal) in timers.fire_due(f64::INFINITY) {
            assert_eq!(c.deliver_reveal(reveal), None);
        }
        for id in ids {
            assert_eq!(c.state_of(id), Some(RevealState::Hidden));
        }
    }

    /// Direction oscillation around a scroll-stop point flips the signal on
    /// every event but produces no spurious reveals for offscreen elements.
    #[test]
    fn oscillation_without_view_produces_no_transitions() {
        let (mut c, _) = controller_with(2);
        let mut script = ScrollScript::new();
        for (i, offset) in [100.0, 99.0, 100.0, 99.0, 100.0].into_iter().enumerate() {
            script.push(ScrollStep {
                at_ms: i as f64 * 16.0,
                offset,
                in_view: false,
                bounds: vec![Some(bounds_at(900.0)); 2],
            });
        }
        let records = script.replay(&mut c, VIEWPORT);
        assert!(
            records.is_empty(),
            "offscreen oscillation must not reveal anything"
        );
    }

    /// A full session: cascade in, scroll up to exit, scroll back down to
    /// re-enter. The re-entry is immediate (no second cascade).
    #[test]
    fn full_session_round_trip() {
        let (mut c, ids) = controller_with(2);
        let mut script = ScrollScript::new();
        script.push(ScrollStep {
            at_ms: 0.0,
            offset: 200.0,
            in_view: true,
            bounds: vec![Some(bounds_at(400.0)); 2],
        });
        script.push(ScrollStep {
            at_ms: 1000.0,
            offset: 150.0,
            in_view: true,
            bounds: vec![Some(bounds_at(650.0)); 2],
        });
        script.push(ScrollStep {
            at_ms: 2000.0,
            offset: 260.0,
            in_view: true,
            bounds: vec![Some(bounds_at(400.0)); 2],
        });

        let records = script.replay(&mut c, VIEWPORT);

        // Cascade: two visibles at 0 and 150 ms.
        assert_eq!(records[0].state, RevealState::Visible);
        assert_eq!(records[1].state, RevealState::Visible);
        assert_eq!(records[1].at_ms, 150.0);

        // Exit at 1000 ms, both elements.
        let exits: Vec<_> = records
            .iter()
            .filter(|r| r.state == RevealState::Exiting)
            .collect();
        assert_eq!(exits.len(), 2);
        assert!(exits.iter().all(|r| r.at_ms == 1000.0));

        // Immediate re-entry at 2000 ms.
        let reentries: Vec<_> = records
            .iter()
            .filter(|r| r.at_ms == 2000.0 && r.state == RevealState::Visible)
            .collect();
        assert_eq!(reentries.len(), 2);
        for id in ids {
            assert_eq!(c.state_of(id), Some(RevealState::Visible));
        }
    }
}
