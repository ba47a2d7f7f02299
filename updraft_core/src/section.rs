// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-section reveal controller.
//!
//! [`SectionController`] is the one reusable object the page instantiates
//! per section instead of hand-copying scroll/visibility logic into every
//! component. It owns a [`ScrollTracker`], a [`RevealSequencer`], and one
//! [`RevealState`] slot per registered element, and turns each scroll
//! notification into a [`RevealChanges`] value that a presenter applies.
//!
//! Elements are addressed by generational [`ElementId`] handles: destroyed
//! slots are recycled via a free list and a bumped generation makes stale
//! handles fail validation. The section additionally carries its own
//! [`Generation`], bumped on [`reset`](SectionController::reset), so a timer
//! scheduled before an unmount or route change delivers into
//! [`deliver_reveal`](SectionController::deliver_reveal) and is dropped as a
//! no-op instead of mutating state for a no-longer-rendered element.
//!
//! Sections share no state. All mutation happens synchronously inside the
//! caller's event handler; there is exactly one mutator per element, so no
//! locking is needed.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::motion::MotionParams;
use crate::reveal::{ElementProbe, RevealState, RevealThresholds};
use crate::scroll::{ScrollDirection, ScrollTracker};
use crate::sequencer::{DEFAULT_STAGGER_MS, RevealSequencer, ScheduledReveal};
use crate::viewport::Viewport;

/// Monotonic counter identifying one mounted lifetime of a section.
///
/// Bumped by [`SectionController::reset`]; scheduled reveals tagged with an
/// older generation are stale and must not be applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Generation(pub u32);

/// Generational handle to one tracked element within a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl ElementId {
    /// Returns the raw slot index, for presenter-side parallel storage.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Builds a first-generation handle from a raw slot index.
    #[cfg(test)]
    pub(crate) const fn from_raw_parts(idx: u32) -> Self {
        Self { idx, generation: 0 }
    }
}

/// Construction-time configuration for a [`SectionController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionConfig {
    /// Transition thresholds as viewport-height fractions.
    pub thresholds: RevealThresholds,
    /// Delay increment between sibling reveals, in milliseconds.
    pub stagger_ms: u32,
    /// Motion parameters, selected from the viewport class at construction.
    pub motion: MotionParams,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            thresholds: RevealThresholds::default(),
            stagger_ms: DEFAULT_STAGGER_MS,
            motion: MotionParams::WIDE,
        }
    }
}

impl SectionConfig {
    /// Builds a config with motion parameters chosen for `viewport`.
    ///
    /// The width check happens once, here. A later resize does not update
    /// the selected parameters for this section instance.
    #[must_use]
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            motion: MotionParams::for_class(viewport.class()),
            ..Self::default()
        }
    }
}

/// One scroll notification, as delivered by a backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollInput {
    /// Vertical scroll offset of the page, in logical pixels.
    pub offset: f64,
    /// Current viewport dimensions.
    pub viewport: Viewport,
    /// Whether the section's root currently intersects the viewport.
    pub section_in_view: bool,
}

/// Incremental output of one scroll notification.
///
/// `transitions` are state changes to apply immediately; `scheduled` are
/// delayed reveal requests a backend should run through timers and hand back
/// to [`SectionController::deliver_reveal`] when they fire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealChanges {
    /// Immediate state transitions, in element registration order.
    pub transitions: Vec<(ElementId, RevealState)>,
    /// Delayed reveals to schedule.
    pub scheduled: Vec<ScheduledReveal>,
}

impl RevealChanges {
    /// Returns `true` if this value carries no work.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty() && self.scheduled.is_empty()
    }
}

/// Per-section reveal state machine driver.
#[derive(Debug)]
pub struct SectionController {
    config: SectionConfig,
    tracker: ScrollTracker,
    sequencer: RevealSequencer,
    section_generation: Generation,

    // -- Element slots --
    state: Vec<RevealState>,
    slot_generation: Vec<u32>,
    live: Vec<bool>,
    free_list: Vec<u32>,
}

impl SectionController {
    /// Creates an empty controller with the given configuration.
    #[must_use]
    pub fn new(config: SectionConfig) -> Self {
        Self {
            sequencer: RevealSequencer::new(config.stagger_ms),
            config,
            tracker: ScrollTracker::new(),
            section_generation: Generation(0),
            state: Vec::new(),
            slot_generation: Vec::new(),
            live: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Registers a tracked element and returns its handle.
    ///
    /// Elements start [`RevealState::Hidden`]. Registration order determines
    /// the cascade order.
    pub fn add_element(&mut self) -> ElementId {
        let idx = if let Some(idx) = self.free_list.pop() {
            let slot = idx as usize;
            self.slot_generation[slot] += 1;
            self.state[slot] = RevealState::Hidden;
            self.live[slot] = true;
            idx
        } else {
            let idx = u32::try_from(self.state.len()).expect("element count fits in u32");
            self.state.push(RevealState::Hidden);
            self.slot_generation.push(0);
            self.live.push(true);
            idx
        };
        ElementId {
            idx,
            generation: self.slot_generation[idx as usize],
        }
    }

    /// Unregisters an element, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn remove_element(&mut self, id: ElementId) {
        assert!(self.is_live(id), "stale element handle");
        let slot = id.idx as usize;
        self.live[slot] = false;
        // Bump generation so old handles immediately fail validation.
        self.slot_generation[slot] += 1;
        self.free_list.push(id.idx);
    }

    /// Returns `true` if `id` refers to a currently registered element.
    #[must_use]
    pub fn is_live(&self, id: ElementId) -> bool {
        let slot = id.idx as usize;
        slot < self.live.len()
            && self.live[slot]
            && self.slot_generation[slot] == id.generation
    }

    /// Returns the current state of an element, or `None` for stale handles.
    #[must_use]
    pub fn state_of(&self, id: ElementId) -> Option<RevealState> {
        self.is_live(id).then(|| self.state[id.idx as usize])
    }

    /// Returns all live element handles in registration order.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementId> {
        (0..self.live.len())
            .filter(|&slot| self.live[slot])
            .map(|slot| ElementId {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "slot count is bounded by add_element's u32 check"
                )]
                idx: slot as u32,
                generation: self.slot_generation[slot],
            })
            .collect()
    }

    /// Returns the most recently derived scroll direction.
    #[must_use]
    pub const fn direction(&self) -> ScrollDirection {
        self.tracker.direction()
    }

    /// Returns the current section generation.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.section_generation
    }

    /// Returns the motion parameters selected at construction.
    #[must_use]
    pub const fn motion(&self) -> MotionParams {
        self.config.motion
    }

    /// Processes one scroll notification.
    ///
    /// `measure` supplies the viewport-relative bounding rectangle for an
    /// element on demand; returning `None` (element not currently
    /// measurable) silently skips that element for this event.
    pub fn handle_scroll(
        &mut self,
        input: &ScrollInput,
        mut measure: impl FnMut(ElementId) -> Option<Rect>,
    ) -> RevealChanges {
        let direction = self.tracker.sample(input.offset);
        let mut changes = RevealChanges::default();

        for id in self.elements() {
            let Some(bounds) = measure(id) else {
                continue;
            };
            let probe = ElementProbe::from_bounds(bounds, &input.viewport);
            let current = self.state[id.idx as usize];
            if let Some(next) = self.config.thresholds.next_state(
                current,
                direction,
                &probe,
                &input.viewport,
                input.section_in_view,
            ) {
                self.state[id.idx as usize] = next;
                changes.transitions.push((id, next));
            }
        }

        // Cascade: everything still hidden after the immediate transitions.
        let hidden: Vec<ElementId> = self
            .elements()
            .into_iter()
            .filter(|id| self.state[id.idx as usize] == RevealState::Hidden)
            .collect();
        changes.scheduled = self.sequencer.observe(
            input.section_in_view,
            direction,
            &hidden,
            self.section_generation,
        );

        changes
    }

    /// Applies a previously scheduled reveal, if it is still current.
    ///
    /// Returns the transition to present, or `None` when the reveal is
    /// stale: the section generation moved on, the element was removed, or
    /// the element is no longer hidden. Stale deliveries mutate nothing —
    /// this is the guard that makes timers crossing an unmount harmless.
    pub fn deliver_reveal(
        &mut self,
        reveal: ScheduledReveal,
    ) -> Option<(ElementId, RevealState)> {
        if reveal.generation != self.section_generation {
            return None;
        }
        if !self.is_live(reveal.element) {
            return None;
        }
        let slot = reveal.element.idx as usize;
        if self.state[slot] != RevealState::Hidden {
            return None;
        }
        self.state[slot] = RevealState::Visible;
        Some((reveal.element, RevealState::Visible))
    }

    /// Returns every element to [`RevealState::Hidden`] and invalidates all
    /// in-flight scheduled reveals by bumping the section generation.
    ///
    /// Used on unmount and on route changes (navigation forces scroll to
    /// top, so the tracker is reset too). The returned transitions let a
    /// presenter re-hide elements that were visible.
    pub fn reset(&mut self) -> RevealChanges {
        self.section_generation.0 += 1;
        self.sequencer.rearm();
        self.tracker = ScrollTracker::new();

        let mut changes = RevealChanges::default();
        for id in self.elements() {
            let slot = id.idx as usize;
            if self.state[slot] != RevealState::Hidden {
                self.state[slot] = RevealState::Hidden;
                changes.transitions.push((id, RevealState::Hidden));
            }
        }
        changes
    }
}
