// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered activation of sibling reveals.
//!
//! When a section's aggregate in-view flag becomes true while scrolling
//! down, its still-hidden children should appear as a cascade rather than
//! simultaneously. [`RevealSequencer`] emits one generation-tagged
//! [`ScheduledReveal`] per child at strictly increasing fixed delays; a
//! backend runs the actual timers and hands each firing back to
//! [`SectionController::deliver_reveal`], which drops stale deliveries.
//!
//! The sequencer only affects *when* `Hidden → Visible` transitions are
//! requested. It never mutates element state itself.
//!
//! [`SectionController::deliver_reveal`]: crate::section::SectionController::deliver_reveal

use alloc::vec::Vec;

use crate::scroll::ScrollDirection;
use crate::section::{ElementId, Generation};

/// Default delay increment between sibling reveals, in milliseconds.
pub const DEFAULT_STAGGER_MS: u32 = 150;

/// A delayed reveal request for one element.
///
/// Carries the section generation current at scheduling time so that a
/// timer firing after the section was reset mutates nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduledReveal {
    /// The element to reveal.
    pub element: ElementId,
    /// Delay from the triggering scroll event, in milliseconds.
    pub delay_ms: u32,
    /// Section generation at scheduling time.
    pub generation: Generation,
}

/// Emits staggered reveal commands on a section's in-view rising edge.
///
/// Fires once per entry into view: after emitting, the sequencer stays quiet
/// until the section has left view and re-entered it.
#[derive(Clone, Copy, Debug)]
pub struct RevealSequencer {
    stagger_ms: u32,
    fired: bool,
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_STAGGER_MS)
    }
}

impl RevealSequencer {
    /// Creates a sequencer with the given delay increment in milliseconds.
    #[must_use]
    pub const fn new(stagger_ms: u32) -> Self {
        Self {
            stagger_ms,
            fired: false,
        }
    }

    /// Returns the configured delay increment in milliseconds.
    #[must_use]
    pub const fn stagger_ms(&self) -> u32 {
        self.stagger_ms
    }

    /// Feeds the section's current in-view flag and direction; returns the
    /// reveals to schedule (possibly empty).
    ///
    /// The i-th still-hidden child is scheduled at `i × stagger_ms`
    /// (0 ms, 150 ms, 300 ms, …), so delays are strictly increasing in
    /// registration order.
    pub fn observe(
        &mut self,
        in_view: bool,
        direction: ScrollDirection,
        hidden: &[ElementId],
        generation: Generation,
    ) -> Vec<ScheduledReveal> {
        if !in_view {
            // Left view: re-arm for the next entry.
            self.fired = false;
            return Vec::new();
        }
        if self.fired || direction != ScrollDirection::Down {
            return Vec::new();
        }
        self.fired = true;

        hidden
            .iter()
            .enumerate()
            .map(|(i, &element)| ScheduledReveal {
                element,
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "sections track at most a handful of elements"
                )]
                delay_ms: i as u32 * self.stagger_ms,
                generation,
            })
            .collect()
    }

    /// Forgets any previous firing, re-arming the cascade.
    ///
    /// Called by the section on reset so a remounted section cascades again.
    pub fn rearm(&mut self) {
        self.fired = false;
    }
}
