// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-element hidden/visible/exiting state machine.
//!
//! Each tracked element owns one [`RevealState`], advanced synchronously
//! inside the section's scroll handler by
//! [`RevealThresholds::next_state`]. Transitions are one-way per scroll
//! event and the machine has no terminal state: it cycles for the lifetime
//! of the mounted section.
//!
//! Direct `Hidden → Visible` transitions happen only through the re-entry
//! threshold check; intersection-driven entry is mediated by the
//! [`RevealSequencer`](crate::sequencer::RevealSequencer) so that siblings
//! cascade instead of appearing simultaneously.

use kurbo::Rect;

use crate::scroll::ScrollDirection;
use crate::viewport::Viewport;

/// Animation state of one tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Not yet revealed (initial state).
    #[default]
    Hidden,
    /// Revealed and resting in place.
    Visible,
    /// Leaving view; rendered like hidden but may re-enter.
    Exiting,
}

/// Viewport-relative measurements for one element, taken on demand during a
/// scroll event.
///
/// Ephemeral: recomputed per event, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementProbe {
    /// Top edge of the element relative to the viewport, in logical pixels.
    pub top: f64,
    /// Fraction of the element's height currently inside the viewport
    /// (0.0–1.0).
    pub visible_fraction: f64,
}

impl ElementProbe {
    /// Derives a probe from a viewport-relative bounding rectangle.
    ///
    /// Zero-height rectangles report a visible fraction of `0.0`.
    #[must_use]
    pub fn from_bounds(bounds: Rect, viewport: &Viewport) -> Self {
        let height = bounds.height();
        let visible_fraction = if height > 0.0 {
            let overlap = bounds.y1.min(viewport.height) - bounds.y0.max(0.0);
            (overlap / height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            top: bounds.y0,
            visible_fraction,
        }
    }
}

/// Viewport-height fractions that gate reveal transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealThresholds {
    /// Minimum visible fraction of the element for intersection-driven
    /// entry.
    pub enter_fraction: f64,
    /// Re-entry line: an element whose top edge is above this fraction of
    /// the viewport height re-enters while scrolling down, regardless of the
    /// section's aggregate in-view flag.
    pub reentry_fraction: f64,
    /// Exit line: a visible element whose top edge is below this fraction of
    /// the viewport height starts exiting while scrolling up.
    ///
    /// Note the unusual shape of this condition (`top > threshold` while
    /// scrolling up corresponds to the element approaching from below). It
    /// reproduces the observed behavior literally and is not re-derived.
    pub exit_fraction: f64,
}

impl Default for RevealThresholds {
    fn default() -> Self {
        Self {
            enter_fraction: 0.25,
            reentry_fraction: 0.30,
            exit_fraction: 0.75,
        }
    }
}

impl RevealThresholds {
    /// Computes the next state for one element, or `None` if no transition
    /// applies.
    ///
    /// `section_in_view` is the owning section's aggregate intersection
    /// flag; it gates intersection-driven entry but not the re-entry check.
    /// `Hidden → Exiting` can never occur: the exit condition only matches
    /// the `Visible` state.
    #[must_use]
    pub fn next_state(
        &self,
        current: RevealState,
        direction: ScrollDirection,
        probe: &ElementProbe,
        viewport: &Viewport,
        section_in_view: bool,
    ) -> Option<RevealState> {
        match (current, direction) {
            (RevealState::Hidden, ScrollDirection::Down) => {
                self.reentry_met(probe, viewport).then_some(RevealState::Visible)
            }
            (RevealState::Exiting, ScrollDirection::Down) => {
                let intersection_entry =
                    section_in_view && probe.visible_fraction >= self.enter_fraction;
                (intersection_entry || self.reentry_met(probe, viewport))
                    .then_some(RevealState::Visible)
            }
            (RevealState::Visible, ScrollDirection::Up) => (probe.top
                > self.exit_fraction * viewport.height)
                .then_some(RevealState::Exiting),
            _ => None,
        }
    }

    fn reentry_met(&self, probe: &ElementProbe, viewport: &Viewport) -> bool {
        probe.top < self.reentry_fraction * viewport.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn probe(top: f64, visible_fraction: f64) -> ElementProbe {
        ElementProbe {
            top,
            visible_fraction,
        }
    }

    #[test]
    fn probe_from_fully_visible_bounds() {
        let p = ElementProbe::from_bounds(Rect::new(0.0, 100.0, 400.0, 300.0), &VIEWPORT);
        assert_eq!(p.top, 100.0);
        assert_eq!(p.visible_fraction, 1.0);
    }

    #[test]
    fn probe_from_partially_visible_bounds() {
        // Bottom half below the fold: 100 of 200 px visible.
        let p = ElementProbe::from_bounds(Rect::new(0.0, 700.0, 400.0, 900.0), &VIEWPORT);
        assert_eq!(p.visible_fraction, 0.5);
    }

    #[test]
    fn probe_from_offscreen_bounds_clamps_to_zero() {
        let p = ElementProbe::from_bounds(Rect::new(0.0, 900.0, 400.0, 1100.0), &VIEWPORT);
        assert_eq!(p.visible_fraction, 0.0);
        let p = ElementProbe::from_bounds(Rect::new(0.0, -300.0, 400.0, -100.0), &VIEWPORT);
        assert_eq!(p.visible_fraction, 0.0);
    }

    #[test]
    fn zero_height_bounds_are_not_visible() {
        let p = ElementProbe::from_bounds(Rect::new(0.0, 100.0, 400.0, 100.0), &VIEWPORT);
        assert_eq!(p.visible_fraction, 0.0);
    }

    #[test]
    fn hidden_reenters_above_reentry_line_while_down() {
        let t = RevealThresholds::default();
        // Re-entry line at 0.30 × 800 = 240.
        let next = t.next_state(
            RevealState::Hidden,
            ScrollDirection::Down,
            &probe(200.0, 0.0),
            &VIEWPORT,
            false,
        );
        assert_eq!(next, Some(RevealState::Visible));
    }

    #[test]
    fn hidden_stays_hidden_below_reentry_line() {
        let t = RevealThresholds::default();
        let next = t.next_state(
            RevealState::Hidden,
            ScrollDirection::Down,
            &probe(500.0, 1.0),
            &VIEWPORT,
            true,
        );
        // Intersection-driven entry for hidden elements goes through the
        // sequencer, not the direct check.
        assert_eq!(next, None);
    }

    #[test]
    fn hidden_never_becomes_exiting() {
        let t = RevealThresholds::default();
        for top in [-100.0, 300.0, 700.0, 900.0] {
            let next = t.next_state(
                RevealState::Hidden,
                ScrollDirection::Up,
                &probe(top, 0.5),
                &VIEWPORT,
                true,
            );
            assert_eq!(next, None, "hidden must not transition while scrolling up");
        }
    }

    #[test]
    fn visible_exits_when_top_below_exit_line_while_up() {
        let t = RevealThresholds::default();
        // Exit line at 0.75 × 800 = 600.
        let next = t.next_state(
            RevealState::Visible,
            ScrollDirection::Up,
            &probe(601.0, 0.3),
            &VIEWPORT,
            true,
        );
        assert_eq!(next, Some(RevealState::Exiting));
    }

    #[test]
    fn visible_stays_visible_above_exit_line() {
        let t = RevealThresholds::default();
        let next = t.next_state(
            RevealState::Visible,
            ScrollDirection::Up,
            &probe(599.0, 1.0),
            &VIEWPORT,
            true,
        );
        assert_eq!(next, None);
    }

    #[test]
    fn visible_is_idempotent_under_down_activation() {
        let t = RevealThresholds::default();
        // All entry conditions satisfied, but already visible: no output.
        let next = t.next_state(
            RevealState::Visible,
            ScrollDirection::Down,
            &probe(100.0, 1.0),
            &VIEWPORT,
            true,
        );
        assert_eq!(next, None);
    }

    #[test]
    fn exiting_reenters_via_intersection_when_section_in_view() {
        let t = RevealThresholds::default();
        let next = t.next_state(
            RevealState::Exiting,
            ScrollDirection::Down,
            &probe(400.0, 0.5),
            &VIEWPORT,
            true,
        );
        assert_eq!(next, Some(RevealState::Visible));
    }

    #[test]
    fn exiting_intersection_entry_requires_section_in_view() {
        let t = RevealThresholds::default();
        let next = t.next_state(
            RevealState::Exiting,
            ScrollDirection::Down,
            &probe(400.0, 0.5),
            &VIEWPORT,
            false,
        );
        assert_eq!(next, None);
    }

    #[test]
    fn exiting_reenters_via_reentry_line_without_section_flag() {
        let t = RevealThresholds::default();
        let next = t.next_state(
            RevealState::Exiting,
            ScrollDirection::Down,
            &probe(100.0, 0.0),
            &VIEWPORT,
            false,
        );
        assert_eq!(next, Some(RevealState::Visible));
    }

    #[test]
    fn exiting_stays_exiting_while_up() {
        let t = RevealThresholds::default();
        let next = t.next_state(
            RevealState::Exiting,
            ScrollDirection::Up,
            &probe(100.0, 1.0),
            &VIEWPORT,
            true,
        );
        assert_eq!(next, None);
    }
}
