// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion presets and responsive parameter selection.
//!
//! A [`MotionParams`] pair is selected once per section from the
//! [`ViewportClass`](crate::viewport::ViewportClass) at construction time and
//! shared by every motion preset in that section. [`MotionParams::motion_for`]
//! maps a [`RevealState`] to the concrete [`Motion`] a presenter applies
//! (vertical offset, opacity, transition duration).

use crate::reveal::RevealState;
use crate::viewport::ViewportClass;

/// Distance/duration constants for one section's motion presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Vertical travel distance in logical pixels for hidden/exiting states.
    pub distance: f64,
    /// Transition duration in milliseconds.
    pub duration_ms: u32,
}

impl MotionParams {
    /// Parameters for narrow (phone) viewports: shorter travel, snappier.
    pub const NARROW: Self = Self {
        distance: 40.0,
        duration_ms: 500,
    };

    /// Parameters for wide viewports.
    pub const WIDE: Self = Self {
        distance: 80.0,
        duration_ms: 700,
    };

    /// Selects the parameter pair for a viewport class.
    ///
    /// Evaluated once at section construction; not reactive to later
    /// resizes.
    #[must_use]
    pub const fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Narrow => Self::NARROW,
            ViewportClass::Wide => Self::WIDE,
        }
    }

    /// Returns the motion a presenter should apply for `state`.
    ///
    /// Hidden and exiting elements sit `distance` pixels below their resting
    /// position at zero opacity; visible elements rest in place at full
    /// opacity.
    #[must_use]
    pub const fn motion_for(&self, state: RevealState) -> Motion {
        match state {
            RevealState::Visible => Motion {
                translate_y: 0.0,
                opacity: 1.0,
                duration_ms: self.duration_ms,
            },
            RevealState::Hidden | RevealState::Exiting => Motion {
                translate_y: self.distance,
                opacity: 0.0,
                duration_ms: self.duration_ms,
            },
        }
    }
}

/// A concrete visual transform for one element, ready for a presenter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Vertical offset from the resting position, in logical pixels.
    pub translate_y: f64,
    /// Target opacity (0.0–1.0).
    pub opacity: f32,
    /// Transition duration in milliseconds.
    pub duration_ms: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_params_travel_less_than_wide() {
        assert!(MotionParams::NARROW.distance < MotionParams::WIDE.distance);
        assert!(MotionParams::NARROW.duration_ms < MotionParams::WIDE.duration_ms);
    }

    #[test]
    fn class_selection() {
        assert_eq!(
            MotionParams::for_class(ViewportClass::Narrow),
            MotionParams::NARROW
        );
        assert_eq!(
            MotionParams::for_class(ViewportClass::Wide),
            MotionParams::WIDE
        );
    }

    #[test]
    fn visible_motion_rests_in_place() {
        let m = MotionParams::WIDE.motion_for(RevealState::Visible);
        assert_eq!(m.translate_y, 0.0);
        assert_eq!(m.opacity, 1.0);
    }

    #[test]
    fn hidden_and_exiting_share_offscreen_motion() {
        let hidden = MotionParams::WIDE.motion_for(RevealState::Hidden);
        let exiting = MotionParams::WIDE.motion_for(RevealState::Exiting);
        assert_eq!(hidden, exiting);
        assert_eq!(hidden.translate_y, MotionParams::WIDE.distance);
        assert_eq!(hidden.opacity, 0.0);
    }
}
