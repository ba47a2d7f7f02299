// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll offset sampling and coarse direction derivation.
//!
//! [`ScrollTracker`] keeps a single-slot memory of the previous vertical
//! scroll offset and classifies each new sample as [`ScrollDirection::Down`]
//! or [`ScrollDirection::Up`]. There is deliberately no smoothing or
//! debounce: direction is defined relative to the immediately preceding
//! sample only, so rapid oscillation near a scroll-stop point can flip the
//! direction on every event. Consumers that need hysteresis must layer it on
//! top.

/// Coarse classification of the most recent scroll movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Scrolling toward the bottom of the page (offset increasing).
    ///
    /// Also the idle value: a page that never scrolls reports `Down`
    /// indefinitely.
    #[default]
    Down,
    /// Scrolling toward the top of the page (offset decreasing).
    Up,
}

/// Samples vertical scroll offsets and derives a direction signal.
///
/// The first sample after construction compares against offset `0.0`, so a
/// page restored mid-scroll (anchor navigation, back/forward restoration)
/// yields a spurious first direction. This is accepted: the first qualifying
/// scroll event corrects it.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTracker {
    last_offset: f64,
    direction: ScrollDirection,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    /// Creates a tracker at offset `0.0` with the idle [`ScrollDirection::Down`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_offset: 0.0,
            direction: ScrollDirection::Down,
        }
    }

    /// Feeds one scroll offset sample and returns the derived direction.
    ///
    /// Direction is `Down` iff `offset` is greater than the previous sample,
    /// `Up` iff smaller. Equal offsets retain the previous direction.
    pub fn sample(&mut self, offset: f64) -> ScrollDirection {
        if offset > self.last_offset {
            self.direction = ScrollDirection::Down;
        } else if offset < self.last_offset {
            self.direction = ScrollDirection::Up;
        }
        self.last_offset = offset;
        self.direction
    }

    /// Returns the most recently derived direction without sampling.
    #[must_use]
    pub const fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Returns the most recently sampled offset.
    #[must_use]
    pub const fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_direction_is_down() {
        let tracker = ScrollTracker::new();
        assert_eq!(tracker.direction(), ScrollDirection::Down);
        assert_eq!(tracker.last_offset(), 0.0);
    }

    #[test]
    fn increasing_offset_is_down() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.sample(10.0), ScrollDirection::Down);
        assert_eq!(tracker.sample(250.5), ScrollDirection::Down);
    }

    #[test]
    fn decreasing_offset_is_up() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(400.0);
        assert_eq!(tracker.sample(399.0), ScrollDirection::Up);
        assert_eq!(tracker.sample(0.0), ScrollDirection::Up);
    }

    #[test]
    fn equal_offset_retains_previous_direction() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(400.0);
        tracker.sample(100.0);
        assert_eq!(tracker.direction(), ScrollDirection::Up);
        // Repeating the same offset must not flip back to Down.
        assert_eq!(tracker.sample(100.0), ScrollDirection::Up);
        assert_eq!(tracker.sample(100.0), ScrollDirection::Up);
    }

    #[test]
    fn oscillation_flips_every_sample() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(100.0);
        assert_eq!(tracker.sample(99.0), ScrollDirection::Up);
        assert_eq!(tracker.sample(100.0), ScrollDirection::Down);
        assert_eq!(tracker.sample(99.0), ScrollDirection::Up);
    }

    #[test]
    fn first_sample_compares_against_zero() {
        // A page restored mid-scroll: the first sample is below the stored
        // zero only if negative, so a large restored offset reads as Down.
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.sample(1800.0), ScrollDirection::Down);
    }
}
