// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport dimensions and the coarse narrow/wide classification.

/// Logical-pixel width below which a viewport is classified as narrow.
pub const NARROW_WIDTH: f64 = 640.0;

/// Viewport dimensions in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport with the given dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Classifies this viewport as narrow or wide.
    #[must_use]
    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.width)
    }
}

/// Coarse device classification from a single width check.
///
/// Sampled once when a section is constructed and not re-evaluated on
/// resize: an orientation change after mount keeps the originally selected
/// motion parameters for that mounted instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Width below [`NARROW_WIDTH`] logical pixels (phones).
    Narrow,
    /// Everything else.
    Wide,
}

impl ViewportClass {
    /// Classifies a viewport width.
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width < NARROW_WIDTH {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_below_threshold_is_narrow() {
        assert_eq!(ViewportClass::from_width(320.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(639.9), ViewportClass::Narrow);
    }

    #[test]
    fn threshold_and_above_is_wide() {
        assert_eq!(ViewportClass::from_width(640.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1920.0), ViewportClass::Wide);
    }

    #[test]
    fn viewport_class_uses_width_only() {
        let tall_phone = Viewport::new(390.0, 2000.0);
        assert_eq!(tall_phone.class(), ViewportClass::Narrow);
        let short_desktop = Viewport::new(1280.0, 500.0);
        assert_eq!(short_desktop.class(), ViewportClass::Wide);
    }
}
