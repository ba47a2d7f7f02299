// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management and measurement.
//!
//! [`DomRevealPresenter`] binds a section's tracked elements to live
//! `HtmlElement`s, measures their viewport-relative bounds on demand, and
//! renders [`RevealState`] transitions as CSS transform/opacity transitions
//! derived from the section's [`MotionParams`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use web_sys::HtmlElement;

use updraft_core::backend::RevealPresenter;
use updraft_core::motion::{Motion, MotionParams};
use updraft_core::reveal::{ElementProbe, RevealState};
use updraft_core::section::{ElementId, RevealChanges};
use updraft_core::viewport::Viewport;

/// Maps a section's element handles to live DOM elements.
///
/// The presenter owns the section's root `HtmlElement` (used for the
/// aggregate in-view check) and a slot-indexed table of child elements.
/// Registering an element immediately applies the hidden motion so the
/// first reveal animates from the correct resting offset.
pub struct DomRevealPresenter {
    root: HtmlElement,
    elements: Vec<Option<HtmlElement>>,
    motion: MotionParams,
}

impl core::fmt::Debug for DomRevealPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomRevealPresenter")
            .field("elements_len", &self.elements.len())
            .field("motion", &self.motion)
            .finish_non_exhaustive()
    }
}

impl DomRevealPresenter {
    /// Creates a presenter for the section rooted at `root`.
    #[must_use]
    pub fn new(root: HtmlElement, motion: MotionParams) -> Self {
        Self {
            root,
            elements: Vec::new(),
            motion,
        }
    }

    /// Returns the section root element.
    #[must_use]
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// Binds a DOM element to an element handle and applies the hidden
    /// motion.
    pub fn register(&mut self, id: ElementId, el: HtmlElement) {
        apply_motion(&el, &self.motion.motion_for(RevealState::Hidden));
        let s = el.style();
        let _ = s.set_property(
            "transition",
            &css_transition(self.motion.duration_ms),
        );
        let _ = s.set_property("will-change", "transform, opacity");

        let slot = id.index() as usize;
        if self.elements.len() <= slot {
            self.elements.resize_with(slot + 1, || None);
        }
        self.elements[slot] = Some(el);
    }

    /// Unbinds the DOM element for a handle, if any.
    pub fn unregister(&mut self, id: ElementId) {
        if let Some(slot) = self.elements.get_mut(id.index() as usize) {
            slot.take();
        }
    }

    /// Returns the DOM element bound to `id`, if any.
    #[must_use]
    pub fn get_element(&self, id: ElementId) -> Option<&HtmlElement> {
        self.elements
            .get(id.index() as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Measures the viewport-relative bounds of an element.
    ///
    /// Returns `None` when no DOM element is bound, which the controller
    /// treats as a silent skip.
    #[must_use]
    pub fn measure(&self, id: ElementId) -> Option<Rect> {
        let rect = self.get_element(id)?.get_bounding_client_rect();
        Some(Rect::new(
            rect.left(),
            rect.top(),
            rect.right(),
            rect.bottom(),
        ))
    }

    /// Returns whether the section root currently intersects the viewport.
    #[must_use]
    pub fn section_in_view(&self, viewport: &Viewport) -> bool {
        let rect = self.root.get_bounding_client_rect();
        let bounds = Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
        ElementProbe::from_bounds(bounds, viewport).visible_fraction > 0.0
    }
}

impl RevealPresenter for DomRevealPresenter {
    fn apply(&mut self, changes: &RevealChanges) {
        for &(id, state) in &changes.transitions {
            if let Some(el) = self.get_element(id) {
                apply_motion(el, &self.motion.motion_for(state));
            }
        }
    }
}

/// Writes a motion onto an element's inline style.
fn apply_motion(el: &HtmlElement, motion: &Motion) {
    let s = el.style();
    let _ = s.set_property("transform", &css_transform(motion));
    let _ = s.set_property("opacity", &format!("{}", motion.opacity));
}

/// Formats a motion's offset as a CSS `translate3d()` value.
fn css_transform(motion: &Motion) -> String {
    format!("translate3d(0,{}px,0)", motion.translate_y)
}

/// Formats the shared transform/opacity transition rule.
fn css_transition(duration_ms: u32) -> String {
    format!("transform {duration_ms}ms ease-out, opacity {duration_ms}ms ease-out")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_formats_translate3d() {
        let m = Motion {
            translate_y: 80.0,
            opacity: 0.0,
            duration_ms: 700,
        };
        assert_eq!(css_transform(&m), "translate3d(0,80px,0)");
    }

    #[test]
    fn resting_transform_is_zero_offset() {
        let m = MotionParams::WIDE.motion_for(RevealState::Visible);
        assert_eq!(css_transform(&m), "translate3d(0,0px,0)");
    }

    #[test]
    fn transition_covers_transform_and_opacity() {
        assert_eq!(
            css_transition(500),
            "transform 500ms ease-out, opacity 500ms ease-out"
        );
    }
}
