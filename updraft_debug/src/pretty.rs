// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use updraft_core::trace::{
    DeliverEvent, DirectionEvent, ScheduleEvent, StaleRevealEvent, TraceSink, TransitionEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_direction(&mut self, e: &DirectionEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll] direction={:?} offset={:.1}px",
            e.direction, e.offset,
        );
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        let _ = writeln!(
            self.writer,
            "[state] element={} -> {:?}",
            e.element.index(),
            e.state,
        );
    }

    fn on_schedule(&mut self, e: &ScheduleEvent) {
        let _ = writeln!(
            self.writer,
            "[cascade] element={} delay={}ms gen={}",
            e.reveal.element.index(),
            e.reveal.delay_ms,
            e.reveal.generation.0,
        );
    }

    fn on_deliver(&mut self, e: &DeliverEvent) {
        let _ = writeln!(self.writer, "[deliver] element={}", e.element.index());
    }

    fn on_stale_reveal(&mut self, e: &StaleRevealEvent) {
        let _ = writeln!(
            self.writer,
            "[stale] element={} scheduled_gen={} current_gen={}",
            e.reveal.element.index(),
            e.reveal.generation.0,
            e.current_generation.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use updraft_core::scroll::ScrollDirection;
    use updraft_core::section::{SectionConfig, SectionController};

    use super::*;

    #[test]
    fn direction_line_format() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_direction(&DirectionEvent {
            direction: ScrollDirection::Up,
            offset: 321.5,
        });
        let out = String::from_utf8(sink.into_writer()).expect("utf8 output");
        assert_eq!(out, "[scroll] direction=Up offset=321.5px\n");
    }

    #[test]
    fn transition_line_uses_slot_index() {
        let mut controller = SectionController::new(SectionConfig::default());
        let id = controller.add_element();

        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_transition(&TransitionEvent {
            element: id,
            state: updraft_core::reveal::RevealState::Visible,
        });
        let out = String::from_utf8(sink.into_writer()).expect("utf8 output");
        assert_eq!(out, "[state] element=0 -> Visible\n");
    }
}
