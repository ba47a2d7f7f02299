// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll session that exercises the tracing pipeline.
//!
//! Replays a scripted session through a [`SectionController`] — cascade in,
//! a mid-flight reset that strands two timers, a second cascade, and an
//! upward exit — recording every event to a
//! [`PrettyPrintSink`](updraft_debug::pretty::PrettyPrintSink) on stdout.

use std::io::Write;

use kurbo::Rect;

use updraft_core::section::{ScrollInput, SectionConfig, SectionController};
use updraft_core::trace::{
    DeliverEvent, DirectionEvent, ScheduleEvent, StaleRevealEvent, TraceSink, Tracer,
    TransitionEvent,
};
use updraft_core::viewport::Viewport;
use updraft_harness::{SimClock, TimerQueue};

use updraft_debug::pretty::PrettyPrintSink;

const SECTION_TOP: f64 = 900.0;
const ELEMENT_HEIGHT: f64 = 200.0;
const ELEMENT_GAP: f64 = 20.0;
const ELEMENT_COUNT: u32 = 4;

fn main() {
    let viewport = Viewport::new(1280.0, 800.0);
    let mut controller = SectionController::new(SectionConfig::for_viewport(&viewport));
    for _ in 0..ELEMENT_COUNT {
        let _ = controller.add_element();
    }

    let mut pretty = PrettyPrintSink::with_writer(std::io::stdout());
    let mut clock = SimClock::new();
    let mut timers = TimerQueue::new();

    // -- scroll down into the section: the cascade schedules four reveals --
    for (delta_ms, offset) in [(0.0, 0.0), (100.0, 250.0), (80.0, 310.0)] {
        clock.advance(delta_ms);
        process(
            &mut controller,
            &mut timers,
            &mut pretty,
            clock.now_ms(),
            offset,
            &viewport,
        );
    }

    // Let the 150 ms timer fire (the 0 ms one fired during the last step).
    clock.advance(120.0);
    drain(&mut controller, &mut timers, &mut pretty, clock.now_ms());

    // -- route change: reset strands the two reveals still in flight -------
    let _ = controller.reset();
    clock.advance(400.0);
    drain(&mut controller, &mut timers, &mut pretty, clock.now_ms());

    // -- scroll again after the reset: everything re-cascades --------------
    clock.advance(100.0);
    process(
        &mut controller,
        &mut timers,
        &mut pretty,
        clock.now_ms(),
        330.0,
        &viewport,
    );
    clock.advance(1000.0);
    drain(&mut controller, &mut timers, &mut pretty, clock.now_ms());

    // -- scroll up past the exit line: visible elements start exiting ------
    clock.advance(100.0);
    process(
        &mut controller,
        &mut timers,
        &mut pretty,
        clock.now_ms(),
        200.0,
        &viewport,
    );

    // One-off dispatch through the Tracer wrapper, ending at the same sink.
    let mut tracer = Tracer::new(&mut pretty);
    tracer.direction(&DirectionEvent {
        direction: controller.direction(),
        offset: 200.0,
    });
}

/// Fires due timers, then feeds one scroll event through the controller,
/// mirroring the wiring of a real backend.
fn process<W: Write>(
    controller: &mut SectionController,
    timers: &mut TimerQueue,
    pretty: &mut PrettyPrintSink<W>,
    now_ms: f64,
    offset: f64,
    viewport: &Viewport,
) {
    drain(controller, timers, pretty, now_ms);

    let before = controller.direction();
    let input = ScrollInput {
        offset,
        viewport: *viewport,
        section_in_view: section_in_view(offset, viewport),
    };
    let changes = controller.handle_scroll(&input, |id| Some(element_bounds(id.index(), offset)));

    if controller.direction() != before {
        pretty.on_direction(&DirectionEvent {
            direction: controller.direction(),
            offset,
        });
    }
    for &(element, state) in &changes.transitions {
        pretty.on_transition(&TransitionEvent { element, state });
    }
    for &reveal in &changes.scheduled {
        pretty.on_schedule(&ScheduleEvent { reveal });
        timers.schedule(now_ms, reveal);
    }
}

/// Delivers every due timer, logging applied and stale reveals.
fn drain<W: Write>(
    controller: &mut SectionController,
    timers: &mut TimerQueue,
    pretty: &mut PrettyPrintSink<W>,
    now_ms: f64,
) {
    for (_, reveal) in timers.fire_due(now_ms) {
        match controller.deliver_reveal(reveal) {
            Some((element, _)) => pretty.on_deliver(&DeliverEvent { element }),
            None => pretty.on_stale_reveal(&StaleRevealEvent {
                reveal,
                current_generation: controller.generation(),
            }),
        }
    }
}

/// Document-space layout: four stacked elements starting below the fold.
fn element_bounds(index: u32, offset: f64) -> Rect {
    let top = SECTION_TOP + f64::from(index) * (ELEMENT_HEIGHT + ELEMENT_GAP) - offset;
    Rect::new(0.0, top, 600.0, top + ELEMENT_HEIGHT)
}

fn section_in_view(offset: f64, viewport: &Viewport) -> bool {
    let top = SECTION_TOP - offset;
    let bottom = top + f64::from(ELEMENT_COUNT) * (ELEMENT_HEIGHT + ELEMENT_GAP);
    top < viewport.height && bottom > 0.0
}
