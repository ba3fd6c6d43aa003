// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::test_timer::TestTimer;
use rivulet_core::{Handler, StreamEvent};
use rivulet_stream::{EventStream, SourceStream};
use rivulet_stream_time::Timer;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A source emitting `0, 1, 2, …` every `period` of virtual time.
///
/// Driven entirely by [`TestTimer::advance`]. The stop function flips a
/// flag rather than cancelling the pending timer, so a fired-after-stop
/// callback simply does nothing.
pub fn interval(timer: &TestTimer, period: Duration) -> SourceStream<u64> {
    let timer = timer.clone();
    EventStream::new(move |handler: Handler<u64>| {
        let cancelled = Rc::new(Cell::new(false));
        arm(&timer, period, handler, 0, &cancelled);
        move || cancelled.set(true)
    })
}

fn arm(
    timer: &TestTimer,
    period: Duration,
    handler: Handler<u64>,
    tick: u64,
    cancelled: &Rc<Cell<bool>>,
) {
    let _handle = timer.schedule(
        period,
        Box::new({
            let timer = timer.clone();
            let cancelled = Rc::clone(cancelled);
            move || {
                if cancelled.get() {
                    return;
                }
                handler(StreamEvent::Value(tick));
                arm(&timer, period, handler, tick + 1, &cancelled);
            }
        }),
    );
}
