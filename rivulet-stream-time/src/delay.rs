// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `delay` operator for streams.

use crate::timer::{Timer, TimerHandle};
use rivulet_core::{Handler, StreamEvent};
use rivulet_stream::EventStream;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

/// Adds [`delay`](DelayExt::delay) to [`EventStream`].
pub trait DelayExt<S, T> {
    /// Forward each value `timeout` after it arrived, using `timer` as
    /// the clock.
    ///
    /// Each value owns its own one-shot timer; multiple timers may be in
    /// flight at once and there is no debouncing. Teardown cancels the
    /// most recently scheduled timer and composes with the upstream stop,
    /// each released exactly once in either order; values whose timers
    /// fire after teardown are discarded rather than delivered.
    ///
    /// End and errors pass through undelayed, so exhaustion and failures
    /// propagate promptly even while values are still in flight.
    fn delay<Tm>(&self, timeout: Duration, timer: Tm) -> EventStream<S, T>
    where
        Tm: Timer + Clone + 'static;
}

impl<S: 'static, T: 'static> DelayExt<S, T> for EventStream<S, T> {
    fn delay<Tm>(&self, timeout: Duration, timer: Tm) -> EventStream<S, T>
    where
        Tm: Timer + Clone + 'static,
    {
        self.compose(move |ctx, next: Handler<T>| {
            let timer = timer.clone();
            let pending: Rc<RefCell<Option<Tm::Handle>>> = Rc::new(RefCell::new(None));
            ctx.on_teardown({
                let pending = Rc::clone(&pending);
                move || {
                    if let Some(handle) = pending.borrow_mut().take() {
                        handle.cancel();
                    }
                }
            });
            let ctx = ctx.clone();
            Rc::new(move |event| match event {
                StreamEvent::Value(value) => {
                    trace!(?timeout, "scheduling delayed value");
                    let handle = timer.schedule(
                        timeout,
                        Box::new({
                            let next = Rc::clone(&next);
                            let ctx = ctx.clone();
                            move || {
                                if !ctx.is_stopped() {
                                    next(StreamEvent::Value(value));
                                }
                            }
                        }),
                    );
                    *pending.borrow_mut() = Some(handle);
                }
                StreamEvent::End => next(StreamEvent::End),
                StreamEvent::Error(error) => next(StreamEvent::Error(error)),
            })
        })
    }
}
