// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scan operator: running accumulator forwarded on every tick.

use crate::event_stream::EventStream;
use rivulet_core::{Handler, Result, StreamEvent};
use std::cell::RefCell;
use std::rc::Rc;

impl<S: 'static, T: 'static> EventStream<S, T> {
    /// Fold incoming values into an accumulator and forward each new
    /// accumulator state.
    ///
    /// The accumulator is created fresh from `seed` for every
    /// subscription, so two subscribers of the same descriptor never see
    /// each other's running state.
    ///
    /// If `step` fails, the error is routed to the error channel and the
    /// accumulator does *not* advance for that tick: the next value folds
    /// against the last successfully committed state. Contrast with
    /// [`diff`](EventStream::diff), which always commits.
    pub fn scan<Acc, F>(&self, seed: Acc, step: F) -> EventStream<S, Acc>
    where
        Acc: Clone + 'static,
        F: Fn(Acc, T) -> Result<Acc> + 'static,
    {
        let step = Rc::new(step);
        self.compose(move |_ctx, next: Handler<Acc>| {
            let step = Rc::clone(&step);
            let acc = RefCell::new(seed.clone());
            Rc::new(move |event| match event {
                StreamEvent::Value(value) => {
                    let current = acc.borrow().clone();
                    match step(current, value) {
                        Ok(updated) => {
                            *acc.borrow_mut() = updated.clone();
                            next(StreamEvent::Value(updated));
                        }
                        Err(error) => next(StreamEvent::Error(error)),
                    }
                }
                StreamEvent::End => next(StreamEvent::End),
                StreamEvent::Error(error) => next(StreamEvent::Error(error)),
            })
        })
    }
}
