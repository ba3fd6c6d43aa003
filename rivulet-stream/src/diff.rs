// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Diff operator: combine each value with the previously observed one.

use crate::event_stream::EventStream;
use rivulet_core::{Handler, Result, StreamEvent};
use std::cell::RefCell;
use std::rc::Rc;

impl<S: 'static, T: Clone + 'static> EventStream<S, T> {
    /// Forward `step(&previous, &value)` for every value, starting against
    /// `seed`.
    ///
    /// The previous-value slot is committed to the raw incoming value
    /// *regardless* of whether `step` succeeded, so the next application
    /// always compares against the most recently observed value, not the
    /// last successfully diffed one. The slot is per-subscription.
    pub fn diff<U, F>(&self, seed: T, step: F) -> EventStream<S, U>
    where
        U: 'static,
        F: Fn(&T, &T) -> Result<U> + 'static,
    {
        let step = Rc::new(step);
        self.compose(move |_ctx, next: Handler<U>| {
            let step = Rc::clone(&step);
            let previous = RefCell::new(seed.clone());
            Rc::new(move |event| match event {
                StreamEvent::Value(value) => {
                    let outcome = {
                        let previous = previous.borrow();
                        step(&previous, &value)
                    };
                    // Commit before emitting: the slot tracks raw input.
                    *previous.borrow_mut() = value;
                    match outcome {
                        Ok(diffed) => next(StreamEvent::Value(diffed)),
                        Err(error) => next(StreamEvent::Error(error)),
                    }
                }
                StreamEvent::End => next(StreamEvent::End),
                StreamEvent::Error(error) => next(StreamEvent::Error(error)),
            })
        })
    }
}
