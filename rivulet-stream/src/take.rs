// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator: limit a stream to its first `n` values.

use crate::event_stream::EventStream;
use rivulet_core::{Handler, StreamEvent};
use std::cell::Cell;
use std::rc::Rc;

impl<S: 'static, T: 'static> EventStream<S, T> {
    /// Forward the first `count` values, then end.
    ///
    /// The end is emitted on the same tick as the `count`-th value, which
    /// tears the subscription down and stops the producer. `take(0)` ends
    /// at subscribe time, before the producer has a chance to tick.
    ///
    /// Errors pass through without consuming the budget.
    pub fn take(&self, count: usize) -> EventStream<S, T> {
        self.compose(move |_ctx, next: Handler<T>| {
            let remaining = Cell::new(count);
            let done = Cell::new(false);
            if count == 0 {
                done.set(true);
                next(StreamEvent::End);
            }
            Rc::new(move |event| {
                if done.get() {
                    return;
                }
                match event {
                    StreamEvent::Value(value) => {
                        remaining.set(remaining.get() - 1);
                        next(StreamEvent::Value(value));
                        if remaining.get() == 0 {
                            done.set(true);
                            next(StreamEvent::End);
                        }
                    }
                    StreamEvent::End => {
                        done.set(true);
                        next(StreamEvent::End);
                    }
                    StreamEvent::Error(error) => next(StreamEvent::Error(error)),
                }
            })
        })
    }
}
