// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator: forward only the values a predicate accepts.

use crate::event_stream::EventStream;
use rivulet_core::{Handler, Result, StreamEvent};
use std::rc::Rc;

impl<S: 'static, T: 'static> EventStream<S, T> {
    /// Forward only the values for which `predicate` returns `Ok(true)`.
    ///
    /// Predicate failures are isolated exactly like
    /// [`map`](EventStream::map) failures: the error goes to the error
    /// channel, the value is dropped for that tick, the stream continues.
    pub fn filter<F>(&self, predicate: F) -> EventStream<S, T>
    where
        F: Fn(&T) -> Result<bool> + 'static,
    {
        let predicate = Rc::new(predicate);
        self.compose(move |_ctx, next: Handler<T>| {
            let predicate = Rc::clone(&predicate);
            Rc::new(move |event| match event {
                StreamEvent::Value(value) => match predicate(&value) {
                    Ok(true) => next(StreamEvent::Value(value)),
                    Ok(false) => {}
                    Err(error) => next(StreamEvent::Error(error)),
                },
                StreamEvent::End => next(StreamEvent::End),
                StreamEvent::Error(error) => next(StreamEvent::Error(error)),
            })
        })
    }
}
