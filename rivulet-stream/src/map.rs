// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator: transform each value, isolating per-value failures.

use crate::event_stream::EventStream;
use rivulet_core::{Handler, Result, StreamEvent};
use std::rc::Rc;

impl<S: 'static, T: 'static> EventStream<S, T> {
    /// Transform every value with `transform`.
    ///
    /// A failing transform routes its error into the error channel for
    /// that tick only: nothing reaches the value path, downstream stages
    /// are not invoked with a value, and the stream keeps running.
    ///
    /// # Example
    ///
    /// ```
    /// use rivulet_stream::EventStream;
    /// use rivulet_core::RivuletError;
    /// use std::{cell::RefCell, rc::Rc};
    ///
    /// let parsed = EventStream::from_values(vec!["4", "x", "16"]).map(|raw: &str| {
    ///     raw.parse::<u32>()
    ///         .map_err(|e| RivuletError::user_error(e))
    /// });
    ///
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    /// let errors = Rc::new(RefCell::new(0));
    /// let sink = Rc::clone(&seen);
    /// let error_sink = Rc::clone(&errors);
    /// let _subscription = parsed.subscribe_with(
    ///     move |n| sink.borrow_mut().push(n),
    ///     None::<fn()>,
    ///     Some(move |_e| *error_sink.borrow_mut() += 1),
    /// );
    ///
    /// assert_eq!(*seen.borrow(), vec![4, 16]);
    /// assert_eq!(*errors.borrow(), 1);
    /// ```
    pub fn map<U, F>(&self, transform: F) -> EventStream<S, U>
    where
        U: 'static,
        F: Fn(T) -> Result<U> + 'static,
    {
        let transform = Rc::new(transform);
        self.compose(move |_ctx, next: Handler<U>| {
            let transform = Rc::clone(&transform);
            Rc::new(move |event| match event {
                StreamEvent::Value(value) => match transform(value) {
                    Ok(mapped) => next(StreamEvent::Value(mapped)),
                    Err(error) => next(StreamEvent::Error(error)),
                },
                StreamEvent::End => next(StreamEvent::End),
                StreamEvent::Error(error) => next(StreamEvent::Error(error)),
            })
        })
    }
}
