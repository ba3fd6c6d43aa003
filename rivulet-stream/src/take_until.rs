// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-until operators: end a stream on a predicate hit or on another
//! stream's first tick.

use crate::event_stream::EventStream;
use crate::origin::{joined_source, Origin};
use rivulet_core::{Handler, Result, StreamEvent};
use std::rc::Rc;

impl<SA: 'static, T: 'static> EventStream<SA, T> {
    /// End the stream at the first value for which `predicate` returns
    /// `Ok(true)`.
    ///
    /// The terminating value itself is replaced by the end signal; the
    /// consumer never sees it. Predicate failures are isolated like
    /// [`filter`](EventStream::filter) failures and do not terminate.
    pub fn take_until<F>(&self, predicate: F) -> EventStream<SA, T>
    where
        F: Fn(&T) -> Result<bool> + 'static,
    {
        let predicate = Rc::new(predicate);
        self.compose(move |_ctx, next: Handler<T>| {
            let predicate = Rc::clone(&predicate);
            Rc::new(move |event| match event {
                StreamEvent::Value(value) => match predicate(&value) {
                    Ok(true) => next(StreamEvent::End),
                    Ok(false) => next(StreamEvent::Value(value)),
                    Err(error) => next(StreamEvent::Error(error)),
                },
                StreamEvent::End => next(StreamEvent::End),
                StreamEvent::Error(error) => next(StreamEvent::Error(error)),
            })
        })
    }

    /// End the stream as soon as `trigger` ticks.
    ///
    /// The join turns every `trigger` event into an end signal: its first
    /// value after subscription ends the combined stream, and so does its
    /// natural exhaustion. Errors from `trigger` pass through the error
    /// channel without terminating.
    pub fn take_until_stream<SB, U>(
        &self,
        trigger: &EventStream<SB, U>,
    ) -> EventStream<Origin<SA, SB>, T>
    where
        SB: 'static,
        U: 'static,
    {
        let left_pipeline = Rc::clone(&self.pipeline);
        let right_pipeline = Rc::clone(&trigger.pipeline);
        EventStream {
            source: joined_source(Rc::clone(&self.source), Rc::clone(&trigger.source)),
            pipeline: Rc::new(move |ctx, next: Handler<T>| {
                let left = left_pipeline(ctx, Rc::clone(&next));
                let right = right_pipeline(
                    ctx,
                    Rc::new({
                        let next = Rc::clone(&next);
                        move |event| match event {
                            StreamEvent::Value(_) | StreamEvent::End => next(StreamEvent::End),
                            StreamEvent::Error(error) => next(StreamEvent::Error(error)),
                        }
                    }),
                );
                Rc::new(move |event| match event {
                    StreamEvent::Value(Origin::Left(value)) => left(StreamEvent::Value(value)),
                    StreamEvent::Value(Origin::Right(value)) => right(StreamEvent::Value(value)),
                    StreamEvent::End => next(StreamEvent::End),
                    StreamEvent::Error(error) => next(StreamEvent::Error(error)),
                })
            }),
        }
    }
}
