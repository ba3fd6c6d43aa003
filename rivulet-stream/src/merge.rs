// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merge operator: interleave two streams into one.

use crate::event_stream::EventStream;
use crate::origin::{joined_source, Origin};
use rivulet_core::{Handler, StreamEvent};
use std::rc::Rc;

impl<SA: 'static, T: 'static> EventStream<SA, T> {
    /// Interleave this stream with `other`.
    ///
    /// Both producers are started against a shared, origin-tagged handler;
    /// each side's values still run through that side's own pipeline, so
    /// `a.map(f).merge(&b.map(g))` applies `f` only to `a`'s values and
    /// `g` only to `b`'s. Emission order is whatever order the two
    /// producers happen to fire in; ties carry no guarantee.
    ///
    /// An end from either side ends the merged stream and stops both
    /// producers.
    pub fn merge<SB: 'static>(&self, other: &EventStream<SB, T>) -> EventStream<Origin<SA, SB>, T> {
        let left_pipeline = Rc::clone(&self.pipeline);
        let right_pipeline = Rc::clone(&other.pipeline);
        EventStream {
            source: joined_source(Rc::clone(&self.source), Rc::clone(&other.source)),
            pipeline: Rc::new(move |ctx, next: Handler<T>| {
                let left = left_pipeline(ctx, Rc::clone(&next));
                let right = right_pipeline(ctx, Rc::clone(&next));
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
