// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest operator: pairwise combination of two streams' freshest
//! values.

use crate::event_stream::EventStream;
use crate::origin::{joined_source, Origin};
use rivulet_core::{Handler, Result, StreamEvent};
use std::cell::RefCell;
use std::rc::Rc;

impl<SA: 'static, T: 'static> EventStream<SA, T> {
    /// Combine the latest value of this stream with the latest value of
    /// `other`.
    ///
    /// Nothing is emitted until both sides have produced at least one
    /// value. Once primed, every tick from either side re-invokes
    /// `combine` with the updated pair. The last-seen slots are created
    /// per subscription.
    ///
    /// Which side wins when both producers fire "simultaneously" is
    /// whatever order they invoke the shared handler in; no tie-break is
    /// guaranteed. Failures of `combine` are isolated like
    /// [`map`](EventStream::map) failures.
    pub fn combine_latest<SB, U, V, C>(
        &self,
        other: &EventStream<SB, U>,
        combine: C,
    ) -> EventStream<Origin<SA, SB>, V>
    where
        SB: 'static,
        U: 'static,
        V: 'static,
        C: Fn(&T, &U) -> Result<V> + 'static,
    {
        let left_pipeline = Rc::clone(&self.pipeline);
        let right_pipeline = Rc::clone(&other.pipeline);
        let combine = Rc::new(combine);
        EventStream {
            source: joined_source(Rc::clone(&self.source), Rc::clone(&other.source)),
            pipeline: Rc::new(move |ctx, next: Handler<V>| {
                let latest_left: Rc<RefCell<Option<T>>> = Rc::new(RefCell::new(None));
                let latest_right: Rc<RefCell<Option<U>>> = Rc::new(RefCell::new(None));

                let emit: Rc<dyn Fn()> = Rc::new({
                    let latest_left = Rc::clone(&latest_left);
                    let latest_right = Rc::clone(&latest_right);
                    let combine = Rc::clone(&combine);
                    let next = Rc::clone(&next);
                    move || {
                        let outcome = {
                            let left = latest_left.borrow();
                            let right = latest_right.borrow();
                            match (left.as_ref(), right.as_ref()) {
                                (Some(left), Some(right)) => Some(combine(left, right)),
                                _ => None,
                            }
                        };
                        match outcome {
                            Some(Ok(combined)) => next(StreamEvent::Value(combined)),
                            Some(Err(error)) => next(StreamEvent::Error(error)),
                            None => {}
                        }
                    }
                });

                let left = left_pipeline(
                    ctx,
                    Rc::new({
                        let latest_left = Rc::clone(&latest_left);
                        let emit = Rc::clone(&emit);
                        let next = Rc::clone(&next);
                        move |event| match event {
                            StreamEvent::Value(value) => {
                                *latest_left.borrow_mut() = Some(value);
                                emit();
                            }
                            StreamEvent::End => next(StreamEvent::End),
                            StreamEvent::Error(error) => next(StreamEvent::Error(error)),
                        }
                    }),
                );
                let right = right_pipeline(
                    ctx,
                    Rc::new({
                        let latest_right = Rc::clone(&latest_right);
                        let emit = Rc::clone(&emit);
                        let next = Rc::clone(&next);
                        move |event| match event {
                            StreamEvent::Value(value) => {
                                *latest_right.borrow_mut() = Some(value);
                                emit();
                            }
                            StreamEvent::End => next(StreamEvent::End),
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
