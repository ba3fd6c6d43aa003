// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sampled-by operator: re-emit this stream's freshest value on another
//! stream's ticks.

use crate::event_stream::EventStream;
use crate::origin::{joined_source, Origin};
use rivulet_core::{Handler, StreamEvent};
use std::cell::RefCell;
use std::rc::Rc;

impl<SA: 'static, T: Clone + 'static> EventStream<SA, T> {
    /// Emit this stream's latest value every time `sampler` ticks.
    ///
    /// Ticks from this stream only refresh the stored value and never
    /// produce output themselves. A sampler tick before this stream has
    /// emitted anything produces nothing. The stored slot is per
    /// subscription.
    pub fn sampled_by<SB, U>(&self, sampler: &EventStream<SB, U>) -> EventStream<Origin<SA, SB>, T>
    where
        SB: 'static,
        U: 'static,
    {
        let left_pipeline = Rc::clone(&self.pipeline);
        let right_pipeline = Rc::clone(&sampler.pipeline);
        EventStream {
            source: joined_source(Rc::clone(&self.source), Rc::clone(&sampler.source)),
            pipeline: Rc::new(move |ctx, next: Handler<T>| {
                let latest: Rc<RefCell<Option<T>>> = Rc::new(RefCell::new(None));

                let left = left_pipeline(
                    ctx,
                    Rc::new({
                        let latest = Rc::clone(&latest);
                        let next = Rc::clone(&next);
                        move |event| match event {
                            StreamEvent::Value(value) => {
                                *latest.borrow_mut() = Some(value);
                            }
                            StreamEvent::End => next(StreamEvent::End),
                            StreamEvent::Error(error) => next(StreamEvent::Error(error)),
                        }
                    }),
                );
                let right = right_pipeline(
                    ctx,
                    Rc::new({
                        let latest = Rc::clone(&latest);
                        let next = Rc::clone(&next);
                        move |event| match event {
                            StreamEvent::Value(_) => {
                                let sampled = latest.borrow().clone();
                                if let Some(value) = sampled {
                                    next(StreamEvent::Value(value));
                                }
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
