// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Dynamic operators: spawn a child stream per value and forward the
//! children's output.

use crate::event_stream::EventStream;
use rivulet_core::{Handler, StreamEvent, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

impl<S: 'static, T: 'static> EventStream<S, T> {
    /// Spawn a child stream per value and interleave all children's
    /// values into the output, with unbounded concurrency.
    ///
    /// Child errors are forwarded to the parent's error channel. A child
    /// that exhausts naturally is removed from the active set and does
    /// not end the parent. Tearing the parent down, externally or through
    /// its own end, stops every still-active child in creation order and
    /// then the parent's producer.
    pub fn flat_map<CS, U, F>(&self, spawn: F) -> EventStream<S, U>
    where
        CS: 'static,
        U: 'static,
        F: Fn(T) -> EventStream<CS, U> + 'static,
    {
        self.flat_map_capped(spawn, None)
    }

    /// Like [`flat_map`](EventStream::flat_map) but with at most one
    /// child active: spawning a new child first stops the previous one.
    pub fn flat_map_latest<CS, U, F>(&self, spawn: F) -> EventStream<S, U>
    where
        CS: 'static,
        U: 'static,
        F: Fn(T) -> EventStream<CS, U> + 'static,
    {
        self.flat_map_capped(spawn, Some(1))
    }

    fn flat_map_capped<CS, U, F>(&self, spawn: F, cap: Option<usize>) -> EventStream<S, U>
    where
        CS: 'static,
        U: 'static,
        F: Fn(T) -> EventStream<CS, U> + 'static,
    {
        let spawn = Rc::new(spawn);
        self.compose(move |ctx, next: Handler<U>| {
            let spawn = Rc::clone(&spawn);
            let children: Rc<RefCell<Vec<(u64, Subscription)>>> = Rc::new(RefCell::new(Vec::new()));
            let next_child_id = Cell::new(0u64);

            ctx.on_teardown({
                let children = Rc::clone(&children);
                move || {
                    let active: Vec<_> = children.borrow_mut().drain(..).collect();
                    for (id, child) in active {
                        debug!(child = id, "stopping child subscription");
                        child.unsubscribe();
                    }
                }
            });

            Rc::new(move |event| match event {
                StreamEvent::Value(value) => {
                    let child = spawn(value);
                    if let Some(cap) = cap {
                        while children.borrow().len() >= cap {
                            let (id, oldest) = children.borrow_mut().remove(0);
                            debug!(child = id, "evicting oldest child subscription");
                            oldest.unsubscribe();
                        }
                    }
                    let id = next_child_id.get();
                    next_child_id.set(id + 1);

                    // Set before push in case the child ends synchronously
                    // during its own subscribe.
                    let ended = Rc::new(Cell::new(false));
                    let child_subscription = child.subscribe_with(
                        {
                            let next = Rc::clone(&next);
                            move |value| next(StreamEvent::Value(value))
                        },
                        Some({
                            let children = Rc::clone(&children);
                            let ended = Rc::clone(&ended);
                            move || {
                                ended.set(true);
                                children.borrow_mut().retain(|(child_id, _)| *child_id != id);
                            }
                        }),
                        Some({
                            let next = Rc::clone(&next);
                            move |error| next(StreamEvent::Error(error))
                        }),
                    );
                    if !ended.get() {
                        children.borrow_mut().push((id, child_subscription));
                    }
                }
                StreamEvent::End => next(StreamEvent::End),
                StreamEvent::Error(error) => next(StreamEvent::Error(error)),
            })
        })
    }
}
