// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The stream descriptor and the subscribe entry point.

use rivulet_core::{Handler, RivuletError, StopFn, StreamEvent, SubscribeContext, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// A producer-starter: starts pushing raw events into the given handler and
/// returns the function that stops it.
pub type Source<S> = Rc<dyn Fn(Handler<S>) -> StopFn>;

/// A composed per-value transform chain. Given the per-subscription context
/// and the downstream handler, returns the handler to feed into the source
/// (or into the next pipeline of a longer chain).
pub type Pipeline<S, T> = Rc<dyn Fn(&SubscribeContext, Handler<T>) -> Handler<S>>;

/// A stream whose producer emits the same type the consumer receives —
/// i.e. a freshly constructed stream with the identity pipeline.
pub type SourceStream<T> = EventStream<T, T>;

/// An immutable descriptor of "an event that recurs over time".
///
/// `S` is the raw type emitted by the producer, `T` the type delivered to
/// the consumer after the composed transform chain. Every combinator
/// returns a new descriptor sharing the producer and wrapping the
/// pipeline; the chain is flattened into a single composed handler once
/// per [`subscribe`](EventStream::subscribe) call, and no producer starts
/// before that.
///
/// Cloning an `EventStream` is cheap and shares nothing observable: each
/// subscription gets its own producer start and its own per-run state.
///
/// # Example
///
/// ```
/// use rivulet_stream::EventStream;
/// use std::{cell::RefCell, rc::Rc};
///
/// let numbers = EventStream::from_values(vec![1, 2, 3]);
/// let doubled = numbers.map(|n| Ok(n * 2));
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let _subscription = doubled.subscribe(move |n| sink.borrow_mut().push(n));
///
/// assert_eq!(*seen.borrow(), vec![2, 4, 6]);
/// ```
pub struct EventStream<S, T> {
    pub(crate) source: Source<S>,
    pub(crate) pipeline: Pipeline<S, T>,
}

impl<S, T> Clone for EventStream<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            pipeline: Rc::clone(&self.pipeline),
        }
    }
}

impl<T: 'static> EventStream<T, T> {
    /// Create a stream from a producer.
    ///
    /// The producer is not invoked here. Each `subscribe` call invokes it
    /// once, and its returned stop function is called at most once per
    /// start, however the subscription ends.
    pub fn new<P, Stop>(producer: P) -> Self
    where
        P: Fn(Handler<T>) -> Stop + 'static,
        Stop: FnOnce() + 'static,
    {
        Self {
            source: Rc::new(move |handler| Box::new(producer(handler)) as StopFn),
            pipeline: Rc::new(|_ctx, next: Handler<T>| next),
        }
    }

    /// A stream that ends immediately on subscribe, emitting nothing.
    pub fn empty() -> Self {
        Self::new(|handler: Handler<T>| {
            handler(StreamEvent::End);
            || {}
        })
    }

    /// A stream that synchronously emits the given values on subscribe,
    /// then ends.
    pub fn from_values(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        Self::new(move |handler: Handler<T>| {
            for value in values.clone() {
                handler(StreamEvent::Value(value));
            }
            handler(StreamEvent::End);
            || {}
        })
    }
}

impl<S: 'static, T: 'static> EventStream<S, T> {
    /// Assemble a stream from a raw source and pipeline.
    ///
    /// Building block for operator authors outside this crate; everyday
    /// code uses [`EventStream::new`] and the combinators.
    pub fn from_parts(source: Source<S>, pipeline: Pipeline<S, T>) -> Self {
        Self { source, pipeline }
    }

    /// Wrap this stream's pipeline with one more stage.
    ///
    /// `wrap` is invoked once per subscription with the per-subscription
    /// context and the downstream handler, and returns the stage to splice
    /// in front of it. All per-run state a stage needs must be created
    /// inside `wrap`, never captured from operator construction, so that
    /// two subscriptions of the same descriptor never share state.
    pub fn compose<U, W>(&self, wrap: W) -> EventStream<S, U>
    where
        U: 'static,
        W: Fn(&SubscribeContext, Handler<U>) -> Handler<T> + 'static,
    {
        let pipeline = Rc::clone(&self.pipeline);
        EventStream {
            source: Rc::clone(&self.source),
            pipeline: Rc::new(move |ctx, next| pipeline(ctx, wrap(ctx, next))),
        }
    }

    /// Subscribe with a value callback only.
    ///
    /// Any error reaching the consumer is fatal: without an error callback
    /// it panics rather than being silently dropped. Use
    /// [`subscribe_with`](EventStream::subscribe_with) to observe errors
    /// and stream end.
    pub fn subscribe<F>(&self, on_next: F) -> Subscription
    where
        F: FnMut(T) + 'static,
    {
        self.subscribe_with(on_next, None::<fn()>, None::<fn(RivuletError)>)
    }

    /// Subscribe with optional end and error callbacks.
    ///
    /// Performs exactly one producer start through the fully composed
    /// pipeline. The returned [`Subscription`] stops it again, at most
    /// once, whether teardown comes from this handle, from a `take`-style
    /// limit, or from the producer exhausting itself.
    ///
    /// An error delivered to `on_error` does not stop the subscription;
    /// subsequent values keep flowing.
    pub fn subscribe_with<F, G, H>(
        &self,
        on_next: F,
        on_end: Option<G>,
        on_error: Option<H>,
    ) -> Subscription
    where
        F: FnMut(T) + 'static,
        G: FnOnce() + 'static,
        H: FnMut(RivuletError) + 'static,
    {
        let subscription = Subscription::new();
        let ctx = subscription.context();

        let on_next = RefCell::new(on_next);
        let on_end = RefCell::new(on_end);
        let on_error = RefCell::new(on_error);
        let terminal: Handler<T> = Rc::new({
            let subscription = subscription.clone();
            move |event| {
                if subscription.is_stopped() {
                    return;
                }
                match event {
                    StreamEvent::Value(value) => (on_next.borrow_mut())(value),
                    StreamEvent::End => {
                        subscription.unsubscribe();
                        if let Some(on_end) = on_end.borrow_mut().take() {
                            on_end();
                        }
                    }
                    StreamEvent::Error(error) => match &mut *on_error.borrow_mut() {
                        Some(on_error) => on_error(error),
                        None => panic!("unhandled stream error: {error}"),
                    },
                }
            }
        });

        let handler = (self.pipeline)(&ctx, terminal);
        let stop = (self.source)(handler);
        subscription.install_producer_stop(stop);
        trace!("subscription started");
        subscription
    }
}
