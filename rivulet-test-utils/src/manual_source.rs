// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Handler, RivuletError, StreamEvent};
use rivulet_stream::{EventStream, SourceStream};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct ManualSourceInner<T> {
    handlers: RefCell<Vec<(u64, Handler<T>)>>,
    next_id: Cell<u64>,
    starts: Cell<usize>,
    stops: Cell<usize>,
}

/// A producer driven by hand from test code.
///
/// [`stream`](ManualSource::stream) builds a lazy stream over this source;
/// every subscription registers one handler here, and
/// [`push`](ManualSource::push) / [`end`](ManualSource::end) /
/// [`error`](ManualSource::error) dispatch to all currently registered
/// handlers. Start and stop counters make laziness and exactly-once
/// teardown observable.
pub struct ManualSource<T> {
    inner: Rc<ManualSourceInner<T>>,
}

impl<T> Clone for ManualSource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> ManualSource<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ManualSourceInner {
                handlers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                starts: Cell::new(0),
                stops: Cell::new(0),
            }),
        }
    }

    /// A lazy stream over this source. No handler is registered until the
    /// stream is subscribed.
    pub fn stream(&self) -> SourceStream<T> {
        let inner = Rc::clone(&self.inner);
        EventStream::new(move |handler: Handler<T>| {
            let id = inner.next_id.get();
            inner.next_id.set(id + 1);
            inner.handlers.borrow_mut().push((id, handler));
            inner.starts.set(inner.starts.get() + 1);
            let inner = Rc::clone(&inner);
            move || {
                inner
                    .handlers
                    .borrow_mut()
                    .retain(|(handler_id, _)| *handler_id != id);
                inner.stops.set(inner.stops.get() + 1);
            }
        })
    }

    fn dispatch(&self, event: StreamEvent<T>) {
        // Snapshot so handlers may unsubscribe (and deregister) reentrantly.
        let handlers: Vec<Handler<T>> = self
            .inner
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(event.clone());
        }
    }

    /// Push one value to every active subscription.
    pub fn push(&self, value: T) {
        self.dispatch(StreamEvent::Value(value));
    }

    /// Signal exhaustion to every active subscription.
    pub fn end(&self) {
        self.dispatch(StreamEvent::End);
    }

    /// Push an error to every active subscription.
    pub fn error(&self, error: RivuletError) {
        self.dispatch(StreamEvent::Error(error));
    }

    /// Handlers currently registered, i.e. live subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.inner.handlers.borrow().len()
    }

    /// Total times the producer has been started.
    pub fn start_count(&self) -> usize {
        self.inner.starts.get()
    }

    /// Total times a stop function has been invoked.
    pub fn stop_count(&self) -> usize {
        self.inner.stops.get()
    }
}

impl<T: Clone + 'static> Default for ManualSource<T> {
    fn default() -> Self {
        Self::new()
    }
}
