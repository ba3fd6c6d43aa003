// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The subscription protocol: how a producer is started and stopped, and
//! how exactly-once teardown is guaranteed.
//!
//! A producer is "a function that starts producing values and returns a
//! function that stops": `Fn(Handler<T>) -> StopFn`. The engine never calls
//! a producer's stop function more than once per start, even if the
//! consumer unsubscribes repeatedly or the stream self-terminates while
//! the producer is still starting up.

use crate::event::StreamEvent;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

/// A per-value callback handed to a producer or to an upstream pipeline
/// stage. Shared, single-threaded, synchronous.
pub type Handler<T> = Rc<dyn Fn(StreamEvent<T>)>;

/// The stop function returned by starting a producer. Consumed on call;
/// the engine guards at-most-once invocation.
pub type StopFn = Box<dyn FnOnce()>;

struct SubscriptionState {
    stopped: Cell<bool>,
    teardowns: RefCell<Vec<Box<dyn FnOnce()>>>,
    producer_stop: RefCell<Option<StopFn>>,
}

/// The live, stoppable result of one `subscribe` call.
///
/// Cloning a `Subscription` clones a handle to the same underlying
/// subscription; stopping any clone stops them all, exactly once.
///
/// Dropping a `Subscription` does *not* unsubscribe: a consumer may
/// subscribe and forget, and the producer keeps running until the stream
/// exhausts itself or [`unsubscribe`](Subscription::unsubscribe) is called.
#[derive(Clone)]
pub struct Subscription {
    state: Rc<SubscriptionState>,
}

impl Subscription {
    /// Create a subscription that has not started its producer yet.
    pub fn new() -> Self {
        Self {
            state: Rc::new(SubscriptionState {
                stopped: Cell::new(false),
                teardowns: RefCell::new(Vec::new()),
                producer_stop: RefCell::new(None),
            }),
        }
    }

    /// The context handed to pipelines while they are being wired up for
    /// this subscription.
    pub fn context(&self) -> SubscribeContext {
        SubscribeContext {
            state: Rc::clone(&self.state),
        }
    }

    /// Install the producer's stop function once `start` has returned.
    ///
    /// A producer may self-terminate synchronously, emitting `End` before
    /// `start` returns; the subscription is already stopped by the time the
    /// stop function exists, and it is invoked here immediately so the
    /// producer is still released exactly once.
    pub fn install_producer_stop(&self, stop: StopFn) {
        if self.state.stopped.get() {
            stop();
        } else {
            *self.state.producer_stop.borrow_mut() = Some(stop);
        }
    }

    /// Whether this subscription has been torn down.
    pub fn is_stopped(&self) -> bool {
        self.state.stopped.get()
    }

    /// Stop the subscription: run every registered teardown hook in
    /// registration order, then stop the producer.
    ///
    /// Idempotent. Reentrant calls from inside a teardown hook are no-ops.
    pub fn unsubscribe(&self) {
        if self.state.stopped.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.state.teardowns.borrow_mut());
        for hook in hooks {
            hook();
        }
        let stop = self.state.producer_stop.borrow_mut().take();
        if let Some(stop) = stop {
            stop();
        }
        trace!("subscription stopped");
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-subscription context handed to every pipeline at subscribe time.
///
/// Operators use it for two things:
///
/// - registering teardown hooks for resources they own (pending timers,
///   child subscriptions), released before the producer stops;
/// - creating all their per-run state (accumulators, join buffers, child
///   sets) fresh for this specific `subscribe` call, so that state never
///   leaks between two subscriptions of the same stream descriptor.
#[derive(Clone)]
pub struct SubscribeContext {
    state: Rc<SubscriptionState>,
}

impl SubscribeContext {
    /// Register a teardown hook, run exactly once when the subscription
    /// stops. If the subscription is already stopped, the hook runs now.
    pub fn on_teardown(&self, hook: impl FnOnce() + 'static) {
        if self.state.stopped.get() {
            hook();
        } else {
            self.state.teardowns.borrow_mut().push(Box::new(hook));
        }
    }

    /// Whether the owning subscription has been torn down.
    ///
    /// Deferred callbacks (timers) check this before delivering, so a value
    /// scheduled before unsubscribe never reaches the consumer after it.
    pub fn is_stopped(&self) -> bool {
        self.state.stopped.get()
    }
}
