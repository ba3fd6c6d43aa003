// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! A minimal reactive-stream library: a value that represents "an event
//! that recurs over time", plus a closed algebra of combinators that build
//! new streams from existing ones without performing any work until a
//! consumer subscribes.
//!
//! ## Overview
//!
//! Streams are immutable descriptors. Producers — timers, listeners,
//! sockets — are opaque collaborators: a function that starts pushing
//! values and returns a function that stops. Everything runs
//! single-threaded and synchronously; one emitted value flows through the
//! whole downstream chain before the producer's call returns.
//!
//! ## Quick start
//!
//! ```
//! use rivulet::EventStream;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let totals = EventStream::from_values(vec![1, 1, 1]).scan(0, |acc, n| Ok(acc + n));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let _subscription = totals.subscribe(move |total| sink.borrow_mut().push(total));
//!
//! assert_eq!(*seen.borrow(), vec![1, 2, 3]);
//! ```
//!
//! Operator reference lives in `rivulet-stream`; time-based operators in
//! `rivulet-stream-time`; deterministic test fixtures (manual sources,
//! virtual timer) in `rivulet-test-utils`.

pub use rivulet_core::{
    Handler, IntoRivuletError, Result, RivuletError, StopFn, StreamEvent, SubscribeContext,
    Subscription,
};
pub use rivulet_stream::{EventStream, Origin, Pipeline, Source, SourceStream};
pub use rivulet_stream_time::{DelayExt, Timer, TimerHandle};

pub mod prelude {
    //! Convenience re-exports.
    pub use rivulet_stream::prelude::*;
    pub use rivulet_stream_time::{DelayExt, Timer, TimerHandle};
}
