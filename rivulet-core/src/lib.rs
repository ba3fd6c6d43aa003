// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core building blocks for rivulet push streams.
//!
//! This crate defines the three things every rivulet operator is made of:
//!
//! - [`StreamEvent`] — the tagged union flowing through a pipeline
//!   (`Value` / `End` / `Error`).
//! - [`RivuletError`] — the library error type, carried inside
//!   [`StreamEvent::Error`] and routed through the error channel instead of
//!   terminating the stream.
//! - [`Subscription`] — the live result of one `subscribe` call, with
//!   at-most-once teardown of the producer and of every resource an
//!   operator registered along the way.
//!
//! Nothing here is multi-threaded: handlers are `Rc`-shared closures and a
//! value is processed synchronously through the whole downstream chain
//! before the producer's call returns.

pub mod error;
pub mod event;
pub mod subscription;

pub use error::{IntoRivuletError, Result, RivuletError};
pub use event::StreamEvent;
pub use subscription::{Handler, StopFn, SubscribeContext, Subscription};
