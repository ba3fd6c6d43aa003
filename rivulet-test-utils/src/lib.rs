// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test fixtures for rivulet streams.
//!
//! - [`ManualSource`] — a push-by-hand producer with start/stop
//!   accounting, for laziness and teardown assertions.
//! - [`TestTimer`] — a virtual clock implementing the `Timer` trait;
//!   `advance` fires due callbacks deterministically.
//! - [`interval`] — a periodic source driven by a [`TestTimer`].
//! - [`Collector`] — records values, errors and stream end.

pub mod collector;
pub mod interval;
pub mod manual_source;
pub mod test_timer;

pub use collector::Collector;
pub use interval::interval;
pub use manual_source::ManualSource;
pub use test_timer::{TestTimer, TestTimerHandle};
