// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for rivulet streams.
//!
//! The engine itself never blocks or sleeps: timers are external
//! collaborators behind the [`Timer`] trait, scheduled per value and
//! cancelled through the subscription's teardown path. The
//! `rivulet-test-utils` crate provides a virtual-clock implementation for
//! deterministic tests.

pub mod delay;
pub mod timer;

pub use delay::DelayExt;
pub use timer::{Timer, TimerHandle};
