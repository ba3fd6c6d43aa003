// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// A one-shot timer backend.
///
/// Implementations own the clock: they decide when a scheduled callback
/// fires. The engine only ever schedules, stores the most recent handle,
/// and cancels it on teardown.
pub trait Timer {
    /// Cancellation handle for one scheduled callback.
    type Handle: TimerHandle;

    /// Schedule `callback` to run once, `after` from now.
    fn schedule(&self, after: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Handle to one scheduled callback.
pub trait TimerHandle {
    /// Cancel the scheduled callback. Cancelling a callback that has
    /// already fired is a no-op.
    fn cancel(self);
}
