// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_stream_time::{Timer, TimerHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

struct Scheduled {
    id: u64,
    deadline: Duration,
    callback: Box<dyn FnOnce()>,
}

struct TestTimerInner {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    scheduled: RefCell<Vec<Scheduled>>,
}

/// A virtual clock implementing [`Timer`].
///
/// Nothing fires on its own; [`advance`](TestTimer::advance) moves the
/// clock forward and runs due callbacks in deadline order, breaking ties
/// by scheduling order. Callbacks may schedule further timers; those are
/// picked up within the same `advance` call if they fall inside the
/// advanced window, which is how periodic sources are driven.
pub struct TestTimer {
    inner: Rc<TestTimerInner>,
}

impl Clone for TestTimer {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl TestTimer {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(TestTimerInner {
                now: Cell::new(Duration::ZERO),
                next_id: Cell::new(0),
                scheduled: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    /// Callbacks scheduled and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.inner.scheduled.borrow().len()
    }

    /// Move the clock forward by `by`, firing every callback whose
    /// deadline falls inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.now.get() + by;
        loop {
            let due = {
                let mut scheduled = self.inner.scheduled.borrow_mut();
                let index = scheduled
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.deadline <= target)
                    .min_by_key(|(_, entry)| (entry.deadline, entry.id))
                    .map(|(index, _)| index);
                index.map(|index| scheduled.remove(index))
            };
            match due {
                Some(entry) => {
                    self.inner.now.set(entry.deadline);
                    (entry.callback)();
                }
                None => break,
            }
        }
        self.inner.now.set(target);
    }
}

impl Default for TestTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for TestTimer {
    type Handle = TestTimerHandle;

    fn schedule(&self, after: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.scheduled.borrow_mut().push(Scheduled {
            id,
            deadline: self.inner.now.get() + after,
            callback,
        });
        TestTimerHandle {
            id,
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Handle to one scheduled [`TestTimer`] callback.
pub struct TestTimerHandle {
    id: u64,
    inner: Rc<TestTimerInner>,
}

impl TimerHandle for TestTimerHandle {
    fn cancel(self) {
        self.inner
            .scheduled
            .borrow_mut()
            .retain(|entry| entry.id != self.id);
    }
}
