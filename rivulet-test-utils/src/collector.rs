// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{RivuletError, Subscription};
use rivulet_stream::EventStream;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Records everything a subscription delivers: values, errors and the end
/// signal. Clones share the same recording.
pub struct Collector<T> {
    values: Rc<RefCell<Vec<T>>>,
    errors: Rc<RefCell<Vec<RivuletError>>>,
    ended: Rc<Cell<bool>>,
}

impl<T> Clone for Collector<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
            errors: Rc::clone(&self.errors),
            ended: Rc::clone(&self.ended),
        }
    }
}

impl<T: 'static> Collector<T> {
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(Vec::new())),
            errors: Rc::new(RefCell::new(Vec::new())),
            ended: Rc::new(Cell::new(false)),
        }
    }

    /// Subscribe to `stream`, recording values, errors and end.
    pub fn attach<S: 'static>(&self, stream: &EventStream<S, T>) -> Subscription {
        stream.subscribe_with(
            {
                let values = Rc::clone(&self.values);
                move |value| values.borrow_mut().push(value)
            },
            Some({
                let ended = Rc::clone(&self.ended);
                move || ended.set(true)
            }),
            Some({
                let errors = Rc::clone(&self.errors);
                move |error| errors.borrow_mut().push(error)
            }),
        )
    }

    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.borrow().clone()
    }

    pub fn value_count(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn has_ended(&self) -> bool {
        self.ended.get()
    }
}

impl<T: 'static> Default for Collector<T> {
    fn default() -> Self {
        Self::new()
    }
}
