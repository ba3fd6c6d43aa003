// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RivuletError;

/// A single item travelling through a stream pipeline.
///
/// Every stage of a pipeline receives and forwards `StreamEvent`s. The
/// explicit `End` variant replaces the sentinel-value trick some reactive
/// cores use: exhaustion is an ordinary variant, never a magic value
/// compared by identity.
///
/// - `Value` carries one emitted value.
/// - `End` signals that no more values will follow; it is never handed to
///   a consumer's value callback and triggers teardown instead.
/// - `Error` carries a per-tick failure through the error channel without
///   ending the stream.
#[derive(Debug, Clone)]
pub enum StreamEvent<T> {
    /// A successful value
    Value(T),
    /// No more values will follow
    End,
    /// A recoverable error, local to the tick that produced it
    Error(RivuletError),
}

impl<T: PartialEq> PartialEq for StreamEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamEvent::Value(a), StreamEvent::Value(b)) => a == b,
            (StreamEvent::End, StreamEvent::End) => true,
            // Errors are never equal
            _ => false,
        }
    }
}

impl<T> StreamEvent<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamEvent::Value(_))
    }

    /// Returns `true` if this is `End`.
    pub const fn is_end(&self) -> bool {
        matches!(self, StreamEvent::End)
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamEvent::Error(_))
    }

    /// Converts into `Option<T>`, discarding `End` and errors.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamEvent::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into `Option<RivuletError>`, discarding values and `End`.
    pub fn err(self) -> Option<RivuletError> {
        match self {
            StreamEvent::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Maps a `StreamEvent<T>` to `StreamEvent<U>` by applying a function
    /// to a contained value. `End` and `Error` are forwarded unchanged.
    pub fn map<U, F>(self, f: F) -> StreamEvent<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamEvent::Value(v) => StreamEvent::Value(f(v)),
            StreamEvent::End => StreamEvent::End,
            StreamEvent::Error(e) => StreamEvent::Error(e),
        }
    }
}
