// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rivulet reactive streaming library.
//!
//! A root [`RivuletError`] covers the failure modes a stream can surface:
//! failures inside user-supplied transforms, engine-side processing
//! failures, and timer backends refusing to schedule or cancel.
//!
//! Errors travel through pipelines as
//! [`StreamEvent::Error`](crate::StreamEvent::Error) items. They are local
//! to the tick that produced them: subsequent values keep flowing through
//! the same pipeline.

/// Root error type for all rivulet operations.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// Stream processing encountered an error.
    ///
    /// General error for engine-side failures that don't fit a more
    /// specific category.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code.
    ///
    /// Wraps errors produced by user-provided transforms, predicates and
    /// combiners so they can be routed through the stream's error channel.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A timer backend failed to schedule or cancel a timer.
    #[error("Timer error: {context}")]
    TimerError {
        /// Context about the failing timer operation
        context: String,
    },
}

impl RivuletError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create a timer error with the given context.
    pub fn timer_error(context: impl Into<String>) -> Self {
        Self::TimerError {
            context: context.into(),
        }
    }

    /// Check if this error originated in user code.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserError(_))
    }
}

/// Specialized `Result` type for rivulet operations.
///
/// User-supplied transforms hand their outcome to the pipeline runner as a
/// `Result<T>`; the runner branches into the value path or the error path.
pub type Result<T> = std::result::Result<T, RivuletError>;

/// Extension trait for converting arbitrary errors into [`RivuletError`].
pub trait IntoRivuletError {
    /// Convert this error into a `RivuletError`.
    fn into_rivulet(self) -> RivuletError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRivuletError for E {
    fn into_rivulet(self) -> RivuletError {
        RivuletError::user_error(self)
    }
}

impl Clone for RivuletError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // Boxed user errors can't be cloned; degrade to their message.
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::TimerError { context } => Self::TimerError {
                context: context.clone(),
            },
        }
    }
}
