// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports for working with rivulet streams.

pub use crate::event_stream::{EventStream, SourceStream};
pub use crate::origin::Origin;
pub use rivulet_core::{
    Handler, Result, RivuletError, StopFn, StreamEvent, SubscribeContext, Subscription,
};
