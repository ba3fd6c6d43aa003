// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy push-stream descriptor and combinators.
//!
//! An [`EventStream`] is an immutable descriptor pairing a producer-starter
//! with a per-value transform pipeline. Composing streams performs no work;
//! side effects happen only inside the producer, and only once a consumer
//! calls [`EventStream::subscribe`].
//!
//! Operators live one per module, mirroring the shape of the descriptor
//! they build:
//!
//! - linear: [`map`](EventStream::map), [`filter`](EventStream::filter),
//!   [`scan`](EventStream::scan), [`diff`](EventStream::diff),
//!   [`take`](EventStream::take), [`take_until`](EventStream::take_until)
//! - join: [`merge`](EventStream::merge),
//!   [`combine_latest`](EventStream::combine_latest),
//!   [`sampled_by`](EventStream::sampled_by),
//!   [`take_until_stream`](EventStream::take_until_stream)
//! - dynamic: [`flat_map`](EventStream::flat_map),
//!   [`flat_map_latest`](EventStream::flat_map_latest)
//!
//! The timed `delay` operator lives in the `rivulet-stream-time` crate.

pub mod combine_latest;
pub mod diff;
pub mod event_stream;
pub mod filter;
pub mod flat_map;
pub mod map;
pub mod merge;
pub mod origin;
pub mod prelude;
pub mod sampled_by;
pub mod scan;
pub mod take;
pub mod take_until;

pub use event_stream::{EventStream, Pipeline, Source, SourceStream};
pub use origin::Origin;
