// Copyright 2026 The rivulet developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Origin tagging for join operators.

use crate::event_stream::Source;
use rivulet_core::{Handler, StreamEvent};
use std::rc::Rc;

/// Which of two joined sources a raw value came from.
///
/// Join operators start both sources against one shared handler; the tag
/// lets the joined pipeline dispatch each value into the pipeline of the
/// side it originated from, so each side's own transform chain still
/// applies only to its own values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<L, R> {
    /// A value from the left source (`self` in `a.merge(b)`)
    Left(L),
    /// A value from the right source
    Right(R),
}

/// Start two sources against one shared handler, tagging each value with
/// its origin. The combined stop function stops both sides, each exactly
/// once, in either order.
///
/// `End` and `Error` carry no origin tag: every pipeline stage forwards
/// them unchanged, so routing them through a side's pipeline would be
/// observably identical to handing them straight to the joined handler.
pub(crate) fn joined_source<SA: 'static, SB: 'static>(
    left: Source<SA>,
    right: Source<SB>,
) -> Source<Origin<SA, SB>> {
    Rc::new(move |handler: Handler<Origin<SA, SB>>| {
        let left_handler: Handler<SA> = Rc::new({
            let handler = Rc::clone(&handler);
            move |event| match event {
                StreamEvent::Value(value) => handler(StreamEvent::Value(Origin::Left(value))),
                StreamEvent::End => handler(StreamEvent::End),
                StreamEvent::Error(error) => handler(StreamEvent::Error(error)),
            }
        });
        let right_handler: Handler<SB> = Rc::new({
            let handler = Rc::clone(&handler);
            move |event| match event {
                StreamEvent::Value(value) => handler(StreamEvent::Value(Origin::Right(value))),
                StreamEvent::End => handler(StreamEvent::End),
                StreamEvent::Error(error) => handler(StreamEvent::Error(error)),
            }
        });
        let stop_left = left(left_handler);
        let stop_right = right(right_handler);
        Box::new(move || {
            stop_left();
            stop_right();
        })
    })
}
