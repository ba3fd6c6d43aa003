use rivulet_core::{RivuletError, StreamEvent};

#[test]
fn test_value_accessors() {
    let event = StreamEvent::Value(42);
    assert!(event.is_value());
    assert!(!event.is_end());
    assert!(!event.is_error());
    assert_eq!(event.ok(), Some(42));
}

#[test]
fn test_end_accessors() {
    let event: StreamEvent<i32> = StreamEvent::End;
    assert!(event.is_end());
    assert_eq!(event.ok(), None);
}

#[test]
fn test_error_accessors() {
    let event: StreamEvent<i32> = StreamEvent::Error(RivuletError::stream_error("boom"));
    assert!(event.is_error());
    assert!(event.err().is_some());
}

#[test]
fn test_map_transforms_value_and_forwards_end() {
    let doubled = StreamEvent::Value(21).map(|n| n * 2);
    assert_eq!(doubled, StreamEvent::Value(42));

    let end: StreamEvent<i32> = StreamEvent::End;
    assert_eq!(end.map(|n| n * 2), StreamEvent::End);
}

#[test]
fn test_errors_are_never_equal() {
    let a: StreamEvent<i32> = StreamEvent::Error(RivuletError::stream_error("same"));
    let b: StreamEvent<i32> = StreamEvent::Error(RivuletError::stream_error("same"));
    assert_ne!(a, b);
}
