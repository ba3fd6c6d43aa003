use rivulet_core::RivuletError;
use rivulet_test_utils::{Collector, ManualSource};

#[test]
fn test_take_until_predicate_ends_stream_without_delivering_trigger_value() {
    // Arrange
    let source = ManualSource::<i32>::new();
    let collector = Collector::new();
    let _subscription = collector.attach(&source.stream().take_until(|n| Ok(*n >= 3)));

    // Act
    source.push(1);
    source.push(2);
    source.push(3);
    source.push(4);

    // Assert
    assert_eq!(collector.values(), vec![1, 2]);
    assert!(collector.has_ended());
    assert_eq!(source.stop_count(), 1);
}

#[test]
fn test_take_until_predicate_error_does_not_terminate() {
    let source = ManualSource::<i32>::new();
    let collector = Collector::new();
    let guarded = source.stream().take_until(|n| {
        if *n == 2 {
            Err(RivuletError::stream_error("cannot judge"))
        } else {
            Ok(false)
        }
    });
    let _subscription = collector.attach(&guarded);

    source.push(1);
    source.push(2);
    source.push(3);

    assert_eq!(collector.values(), vec![1, 3]);
    assert_eq!(collector.error_count(), 1);
    assert!(!collector.has_ended());
}

#[test]
fn test_take_until_stream_ends_on_triggers_first_tick() {
    // Arrange
    let source = ManualSource::<i32>::new();
    let trigger = ManualSource::<()>::new();
    let collector = Collector::new();
    let _subscription = collector.attach(&source.stream().take_until_stream(&trigger.stream()));

    // Act
    source.push(1);
    source.push(2);
    trigger.push(());
    source.push(3);

    // Assert - both producers are stopped by the trigger
    assert_eq!(collector.values(), vec![1, 2]);
    assert!(collector.has_ended());
    assert_eq!(source.stop_count(), 1);
    assert_eq!(trigger.stop_count(), 1);
}

#[test]
fn test_take_until_stream_ends_on_triggers_natural_exhaustion() {
    let source = ManualSource::<i32>::new();
    let trigger = ManualSource::<()>::new();
    let collector = Collector::new();
    let _subscription = collector.attach(&source.stream().take_until_stream(&trigger.stream()));

    source.push(1);
    trigger.end();

    assert_eq!(collector.values(), vec![1]);
    assert!(collector.has_ended());
}
