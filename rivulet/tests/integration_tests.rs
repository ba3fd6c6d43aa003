use rivulet::prelude::*;
use rivulet_test_utils::{interval, Collector, ManualSource, TestTimer};
use std::time::Duration;

#[test]
fn test_pipeline_of_linear_join_and_timed_operators() {
    // Sensor readings are smoothed, merged with a second sensor and
    // delivered after a settling delay.
    let timer = TestTimer::new();
    let primary = ManualSource::<i32>::new();
    let secondary = ManualSource::<i32>::new();

    let readings = primary
        .stream()
        .filter(|n| Ok(*n >= 0))
        .scan(0, |acc, n| Ok(acc + n))
        .merge(&secondary.stream().map(|n| Ok(-n)))
        .delay(Duration::from_millis(5), timer.clone());

    let collector = Collector::new();
    let _subscription = collector.attach(&readings);

    primary.push(1);
    primary.push(-7);
    primary.push(2);
    secondary.push(4);
    assert_eq!(collector.value_count(), 0);

    timer.advance(Duration::from_millis(5));
    assert_eq!(collector.values(), vec![1, 3, -4]);
}

#[test]
fn test_flat_map_latest_over_ticking_sources() {
    // Every request switches to a fresh polling interval; only the newest
    // one may keep ticking.
    let timer = TestTimer::new();
    let requests = ManualSource::<u64>::new();

    let polled = requests.stream().flat_map_latest({
        let timer = timer.clone();
        move |request| {
            let period = Duration::from_millis(10 * request);
            interval(&timer, period).map(move |tick| Ok((request, tick)))
        }
    });

    let collector = Collector::new();
    let subscription = collector.attach(&polled);

    requests.push(1);
    timer.advance(Duration::from_millis(25));
    assert_eq!(collector.values(), vec![(1, 0), (1, 1)]);

    requests.push(3);
    timer.advance(Duration::from_millis(60));

    // The first interval was stopped when the second request arrived.
    assert_eq!(
        collector.values(),
        vec![(1, 0), (1, 1), (3, 0), (3, 1)]
    );

    subscription.unsubscribe();
    timer.advance(Duration::from_millis(200));
    assert_eq!(collector.value_count(), 4);
}

#[test]
fn test_sampled_by_with_virtual_clock() {
    let timer = TestTimer::new();
    let values = ManualSource::<i32>::new();
    let sampled = values
        .stream()
        .sampled_by(&interval(&timer, Duration::from_millis(10)));

    let collector = Collector::new();
    let _subscription = collector.attach(&sampled);

    values.push(42);
    timer.advance(Duration::from_millis(30));

    assert_eq!(collector.values(), vec![42, 42, 42]);
}
