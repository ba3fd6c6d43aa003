use rivulet_stream_time::{Timer, TimerHandle};
use rivulet_test_utils::TestTimer;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn test_advance_fires_callbacks_in_deadline_order() {
    // Arrange
    let timer = TestTimer::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    for (label, ms) in [("late", 30u64), ("early", 10), ("middle", 20)] {
        let fired = Rc::clone(&fired);
        let _handle = timer.schedule(
            Duration::from_millis(ms),
            Box::new(move || fired.borrow_mut().push(label)),
        );
    }

    // Act
    timer.advance(Duration::from_millis(30));

    // Assert
    assert_eq!(*fired.borrow(), vec!["early", "middle", "late"]);
    assert_eq!(timer.now(), Duration::from_millis(30));
}

#[test]
fn test_equal_deadlines_fire_in_scheduling_order() {
    let timer = TestTimer::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second"] {
        let fired = Rc::clone(&fired);
        let _handle = timer.schedule(
            Duration::from_millis(10),
            Box::new(move || fired.borrow_mut().push(label)),
        );
    }

    timer.advance(Duration::from_millis(10));

    assert_eq!(*fired.borrow(), vec!["first", "second"]);
}

#[test]
fn test_cancel_removes_pending_callback() {
    let timer = TestTimer::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let handle = timer.schedule(
        Duration::from_millis(10),
        Box::new({
            let fired = Rc::clone(&fired);
            move || fired.borrow_mut().push("cancelled")
        }),
    );

    handle.cancel();
    timer.advance(Duration::from_millis(50));

    assert!(fired.borrow().is_empty());
    assert_eq!(timer.pending(), 0);
}

#[test]
fn test_callbacks_may_schedule_within_the_advanced_window() {
    // A callback scheduling a follow-up inside the window is picked up by
    // the same advance call.
    let timer = TestTimer::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let _handle = timer.schedule(
        Duration::from_millis(10),
        Box::new({
            let timer = timer.clone();
            let fired = Rc::clone(&fired);
            move || {
                fired.borrow_mut().push("outer");
                let fired = Rc::clone(&fired);
                let _inner = timer.schedule(
                    Duration::from_millis(10),
                    Box::new(move || fired.borrow_mut().push("inner")),
                );
            }
        }),
    );

    timer.advance(Duration::from_millis(25));

    assert_eq!(*fired.borrow(), vec!["outer", "inner"]);
}
