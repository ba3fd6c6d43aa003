use rivulet_core::Subscription;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn test_unsubscribe_stops_producer_exactly_once() {
    // Arrange
    let stops = Rc::new(Cell::new(0));
    let subscription = Subscription::new();
    subscription.install_producer_stop(Box::new({
        let stops = Rc::clone(&stops);
        move || stops.set(stops.get() + 1)
    }));

    // Act
    subscription.unsubscribe();
    subscription.unsubscribe();

    // Assert
    assert_eq!(stops.get(), 1);
    assert!(subscription.is_stopped());
}

#[test]
fn test_teardown_hooks_run_in_registration_order_before_producer_stop() {
    // Arrange
    let order = Rc::new(RefCell::new(Vec::new()));
    let subscription = Subscription::new();
    let ctx = subscription.context();
    ctx.on_teardown({
        let order = Rc::clone(&order);
        move || order.borrow_mut().push("first hook")
    });
    ctx.on_teardown({
        let order = Rc::clone(&order);
        move || order.borrow_mut().push("second hook")
    });
    subscription.install_producer_stop(Box::new({
        let order = Rc::clone(&order);
        move || order.borrow_mut().push("producer stop")
    }));

    // Act
    subscription.unsubscribe();

    // Assert
    assert_eq!(
        *order.borrow(),
        vec!["first hook", "second hook", "producer stop"]
    );
}

#[test]
fn test_producer_stop_installed_after_stop_runs_immediately() {
    // A producer that self-terminates during start: the subscription is
    // already stopped by the time the stop function exists.

    // Arrange
    let stops = Rc::new(Cell::new(0));
    let subscription = Subscription::new();
    subscription.unsubscribe();

    // Act
    subscription.install_producer_stop(Box::new({
        let stops = Rc::clone(&stops);
        move || stops.set(stops.get() + 1)
    }));

    // Assert
    assert_eq!(stops.get(), 1);
}

#[test]
fn test_teardown_hook_registered_after_stop_runs_immediately() {
    // Arrange
    let ran = Rc::new(Cell::new(false));
    let subscription = Subscription::new();
    let ctx = subscription.context();
    subscription.unsubscribe();

    // Act
    ctx.on_teardown({
        let ran = Rc::clone(&ran);
        move || ran.set(true)
    });

    // Assert
    assert!(ran.get());
}

#[test]
fn test_reentrant_unsubscribe_from_teardown_hook_is_noop() {
    // Arrange
    let stops = Rc::new(Cell::new(0));
    let subscription = Subscription::new();
    let ctx = subscription.context();
    ctx.on_teardown({
        let subscription = subscription.clone();
        move || subscription.unsubscribe()
    });
    subscription.install_producer_stop(Box::new({
        let stops = Rc::clone(&stops);
        move || stops.set(stops.get() + 1)
    }));

    // Act
    subscription.unsubscribe();

    // Assert
    assert_eq!(stops.get(), 1);
}

#[test]
fn test_context_reports_stopped_state() {
    let subscription = Subscription::new();
    let ctx = subscription.context();
    assert!(!ctx.is_stopped());

    subscription.unsubscribe();
    assert!(ctx.is_stopped());
}
