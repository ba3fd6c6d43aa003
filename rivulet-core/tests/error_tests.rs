use rivulet_core::{IntoRivuletError, RivuletError};

#[test]
fn test_stream_error_display() {
    let error = RivuletError::stream_error("pipeline stalled");
    assert_eq!(error.to_string(), "Stream processing error: pipeline stalled");
}

#[test]
fn test_timer_error_display() {
    let error = RivuletError::timer_error("backend gone");
    assert_eq!(error.to_string(), "Timer error: backend gone");
}

#[test]
fn test_user_error_wraps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let error = RivuletError::user_error(io);
    assert!(error.is_user_error());
    assert!(error.to_string().contains("disk on fire"));
}

#[test]
fn test_into_rivulet_extension() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "nope");
    let error = io.into_rivulet();
    assert!(error.is_user_error());
}

#[test]
fn test_clone_degrades_user_error_to_message() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "flaky");
    let error = RivuletError::user_error(io);
    let cloned = error.clone();
    assert!(matches!(
        cloned,
        RivuletError::StreamProcessingError { .. }
    ));
    assert!(cloned.to_string().contains("flaky"));
}
