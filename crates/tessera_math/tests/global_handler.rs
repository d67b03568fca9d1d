//! The process-wide handler is shared by every test in a binary, so it gets a
//! binary of its own with a single test.

use std::sync::atomic::{AtomicUsize, Ordering};

use tessera_math::matrix::{Matrix3f, Matrix4f};
use tessera_math::precondition::{
    log_violation, report, reset_failure_handler, set_failure_handler, with_failure_handler,
    PreconditionViolation,
};

static CALLS: AtomicUsize = AtomicUsize::new(0);

fn count(_: &PreconditionViolation) {
    CALLS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn global_handler_applies_to_every_thread() {
    set_failure_handler(count);

    let _ = Matrix4f::from_diagonal(0.0).inverse();
    std::thread::spawn(|| {
        let _ = Matrix3f::from_diagonal(0.0).inverse();
    })
    .join()
    .unwrap();
    assert_eq!(CALLS.load(Ordering::SeqCst), 2);

    // A scoped handler shadows the global one on its own thread.
    with_failure_handler(log_violation, || {
        report(PreconditionViolation::InvalidHueSector { hue: f64::NAN });
    });
    assert_eq!(CALLS.load(Ordering::SeqCst), 2);

    reset_failure_handler();
    let outcome = std::panic::catch_unwind(|| {
        report(PreconditionViolation::InvalidFieldOfView { fov_y: 0.0 });
    });
    assert!(outcome.is_err());
    assert_eq!(CALLS.load(Ordering::SeqCst), 2);
}
