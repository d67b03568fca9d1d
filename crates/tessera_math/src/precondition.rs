//! Reporting of violated preconditions.
//!
//! Operations such as [`Matrix4::inverse`](crate::matrix::Matrix4::inverse)
//! or the projection builders have inputs they cannot give a meaningful
//! result for. Instead of returning an error they hand a
//! [`PreconditionViolation`] to the active [`FailureHandler`]. The default
//! handler logs and panics. A handler that returns lets the computation carry
//! on with whatever the unguarded arithmetic produces.
//!
//! The handler is resolved per call: a handler installed on the current
//! thread with [`with_failure_handler`] wins over the process-wide one set by
//! [`set_failure_handler`].

use std::cell::Cell;

use log::{error, trace, warn};
use parking_lot::{const_rwlock, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PreconditionViolation {
    #[error("matrix is not invertible, determinant is {determinant}")]
    SingularMatrix { determinant: f64 },
    #[error("aspect ratio must be positive, got {aspect_ratio}")]
    InvalidAspectRatio { aspect_ratio: f64 },
    #[error("depth range from {near} to {far} is empty")]
    DegenerateDepthRange { near: f64, far: f64 },
    #[error("vertical field of view must be positive, got {fov_y}")]
    InvalidFieldOfView { fov_y: f64 },
    #[error("hue {hue} does not fall in any sector of the color wheel")]
    InvalidHueSector { hue: f64 },
}

pub type FailureHandler = fn(&PreconditionViolation);

static GLOBAL_HANDLER: RwLock<FailureHandler> =
    const_rwlock(panic_on_violation as FailureHandler);

thread_local! {
    static SCOPED_HANDLER: Cell<Option<FailureHandler>> = Cell::new(None);
}

/// The default handler.
///
/// # Panics
///
/// Always.
pub fn panic_on_violation(violation: &PreconditionViolation) {
    error!("Precondition violated: {violation}");
    panic!("precondition violated: {violation}");
}

/// Logs the violation and lets the caller continue.
pub fn log_violation(violation: &PreconditionViolation) {
    warn!("Precondition violated: {violation}");
}

/// Installs `handler` for the whole process and returns the previous one.
pub fn set_failure_handler(handler: FailureHandler) -> FailureHandler {
    trace!("Installing global precondition failure handler");
    std::mem::replace(&mut *GLOBAL_HANDLER.write(), handler)
}

pub fn reset_failure_handler() {
    trace!("Restoring default precondition failure handler");
    *GLOBAL_HANDLER.write() = panic_on_violation;
}

/// Runs `f` with `handler` active on the current thread only.
///
/// The previous thread-local handler is restored afterwards, including when
/// `f` unwinds.
pub fn with_failure_handler<R>(handler: FailureHandler, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<FailureHandler>);

    impl Drop for Restore {
        fn drop(&mut self) {
            SCOPED_HANDLER.with(|scoped| scoped.set(self.0));
        }
    }

    let _restore = Restore(SCOPED_HANDLER.with(|scoped| scoped.replace(Some(handler))));
    f()
}

/// Hands `violation` to the active handler.
pub fn report(violation: PreconditionViolation) {
    let handler = SCOPED_HANDLER
        .with(Cell::get)
        .unwrap_or_else(|| *GLOBAL_HANDLER.read());
    handler(&violation);
}
