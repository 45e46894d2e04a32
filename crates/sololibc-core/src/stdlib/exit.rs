//! Process-exit and thread-exit destructor registration.
//!
//! Registrations are accepted and discarded. A destructor handed to
//! [`register_at_exit`] is never invoked, at module unload, at thread exit or
//! at process exit. With a single thread, thread exit and process exit
//! coincide, so [`register_at_thread_exit`] is the same operation.

use std::ffi::c_void;

use crate::errno::SUCCESS;
use crate::metrics::{METRICS, ShimMetrics};

/// Destructor signature accepted by `__cxa_atexit`.
pub type ExitDestructor = unsafe extern "C" fn(*mut c_void);

/// Accept a `(destructor, arg, dso_handle)` registration and drop it.
///
/// Always returns `0`. Neither `arg` nor `dso_handle` is inspected.
pub fn register_at_exit(
    destructor: Option<ExitDestructor>,
    _arg: *mut c_void,
    _dso_handle: *mut c_void,
) -> i32 {
    if destructor.is_some() {
        ShimMetrics::inc(&METRICS.exit_destructors_dropped);
    }
    SUCCESS
}

/// Thread-exit registration; indistinguishable from [`register_at_exit`].
pub fn register_at_thread_exit(
    destructor: Option<ExitDestructor>,
    arg: *mut c_void,
    dso_handle: *mut c_void,
) -> i32 {
    register_at_exit(destructor, arg, dso_handle)
}
