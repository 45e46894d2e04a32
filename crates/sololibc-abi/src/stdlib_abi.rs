//! ABI layer for process-exit destructor registration.

use std::ffi::{c_int, c_void};

use sololibc_core::stdlib::{ExitDestructor, register_at_exit, register_at_thread_exit};

use crate::trace::{ApiFamily, traced};

abi_fn! {
    /// Itanium C++ ABI `__cxa_atexit`.
    ///
    /// The registration is accepted and dropped: `func` is never called.
    fn __cxa_atexit(
        func: Option<ExitDestructor>,
        arg: *mut c_void,
        dso_handle: *mut c_void,
    ) -> c_int {
        traced(
            ApiFamily::Stdlib,
            "__cxa_atexit",
            register_at_exit(func, arg, dso_handle),
        )
    }
}

abi_fn! {
    /// glibc `__cxa_thread_atexit_impl`; same contract as [`__cxa_atexit`].
    fn __cxa_thread_atexit_impl(
        func: Option<ExitDestructor>,
        obj: *mut c_void,
        dso_symbol: *mut c_void,
    ) -> c_int {
        traced(
            ApiFamily::Stdlib,
            "__cxa_thread_atexit_impl",
            register_at_thread_exit(func, obj, dso_symbol),
        )
    }
}
