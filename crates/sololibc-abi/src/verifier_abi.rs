#![allow(non_snake_case)]

//! Concrete stand-ins for the `__VERIFIER_*` primitives.
//!
//! Harnesses written for a symbolic verifier link against these when run
//! natively. Every nondeterministic value is zero; a failed assumption ends
//! the run, and a reached error aborts it.

use std::ffi::c_int;

use crate::trace::{ApiFamily, TraceRecord, emit};

/// Exit status of a run whose assumption did not hold.
pub const ASSUME_FAILED_STATUS: i32 = 1;

/// Reached an error location. Never returns.
///
/// # Safety
///
/// Always safe to call; `unsafe` only for signature parity with the other exports.
#[cfg_attr(not(feature = "mangled-exports"), unsafe(no_mangle))]
pub unsafe extern "C" fn __VERIFIER_error() -> ! {
    emit(TraceRecord::new(ApiFamily::Verifier, "__VERIFIER_error", 1).with_detail("abort"));
    std::process::abort()
}

abi_fn! {
    /// Ends the process with [`ASSUME_FAILED_STATUS`] when `pred` is zero.
    fn __VERIFIER_assume(pred: c_int) {
        if pred == 0 {
            emit(
                TraceRecord::new(ApiFamily::Verifier, "__VERIFIER_assume", ASSUME_FAILED_STATUS)
                    .with_detail("assumption failed"),
            );
            std::process::exit(ASSUME_FAILED_STATUS);
        }
    }
}

macro_rules! nondet_zero {
    ($($name:ident -> $ty:ty = $zero:expr;)*) => {
        $(
            abi_fn! {
                fn $name() -> $ty {
                    $zero
                }
            }
        )*
    };
}

nondet_zero! {
    __VERIFIER_nondet_u8 -> u8 = 0;
    __VERIFIER_nondet_u16 -> u16 = 0;
    __VERIFIER_nondet_u32 -> u32 = 0;
    __VERIFIER_nondet_u64 -> u64 = 0;
    __VERIFIER_nondet_usize -> usize = 0;
    __VERIFIER_nondet_i8 -> i8 = 0;
    __VERIFIER_nondet_i16 -> i16 = 0;
    __VERIFIER_nondet_i32 -> i32 = 0;
    __VERIFIER_nondet_i64 -> i64 = 0;
    __VERIFIER_nondet_isize -> isize = 0;
    __VERIFIER_nondet_f32 -> f32 = 0.0;
    __VERIFIER_nondet_f64 -> f64 = 0.0;
}
