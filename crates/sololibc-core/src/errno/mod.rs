//! Error number definitions.
//!
//! The shim reports POSIX errno-style status codes: `0` is success and a
//! positive value names the failure. Only the codes the shim can actually
//! produce are defined here.

/// Success status shared by every entry point.
pub const SUCCESS: i32 = 0;

/// Out of memory. The only failure a well-formed request can see.
pub const ENOMEM: i32 = 12;
/// Invalid argument. Reported only for a null `posix_memalign` output slot.
pub const EINVAL: i32 = 22;

/// Returns true when `code` is the success status.
#[must_use]
pub const fn is_success(code: i32) -> bool {
    code == SUCCESS
}
