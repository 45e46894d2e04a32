//! ABI layer for aligned allocation.
//!
//! `posix_memalign` is expressed over the platform's `memalign`; nothing else
//! in the allocator family is exported, so `free` stays the host's.

use std::ffi::{c_int, c_void};
use std::ptr::NonNull;

use sololibc_core::errno;
use sololibc_core::malloc::{AlignedAllocator, posix_memalign as core_posix_memalign};

use crate::trace::{ApiFamily, traced};

/// The host C library's `memalign`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostMemalign;

impl AlignedAllocator for HostMemalign {
    fn memalign(&self, alignment: usize, size: usize) -> Option<NonNull<c_void>> {
        // SAFETY: memalign has no pointer preconditions; null means failure.
        NonNull::new(unsafe { libc::memalign(alignment, size) })
    }
}

/// `posix_memalign` over an arbitrary aligned allocator.
///
/// Writes `*memptr` only on success. A null `memptr` is rejected with
/// `EINVAL` before anything is allocated.
///
/// # Safety
///
/// `memptr`, when non-null, must be valid for a pointer-sized write.
pub unsafe fn posix_memalign_with<A: AlignedAllocator + ?Sized>(
    allocator: &A,
    memptr: *mut *mut c_void,
    alignment: usize,
    size: usize,
) -> c_int {
    if memptr.is_null() {
        return errno::EINVAL;
    }
    match core_posix_memalign(allocator, alignment, size) {
        Ok(ptr) => {
            // SAFETY: caller guarantees memptr is writable.
            unsafe { *memptr = ptr.as_ptr() };
            errno::SUCCESS
        }
        Err(err) => err.errno(),
    }
}

abi_fn! {
    /// POSIX `posix_memalign`.
    ///
    /// A zero `size` is served as a one-byte request. On exhaustion returns
    /// `ENOMEM` and leaves `*memptr` as it was.
    fn posix_memalign(memptr: *mut *mut c_void, alignment: usize, size: usize) -> c_int {
        let rc = unsafe { posix_memalign_with(&HostMemalign, memptr, alignment, size) };
        traced(ApiFamily::Malloc, "posix_memalign", rc)
    }
}
