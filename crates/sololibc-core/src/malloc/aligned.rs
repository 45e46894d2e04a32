//! `posix_memalign` semantics on top of a lower-level aligned allocator.
//!
//! The shim does not validate `alignment`; that is the underlying allocator's
//! concern. It only guarantees that a zero-size request still produces a
//! distinct address and that exhaustion is reported without producing one.

use std::ffi::c_void;
use std::ptr::NonNull;

use thiserror::Error;

use crate::errno::ENOMEM;
use crate::metrics::{METRICS, ShimMetrics};

/// Smallest request forwarded to the underlying allocator.
///
/// A zero-size request is rounded up to this so the result has identity: it
/// is freeable and never aliases another live allocation.
pub const MIN_REQUEST_SIZE: usize = 1;

/// An allocator able to return memory aligned to a power of two.
///
/// Implementations return `None` when they are exhausted.
pub trait AlignedAllocator {
    fn memalign(&self, alignment: usize, size: usize) -> Option<NonNull<c_void>>;
}

/// Failure of an aligned allocation request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    #[error("underlying allocator exhausted: {size} bytes at alignment {alignment}")]
    Exhausted { alignment: usize, size: usize },
}

impl AllocError {
    /// POSIX status code reported to C callers.
    #[must_use]
    pub const fn errno(&self) -> i32 {
        match self {
            Self::Exhausted { .. } => ENOMEM,
        }
    }
}

/// Size actually forwarded for a request of `size` bytes.
#[must_use]
pub const fn effective_size(size: usize) -> usize {
    if size == 0 { MIN_REQUEST_SIZE } else { size }
}

/// Allocate at least `size` bytes aligned to `alignment` from `allocator`.
///
/// On `Err`, no memory was obtained and the caller must leave its output slot
/// untouched.
pub fn posix_memalign<A: AlignedAllocator + ?Sized>(
    allocator: &A,
    alignment: usize,
    size: usize,
) -> Result<NonNull<c_void>, AllocError> {
    match allocator.memalign(alignment, effective_size(size)) {
        Some(ptr) => {
            ShimMetrics::inc(&METRICS.aligned_allocations);
            Ok(ptr)
        }
        None => {
            ShimMetrics::inc(&METRICS.aligned_exhaustions);
            Err(AllocError::Exhausted { alignment, size })
        }
    }
}
