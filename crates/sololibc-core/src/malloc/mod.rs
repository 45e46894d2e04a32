//! Memory allocation.
//!
//! The shim never allocates on its own. It shapes aligned-allocation requests
//! and delegates them to an underlying [`AlignedAllocator`].

pub mod aligned;

pub use aligned::{AlignedAllocator, AllocError, MIN_REQUEST_SIZE, effective_size, posix_memalign};
