//! Thread-specific data collapsed onto one process-wide cell.
//!
//! `pthread_setspecific`/`pthread_getspecific` normally index a per-thread
//! table by key. With one thread of control there is nothing to index by
//! thread, and the shim does not index by key either: every key reads and
//! writes the same [`TlsCell`].
//!
//! The cell is initialized to null, lives for the process lifetime, and is
//! mutated by any caller. It carries no lock and no atomics. Its only guard is
//! the single-thread execution model; two threads touching it concurrently is
//! a data race in the client, and the shim does not hide it.

#![allow(unsafe_code)]

use std::cell::UnsafeCell;
use std::ffi::c_void;
use std::ptr;

/// Thread-specific data key as presented by C callers. Never interpreted.
pub type PthreadKey = u32;

/// One pointer-sized storage cell shared by every key.
pub struct TlsCell {
    value: UnsafeCell<*mut c_void>,
}

// SAFETY: sharing is sound only under the single-thread execution model,
// which the shim assumes and does not enforce.
unsafe impl Sync for TlsCell {}

impl TlsCell {
    /// A cell holding null.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: UnsafeCell::new(ptr::null_mut()),
        }
    }

    /// Current cell contents.
    #[must_use]
    pub fn get(&self) -> *mut c_void {
        // SAFETY: single-thread model; no reference into the cell escapes.
        unsafe { *self.value.get() }
    }

    /// Replace the cell contents.
    pub fn set(&self, value: *mut c_void) {
        // SAFETY: single-thread model; no reference into the cell escapes.
        unsafe { *self.value.get() = value }
    }
}

impl Default for TlsCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_null() {
        let cell = TlsCell::new();
        assert!(cell.get().is_null());
    }

    #[test]
    fn last_write_wins() {
        let cell = TlsCell::new();
        let mut a = 1u8;
        let mut b = 2u8;
        cell.set((&raw mut a).cast());
        cell.set((&raw mut b).cast());
        assert_eq!(cell.get(), (&raw mut b).cast::<c_void>());
        cell.set(ptr::null_mut());
        assert!(cell.get().is_null());
    }
}
