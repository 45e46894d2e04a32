//! ABI layer for `<string.h>` functions.

use std::ffi::{c_int, c_void};
use std::ptr;

use sololibc_core::string::memrchr as core_memrchr;

use crate::trace::{ApiFamily, TraceRecord, emit};
use crate::util::bounded_prefix;

abi_fn! {
    /// GNU `memrchr`, bounded by the first NUL in the window.
    ///
    /// Scans at most `n` bytes from `s`, stopping at a NUL byte, and returns
    /// the address of the last byte equal to `(unsigned char)c` before the
    /// stop, or null.
    fn memrchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
        if s.is_null() || n == 0 {
            return ptr::null_mut();
        }
        let base = s.cast::<u8>();
        // SAFETY: caller guarantees `s` is readable up to the terminator or `n` bytes.
        let window = unsafe { bounded_prefix(base, n) };
        let found = core_memrchr(window, c as u8, n);
        emit(
            TraceRecord::new(ApiFamily::String, "memrchr", 0)
                .with_detail(if found.is_some() { "match" } else { "no match" }),
        );
        match found {
            // SAFETY: idx lies inside the window just scanned.
            Some(idx) => unsafe { base.add(idx) }.cast_mut().cast(),
            None => ptr::null_mut(),
        }
    }
}
