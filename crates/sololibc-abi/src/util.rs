//! Shared internal utilities for ABI adapters.

use std::ffi::c_char;

/// Scan a C string with an optional hard bound.
///
/// Returns `(len, terminated)` where:
/// - `len` is the byte length before the first NUL or before the bound.
/// - `terminated` indicates whether a NUL byte was observed.
///
/// # Safety
///
/// `ptr` must be valid to read up to the discovered length (and bound when given).
pub unsafe fn scan_c_string(ptr: *const c_char, bound: Option<usize>) -> (usize, bool) {
    match bound {
        Some(limit) => {
            for i in 0..limit {
                if unsafe { *ptr.add(i) } == 0 {
                    return (i, true);
                }
            }
            (limit, false)
        }
        None => {
            let mut i = 0usize;
            while unsafe { *ptr.add(i) } != 0 {
                i += 1;
            }
            (i, true)
        }
    }
}

/// Borrow the bytes a bounded, NUL-stopping scan may touch.
///
/// The slice covers the prefix before the first NUL (or all `bound` bytes
/// when none is found) plus the terminator itself when one was seen.
///
/// # Safety
///
/// `ptr` must be non-null and valid to read up to the returned length, which
/// never exceeds `bound`.
pub unsafe fn bounded_prefix<'a>(ptr: *const u8, bound: usize) -> &'a [u8] {
    let (len, terminated) = unsafe { scan_c_string(ptr.cast(), Some(bound)) };
    let visible = if terminated { len + 1 } else { len };
    // SAFETY: the scan read every byte in [ptr, ptr + visible).
    unsafe { std::slice::from_raw_parts(ptr, visible) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_stops_at_terminator() {
        let buf = b"ab\0cd";
        let (len, terminated) = unsafe { scan_c_string(buf.as_ptr().cast(), Some(buf.len())) };
        assert_eq!((len, terminated), (2, true));
    }

    #[test]
    fn scan_respects_bound() {
        let buf = b"abcd";
        let (len, terminated) = unsafe { scan_c_string(buf.as_ptr().cast(), Some(3)) };
        assert_eq!((len, terminated), (3, false));
    }

    #[test]
    fn prefix_includes_terminator_when_seen() {
        let buf = b"xy\0z";
        let prefix = unsafe { bounded_prefix(buf.as_ptr(), buf.len()) };
        assert_eq!(prefix, b"xy\0");

        let prefix = unsafe { bounded_prefix(buf.as_ptr(), 2) };
        assert_eq!(prefix, b"xy");
    }
}
