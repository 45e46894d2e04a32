//! Memory scanning: `memrchr`.
//!
//! This `memrchr` stops at the first NUL byte inside the scan window, unlike
//! the canonical GNU function that always inspects exactly `n` bytes. Callers
//! linked against the shim treat it as a bounded search over C strings.

/// Length of the scan window: the first `n` bytes of `haystack`, cut short
/// at the first NUL byte.
#[must_use]
pub fn terminated_len(haystack: &[u8], n: usize) -> usize {
    let count = n.min(haystack.len());
    haystack[..count]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(count)
}

/// Scans the first `n` bytes of `haystack` for the last occurrence of
/// `needle`, stopping early at a NUL byte.
///
/// Returns the index of the last occurrence before the stop, or `None`.
/// A NUL `needle` never matches because the scan ends before it.
#[must_use]
pub fn memrchr(haystack: &[u8], needle: u8, n: usize) -> Option<usize> {
    let count = terminated_len(haystack, n);
    haystack[..count].iter().rposition(|&b| b == needle)
}
