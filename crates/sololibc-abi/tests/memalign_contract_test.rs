#![cfg(target_os = "linux")]

use std::ffi::c_void;
use std::ptr::{self, NonNull};

use sololibc_abi::malloc_abi::{HostMemalign, posix_memalign, posix_memalign_with};
use sololibc_core::malloc::AlignedAllocator;
use sololibc_core::metrics::METRICS;

const SENTINEL: usize = 0xDEAD_BEEF;

struct AlwaysExhausted;

impl AlignedAllocator for AlwaysExhausted {
    fn memalign(&self, _alignment: usize, _size: usize) -> Option<NonNull<c_void>> {
        None
    }
}

#[test]
fn power_of_two_alignments_are_honored() {
    let mut live = Vec::new();
    for shift in 3..=12 {
        let alignment = 1usize << shift;
        for size in [1usize, 24, 1000] {
            let mut out: *mut c_void = ptr::null_mut();
            let rc = unsafe { posix_memalign(&mut out, alignment, size) };
            assert_eq!(rc, 0, "alignment={alignment} size={size}");
            assert!(!out.is_null());
            assert_eq!(out as usize % alignment, 0, "alignment={alignment} size={size}");
            live.push(out);
        }
    }
    for p in live {
        unsafe { libc::free(p) };
    }
}

#[test]
fn zero_size_yields_distinct_freeable_addresses() {
    let mut a: *mut c_void = ptr::null_mut();
    let mut b: *mut c_void = ptr::null_mut();
    assert_eq!(unsafe { posix_memalign(&mut a, 16, 0) }, 0);
    assert_eq!(unsafe { posix_memalign(&mut b, 16, 0) }, 0);
    assert!(!a.is_null());
    assert!(!b.is_null());
    assert_ne!(a, b);
    assert_eq!(a as usize % 16, 0);
    unsafe {
        libc::free(a);
        libc::free(b);
    }
}

#[test]
fn exhaustion_reports_enomem_and_keeps_slot() {
    let before = METRICS.snapshot().aligned_exhaustions;
    let mut out = SENTINEL as *mut c_void;
    let rc = unsafe { posix_memalign_with(&AlwaysExhausted, &mut out, 64, 128) };
    assert_eq!(rc, libc::ENOMEM);
    assert_eq!(out as usize, SENTINEL);
    assert!(METRICS.snapshot().aligned_exhaustions > before);
}

#[test]
fn host_allocator_refusal_reports_enomem() {
    let mut out = SENTINEL as *mut c_void;
    let rc = unsafe { posix_memalign_with(&HostMemalign, &mut out, 64, usize::MAX - 4096) };
    assert_eq!(rc, libc::ENOMEM);
    assert_eq!(out as usize, SENTINEL);
}

#[test]
fn null_slot_is_rejected() {
    let rc = unsafe { posix_memalign(ptr::null_mut(), 64, 64) };
    assert_eq!(rc, libc::EINVAL);
}

#[test]
fn memory_is_writable_across_requested_size() {
    let mut out: *mut c_void = ptr::null_mut();
    assert_eq!(unsafe { posix_memalign(&mut out, 256, 512) }, 0);
    unsafe {
        ptr::write_bytes(out.cast::<u8>(), 0x5A, 512);
        assert_eq!(*out.cast::<u8>().add(511), 0x5A);
        libc::free(out);
    }
}
