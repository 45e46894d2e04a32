#![cfg(target_os = "linux")]

use std::ffi::c_void;
use std::path::PathBuf;
use std::process::Command;
use std::ptr;

use sololibc_abi::stdlib_abi::{__cxa_atexit, __cxa_thread_atexit_impl};
use sololibc_core::metrics::METRICS;

const MARKER_ENV: &str = "SOLOLIBC_EXIT_MARKER";

extern "C" fn write_marker(_arg: *mut c_void) {
    if let Some(path) = std::env::var_os(MARKER_ENV) {
        let _ = std::fs::write(path, b"destructor ran");
    }
}

extern "C" fn unreachable_destructor(_arg: *mut c_void) {
    panic!("registered destructor must never run");
}

#[test]
fn registrations_return_zero() {
    let before = METRICS.snapshot().exit_destructors_dropped;
    let mut payload = 7u32;
    let arg = (&raw mut payload).cast::<c_void>();
    unsafe {
        assert_eq!(__cxa_atexit(Some(unreachable_destructor), arg, ptr::null_mut()), 0);
        assert_eq!(__cxa_atexit(None, ptr::null_mut(), ptr::null_mut()), 0);
        assert_eq!(
            __cxa_thread_atexit_impl(Some(unreachable_destructor), arg, ptr::null_mut()),
            0
        );
    }
    assert!(METRICS.snapshot().exit_destructors_dropped >= before + 2);
    assert_eq!(payload, 7);
}

#[test]
fn child_registers_marker_destructor() {
    // Only acts when launched by `destructor_never_runs_at_process_exit`.
    if std::env::var_os(MARKER_ENV).is_none() {
        return;
    }
    unsafe {
        assert_eq!(__cxa_atexit(Some(write_marker), ptr::null_mut(), ptr::null_mut()), 0);
        assert_eq!(
            __cxa_thread_atexit_impl(Some(write_marker), ptr::null_mut(), ptr::null_mut()),
            0
        );
    }
}

#[test]
fn destructor_never_runs_at_process_exit() {
    let marker: PathBuf = std::env::temp_dir().join(format!(
        "sololibc-exit-marker-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&marker);

    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["--exact", "child_registers_marker_destructor", "--test-threads=1"])
        .env(MARKER_ENV, &marker)
        .output()
        .expect("failed to re-run test binary");

    assert!(
        output.status.success(),
        "child failed: stdout={} stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        !marker.exists(),
        "destructor registered through __cxa_atexit ran at exit"
    );
}
