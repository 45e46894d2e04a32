//! # sololibc-core
//!
//! Safe Rust semantics for a single-threaded C runtime shim.
//!
//! The shim satisfies the link-time requirements of programs that expect a
//! POSIX thread surface and a few libc extensions, but never run a second
//! thread. Every concurrency primitive collapses to one always-available
//! state, exit destructors are dropped, and aligned allocation delegates to
//! an underlying allocator.
//!
//! No `unsafe` code is permitted at the crate level. The single exception is
//! the process-wide TLS cell in [`pthread::tls`].

#![deny(unsafe_code)]

pub mod config;
pub mod errno;
pub mod malloc;
pub mod metrics;
pub mod pthread;
pub mod stdlib;
pub mod string;
