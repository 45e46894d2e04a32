// Every export takes raw pointers from C callers; the contracts are those of
// the POSIX functions they replace.
#![allow(clippy::missing_safety_doc)]
//! # sololibc-abi
//!
//! ABI-compatible extern "C" boundary layer for SoloLibC.
//!
//! This crate produces a `cdylib`/`staticlib` exposing a small C runtime
//! surface for programs that run on exactly one thread of control: aligned
//! allocation, exit-destructor registration, `memrchr`, and the full pthread
//! synchronization and thread-specific-data API collapsed to no-ops.
//!
//! # Architecture
//!
//! ```text
//! C caller -> ABI entry (this crate) -> Core impl (sololibc-core) -> trace -> return
//! ```
//!
//! The entry points only translate pointers and C types. Behavior lives in
//! `sololibc-core`; this crate adds nothing that can change a return value.

#[macro_use]
mod macros;

pub mod trace;
pub mod util;

pub mod malloc_abi;
pub mod pthread_abi;
pub mod stdlib_abi;
pub mod string_abi;

#[cfg(feature = "verifier-stubs")]
pub mod verifier_abi;
