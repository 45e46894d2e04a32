//! String and memory operations.
//!
//! Implements `<string.h>` functions as safe Rust operating on slices.

pub mod mem;

pub use mem::{memrchr, terminated_len};
