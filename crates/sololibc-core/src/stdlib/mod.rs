//! Standard library process-control surface.

pub mod exit;

pub use exit::{ExitDestructor, register_at_exit, register_at_thread_exit};
