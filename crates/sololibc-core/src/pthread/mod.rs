//! POSIX threads under a single-thread execution model.
//!
//! Attribute objects, mutexes, reader-writer locks and condition variables
//! carry no state: every operation succeeds immediately and never blocks.
//! Thread-specific data collapses to one shared cell, and the calling thread
//! is always thread `0`.

pub mod contract;
pub mod single_thread;
pub mod tls;

pub use contract::{
    CLOCK_MONOTONIC, CLOCK_REALTIME, ContractOp, ContractOutcome, ObjectKind,
    PTHREAD_MUTEX_DEFAULT, PTHREAD_MUTEX_ERRORCHECK, PTHREAD_MUTEX_NORMAL,
    PTHREAD_MUTEX_RECURSIVE, ShimState, contract_transition,
};
pub use single_thread::{SINGLE_THREAD, SOLE_THREAD_ID, SingleThread, StackRegion};
pub use tls::{PthreadKey, TlsCell};
