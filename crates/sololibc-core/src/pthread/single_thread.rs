//! The whole pthread surface as methods on one type.
//!
//! [`SingleThread`] has one method per POSIX entry point. Each method routes
//! through [`contract_transition`] so the "always succeeds, never blocks"
//! invariant lives in one table. Handle arguments are not taken at all: no
//! method inspects the object it was called on.

use std::ffi::c_void;

use crate::metrics::{METRICS, ShimMetrics};
use crate::pthread::contract::{ContractOp, ObjectKind, contract_transition};
use crate::pthread::tls::{PthreadKey, TlsCell};

/// Identifier of the only thread that can ever exist.
pub const SOLE_THREAD_ID: u64 = 0;

/// Stack placement reported by `pthread_attr_getstack`.
///
/// Always empty: no explicit stack is configured, callers fall back to the
/// platform default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackRegion {
    pub base: usize,
    pub size: usize,
}

/// The degenerate single-thread runtime behind the pthread ABI.
pub struct SingleThread {
    specific: TlsCell,
}

/// Process-wide instance used by the exported entry points.
pub static SINGLE_THREAD: SingleThread = SingleThread::new();

impl SingleThread {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            specific: TlsCell::new(),
        }
    }

    #[inline]
    fn settle(kind: ObjectKind, op: ContractOp) -> i32 {
        contract_transition(kind, op).errno
    }

    // -- thread attributes -------------------------------------------------

    pub fn attr_init(&self) -> i32 {
        Self::settle(ObjectKind::ThreadAttr, ContractOp::Init)
    }

    pub fn attr_destroy(&self) -> i32 {
        Self::settle(ObjectKind::ThreadAttr, ContractOp::Destroy)
    }

    /// `pthread_attr_getstack`: status plus an empty region.
    pub fn attr_getstack(&self) -> (i32, StackRegion) {
        (
            Self::settle(ObjectKind::ThreadAttr, ContractOp::Get),
            StackRegion::default(),
        )
    }

    /// `pthread_getattr_np`: the attribute object is left as the caller had it.
    pub fn getattr_np(&self, _thread: u64) -> i32 {
        Self::settle(ObjectKind::Thread, ContractOp::Get)
    }

    // -- mutex attributes --------------------------------------------------

    pub fn mutexattr_init(&self) -> i32 {
        Self::settle(ObjectKind::MutexAttr, ContractOp::Init)
    }

    pub fn mutexattr_destroy(&self) -> i32 {
        Self::settle(ObjectKind::MutexAttr, ContractOp::Destroy)
    }

    /// Any kind is accepted, including values outside the POSIX set.
    pub fn mutexattr_settype(&self, _kind: i32) -> i32 {
        Self::settle(ObjectKind::MutexAttr, ContractOp::Set)
    }

    // -- condition variable attributes -------------------------------------

    pub fn condattr_init(&self) -> i32 {
        Self::settle(ObjectKind::CondAttr, ContractOp::Init)
    }

    pub fn condattr_destroy(&self) -> i32 {
        Self::settle(ObjectKind::CondAttr, ContractOp::Destroy)
    }

    /// Any clock id is accepted.
    pub fn condattr_setclock(&self, _clock_id: i32) -> i32 {
        Self::settle(ObjectKind::CondAttr, ContractOp::Set)
    }

    // -- rwlock attributes -------------------------------------------------

    pub fn rwlockattr_init(&self) -> i32 {
        Self::settle(ObjectKind::RwlockAttr, ContractOp::Init)
    }

    pub fn rwlockattr_destroy(&self) -> i32 {
        Self::settle(ObjectKind::RwlockAttr, ContractOp::Destroy)
    }

    // -- mutex ---------------------------------------------------------------

    pub fn mutex_init(&self) -> i32 {
        Self::settle(ObjectKind::Mutex, ContractOp::Init)
    }

    pub fn mutex_destroy(&self) -> i32 {
        Self::settle(ObjectKind::Mutex, ContractOp::Destroy)
    }

    /// No ownership, no recursion count. Relocking succeeds.
    pub fn mutex_lock(&self) -> i32 {
        Self::settle(ObjectKind::Mutex, ContractOp::Lock)
    }

    pub fn mutex_trylock(&self) -> i32 {
        Self::settle(ObjectKind::Mutex, ContractOp::TryLock)
    }

    pub fn mutex_unlock(&self) -> i32 {
        Self::settle(ObjectKind::Mutex, ContractOp::Unlock)
    }

    // -- rwlock --------------------------------------------------------------

    pub fn rwlock_init(&self) -> i32 {
        Self::settle(ObjectKind::Rwlock, ContractOp::Init)
    }

    pub fn rwlock_destroy(&self) -> i32 {
        Self::settle(ObjectKind::Rwlock, ContractOp::Destroy)
    }

    pub fn rwlock_rdlock(&self) -> i32 {
        Self::settle(ObjectKind::Rwlock, ContractOp::ReadLock)
    }

    pub fn rwlock_tryrdlock(&self) -> i32 {
        Self::settle(ObjectKind::Rwlock, ContractOp::TryReadLock)
    }

    pub fn rwlock_wrlock(&self) -> i32 {
        Self::settle(ObjectKind::Rwlock, ContractOp::WriteLock)
    }

    pub fn rwlock_trywrlock(&self) -> i32 {
        Self::settle(ObjectKind::Rwlock, ContractOp::TryWriteLock)
    }

    pub fn rwlock_unlock(&self) -> i32 {
        Self::settle(ObjectKind::Rwlock, ContractOp::Unlock)
    }

    // -- condition variables -----------------------------------------------

    pub fn cond_init(&self) -> i32 {
        Self::settle(ObjectKind::Cond, ContractOp::Init)
    }

    pub fn cond_destroy(&self) -> i32 {
        Self::settle(ObjectKind::Cond, ContractOp::Destroy)
    }

    pub fn cond_signal(&self) -> i32 {
        Self::settle(ObjectKind::Cond, ContractOp::Signal)
    }

    pub fn cond_broadcast(&self) -> i32 {
        Self::settle(ObjectKind::Cond, ContractOp::Broadcast)
    }

    /// Returns at once, as if the condition had already been signalled.
    ///
    /// Correct only while no second thread exists: a program that needs
    /// another thread to make progress before it can wake would spin or
    /// misbehave here instead of deadlocking.
    pub fn cond_wait(&self) -> i32 {
        ShimMetrics::inc(&METRICS.cond_waits_elided);
        Self::settle(ObjectKind::Cond, ContractOp::Wait)
    }

    /// Like [`Self::cond_wait`]; the deadline is never reached, so
    /// `ETIMEDOUT` is never reported.
    pub fn cond_timedwait(&self) -> i32 {
        ShimMetrics::inc(&METRICS.cond_waits_elided);
        Self::settle(ObjectKind::Cond, ContractOp::TimedWait)
    }

    // -- thread-specific data ----------------------------------------------

    /// The destructor, if any, is dropped and will never run.
    pub fn key_create(&self, has_destructor: bool) -> i32 {
        ShimMetrics::inc(&METRICS.tls_keys_created);
        if has_destructor {
            ShimMetrics::inc(&METRICS.tls_destructors_dropped);
        }
        Self::settle(ObjectKind::TlsKey, ContractOp::Create)
    }

    pub fn key_delete(&self, _key: PthreadKey) -> i32 {
        Self::settle(ObjectKind::TlsKey, ContractOp::Delete)
    }

    /// Value of the shared cell, whatever `key` is.
    #[must_use]
    pub fn getspecific(&self, _key: PthreadKey) -> *mut c_void {
        self.specific.get()
    }

    /// Store into the shared cell, whatever `key` is.
    pub fn setspecific(&self, _key: PthreadKey, value: *const c_void) -> i32 {
        ShimMetrics::inc(&METRICS.tls_writes);
        self.specific.set(value.cast_mut());
        Self::settle(ObjectKind::TlsKey, ContractOp::Set)
    }

    // -- identity ------------------------------------------------------------

    #[must_use]
    pub fn self_id(&self) -> u64 {
        SOLE_THREAD_ID
    }

    #[must_use]
    pub fn equal(&self, a: u64, b: u64) -> bool {
        a == b
    }
}

impl Default for SingleThread {
    fn default() -> Self {
        Self::new()
    }
}
