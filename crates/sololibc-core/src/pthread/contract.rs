//! Transition contract for the collapsed synchronization objects.
//!
//! Every object the shim hands out has exactly one state, [`ShimState::Available`].
//! Every operation is a self-loop on that state that succeeds without
//! blocking. This table is the single place that says so.

use crate::errno::SUCCESS;

// ---------------------------------------------------------------------------
// Attribute constants accepted (and ignored) by the setters
// ---------------------------------------------------------------------------

/// Normal (default) mutex.
pub const PTHREAD_MUTEX_NORMAL: i32 = 0;
/// Recursive mutex.
pub const PTHREAD_MUTEX_RECURSIVE: i32 = 1;
/// Error-checking mutex.
pub const PTHREAD_MUTEX_ERRORCHECK: i32 = 2;
/// Default mutex type (alias for NORMAL on Linux).
pub const PTHREAD_MUTEX_DEFAULT: i32 = PTHREAD_MUTEX_NORMAL;

/// `CLOCK_REALTIME`, the default condition variable clock.
pub const CLOCK_REALTIME: i32 = 0;
/// `CLOCK_MONOTONIC`.
pub const CLOCK_MONOTONIC: i32 = 1;

// ---------------------------------------------------------------------------
// Contract types
// ---------------------------------------------------------------------------

/// Object families reachable through the pthread surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    ThreadAttr,
    MutexAttr,
    CondAttr,
    RwlockAttr,
    Mutex,
    Rwlock,
    Cond,
    TlsKey,
    Thread,
}

impl ObjectKind {
    pub const ALL: [Self; 9] = [
        Self::ThreadAttr,
        Self::MutexAttr,
        Self::CondAttr,
        Self::RwlockAttr,
        Self::Mutex,
        Self::Rwlock,
        Self::Cond,
        Self::TlsKey,
        Self::Thread,
    ];
}

/// Operations entry points perform on an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractOp {
    Init,
    Destroy,
    Get,
    Set,
    Lock,
    TryLock,
    ReadLock,
    TryReadLock,
    WriteLock,
    TryWriteLock,
    Unlock,
    Signal,
    Broadcast,
    Wait,
    TimedWait,
    Create,
    Delete,
    SelfId,
}

impl ContractOp {
    pub const ALL: [Self; 18] = [
        Self::Init,
        Self::Destroy,
        Self::Get,
        Self::Set,
        Self::Lock,
        Self::TryLock,
        Self::ReadLock,
        Self::TryReadLock,
        Self::WriteLock,
        Self::TryWriteLock,
        Self::Unlock,
        Self::Signal,
        Self::Broadcast,
        Self::Wait,
        Self::TimedWait,
        Self::Create,
        Self::Delete,
        Self::SelfId,
    ];
}

/// The only state a shim object can be in: uncontended and available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShimState {
    Available,
}

/// Result of applying a contract operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractOutcome {
    /// State after the operation.
    pub next: ShimState,
    /// POSIX errno-style result (0 on success).
    pub errno: i32,
    /// Whether the operation may block awaiting another thread. Never true.
    pub blocks: bool,
}

impl ContractOutcome {
    /// Immediate success, state unchanged.
    pub const SETTLED: Self = Self {
        next: ShimState::Available,
        errno: SUCCESS,
        blocks: false,
    };
}

/// Apply `op` to an object of family `kind`.
///
/// Total: every pair settles immediately with status 0 and leaves the object
/// available. No pthread entry point has a failure path.
#[must_use]
pub const fn contract_transition(_kind: ObjectKind, _op: ContractOp) -> ContractOutcome {
    ContractOutcome::SETTLED
}
