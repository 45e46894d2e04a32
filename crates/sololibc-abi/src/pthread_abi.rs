//! ABI layer for POSIX threads under the single-thread execution model.
//!
//! Handles are accepted as opaque pointers and never dereferenced, so objects
//! need no initialization and may be zeroed, stale, or foreign. Output
//! parameters are written only where noted. Every status is 0.

use std::ffi::{c_int, c_void};

use libc::{
    clockid_t, pthread_attr_t, pthread_cond_t, pthread_condattr_t, pthread_key_t,
    pthread_mutex_t, pthread_mutexattr_t, pthread_rwlock_t, pthread_rwlockattr_t, pthread_t,
    timespec,
};
use sololibc_core::pthread::SINGLE_THREAD;

use crate::trace::{ApiFamily, TraceRecord, emit, traced};

/// Destructor signature accepted by `pthread_key_create`.
pub type KeyDestructor = unsafe extern "C" fn(*mut c_void);

#[inline]
fn pthread_traced(event: &'static str, rc: i32) -> c_int {
    traced(ApiFamily::Pthread, event, rc)
}

// ---------------------------------------------------------------------------
// Thread attributes
// ---------------------------------------------------------------------------

abi_fn! {
    fn pthread_attr_init(_attr: *mut pthread_attr_t) -> c_int {
        pthread_traced("pthread_attr_init", SINGLE_THREAD.attr_init())
    }
}

abi_fn! {
    fn pthread_attr_destroy(_attr: *mut pthread_attr_t) -> c_int {
        pthread_traced("pthread_attr_destroy", SINGLE_THREAD.attr_destroy())
    }
}

abi_fn! {
    /// Reports no explicit stack: `*stackaddr` becomes null and `*stacksize`
    /// zero. Null output pointers are skipped.
    fn pthread_attr_getstack(
        _attr: *const pthread_attr_t,
        stackaddr: *mut *mut c_void,
        stacksize: *mut usize,
    ) -> c_int {
        let (rc, region) = SINGLE_THREAD.attr_getstack();
        if !stackaddr.is_null() {
            unsafe { *stackaddr = region.base as *mut c_void };
        }
        if !stacksize.is_null() {
            unsafe { *stacksize = region.size };
        }
        pthread_traced("pthread_attr_getstack", rc)
    }
}

abi_fn! {
    /// GNU `pthread_getattr_np`. `*attr` is left as the caller had it.
    fn pthread_getattr_np(thread: pthread_t, _attr: *mut pthread_attr_t) -> c_int {
        pthread_traced("pthread_getattr_np", SINGLE_THREAD.getattr_np(thread as u64))
    }
}

// ---------------------------------------------------------------------------
// Mutex / condvar / rwlock attributes
// ---------------------------------------------------------------------------

abi_fn! {
    fn pthread_mutexattr_init(_attr: *mut pthread_mutexattr_t) -> c_int {
        pthread_traced("pthread_mutexattr_init", SINGLE_THREAD.mutexattr_init())
    }
}

abi_fn! {
    fn pthread_mutexattr_destroy(_attr: *mut pthread_mutexattr_t) -> c_int {
        pthread_traced("pthread_mutexattr_destroy", SINGLE_THREAD.mutexattr_destroy())
    }
}

abi_fn! {
    fn pthread_mutexattr_settype(_attr: *mut pthread_mutexattr_t, kind: c_int) -> c_int {
        pthread_traced("pthread_mutexattr_settype", SINGLE_THREAD.mutexattr_settype(kind))
    }
}

abi_fn! {
    fn pthread_condattr_init(_attr: *mut pthread_condattr_t) -> c_int {
        pthread_traced("pthread_condattr_init", SINGLE_THREAD.condattr_init())
    }
}

abi_fn! {
    fn pthread_condattr_destroy(_attr: *mut pthread_condattr_t) -> c_int {
        pthread_traced("pthread_condattr_destroy", SINGLE_THREAD.condattr_destroy())
    }
}

abi_fn! {
    fn pthread_condattr_setclock(_attr: *mut pthread_condattr_t, clock_id: clockid_t) -> c_int {
        pthread_traced(
            "pthread_condattr_setclock",
            SINGLE_THREAD.condattr_setclock(clock_id as i32),
        )
    }
}

abi_fn! {
    fn pthread_rwlockattr_init(_attr: *mut pthread_rwlockattr_t) -> c_int {
        pthread_traced("pthread_rwlockattr_init", SINGLE_THREAD.rwlockattr_init())
    }
}

abi_fn! {
    fn pthread_rwlockattr_destroy(_attr: *mut pthread_rwlockattr_t) -> c_int {
        pthread_traced("pthread_rwlockattr_destroy", SINGLE_THREAD.rwlockattr_destroy())
    }
}

// ---------------------------------------------------------------------------
// Mutex
// ---------------------------------------------------------------------------

abi_fn! {
    fn pthread_mutex_init(
        _mutex: *mut pthread_mutex_t,
        _attr: *const pthread_mutexattr_t,
    ) -> c_int {
        pthread_traced("pthread_mutex_init", SINGLE_THREAD.mutex_init())
    }
}

abi_fn! {
    fn pthread_mutex_destroy(_mutex: *mut pthread_mutex_t) -> c_int {
        pthread_traced("pthread_mutex_destroy", SINGLE_THREAD.mutex_destroy())
    }
}

abi_fn! {
    fn pthread_mutex_lock(_mutex: *mut pthread_mutex_t) -> c_int {
        pthread_traced("pthread_mutex_lock", SINGLE_THREAD.mutex_lock())
    }
}

abi_fn! {
    fn pthread_mutex_trylock(_mutex: *mut pthread_mutex_t) -> c_int {
        pthread_traced("pthread_mutex_trylock", SINGLE_THREAD.mutex_trylock())
    }
}

abi_fn! {
    fn pthread_mutex_unlock(_mutex: *mut pthread_mutex_t) -> c_int {
        pthread_traced("pthread_mutex_unlock", SINGLE_THREAD.mutex_unlock())
    }
}

// ---------------------------------------------------------------------------
// Reader-writer lock
// ---------------------------------------------------------------------------

abi_fn! {
    fn pthread_rwlock_init(
        _rwlock: *mut pthread_rwlock_t,
        _attr: *const pthread_rwlockattr_t,
    ) -> c_int {
        pthread_traced("pthread_rwlock_init", SINGLE_THREAD.rwlock_init())
    }
}

abi_fn! {
    fn pthread_rwlock_destroy(_rwlock: *mut pthread_rwlock_t) -> c_int {
        pthread_traced("pthread_rwlock_destroy", SINGLE_THREAD.rwlock_destroy())
    }
}

abi_fn! {
    fn pthread_rwlock_rdlock(_rwlock: *mut pthread_rwlock_t) -> c_int {
        pthread_traced("pthread_rwlock_rdlock", SINGLE_THREAD.rwlock_rdlock())
    }
}

abi_fn! {
    fn pthread_rwlock_tryrdlock(_rwlock: *mut pthread_rwlock_t) -> c_int {
        pthread_traced("pthread_rwlock_tryrdlock", SINGLE_THREAD.rwlock_tryrdlock())
    }
}

abi_fn! {
    fn pthread_rwlock_wrlock(_rwlock: *mut pthread_rwlock_t) -> c_int {
        pthread_traced("pthread_rwlock_wrlock", SINGLE_THREAD.rwlock_wrlock())
    }
}

abi_fn! {
    fn pthread_rwlock_trywrlock(_rwlock: *mut pthread_rwlock_t) -> c_int {
        pthread_traced("pthread_rwlock_trywrlock", SINGLE_THREAD.rwlock_trywrlock())
    }
}

abi_fn! {
    fn pthread_rwlock_unlock(_rwlock: *mut pthread_rwlock_t) -> c_int {
        pthread_traced("pthread_rwlock_unlock", SINGLE_THREAD.rwlock_unlock())
    }
}

// ---------------------------------------------------------------------------
// Condition variables
// ---------------------------------------------------------------------------

abi_fn! {
    fn pthread_cond_init(_cond: *mut pthread_cond_t, _attr: *const pthread_condattr_t) -> c_int {
        pthread_traced("pthread_cond_init", SINGLE_THREAD.cond_init())
    }
}

abi_fn! {
    fn pthread_cond_destroy(_cond: *mut pthread_cond_t) -> c_int {
        pthread_traced("pthread_cond_destroy", SINGLE_THREAD.cond_destroy())
    }
}

abi_fn! {
    fn pthread_cond_signal(_cond: *mut pthread_cond_t) -> c_int {
        pthread_traced("pthread_cond_signal", SINGLE_THREAD.cond_signal())
    }
}

abi_fn! {
    fn pthread_cond_broadcast(_cond: *mut pthread_cond_t) -> c_int {
        pthread_traced("pthread_cond_broadcast", SINGLE_THREAD.cond_broadcast())
    }
}

abi_fn! {
    /// Returns immediately; `mutex` is neither released nor reacquired.
    fn pthread_cond_wait(_cond: *mut pthread_cond_t, _mutex: *mut pthread_mutex_t) -> c_int {
        let rc = SINGLE_THREAD.cond_wait();
        emit(TraceRecord::new(ApiFamily::Pthread, "pthread_cond_wait", rc).with_detail("wait elided"));
        rc
    }
}

abi_fn! {
    /// Returns immediately; `abstime` is not read.
    fn pthread_cond_timedwait(
        _cond: *mut pthread_cond_t,
        _mutex: *mut pthread_mutex_t,
        _abstime: *const timespec,
    ) -> c_int {
        let rc = SINGLE_THREAD.cond_timedwait();
        emit(
            TraceRecord::new(ApiFamily::Pthread, "pthread_cond_timedwait", rc)
                .with_detail("wait elided"),
        );
        rc
    }
}

// ---------------------------------------------------------------------------
// Thread-specific data
// ---------------------------------------------------------------------------

abi_fn! {
    /// `*key` is not written: every key names the same shared cell, and the
    /// destructor is never run.
    fn pthread_key_create(_key: *mut pthread_key_t, destructor: Option<KeyDestructor>) -> c_int {
        pthread_traced("pthread_key_create", SINGLE_THREAD.key_create(destructor.is_some()))
    }
}

abi_fn! {
    fn pthread_key_delete(key: pthread_key_t) -> c_int {
        pthread_traced("pthread_key_delete", SINGLE_THREAD.key_delete(key))
    }
}

abi_fn! {
    /// Value last stored under any key, or null.
    fn pthread_getspecific(key: pthread_key_t) -> *mut c_void {
        let value = SINGLE_THREAD.getspecific(key);
        emit(TraceRecord::new(ApiFamily::Pthread, "pthread_getspecific", 0));
        value
    }
}

abi_fn! {
    /// Stores `value` in the cell shared by every key.
    fn pthread_setspecific(key: pthread_key_t, value: *const c_void) -> c_int {
        pthread_traced("pthread_setspecific", SINGLE_THREAD.setspecific(key, value))
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

abi_fn! {
    /// Always thread `0`.
    fn pthread_self() -> pthread_t {
        emit(TraceRecord::new(ApiFamily::Pthread, "pthread_self", 0));
        SINGLE_THREAD.self_id() as pthread_t
    }
}

abi_fn! {
    fn pthread_equal(t1: pthread_t, t2: pthread_t) -> c_int {
        emit(TraceRecord::new(ApiFamily::Pthread, "pthread_equal", 0));
        c_int::from(SINGLE_THREAD.equal(t1 as u64, t2 as u64))
    }
}
