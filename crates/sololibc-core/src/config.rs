//! Runtime trace configuration.
//!
//! The trace level is set via the `SOLOLIBC_TRACE` environment variable:
//! - `off` (default): no trace output.
//! - `errors`: trace only entry points that return a failure status.
//! - `calls`: trace every entry point.
//!
//! Tracing is purely observational. No level changes a return value.

use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted on first use.
pub const TRACE_ENV_VAR: &str = "SOLOLIBC_TRACE";

/// How much the ABI layer reports about the calls it serves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceLevel {
    /// No trace output.
    #[default]
    Off,
    /// Only failing calls.
    Errors,
    /// Every call.
    Calls,
}

impl TraceLevel {
    /// Parse from string (case-insensitive). Unknown values mean `Off`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "errors" | "error" | "warn" => Self::Errors,
            "calls" | "all" | "debug" | "1" => Self::Calls,
            _ => Self::Off,
        }
    }

    /// Returns true if a call that produced status `rc` should be traced.
    #[must_use]
    pub const fn wants(self, rc: i32) -> bool {
        match self {
            Self::Off => false,
            Self::Errors => rc != 0,
            Self::Calls => true,
        }
    }
}

// Atomic cache: 0=unresolved, 1=Off, 2=Errors, 3=Calls, 255=resolving.
// A non-blocking state machine rather than OnceLock: reading the environment
// can reenter the shim (allocation, TLS lookups) and must not wait on itself.
static CACHED_LEVEL: AtomicU8 = AtomicU8::new(0);

const LEVEL_UNRESOLVED: u8 = 0;
const LEVEL_OFF: u8 = 1;
const LEVEL_ERRORS: u8 = 2;
const LEVEL_CALLS: u8 = 3;
const LEVEL_RESOLVING: u8 = 255;

fn level_to_u8(level: TraceLevel) -> u8 {
    match level {
        TraceLevel::Off => LEVEL_OFF,
        TraceLevel::Errors => LEVEL_ERRORS,
        TraceLevel::Calls => LEVEL_CALLS,
    }
}

fn u8_to_level(v: u8) -> TraceLevel {
    match v {
        LEVEL_ERRORS => TraceLevel::Errors,
        LEVEL_CALLS => TraceLevel::Calls,
        _ => TraceLevel::Off,
    }
}

/// Get the configured trace level (reads the environment on first call,
/// caches thereafter).
///
/// A reentrant call that arrives while the environment is being read sees
/// the resolving state and gets `Off`.
#[must_use]
pub fn trace_level() -> TraceLevel {
    let cached = CACHED_LEVEL.load(Ordering::Relaxed);

    if cached != LEVEL_UNRESOLVED && cached != LEVEL_RESOLVING {
        return u8_to_level(cached);
    }
    if cached == LEVEL_RESOLVING {
        return TraceLevel::Off;
    }

    if CACHED_LEVEL
        .compare_exchange(
            LEVEL_UNRESOLVED,
            LEVEL_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        let v = CACHED_LEVEL.load(Ordering::Relaxed);
        return if v != LEVEL_UNRESOLVED && v != LEVEL_RESOLVING {
            u8_to_level(v)
        } else {
            TraceLevel::Off
        };
    }

    let level = std::env::var_os(TRACE_ENV_VAR)
        .and_then(|raw| raw.into_string().ok())
        .map(|v| TraceLevel::from_str_loose(&v))
        .unwrap_or_default();
    CACHED_LEVEL.store(level_to_u8(level), Ordering::Release);
    level
}

/// Override the cached trace level, bypassing the environment.
pub fn set_trace_level(level: TraceLevel) {
    CACHED_LEVEL.store(level_to_u8(level), Ordering::Release);
}
