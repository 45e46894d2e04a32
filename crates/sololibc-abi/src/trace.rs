//! Structured JSONL call tracing.
//!
//! One JSON object per line on stderr, gated by [`trace_level`]. Records are
//! built from `&'static str` and integers only, so tracing an entry point
//! never allocates through the allocator it may be serving.

use std::io::{self, Write};

use serde::Serialize;
use sololibc_core::config::trace_level;

/// Entry-point family a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFamily {
    Malloc,
    Stdlib,
    String,
    Pthread,
    Verifier,
}

/// One trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Exported symbol name.
    pub event: &'static str,
    pub family: ApiFamily,
    /// Status handed back to the caller (0 for pointer-returning calls that
    /// produced a value).
    pub rc: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
}

impl TraceRecord {
    #[must_use]
    pub const fn new(family: ApiFamily, event: &'static str, rc: i32) -> Self {
        Self {
            event,
            family,
            rc,
            detail: None,
        }
    }

    #[must_use]
    pub const fn with_detail(mut self, detail: &'static str) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Serialize `record` as one JSONL line into `out`.
pub fn write_record<W: Write>(out: &mut W, record: &TraceRecord) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Write `record` to stderr when the configured level asks for it.
pub fn emit(record: TraceRecord) {
    if !trace_level().wants(record.rc) {
        return;
    }
    let stderr = io::stderr();
    let mut lock = stderr.lock();
    // Tracing must never affect the call being traced.
    let _ = write_record(&mut lock, &record);
}

/// Trace a status-returning call and hand the status back.
#[inline]
pub fn traced(family: ApiFamily, event: &'static str, rc: i32) -> i32 {
    emit(TraceRecord::new(family, event, rc));
    rc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(record: &TraceRecord) -> String {
        let mut buf = Vec::new();
        write_record(&mut buf, record).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn record_is_one_json_line() {
        let text = line(&TraceRecord::new(ApiFamily::Malloc, "posix_memalign", 12));
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["event"], "posix_memalign");
        assert_eq!(value["family"], "malloc");
        assert_eq!(value["rc"], 12);
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn detail_is_serialized_when_present() {
        let record = TraceRecord::new(ApiFamily::Pthread, "pthread_cond_wait", 0)
            .with_detail("wait elided");
        let value: serde_json::Value = serde_json::from_str(line(&record).trim_end()).unwrap();
        assert_eq!(value["family"], "pthread");
        assert_eq!(value["detail"], "wait elided");
    }

    #[test]
    fn traced_returns_status_unchanged() {
        assert_eq!(traced(ApiFamily::Stdlib, "__cxa_atexit", 0), 0);
        assert_eq!(traced(ApiFamily::Malloc, "posix_memalign", 12), 12);
    }
}
