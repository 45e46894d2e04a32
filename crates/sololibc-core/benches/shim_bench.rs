//! Shim core benchmarks.

use std::ffi::c_void;
use std::ptr::NonNull;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sololibc_core::malloc::{AlignedAllocator, posix_memalign};
use sololibc_core::pthread::SingleThread;
use sololibc_core::string::memrchr;

/// Hands back the alignment itself as an address: aligned, never dereferenced.
struct AlignmentAsAddress;

impl AlignedAllocator for AlignmentAsAddress {
    fn memalign(&self, alignment: usize, _size: usize) -> Option<NonNull<c_void>> {
        NonNull::new(alignment as *mut c_void)
    }
}

fn bench_posix_memalign(c: &mut Criterion) {
    let mut group = c.benchmark_group("posix_memalign");
    for &alignment in &[16usize, 64, 4096] {
        group.bench_with_input(
            BenchmarkId::new("align", alignment),
            &alignment,
            |b, &align| {
                b.iter(|| black_box(posix_memalign(&AlignmentAsAddress, align, black_box(0))));
            },
        );
    }
    group.finish();
}

fn bench_memrchr(c: &mut Criterion) {
    let mut group = c.benchmark_group("memrchr");
    for &len in &[16usize, 256, 4096] {
        let mut buf = vec![b'a'; len];
        buf[len / 3] = b'z';
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("unterminated", len), &buf, |b, buf| {
            b.iter(|| black_box(memrchr(buf, b'z', black_box(buf.len()))));
        });
    }
    group.finish();
}

fn bench_single_thread(c: &mut Criterion) {
    let rt = SingleThread::new();
    let mut group = c.benchmark_group("single_thread");

    group.bench_function("mutex_lock_unlock", |b| {
        b.iter(|| {
            black_box(rt.mutex_lock());
            black_box(rt.mutex_unlock());
        });
    });
    group.bench_function("cond_wait", |b| {
        b.iter(|| black_box(rt.cond_wait()));
    });
    group.bench_function("specific_set_get", |b| {
        let mut slot = 0u64;
        let value = (&raw mut slot).cast::<c_void>();
        b.iter(|| {
            black_box(rt.setspecific(1, value));
            black_box(rt.getspecific(2))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_posix_memalign, bench_memrchr, bench_single_thread);
criterion_main!(benches);
