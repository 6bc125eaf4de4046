//! Buffer benchmark: Measure append, format, and path-join throughput.
//!
//! Target: appends stay amortized O(1), overwrites allocate at most once

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strbuf::{Buffer, BufferPool};

fn buffer_push_byte(c: &mut Criterion) {
    c.bench_function("buffer_push_byte", |b| {
        let mut buf = Buffer::with_capacity(1 << 20);
        b.iter(|| {
            buf.push_byte(black_box(b'x'));
            if buf.len() == buf.capacity() {
                buf.reset();
            }
        });
    });
}

fn buffer_push_str(c: &mut Criterion) {
    let token = "lorem ipsum dolor sit amet ";

    c.bench_function("buffer_push_str_27b", |b| {
        let mut buf = Buffer::with_capacity(1 << 20);
        b.iter(|| {
            buf.push_str(black_box(token));
            if buf.len() + token.len() > buf.capacity() {
                buf.reset();
            }
        });
    });
}

fn buffer_push_fmt(c: &mut Criterion) {
    c.bench_function("buffer_push_fmt", |b| {
        let mut buf = Buffer::with_capacity(1 << 20);
        let mut n = 0u64;
        b.iter(|| {
            n = n.wrapping_add(1);
            let _ = buf.push_fmt(format_args!("{}-{}", black_box(n), "x"));
            if buf.len() > (1 << 20) - 64 {
                buf.reset();
            }
        });
    });
}

fn buffer_set_path(c: &mut Criterion) {
    c.bench_function("buffer_set_path", |b| {
        let mut buf = Buffer::with_capacity(256);
        b.iter(|| {
            buf.set_path(black_box("/var/spool/mail"), black_box("inbox"));
        });
    });
}

fn pool_roundtrip(c: &mut Criterion) {
    c.bench_function("pool_acquire_release", |b| {
        let mut pool = BufferPool::new();
        b.iter(|| {
            let mut buf = pool.acquire();
            buf.push_str(black_box("scratch"));
            pool.release(buf);
        });
    });
}

criterion_group!(
    benches,
    buffer_push_byte,
    buffer_push_str,
    buffer_push_fmt,
    buffer_set_path,
    pool_roundtrip
);
criterion_main!(benches);
