use bumparena::ArenaHandler;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Bump-path allocation: every request is served by advancing a cursor.
fn bench_bump_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("bump_alloc");

    for size in [16usize, 128, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                ArenaHandler::new,
                |mut handler| {
                    for _ in 0..1000 {
                        black_box(handler.request_memory(size, 8, true));
                    }
                    handler
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Free-then-request cycles that stay on the free list: the steady state of
/// a workload recycling one hot range.
fn bench_free_list_reuse(c: &mut Criterion) {
    c.bench_function("free_list_reuse", |b| {
        let mut handler = ArenaHandler::new();
        let p = handler.request_memory(512, 8, true);

        b.iter(|| unsafe {
            handler.free_memory(p, 512).unwrap();
            black_box(handler.request_memory(512, 8, true));
        });
    });
}

/// Gapped frees followed by a bridging free per pair: exercises the binary
/// search, tail shifting, and three-way coalescing.
fn bench_coalescing_churn(c: &mut Criterion) {
    c.bench_function("coalescing_churn", |b| {
        b.iter_batched(
            || {
                let mut handler = ArenaHandler::new();
                let ptrs: Vec<*mut u8> = (0..300)
                    .map(|_| handler.request_memory(512, 1, true))
                    .collect();
                (handler, ptrs)
            },
            |(mut handler, ptrs)| {
                unsafe {
                    // Every third range first, leaving gaps...
                    for chunk in ptrs.chunks(3) {
                        handler.free_memory(chunk[0], 512).unwrap();
                    }
                    // ...then the rest, bridging the gaps closed.
                    for chunk in ptrs.chunks(3) {
                        handler.free_memory(chunk[2], 512).unwrap();
                        handler.free_memory(chunk[1], 512).unwrap();
                    }
                }
                black_box(handler.free_block_count())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_bump_alloc,
    bench_free_list_reuse,
    bench_coalescing_churn,
);
criterion_main!(benches);
