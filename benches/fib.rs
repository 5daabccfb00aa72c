use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use naive_fib::{fib, fib2};

const NS: [i64; 3] = [10, 15, 20];

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive fibonacci");

    for n in NS {
        group.bench_with_input(BenchmarkId::new("fib", n), &n, |b, &n| {
            b.iter(|| fib(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("fib2", n), &n, |b, &n| {
            b.iter(|| fib2(black_box(n)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
