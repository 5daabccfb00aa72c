use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use naive_fib::{fib, fib2, init_fib};
use std::hint::black_box;

#[library_benchmark]
#[bench::short(10)]
#[bench::long(20)]
fn bench_fib(n: i64) -> i64 {
    black_box(fib(n))
}

#[library_benchmark]
#[bench::short(10)]
#[bench::long(20)]
fn bench_fib2(n: i64) -> i64 {
    black_box(fib2(n))
}

#[library_benchmark]
fn bench_init_fib() -> i64 {
    black_box(init_fib())
}

library_benchmark_group!(
    name = naive_fib_ops;
    benchmarks = bench_fib, bench_fib2, bench_init_fib
);

main!(library_benchmark_groups = naive_fib_ops);
