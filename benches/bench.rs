use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lockstep::cursor::{bounds, PtrCursor, PtrCursorMut, SliceCursor, SliceCursorMut};
use lockstep::prelude::*;
use rand::{Rng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum 2");
    for len in [10, 1000, 100_000] {
        let (a, b) = (columns(len, 1), columns(len, 2));
        let mut out = vec![0u64; len];
        group.bench_with_input(BenchmarkId::new("transform", len), &len, |bench, _| {
            bench.iter(|| sum2_transform(black_box(&a), black_box(&b), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("raw", len), &len, |bench, _| {
            bench.iter(|| sum2_raw(black_box(&a), black_box(&b), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("zip", len), &len, |bench, _| {
            bench.iter(|| sum2_zip(black_box(&a), black_box(&b), &mut out))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("sum 4");
    for len in [10, 1000, 100_000] {
        let inputs: Vec<Vec<u64>> = (0..4).map(|seed| columns(len, seed)).collect();
        let mut out = vec![0u64; len];
        group.bench_with_input(BenchmarkId::new("transform", len), &len, |bench, _| {
            bench.iter(|| sum4_transform(black_box(&inputs), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("vec", len), &len, |bench, _| {
            bench.iter(|| sum4_vec(black_box(&inputs), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("zip", len), &len, |bench, _| {
            bench.iter(|| sum4_zip(black_box(&inputs), &mut out))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn columns(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..1 << 20)).collect()
}

fn sum2_transform(a: &[u64], b: &[u64], out: &mut [u64]) {
    let (mut begin, end) = bounds(a);
    transform(
        |x: &u64, y: &u64| x + y,
        &mut SliceCursorMut::begin(out),
        &mut begin,
        &end,
        (SliceCursor::begin(b),),
    );
}

fn sum2_raw(a: &[u64], b: &[u64], out: &mut [u64]) {
    assert!(b.len() >= a.len() && out.len() >= a.len());
    // SAFETY: both `b` and `out` were checked to be at least as long as `a`.
    let (mut begin, aux, mut output) = unsafe {
        (
            PtrCursor::new(a.as_ptr()),
            PtrCursor::new(b.as_ptr()),
            PtrCursorMut::new(out.as_mut_ptr()),
        )
    };
    let end = begin.add(a.len());
    transform(|x: &u64, y: &u64| x + y, &mut output, &mut begin, &end, (aux,));
}

fn sum2_zip(a: &[u64], b: &[u64], out: &mut [u64]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x + y;
    }
}

fn sum4_transform(inputs: &[Vec<u64>], out: &mut [u64]) {
    let c = |i: usize| SliceCursor::begin(&inputs[i]);
    let (mut begin, end) = bounds(&inputs[0]);
    transform(
        |w: &u64, x: &u64, y: &u64, z: &u64| w + x + y + z,
        &mut SliceCursorMut::begin(out),
        &mut begin,
        &end,
        (c(1), c(2), c(3)),
    );
}

fn sum4_vec(inputs: &[Vec<u64>], out: &mut [u64]) {
    let (mut begin, end) = bounds(&inputs[0]);
    transform(
        |w: &u64, rest: lockstep::cursor::Items<&u64>| w + rest.into_iter().sum::<u64>(),
        &mut SliceCursorMut::begin(out),
        &mut begin,
        &end,
        inputs[1..]
            .iter()
            .map(|input| SliceCursor::begin(input))
            .collect::<Vec<_>>(),
    );
}

fn sum4_zip(inputs: &[Vec<u64>], out: &mut [u64]) {
    let rows = inputs[0].iter().zip(&inputs[1]).zip(&inputs[2]).zip(&inputs[3]);
    for (o, (((w, x), y), z)) in out.iter_mut().zip(rows) {
        *o = w + x + y + z;
    }
}
