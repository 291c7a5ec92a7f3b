use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigops::array::{bubble_sort, quick_sort_all};

fn random_block(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn bench_sorts(c: &mut Criterion) {
    let mut g = c.benchmark_group("sort");
    for &size in &[16usize, 64, 512] {
        let data = random_block(size, size as u64);
        if size <= 64 {
            g.bench_with_input(BenchmarkId::new("bubble", size), &size, |b, _| {
                b.iter_batched_ref(|| data.clone(), |v| bubble_sort(v), BatchSize::SmallInput)
            });
        }
        g.bench_with_input(BenchmarkId::new("quick", size), &size, |b, _| {
            b.iter_batched_ref(|| data.clone(), |v| quick_sort_all(v), BatchSize::SmallInput)
        });
        g.bench_with_input(BenchmarkId::new("std_unstable", size), &size, |b, _| {
            b.iter_batched_ref(
                || data.clone(),
                |v| v.sort_unstable_by(|a, b| a.total_cmp(b)),
                BatchSize::SmallInput,
            )
        });
    }
    g.finish();
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
