use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ggd_inference::{gcm_ci_default, gcm_search, zn, zp};
use ggd_prob::{GeneralizedGaussian, sampling};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn sample(beta: f64, n: usize) -> Vec<f64> {
    let d = GeneralizedGaussian::with_shape(beta).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    sampling::sample_n(&mut rng, &d, n).unwrap()
}

fn bench_moments(c: &mut Criterion) {
    let x = sample(1.8, 7000);

    let mut group = c.benchmark_group("gcm_moments");
    group.bench_function("zn_7000", |b| b.iter(|| black_box(zn(black_box(&x), 1.8).unwrap())));
    group.bench_function("zp_7000", |b| b.iter(|| black_box(zp(black_box(&x), 1.8).unwrap())));
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcm_search");

    for &n in &[1_000usize, 7_000, 50_000] {
        let x = sample(1.8, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &x, |b, x| {
            b.iter(|| {
                let est = gcm_search(black_box(x)).unwrap();
                black_box(gcm_ci_default(est.shape, est.n).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_moments, bench_search);
criterion_main!(benches);
