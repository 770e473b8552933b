use criterion::{Criterion, criterion_group, criterion_main};
use ggd_prob::{ContinuousDistribution, GeneralizedGaussian, sampling};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_scalar_evaluation(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 - 5.0).collect();
    let d = GeneralizedGaussian::new(0.0, 1.3, 1.8).unwrap();

    c.bench_function("ggd_logpdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += d.logpdf(x);
            }
            black_box(acc)
        })
    });

    c.bench_function("ggd_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += d.cdf(x);
            }
            black_box(acc)
        })
    });

    c.bench_function("ggd_sf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += d.sf(x);
            }
            black_box(acc)
        })
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("ggd_sample");
    for beta in [0.5, 1.8, 8.0] {
        let d = GeneralizedGaussian::with_shape(beta).unwrap();
        group.bench_function(format!("sample_n_10k_beta_{beta}"), |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(sampling::sample_n(&mut rng, &d, 10_000).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scalar_evaluation, bench_sampling);
criterion_main!(benches);
