use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fcmeans::cluster::{Fcm, FcmFit};
use rand::prelude::*;

fn bench_fcm(c: &mut Criterion) {
    let mut group = c.benchmark_group("fcm");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 16;
    let k = 10;

    let data: Vec<Vec<f32>> = (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f32>()).collect())
        .collect();

    // Evenly spaced data points as initial centers.
    let initial_centers: Vec<Vec<f32>> = data.iter().step_by(n / k).take(k).cloned().collect();

    group.bench_function("process_n1000_d16_k10", |b| {
        b.iter(|| {
            let model = Fcm::new(initial_centers.clone(), 2.0)
                .unwrap()
                .with_max_iter(10);
            let mut fit = FcmFit::new();
            model.process(black_box(&data), &mut fit).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fcm);
criterion_main!(benches);
