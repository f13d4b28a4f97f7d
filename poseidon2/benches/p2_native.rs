//! Benchmark for native speed of the p2lite hash
//! `cargo bench --bench p2_native`
#[macro_use]
extern crate criterion;
use std::time::Duration;

use ark_std::{test_rng, UniformRand};
use criterion::Criterion;
use jf_p2lite::{hash_batch, permute, Preimage};
use jf_p2lite_field::FieldElement;

fn rand_preimage<R: ark_std::rand::Rng>(rng: &mut R) -> Preimage {
    [
        FieldElement::from_fr(ark_bn254::Fr::rand(rng)),
        FieldElement::from_fr(ark_bn254::Fr::rand(rng)),
    ]
}

// BN254 scalar field, state size = 3, 5 full rounds
fn bn3(c: &mut Criterion) {
    let mut group = c.benchmark_group("p2lite over (Bn254::Fr, t=3)");
    group.sample_size(10).measurement_time(Duration::new(20, 0));
    let rng = &mut test_rng();

    group.bench_function("1k iter", |b| {
        b.iter(|| {
            let mut input = rand_preimage(rng);
            for _ in 0..1000 {
                input = permute(input);
            }
        })
    });
    group.bench_function("100k iter", |b| {
        b.iter(|| {
            let mut input = rand_preimage(rng);
            for _ in 0..100_000 {
                input = permute(input);
            }
        })
    });
    group.finish();
}

fn batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("p2lite batch");
    group.sample_size(10).measurement_time(Duration::new(20, 0));
    let rng = &mut test_rng();
    let preimages: Vec<Preimage> = (0..10_000).map(|_| rand_preimage(rng)).collect();

    group.bench_function("10k preimages", |b| b.iter(|| hash_batch(&preimages)));
    group.finish();
}

criterion_group!(benches, bn3, batch);

criterion_main!(benches);
