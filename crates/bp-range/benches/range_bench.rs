//! Prove/verify benchmarks across bit widths

use bp_core::{GeneratorParams, PedersenCommitment};
use bp_range::{prove, verify};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand::rngs::OsRng;

fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_prove");
    for n in [8usize, 16, 32, 64] {
        let params: GeneratorParams<RistrettoPoint> = GeneratorParams::new(n);
        let witness = PedersenCommitment::new(5, Scalar::random(&mut OsRng));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| prove(&params, &witness, &mut OsRng).unwrap());
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_verify");
    for n in [8usize, 16, 32, 64] {
        let params: GeneratorParams<RistrettoPoint> = GeneratorParams::new(n);
        let witness = PedersenCommitment::new(5, Scalar::random(&mut OsRng));
        let v = witness.commitment(&params.base);
        let proof = prove(&params, &witness, &mut OsRng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| assert!(verify(&params, &v, &proof).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prove, bench_verify);
criterion_main!(benches);
