use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngCore;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::des_key_expansion::DesKeyExpansion;
use symmetric_cipher::crypto::des_transformation::DesTransformation;

fn make_context() -> CipherContext {
    let des = DES::new(
        Arc::new(DesKeyExpansion::new().unwrap()),
        Arc::new(DesTransformation::new().unwrap()),
    )
    .unwrap();
    CipherContext::new(Box::new(des), b"\x13\x34\x57\x79\x9B\xBC\xDF\xF1").unwrap()
}

fn bench_des_block(c: &mut Criterion) {
    let ctx = make_context();
    let block = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

    c.bench_function("DES encrypt block", |b| {
        b.iter(|| ctx.encrypt_block(&block).unwrap())
    });
}

fn bench_des_ofb(c: &mut Criterion) {
    let ctx = make_context();
    let iv = [0u8; 8];
    let mut rng = rand::rng();

    let mut group = c.benchmark_group("DES OFB");
    for size in [1024usize, 64 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| ctx.ofb_stream(&iv).unwrap().apply(data).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_des_block, bench_des_ofb);
criterion_main!(benches);
