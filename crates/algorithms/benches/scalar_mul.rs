use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecref_algorithms::curve::CurveDomain;
use num_bigint::BigUint;

fn bench_scalar_mul(c: &mut Criterion) {
    let domain = CurveDomain::secp256k1();
    let k = BigUint::parse_bytes(
        b"5f9c20a41a3e7c9d334b5c6cf44688f27c6a27bf5eb1a54fe0c1a6e1b38d9fd1",
        16,
    )
    .unwrap();

    c.bench_function("secp256k1 scalar_mul", |b| {
        b.iter(|| {
            domain
                .curve()
                .scalar_mul(black_box(domain.generator()), black_box(&k))
                .unwrap()
        })
    });
}

fn bench_field_inverse(c: &mut Criterion) {
    use ecref_algorithms::field::FieldElement;

    let domain = CurveDomain::secp256k1();
    let p = domain.curve().modulus().clone();
    let e = FieldElement::new(BigUint::from(0xdead_beefu32), p).unwrap();

    c.bench_function("secp256k1 field inverse", |b| {
        b.iter(|| black_box(&e).inverse().unwrap())
    });
}

criterion_group!(benches, bench_scalar_mul, bench_field_inverse);
criterion_main!(benches);
