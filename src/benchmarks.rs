use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use splitmul::compose::direct_product;
use splitmul::karatsuba::karatsuba_step;
use splitmul::schoolbook_mul::schoolbook_mul;
use splitmul::Fragment;

fn random_fragment(rng: &mut rand_chacha::ChaCha8Rng, width: usize) -> Fragment {
    let digits: String = (0..width)
        .map(|_| char::from(b'0' + rng.gen_range(0, 10)))
        .collect();
    digits.parse().unwrap()
}

fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let p = random_fragment(&mut rng, 1000);
    let q = random_fragment(&mut rng, 1000);
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(p.value(), q.value()))
    });
}

fn bench_direct_product(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let p = random_fragment(&mut rng, 1000);
    let q = random_fragment(&mut rng, 1000);
    let r = random_fragment(&mut rng, 1000);
    let s = random_fragment(&mut rng, 1000);
    c.bench_function("direct_product_1k", |bench| {
        bench.iter(|| direct_product(&p, &q, &r, &s))
    });
}

fn bench_karatsuba_step(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let p = random_fragment(&mut rng, 1000);
    let q = random_fragment(&mut rng, 1000);
    let r = random_fragment(&mut rng, 1000);
    let s = random_fragment(&mut rng, 1000);
    c.bench_function("karatsuba_step_1k", |bench| {
        bench.iter(|| karatsuba_step(&p, &q, &r, &s))
    });
}

fn bench_add_assign(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut p = random_fragment(&mut rng, 1000).value().clone();
    let q = random_fragment(&mut rng, 1000).value().clone();
    c.bench_function("add_assign_1k", |bench| {
        bench.iter(|| p += &q);
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets =
        bench_schoolbook_mul,
        bench_direct_product,
        bench_karatsuba_step,
        bench_add_assign,
);
criterion_main!(benches);
