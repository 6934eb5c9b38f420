use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cnpj::{CnpjService, StandardCnpjService};
use cnpj_core::{compute_check_digit, generate_check_digits, validate, FIRST_WEIGHTS};
use cnpj_testkit::fixtures::ServiceFixture;

fn bench_check_digits(c: &mut Criterion) {
    c.bench_function("compute_check_digit", |b| {
        b.iter(|| compute_check_digit(black_box(b"169218060001"), &FIRST_WEIGHTS))
    });

    c.bench_function("generate_check_digits", |b| {
        b.iter(|| generate_check_digits(black_box("169218060001")))
    });

    c.bench_function("validate", |b| b.iter(|| validate(black_box("16921806000152"))));
}

fn bench_generate(c: &mut Criterion) {
    let thread = StandardCnpjService::new();
    c.bench_function("generate/thread_rng", |b| b.iter(|| thread.generate()));

    let seeded = ServiceFixture::with_seed(42);
    c.bench_function("generate/seeded", |b| b.iter(|| seeded.service.generate()));
}

criterion_group!(benches, bench_check_digits, bench_generate);
criterion_main!(benches);
