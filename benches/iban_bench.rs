use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ibankit::*;

fn bench_validate_valid(c: &mut Criterion) {
    c.bench_function("validate_valid_gb", |b| {
        b.iter(|| black_box(validate(black_box("GB33 BUKB 2020 1555 5555 55"))));
    });
}

fn bench_validate_invalid(c: &mut Criterion) {
    c.bench_function("validate_invalid_accumulating", |b| {
        b.iter(|| black_box(validate(black_box("GB00"))));
    });
}

fn bench_validate_all_examples(c: &mut Criterion) {
    let examples: Vec<&str> = list_countries().iter().map(|r| r.example).collect();
    c.bench_function("validate_all_examples", |b| {
        b.iter(|| {
            for ex in &examples {
                black_box(validate(black_box(ex)));
            }
        });
    });
}

fn bench_mod97(c: &mut Criterion) {
    c.bench_function("mod97_longest", |b| {
        b.iter(|| black_box(mod97_check(black_box("LC14BOSL123456789012345678901234"))));
    });
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_iban", |b| {
        b.iter(|| black_box(format_iban(black_box("RU0204452560040702810412345678901"))));
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_countries", |b| {
        b.iter(|| black_box(search_countries(black_box("land"))));
    });
}

criterion_group!(
    benches,
    bench_validate_valid,
    bench_validate_invalid,
    bench_validate_all_examples,
    bench_mod97,
    bench_format,
    bench_search,
);
criterion_main!(benches);
