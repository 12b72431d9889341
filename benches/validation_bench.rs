use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cmphonenumber::CM_PHONE_UTIL;

use phonenumber::{self as rlp, country::Id::CM};

/// A mix of the input shapes seen in practice, valid and invalid.
fn setup_numbers() -> Vec<&'static str> {
    vec![
        "650123456",
        "+237 690 12 34 56",
        "00237660123456",
        "237 624 12 34 56",
        "(242) 26-12-34",
        "222.12.34.56",
        "999123456",
        "65012",
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Validation Comparison");

    group.bench_function("cmphonenumber: validate()", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = CM_PHONE_UTIL.validate(black_box(number));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse() + is_valid()", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = rlp::parse(black_box(Some(CM)), black_box(number))
                    .map(|parsed| rlp::is_valid(&parsed));
            }
        })
    });

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let numbers: Vec<_> = setup_numbers().into_iter().cycle().take(1024).collect();

    c.bench_function("cmphonenumber: validate_batch(1024)", |b| {
        b.iter(|| CM_PHONE_UTIL.validate_batch(black_box(&numbers)))
    });
}

criterion_group!(benches, validation_benchmark, batch_benchmark);
criterion_main!(benches);
