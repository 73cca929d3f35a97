use criterion::{Criterion, black_box, criterion_group, criterion_main};

use uzphonenumber::{PhoneNumberFormat, PHONE_NUMBER_UTIL};

fn setup_numbers() -> Vec<&'static str> {
    vec![
        "+998 (90) 123 45 67",
        "91 765 43 21",
        "+998930000000",
        "998 94 555 66 77",
        "(95) 111-22-33",
        "+998 99 000 11 22",
        "98 222 33 44",
        "+998 (97) 333 44 55",
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let inputs = setup_numbers();
    let numbers: Vec<_> = inputs
        .iter()
        .map(|s| PHONE_NUMBER_UTIL.parse(s).unwrap())
        .collect();

    let mut group = c.benchmark_group("Formatting");

    group.bench_function("normalize(default template)", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(PHONE_NUMBER_UTIL.normalize(black_box(input)));
            }
        })
    });

    group.bench_function("normalize_with_format(cached template)", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(
                    PHONE_NUMBER_UTIL.normalize_with_format(black_box(input), "(##) ###-##-##"),
                );
            }
        })
    });

    let mut test = |number_format: PhoneNumberFormat| {
        group.bench_function(format!("format({:?})", number_format), |b| {
            b.iter(|| {
                for number in &numbers {
                    black_box(PHONE_NUMBER_UTIL.format(black_box(number), black_box(number_format)));
                }
            })
        });

        for (input, number) in inputs.iter().zip(numbers.iter()) {
            let formatted = PHONE_NUMBER_UTIL.format(number, number_format);
            if number_format != PhoneNumberFormat::National {
                assert!(PHONE_NUMBER_UTIL.is_valid_phone_number(&formatted), "{}", input);
            }
        }
    };

    test(PhoneNumberFormat::E164);
    test(PhoneNumberFormat::International);
    test(PhoneNumberFormat::National);
    test(PhoneNumberFormat::RFC3966);
    test(PhoneNumberFormat::Masked);
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
