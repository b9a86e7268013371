use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix_core::{
    binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex, hex_to_binary,
    hex_to_decimal,
};

fn convert_bench(c: &mut Criterion) {
    let values: Vec<i32> = (0..1_000).map(|i| i * 2_147_483).collect();
    let binaries: Vec<String> = values.iter().filter_map(|v| decimal_to_binary(*v)).collect();
    let hexes: Vec<String> = values.iter().filter_map(|v| decimal_to_hex(*v)).collect();

    c.bench_function("decimal_to_strings", |b| {
        b.iter(|| {
            for value in &values {
                black_box(decimal_to_binary(*value));
                black_box(decimal_to_hex(*value));
            }
        });
    });

    c.bench_function("binary_inputs", |b| {
        b.iter(|| {
            for binary in &binaries {
                black_box(binary_to_hex(binary.as_str()).unwrap());
                black_box(binary_to_decimal(binary.as_str()).unwrap());
            }
        });
    });

    c.bench_function("hex_inputs", |b| {
        b.iter(|| {
            for hex in &hexes {
                black_box(hex_to_binary(hex.as_str()).unwrap());
                black_box(hex_to_decimal(hex.as_str()).unwrap());
            }
        });
    });
}

criterion_group!(benches, convert_bench);
criterion_main!(benches);
