use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn decode_benchmark(c: &mut Criterion) {
    let short = garble::encode(&[0xDEu8, 0xAD, 0xBE, 0xEF][..]);
    c.bench_function("decode 4 bytes", |b| {
        b.iter(|| garble::decode(black_box(&short)).unwrap())
    });

    let text = garble::encode("hello world");
    c.bench_function("decode short text", |b| {
        b.iter(|| garble::decode(black_box(&text)).unwrap())
    });

    let large = garble::encode(&vec![0xA5u8; 1024]);
    c.bench_function("decode 1 KiB", |b| {
        b.iter(|| garble::decode(black_box(&large)).unwrap())
    });

    c.bench_function("decode reject bad seed", |b| {
        b.iter(|| garble::decode(black_box("99999999")).unwrap_err())
    });
}

criterion_group!(decode, decode_benchmark);

criterion_main!(decode);
