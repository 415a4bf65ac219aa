use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffpack::compression::huffman::build_frequency_table;
use huffpack::{compress, decompress};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1 << 10, 1 << 16, 1 << 20];

fn text_like(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet = b"eeeeeeeetttttaaaaoooiiinnnsssrrhhlldcumfpgwybvkxjqz     \n";
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn uniform(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_compress");
    for &size in SIZES.iter() {
        group.throughput(Throughput::Bytes(size as u64));
        let text = text_like(size);
        let noise = uniform(size);
        group.bench_with_input(BenchmarkId::new("text", size), &text, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("uniform", size), &noise, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decompress");
    for &size in SIZES.iter() {
        group.throughput(Throughput::Bytes(size as u64));
        let packed = compress(&text_like(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("text", size), &packed, |b, data| {
            b.iter(|| decompress(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_frequency(c: &mut Criterion) {
    let data = uniform(8 << 20);
    let mut group = c.benchmark_group("frequency_table");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("8MiB", |b| {
        b.iter(|| build_frequency_table(black_box(&data)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_frequency);
criterion_main!(benches);
