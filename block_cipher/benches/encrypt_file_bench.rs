use block_cipher::crypto::cipher_context::CipherContext;
use block_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use block_cipher::crypto::des::Des;
use block_cipher::crypto::cipher_traits::SymmetricCipher;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::runtime::Runtime;

const FILE_SIZE: usize = 8 * 1024 * 1024;

fn bench_file_streaming(c: &mut Criterion) {
    let mut input_file = NamedTempFile::new().unwrap();
    let mut buffer = vec![0u8; 1024 * 1024];
    let mut rng = rand::rng();
    for _ in 0..FILE_SIZE / buffer.len() {
        rng.fill_bytes(&mut buffer);
        input_file.write_all(&buffer).unwrap();
    }
    input_file.flush().unwrap();

    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("file streaming, 8 MiB");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(FILE_SIZE as u64));

    for chunk_size in [1024usize, 4096] {
        let mut des = Des::new();
        des.initialize(&[0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE])
            .unwrap();
        let ctx = CipherContext::new(
            Box::new(des),
            CipherMode::CTR,
            PaddingMode::Zeros,
            Some(vec![0u8; 8]),
        )
        .unwrap();

        let input = input_file.path().to_path_buf();
        group.bench_function(BenchmarkId::new("ctr encrypt", chunk_size), |b| {
            let ctx = ctx.clone();
            let input = input.clone();
            b.to_async(&rt).iter(move || {
                let ctx = ctx.clone();
                let input = input.clone();
                async move {
                    let output = NamedTempFile::new().unwrap();
                    ctx.encrypt_file(&input, output.path(), chunk_size)
                        .await
                        .unwrap();
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_file_streaming);
criterion_main!(benches);
