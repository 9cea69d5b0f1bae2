use block_cipher::crypto::cipher_context::CipherContext;
use block_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use block_cipher::crypto::des::Des;
use block_cipher::crypto::cipher_traits::SymmetricCipher;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::RngCore;
use tokio::runtime::Runtime;

fn bench_modes(c: &mut Criterion) {
    let mut data = vec![0u8; 64 * 1024];
    rand::rng().fill_bytes(&mut data);
    *data.last_mut().unwrap() = 0xAA;

    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("DES modes, 64 KiB");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for mode in [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::CTR,
        CipherMode::RandomDelta,
    ] {
        let iv = if mode == CipherMode::ECB {
            None
        } else {
            Some(vec![0u8; 8])
        };
        let mut des = Des::new();
        des.initialize(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF])
            .unwrap();
        let ctx = CipherContext::new(Box::new(des), mode, PaddingMode::PKCS7, iv).unwrap();

        group.bench_function(BenchmarkId::new("encrypt", format!("{:?}", mode)), |b| {
            let ctx = ctx.clone();
            let data = data.clone();
            b.to_async(&rt)
                .iter(move || {
                    let ctx = ctx.clone();
                    let data = data.clone();
                    async move { ctx.encrypt(&data).await.unwrap() }
                });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
