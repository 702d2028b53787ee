//! Throughput of the registry's algorithms through the default backend

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cryypt_hashes::algorithms::{Blake2b, Sha256, Sha3_256, Sha512, Shake128};
use cryypt_hashes::{Algorithm, Hash, HashAlgorithm, Hasher};
use tokio::runtime::Runtime;

fn benchmark_hash_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_throughput");

    let algorithms: [Algorithm; 5] = [
        Sha256.into(),
        Sha512.into(),
        Sha3_256.into(),
        Blake2b::default().into(),
        Shake128::new(32).expect("positive digest size").into(),
    ];
    let sizes = [1024, 65536, 1_048_576];

    for size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        let data = vec![0u8; size];

        for algorithm in algorithms {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let digest = Hash::digest(algorithm, data).expect("hash should succeed");
                        std::hint::black_box(digest);
                    });
                },
            );
        }
    }
    group.finish();
}

fn benchmark_async_overhead(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("async_overhead");
    let data = vec![0u8; 65536];

    group.bench_function("sha256_sync", |b| {
        b.iter(|| std::hint::black_box(Hash::digest(Sha256, &data)));
    });

    group.bench_function("sha256_spawned", |b| {
        b.iter(|| {
            rt.block_on(async {
                let digest = Hasher::new(Sha256).compute(data.clone()).await;
                std::hint::black_box(digest)
            })
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_hash_algorithms, benchmark_async_overhead);
criterion_main!(benches);
