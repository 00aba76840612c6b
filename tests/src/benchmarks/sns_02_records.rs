//! # SNS-02 Record Codec Benchmarks
//!
//! - Per-type decode of fixed-length payloads
//! - SOL signature verification
//! - Parallel batch decode against a sequential baseline

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use shared_crypto::Ed25519KeyPair;
use shared_types::Pubkey;
use sns_02_records::{
    decode, decode_batch, encode, encode_signed, signing_message, DecodeRequest, RecordType,
};

/// Random non-zero-terminated EVM payload.
fn random_evm_payload() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut bytes: Vec<u8> = (0..20).map(|_| rng.gen()).collect();
    bytes[19] |= 1;
    bytes
}

pub fn bench_record_codec(c: &mut Criterion) {
    let address = Pubkey::new_from_array([7u8; 32]);
    let mut group = c.benchmark_group("sns-02-records");

    let eth = random_evm_payload();
    group.bench_function("decode_eth", |b| {
        b.iter(|| decode(black_box(&eth), RecordType::Eth, &address))
    });

    let inj = encode("inj1l3vt52kqzlvpaw2wfug45qkyncflq8hgr5nem7", RecordType::Injective)
        .unwrap_or_default();
    group.bench_function("decode_injective", |b| {
        b.iter(|| decode(black_box(&inj), RecordType::Injective, &address))
    });

    group.bench_function("encode_cname_unicode", |b| {
        b.iter(|| encode(black_box("bücher.example"), RecordType::Cname))
    });

    let keypair = Ed25519KeyPair::from_seed([3u8; 32]);
    let content = Pubkey::new_from_array(*keypair.public_key().as_bytes());
    let signature = keypair.sign(&signing_message(content.as_ref(), &address));
    let sol = encode_signed(&content, &address, &content, signature.as_bytes()).unwrap_or_default();
    group.bench_function("decode_sol_verify", |b| {
        b.iter(|| decode(black_box(&sol), RecordType::Sol, &address))
    });

    group.finish();
}

pub fn bench_batch_decode(c: &mut Criterion) {
    let address = Pubkey::new_from_array([7u8; 32]);
    let mut group = c.benchmark_group("sns-02-records-batch");

    for size in [100usize, 1000, 10_000] {
        let payloads: Vec<Vec<u8>> = (0..size).map(|_| random_evm_payload()).collect();
        let requests: Vec<DecodeRequest<'_>> = payloads
            .iter()
            .map(|data| DecodeRequest {
                data,
                record_type: RecordType::Eth,
                record_address: address,
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("parallel", size), &requests, |b, reqs| {
            b.iter(|| decode_batch(reqs))
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &requests, |b, reqs| {
            b.iter(|| {
                reqs.iter()
                    .map(|r| decode(r.data, r.record_type, &r.record_address))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}
