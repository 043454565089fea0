// ============================================================================
// Decode Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decode - Raw buffer to structured account, per schema version
// 2. Aggregate - Exact summation and percentage derivation
// 3. Pipeline - Decode followed by aggregate, the full per-cycle cost
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dominance_decoder::aggregate::aggregate;
use dominance_decoder::codec::AccountDecoder;
use dominance_decoder::schema::{SchemaDescriptor, SchemaVersion};
use rust_decimal::Decimal;

fn synthetic_account(schema: &SchemaDescriptor, count: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&[0xD1; 8]);
    buffer.extend_from_slice(&[7; 32]);
    buffer.extend_from_slice(&count.to_le_bytes());
    buffer.extend_from_slice(&count.to_le_bytes());

    for i in 0..count as u64 {
        let mut record = vec![0u8; schema.record_size];
        let symbol = format!("TOK{}", i % 1000);
        record[..symbol.len()].copy_from_slice(symbol.as_bytes());
        record[schema.dominance.offset..schema.dominance.end()]
            .copy_from_slice(&(i.wrapping_mul(7_919) % 10_000_000_000).to_le_bytes());
        record[schema.token_address.offset..schema.token_address.offset + 43]
            .copy_from_slice(&[b'A'; 43]);
        record[schema.price_feed_id.offset..schema.price_feed_id.offset + 10]
            .copy_from_slice(&[b'f'; 10]);
        if let Some(spec) = &schema.timestamp {
            record[spec.offset..spec.end()].copy_from_slice(&1_700_000_000i64.to_le_bytes());
        }
        buffer.extend_from_slice(&record);
    }
    buffer
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for count in [10u32, 100, 1000].iter() {
        for version in [SchemaVersion::Compact, SchemaVersion::Extended] {
            let buffer = synthetic_account(version.descriptor(), *count);
            let decoder = AccountDecoder::new(version);

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", version), count),
                &buffer,
                |b, buffer| b.iter(|| black_box(decoder.decode(black_box(buffer)).unwrap())),
            );
        }
    }

    group.finish();
}

fn benchmark_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let scale = Decimal::from(10_000_000_000u64);

    for count in [10u32, 100, 1000].iter() {
        let buffer = synthetic_account(SchemaVersion::Extended.descriptor(), *count);
        let decoded = AccountDecoder::new(SchemaVersion::Extended)
            .decode(&buffer)
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &decoded.account,
            |b, account| b.iter(|| black_box(aggregate(black_box(account), scale).unwrap())),
        );
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_and_aggregate");
    let scale = Decimal::from(10_000_000_000u64);
    let decoder = AccountDecoder::new(SchemaVersion::Extended);

    for count in [10u32, 100, 1000].iter() {
        let buffer = synthetic_account(SchemaVersion::Extended.descriptor(), *count);

        group.bench_with_input(BenchmarkId::from_parameter(count), &buffer, |b, buffer| {
            b.iter(|| {
                let decoded = decoder.decode(black_box(buffer)).unwrap();
                black_box(aggregate(&decoded.account, scale).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_decode,
    benchmark_aggregate,
    benchmark_pipeline
);
criterion_main!(benches);
