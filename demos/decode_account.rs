// ============================================================================
// Decode Account Example
// ============================================================================

use dominance_decoder::prelude::*;
use dominance_decoder::schema::{SchemaDescriptor, SchemaVersion};

/// Build a synthetic aggregator account buffer. Encoding is not part of the
/// library (the program writes these accounts on-chain); the example only
/// needs something realistic to decode.
fn synthetic_account(
    schema: &SchemaDescriptor,
    authority: [u8; 32],
    records: &[(&str, u64, &str, &str, i64)],
) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&[0xD1; 8]);
    buffer.extend_from_slice(&authority);
    buffer.extend_from_slice(&(records.len() as u32).to_le_bytes());
    buffer.extend_from_slice(&(records.len() as u32).to_le_bytes());

    for (symbol, dominance, token_address, price_feed_id, timestamp) in records {
        let mut record = vec![0u8; schema.record_size];
        record[..symbol.len()].copy_from_slice(symbol.as_bytes());
        record[schema.dominance.offset..schema.dominance.end()]
            .copy_from_slice(&dominance.to_le_bytes());
        record[schema.token_address.offset..schema.token_address.offset + token_address.len()]
            .copy_from_slice(token_address.as_bytes());
        record[schema.price_feed_id.offset..schema.price_feed_id.offset + price_feed_id.len()]
            .copy_from_slice(price_feed_id.as_bytes());
        if let Some(spec) = &schema.timestamp {
            record[spec.offset..spec.end()].copy_from_slice(&timestamp.to_le_bytes());
        }
        buffer.extend_from_slice(&record);
    }
    buffer
}

fn main() {
    println!("=== Dominance Decoder Example ===\n");

    let config = DecodeConfig::deployed_aggregator();
    let schema = SchemaVersion::Extended.descriptor();

    // Stand-ins for the real ledger and derivation capability.
    let aggregator_address = Address::new([42; 32]);
    let derivation = FixedDerivation::new(aggregator_address);

    let data = synthetic_account(
        schema,
        [7; 32],
        &[
            ("BTC", 5_500_000_000, "Addr1", "Feed1", 1_700_000_000),
            ("ETH", 2_000_000_000, "Addr2", "Feed2", 1_700_000_000),
            ("SOL", 400_000_000, "Addr3", "Feed3", 1_700_000_060),
        ],
    );
    let mut ledger = InMemoryLedger::new();
    ledger.insert(
        aggregator_address,
        RawAccount {
            owner: config.program_id,
            data,
        },
    );

    // A refresh runs only while holding the gate, so a second trigger while
    // one is in flight is skipped instead of queued.
    let gate = RefreshGate::new();
    let Some(_permit) = gate.try_acquire() else {
        println!("refresh already in flight, skipping");
        return;
    };

    match refresh(&ledger, &derivation, &config) {
        Ok(view) => {
            println!("Aggregator: {}", view.address);
            println!("Authority:  {}\n", view.authority);

            println!(
                "{:<4} {:<8} {:>10}  {:<12} {:<12} {}",
                "#", "Symbol", "Dominance", "Token", "Price Feed", "Updated"
            );
            for (rank, share) in view.aggregate.shares.iter().enumerate() {
                let updated = share
                    .record
                    .updated_at()
                    .map(|at| at.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<4} {:<8} {:>9.3}%  {:<12} {:<12} {}",
                    rank + 1,
                    share.record.symbol,
                    share.percent,
                    share.record.token_address,
                    share.record.price_feed_id,
                    updated
                );
            }

            println!("\nTotal dominance: {:.3}%", view.aggregate.total_percent);
            println!("Decoded at:      {}", view.decoded_at.to_rfc3339());
            for warning in &view.warnings {
                println!("Warning:         {}", warning);
            }
        },
        Err(error) => println!("Refresh failed: {}", error),
    }
}
