// ============================================================================
// Codec Module
// Decoders for the fixed-layout aggregator account format
// ============================================================================

mod account;
mod errors;
mod header;
mod record;

pub use account::{AccountDecoder, Decoded};
pub use errors::{DecodeError, DecodeResult, DecodeWarning, DecodeWarnings};
pub use header::decode_header;
pub use record::decode_record;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Synthetic account buffers for tests. Encoding lives only here; the crate
/// itself is decode-only.
#[cfg(test)]
pub(crate) mod testkit {
    use crate::schema::SchemaDescriptor;

    pub struct TestRecord {
        pub symbol: String,
        pub dominance: u64,
        pub token_address: String,
        pub price_feed_id: String,
        pub timestamp: i64,
    }

    impl TestRecord {
        pub fn new(symbol: &str, dominance: u64) -> Self {
            Self {
                symbol: symbol.to_string(),
                dominance,
                token_address: String::new(),
                price_feed_id: String::new(),
                timestamp: 1_700_000_000,
            }
        }

        pub fn with_texts(mut self, token_address: &str, price_feed_id: &str) -> Self {
            self.token_address = token_address.to_string();
            self.price_feed_id = price_feed_id.to_string();
            self
        }
    }

    fn padded(text: &str, width: usize) -> Vec<u8> {
        let mut bytes = text.as_bytes().to_vec();
        bytes.resize(width, 0);
        bytes
    }

    pub fn record_bytes(schema: &SchemaDescriptor, record: &TestRecord) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(schema.record_size);
        bytes.extend_from_slice(&padded(&record.symbol, schema.symbol.width));
        bytes.extend_from_slice(&record.dominance.to_le_bytes());
        bytes.extend_from_slice(&padded(&record.token_address, schema.token_address.width));
        bytes.extend_from_slice(&padded(&record.price_feed_id, schema.price_feed_id.width));
        if schema.timestamp.is_some() {
            bytes.extend_from_slice(&record.timestamp.to_le_bytes());
        }
        bytes
    }

    pub fn account_bytes(
        schema: &SchemaDescriptor,
        authority: [u8; 32],
        total_count: u32,
        vector_length: u32,
        records: &[TestRecord],
    ) -> Vec<u8> {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(&[0xD1; 8]);
        buffer.extend_from_slice(&authority);
        buffer.extend_from_slice(&total_count.to_le_bytes());
        buffer.extend_from_slice(&vector_length.to_le_bytes());
        for record in records {
            buffer.extend_from_slice(&record_bytes(schema, record));
        }
        buffer
    }
}
