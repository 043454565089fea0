// ============================================================================
// Dominance Decoder Library
// Schema-aware decoding and exact aggregation of token dominance accounts
// ============================================================================

//! # Dominance Decoder
//!
//! Decodes raw, fixed-layout aggregator account buffers into structured
//! dominance records and derives exact summary percentages.
//!
//! ## Features
//!
//! - **Parameterized schemas**: one descriptor per observed record layout
//!   (compact and extended), selected by a tagged version rather than a
//!   second copy of the decoder
//! - **Exact arithmetic**: dominance values are 64-bit magnitudes that lose
//!   precision above 2^53 in a double; they stay integers end to end and
//!   only meet the decimal domain at the final percentage division
//! - **Typed failures**: every structural violation is a value
//!   ([`codec::DecodeError`]), never a panic and never a partially decoded
//!   account
//! - **Trait seams** for the external collaborators: the ledger client that
//!   fetches raw bytes and the address-derivation capability
//!
//! ## Example
//!
//! ```rust
//! use dominance_decoder::aggregate::aggregate;
//! use dominance_decoder::codec::AccountDecoder;
//! use dominance_decoder::schema::SchemaVersion;
//! use rust_decimal::Decimal;
//!
//! // A 48-byte header with zero counts is the smallest valid account.
//! let buffer = vec![0u8; 48];
//!
//! let decoder = AccountDecoder::new(SchemaVersion::Extended);
//! let decoded = decoder.decode(&buffer).unwrap();
//! assert!(decoded.account.is_empty());
//!
//! let result = aggregate(&decoded.account, Decimal::from(10_000_000_000u64)).unwrap();
//! assert_eq!(result.total_dominance, 0);
//! ```

pub mod aggregate;
pub mod codec;
pub mod domain;
pub mod interfaces;
pub mod schema;
pub mod utils;
pub mod view;

// Re-exports for convenience
pub mod prelude {
    pub use crate::aggregate::{aggregate, AggregateResult, NumericError, RecordShare};
    pub use crate::codec::{
        AccountDecoder, DecodeError, DecodeWarning, DecodeWarnings, Decoded,
    };
    pub use crate::domain::{
        AccountHeader, Address, DecodeConfig, DecodedAccount, TokenRecord,
    };
    pub use crate::interfaces::{
        AddressDerivation, FixedDerivation, InMemoryLedger, LedgerClient, LedgerError,
        RawAccount,
    };
    pub use crate::schema::SchemaVersion;
    pub use crate::utils::RefreshGate;
    pub use crate::view::{refresh, DominanceView, ViewError};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::codec::testkit::{account_bytes, TestRecord};
    use crate::schema::EXTENDED;
    use rust_decimal::Decimal;

    fn seeded_ledger(authority: [u8; 32]) -> (InMemoryLedger, FixedDerivation, DecodeConfig) {
        let config = DecodeConfig::deployed_aggregator();
        let records = vec![
            TestRecord::new("BTC", 5_500_000_000).with_texts("Addr1", "Feed1"),
            TestRecord::new("ETH", 2_000_000_000).with_texts("Addr2", "Feed2"),
        ];
        let data = account_bytes(&EXTENDED, authority, 2, 2, &records);

        let address = Address::new([42; 32]);
        let mut ledger = InMemoryLedger::new();
        ledger.insert(
            address,
            RawAccount {
                owner: config.program_id,
                data,
            },
        );
        (ledger, FixedDerivation::new(address), config)
    }

    #[test]
    fn test_end_to_end_refresh() {
        let (ledger, derivation, config) = seeded_ledger([7; 32]);

        let gate = RefreshGate::new();
        let _permit = gate.try_acquire().unwrap();
        let view = refresh(&ledger, &derivation, &config).unwrap();

        assert_eq!(view.authority, Address::new([7; 32]));
        assert!(view.warnings.is_empty());
        assert_eq!(view.aggregate.total_dominance, 7_500_000_000);
        assert_eq!(view.aggregate.shares[0].percent, Decimal::from(55));
        assert_eq!(view.aggregate.shares[1].percent, Decimal::from(20));
        assert_eq!(view.aggregate.total_percent, Decimal::from(75));
        assert_eq!(view.aggregate.shares[0].record.token_address, "Addr1");
        assert_eq!(view.aggregate.shares[1].record.price_feed_id, "Feed2");
    }

    #[test]
    fn test_account_not_found() {
        let config = DecodeConfig::deployed_aggregator();
        let ledger = InMemoryLedger::new();
        let address = Address::new([42; 32]);
        let derivation = FixedDerivation::new(address);

        let result = refresh(&ledger, &derivation, &config);
        assert_eq!(result.err(), Some(ViewError::AccountNotFound { address }));
    }

    #[test]
    fn test_owner_mismatch() {
        let config = DecodeConfig::deployed_aggregator();
        let address = Address::new([42; 32]);
        let wrong_owner = Address::new([13; 32]);

        let mut ledger = InMemoryLedger::new();
        ledger.insert(
            address,
            RawAccount {
                owner: wrong_owner,
                data: vec![0; 48],
            },
        );

        let result = refresh(&ledger, &FixedDerivation::new(address), &config);
        assert_eq!(
            result.err(),
            Some(ViewError::OwnerMismatch {
                expected: config.program_id,
                actual: wrong_owner,
            })
        );
    }

    #[test]
    fn test_transport_failure_passes_through() {
        struct DownLedger;
        impl LedgerClient for DownLedger {
            fn fetch_account(
                &self,
                _address: &Address,
            ) -> Result<Option<RawAccount>, LedgerError> {
                Err(LedgerError::Transport("connection refused".to_string()))
            }
        }

        let config = DecodeConfig::deployed_aggregator();
        let derivation = FixedDerivation::new(Address::new([42; 32]));
        let result = refresh(&DownLedger, &derivation, &config);
        assert_eq!(
            result.err(),
            Some(ViewError::Ledger(LedgerError::Transport(
                "connection refused".to_string()
            )))
        );
    }

    #[test]
    fn test_count_mismatch_reaches_the_view() {
        let config = DecodeConfig::deployed_aggregator();
        let records = vec![TestRecord::new("BTC", 100), TestRecord::new("ETH", 50)];
        let data = account_bytes(&EXTENDED, [7; 32], 5, 2, &records);

        let address = Address::new([42; 32]);
        let mut ledger = InMemoryLedger::new();
        ledger.insert(
            address,
            RawAccount {
                owner: config.program_id,
                data,
            },
        );

        let view = refresh(&ledger, &FixedDerivation::new(address), &config).unwrap();
        assert_eq!(view.aggregate.shares.len(), 2);
        assert_eq!(
            view.warnings.as_slice(),
            &[DecodeWarning::CountMismatch {
                total_count: 5,
                vector_length: 2
            }]
        );
    }

    #[test]
    fn test_decode_error_surfaces_as_view_error() {
        let config = DecodeConfig::deployed_aggregator();
        let address = Address::new([42; 32]);
        let mut ledger = InMemoryLedger::new();
        ledger.insert(
            address,
            RawAccount {
                owner: config.program_id,
                data: vec![0; 20], // shorter than the header
            },
        );

        let result = refresh(&ledger, &FixedDerivation::new(address), &config);
        assert_eq!(
            result.err(),
            Some(ViewError::Decode(DecodeError::BufferTooShort { actual: 20 }))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_view_serializes_for_presentation() {
        let (ledger, derivation, config) = seeded_ledger([7; 32]);
        let view = refresh(&ledger, &derivation, &config).unwrap();

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["aggregate"]["total_dominance"], 7_500_000_000u64);
        assert_eq!(
            json["aggregate"]["shares"][0]["record"]["symbol"],
            "BTC"
        );
    }
}
