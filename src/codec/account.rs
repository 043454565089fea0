// ============================================================================
// Account Decoder
// Orchestrates header decode, count policy and record iteration
// ============================================================================

use crate::codec::errors::{DecodeResult, DecodeWarning, DecodeWarnings};
use crate::codec::{header, record};
use crate::domain::{AccountHeader, DecodedAccount};
use crate::schema::{SchemaDescriptor, SchemaVersion};
use smallvec::SmallVec;

/// Outcome of a successful decode: the account plus any non-fatal policy
/// warnings observed along the way.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub account: DecodedAccount,
    pub warnings: DecodeWarnings,
}

/// Decodes whole aggregator accounts for one schema version.
///
/// Stateless apart from the selected descriptor; a decoder can be reused
/// across buffers and shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct AccountDecoder {
    schema: &'static SchemaDescriptor,
}

impl AccountDecoder {
    /// Create a decoder for the given record layout version.
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            schema: version.descriptor(),
        }
    }

    /// The descriptor this decoder reads with.
    pub fn schema(&self) -> &'static SchemaDescriptor {
        self.schema
    }

    /// Decode a raw account buffer.
    ///
    /// The record count is the smaller of the header's two candidates; a
    /// disagreement is recorded as a warning, never a failure. Any record
    /// error aborts the whole decode.
    pub fn decode(&self, buffer: &[u8]) -> DecodeResult<Decoded> {
        let header = header::decode_header(buffer)?;

        let mut warnings: DecodeWarnings = SmallVec::new();
        if header.counts_disagree() {
            tracing::warn!(
                total_count = header.total_count,
                vector_length = header.vector_length,
                "header counts disagree, decoding the smaller"
            );
            warnings.push(DecodeWarning::CountMismatch {
                total_count: header.total_count,
                vector_length: header.vector_length,
            });
        }

        let count = header.resolved_count() as usize;
        // Capacity bounded by what the buffer could actually hold; the
        // header counts are untrusted input.
        let fits = buffer.len().saturating_sub(AccountHeader::LEN) / self.schema.record_size;
        let mut records = Vec::with_capacity(count.min(fits));

        let mut cursor = AccountHeader::LEN;
        for index in 0..count {
            let remaining = &buffer[cursor.min(buffer.len())..];
            records.push(record::decode_record(remaining, self.schema, index)?);
            cursor += self.schema.record_size;
        }

        tracing::debug!(records = records.len(), "account decoded");
        Ok(Decoded {
            account: DecodedAccount { header, records },
            warnings,
        })
    }
}
