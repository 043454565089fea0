// ============================================================================
// Record Decoder
// One fixed-size byte slice -> one typed record, driven by a descriptor
// ============================================================================

use crate::codec::errors::{DecodeError, DecodeResult};
use crate::domain::TokenRecord;
use crate::schema::{FieldSpec, SchemaDescriptor};

/// Decode one record from the front of `slice`.
///
/// `index` is the record's position in the account, used only for error
/// reporting. The wide integer fields are read as exact `u64`/`i64`; no
/// value ever passes through a float on its way out of here.
pub fn decode_record(
    slice: &[u8],
    schema: &SchemaDescriptor,
    index: usize,
) -> DecodeResult<TokenRecord> {
    if slice.len() < schema.record_size {
        return Err(DecodeError::TruncatedRecord {
            index,
            expected: schema.record_size,
            remaining: slice.len(),
        });
    }

    Ok(TokenRecord {
        symbol: read_text(slice, &schema.symbol, index)?,
        dominance: read_u64_le(slice, &schema.dominance),
        token_address: read_text(slice, &schema.token_address, index)?,
        price_feed_id: read_text(slice, &schema.price_feed_id, index)?,
        timestamp: schema.timestamp.as_ref().map(|spec| read_i64_le(slice, spec)),
    })
}

/// Decode a null-padded UTF-8 text window.
///
/// The value is everything before the first zero byte; a window with no
/// zero byte is taken whole.
fn read_text(record: &[u8], spec: &FieldSpec, index: usize) -> DecodeResult<String> {
    let window = spec.window(record);
    let text_bytes = match window.iter().position(|&byte| byte == 0) {
        Some(nul) => &window[..nul],
        None => window,
    };
    match std::str::from_utf8(text_bytes) {
        Ok(text) => Ok(text.to_owned()),
        Err(_) => Err(DecodeError::InvalidText {
            field: spec.name,
            index,
        }),
    }
}

#[inline]
fn read_u64_le(record: &[u8], spec: &FieldSpec) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(spec.window(record));
    u64::from_le_bytes(bytes)
}

#[inline]
fn read_i64_le(record: &[u8], spec: &FieldSpec) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(spec.window(record));
    i64::from_le_bytes(bytes)
}
