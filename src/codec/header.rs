// ============================================================================
// Header Decoder
// Fixed 48-byte account header: discriminator, authority, counts
// ============================================================================

use crate::codec::errors::{DecodeError, DecodeResult};
use crate::domain::{AccountHeader, Address};

const AUTHORITY_OFFSET: usize = 8;
const TOTAL_COUNT_OFFSET: usize = 40;
const VECTOR_LENGTH_OFFSET: usize = 44;

/// Decode the account header from the start of `buffer`.
///
/// Pure function of its input: no validation of the discriminator happens
/// here, only structural extraction.
pub fn decode_header(buffer: &[u8]) -> DecodeResult<AccountHeader> {
    if buffer.len() < AccountHeader::LEN {
        return Err(DecodeError::BufferTooShort {
            actual: buffer.len(),
        });
    }

    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&buffer[..AUTHORITY_OFFSET]);

    let mut authority = [0u8; 32];
    authority.copy_from_slice(&buffer[AUTHORITY_OFFSET..TOTAL_COUNT_OFFSET]);

    Ok(AccountHeader {
        discriminator,
        authority: Address::new(authority),
        total_count: read_u32_le(buffer, TOTAL_COUNT_OFFSET),
        vector_length: read_u32_le(buffer, VECTOR_LENGTH_OFFSET),
    })
}

#[inline]
fn read_u32_le(buffer: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&buffer[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}
