// ============================================================================
// Record Schema Descriptors
// Parameterized byte layouts for each observed record format version
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Windows
// ============================================================================

/// Interpretation of a field's byte window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fixed-width unsigned integer, little-endian.
    UnsignedLe,
    /// Fixed-width signed integer, little-endian.
    SignedLe,
    /// UTF-8 text, zero-padded to fill the window.
    NullPaddedText,
}

/// One field's window within a fixed-size record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, offset: usize, width: usize, kind: FieldKind) -> Self {
        Self {
            name,
            offset,
            width,
            kind,
        }
    }

    /// First byte past this field's window.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    /// Borrow this field's window out of a record slice.
    ///
    /// The caller must have verified `record.len() >= self.end()`.
    #[inline]
    pub fn window<'a>(&self, record: &'a [u8]) -> &'a [u8] {
        &record[self.offset..self.end()]
    }
}

// ============================================================================
// Schema Versions
// ============================================================================

/// Version tag selecting one record layout.
///
/// Two layouts exist side by side in observed account data; the account
/// format itself does not announce which one it carries, so the caller
/// selects the version through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SchemaVersion {
    /// 146-byte records without a trailing timestamp.
    Compact,
    /// 154-byte records ending in a signed 8-byte timestamp.
    #[default]
    Extended,
}

impl SchemaVersion {
    /// The descriptor for this version.
    pub const fn descriptor(self) -> &'static SchemaDescriptor {
        match self {
            SchemaVersion::Compact => &COMPACT,
            SchemaVersion::Extended => &EXTENDED,
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// Byte layout of one record format version.
///
/// A descriptor is the single source of truth for where each field lives;
/// the record decoder only ever reads through these windows, so a layout
/// revision is a new descriptor rather than a new decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub version: SchemaVersion,
    /// Total fixed size of one record in bytes.
    pub record_size: usize,
    pub symbol: FieldSpec,
    pub dominance: FieldSpec,
    pub token_address: FieldSpec,
    pub price_feed_id: FieldSpec,
    /// Present only in layouts that carry a trailing timestamp.
    pub timestamp: Option<FieldSpec>,
}

/// Compact layout: symbol(10) + dominance(8) + token_address(64)
/// + price_feed_id(64).
pub const COMPACT: SchemaDescriptor = SchemaDescriptor {
    version: SchemaVersion::Compact,
    record_size: 146,
    symbol: FieldSpec::new("symbol", 0, 10, FieldKind::NullPaddedText),
    dominance: FieldSpec::new("dominance", 10, 8, FieldKind::UnsignedLe),
    token_address: FieldSpec::new("token_address", 18, 64, FieldKind::NullPaddedText),
    price_feed_id: FieldSpec::new("price_feed_id", 82, 64, FieldKind::NullPaddedText),
    timestamp: None,
};

/// Extended layout: compact plus a trailing i64 timestamp(8).
pub const EXTENDED: SchemaDescriptor = SchemaDescriptor {
    version: SchemaVersion::Extended,
    record_size: 154,
    symbol: FieldSpec::new("symbol", 0, 10, FieldKind::NullPaddedText),
    dominance: FieldSpec::new("dominance", 10, 8, FieldKind::UnsignedLe),
    token_address: FieldSpec::new("token_address", 18, 64, FieldKind::NullPaddedText),
    price_feed_id: FieldSpec::new("price_feed_id", 82, 64, FieldKind::NullPaddedText),
    timestamp: Some(FieldSpec::new("timestamp", 146, 8, FieldKind::SignedLe)),
};

impl SchemaDescriptor {
    /// All field windows in record order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        [
            &self.symbol,
            &self.dominance,
            &self.token_address,
            &self.price_feed_id,
        ]
        .into_iter()
        .chain(self.timestamp.as_ref())
    }

    /// Check that the declared windows tile the record exactly: contiguous,
    /// in order, and ending at `record_size`.
    pub fn validate_layout(&self) -> Result<(), String> {
        let mut cursor = 0usize;
        for field in self.fields() {
            if field.offset != cursor {
                return Err(format!(
                    "field `{}` starts at {} but previous field ends at {}",
                    field.name, field.offset, cursor
                ));
            }
            cursor = field.end();
        }
        if cursor != self.record_size {
            return Err(format!(
                "fields cover {} bytes but record size is {}",
                cursor, self.record_size
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_tile_their_records() {
        assert_eq!(COMPACT.validate_layout(), Ok(()));
        assert_eq!(EXTENDED.validate_layout(), Ok(()));
    }

    #[test]
    fn test_versions_select_expected_sizes() {
        assert_eq!(SchemaVersion::Compact.descriptor().record_size, 146);
        assert_eq!(SchemaVersion::Extended.descriptor().record_size, 154);
        assert!(SchemaVersion::Compact.descriptor().timestamp.is_none());
        assert!(SchemaVersion::Extended.descriptor().timestamp.is_some());
    }

    #[test]
    fn test_field_window_borrow() {
        let record = vec![0xAAu8; EXTENDED.record_size];
        let window = EXTENDED.dominance.window(&record);
        assert_eq!(window.len(), 8);
        assert_eq!(EXTENDED.dominance.offset, 10);
        assert_eq!(EXTENDED.dominance.end(), 18);
    }

    #[test]
    fn test_bad_layout_is_rejected() {
        let mut broken = COMPACT.clone();
        broken.dominance = FieldSpec::new("dominance", 11, 8, FieldKind::UnsignedLe);
        assert!(broken.validate_layout().is_err());
    }
}
