// ============================================================================
// Schema Module
// One parameterized descriptor per record layout version
// ============================================================================

mod descriptor;

pub use descriptor::{FieldKind, FieldSpec, SchemaDescriptor, SchemaVersion, COMPACT, EXTENDED};
