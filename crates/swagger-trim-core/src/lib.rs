pub mod digest;
pub mod issues;
pub mod json_pointer;

pub use digest::{canonical_json_bytes, digest_hex, CanonicalJsonOptions};
pub use issues::{IssueSeverity, StructuredIssue};
pub use json_pointer::{JsonPointer, JsonPointerParseError, PointerSegment};
