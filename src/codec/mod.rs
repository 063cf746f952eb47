//! Core URL codec functionality.
//!
//! This module contains the two codec operations and their shared plumbing:
//! - Decomposing a URL string into a structured record
//! - Composing a record back into a canonical URL string
//! - The query-string sub-codec used by the decoded record shape

pub mod compose;
pub mod decompose;
pub mod query;

// Re-export main functionality
pub use compose::compose_url;
pub use decompose::{decompose_url, decompose_url_with};
pub use query::decode_query;

use crate::error::UrlCodecError;
use crate::types::{HostForm, RecordSchema, UrlRecord};

/// URL codec bound to a declared record schema.
///
/// Callers that hold both directions of the transform declare the record
/// shape once; decomposition produces records of that shape and composition
/// rejects records that contradict it.
#[derive(Debug, Clone, Copy)]
pub struct UrlCodec {
    schema: RecordSchema,
}

impl UrlCodec {
    /// Create a codec for the given record schema.
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    /// The schema this codec was declared with.
    pub fn schema(&self) -> RecordSchema {
        self.schema
    }

    /// Decompose a URL string into a record of this codec's schema.
    pub fn decompose(&self, input: &str) -> Result<UrlRecord, UrlCodecError> {
        decompose_url_with(input, self.schema)
    }

    /// Compose a record of this codec's schema back into a URL string.
    ///
    /// Rejects records that contradict the declared schema before handing
    /// them to the serializer.
    pub fn compose(&self, record: &UrlRecord) -> Result<String, UrlCodecError> {
        if self.schema.host == HostForm::Combined && record.port.is_some() {
            return Err(UrlCodecError::SchemaMismatch(
                "combined host form carries no port field",
            ));
        }

        compose_url(record)
    }
}

impl Default for UrlCodec {
    fn default() -> Self {
        Self::new(RecordSchema::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Query, QueryForm};

    #[test]
    fn test_codec_round_trip() {
        let codec = UrlCodec::new(RecordSchema::opaque());
        let record = codec.decompose("https://app.example.io/app?q=1").unwrap();
        let url = codec.compose(&record).unwrap();

        assert_eq!(url, "https://app.example.io/app?q=1");
    }

    #[test]
    fn test_codec_default_schema_is_preferred() {
        let codec = UrlCodec::default();
        assert_eq!(codec.schema(), RecordSchema::preferred());

        let record = codec.decompose("https://example.com/?a=1").unwrap();
        assert!(matches!(record.query, Query::Decoded(_)));
    }

    #[test]
    fn test_codec_rejects_port_under_combined_host() {
        let schema = RecordSchema::new(HostForm::Combined, QueryForm::Opaque);
        let codec = UrlCodec::new(schema);

        let mut record = codec.decompose("https://example.com:8080/").unwrap();
        assert_eq!(record.host, "example.com:8080");
        assert_eq!(record.port, None);

        record.port = Some(8080);
        let result = codec.compose(&record);
        assert!(matches!(result, Err(UrlCodecError::SchemaMismatch(_))));
    }
}
