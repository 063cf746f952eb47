//! Error types for URL decomposition and composition.

use thiserror::Error;

/// Errors that can occur while decomposing or composing a URL record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlCodecError {
    /// The input string failed to parse as a URL at all.
    #[error("URL parsing failed: {0}")]
    Parse(String),

    /// A port segment was present but could not be converted to a port number.
    #[error("invalid port segment: {0}")]
    InvalidPort(String),

    /// The record carries a password without a username.
    #[error("record has a password but no username")]
    PasswordWithoutUsername,

    /// The record's query is the decoded mapping form, which cannot be composed.
    #[error("decoded query mapping cannot be composed; supply the opaque query string")]
    QueryNotComposable,

    /// A required string field of the record is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The record contradicts the schema the codec was declared with.
    #[error("record does not match declared schema: {0}")]
    SchemaMismatch(&'static str),
}

impl From<url::ParseError> for UrlCodecError {
    fn from(err: url::ParseError) -> Self {
        match err {
            // The one segment-level conversion failure the parser reports.
            url::ParseError::InvalidPort => UrlCodecError::InvalidPort(err.to_string()),
            _ => UrlCodecError::Parse(err.to_string()),
        }
    }
}
