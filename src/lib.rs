//! urlrec - Bidirectional structural codec between URL strings and typed records
//!
//! This crate maps a URL string onto a structured record value and a record
//! back onto a canonically formed URL string, for use inside a configuration
//! language's function library. Decomposing then composing reproduces a
//! canonical URL; composing then decomposing reproduces the structured
//! fields, subject to the canonicalization the underlying parser applies
//! (query escaping, default-port elision, empty path to `/`).
//!
//! # Features
//!
//! - **Structural**: scheme, user-info, host, port, path and query become
//!   individually typed record fields with explicit null-vs-empty semantics
//! - **Schema-driven**: the host and query representations are a closed set
//!   of declared variants, not inferred from field presence
//! - **Delegating**: parsing, escaping and serialization belong to the
//!   `url` crate; this crate owns only the field-mapping rules
//! - **Pure**: both directions are side-effect-free functions of their input
//!
//! # Quick Start
//!
//! ```
//! use urlrec::{decompose_url, RecordSchema, UrlCodec};
//!
//! // Decompose with the preferred schema (split host/port, decoded query)
//! let record = decompose_url("https://alice@example.com:8443/app?q=1&q=2")?;
//! assert_eq!(record.scheme, "https");
//! assert_eq!(record.username.as_deref(), Some("alice"));
//! assert_eq!(record.host, "example.com");
//! assert_eq!(record.port, Some(8443));
//!
//! // Round-trip through the opaque-query schema
//! let codec = UrlCodec::new(RecordSchema::opaque());
//! let record = codec.decompose("https://app.example.io/app?q=1")?;
//! assert_eq!(codec.compose(&record)?, "https://app.example.io/app?q=1");
//! # Ok::<(), urlrec::UrlCodecError>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return `Result<T, UrlCodecError>`. Decomposition
//! fails on URL-grammar errors and on a present but non-numeric port;
//! composition fails only on record shape violations (empty required
//! fields, a password without a username, or the output-only decoded query
//! mapping). Every failure is terminal for the call; there is no partial
//! result.

// Re-export main codec functionality
pub use codec::{compose_url, decode_query, decompose_url, decompose_url_with, UrlCodec};

// Re-export public types
pub use error::UrlCodecError;
pub use types::{HostForm, Query, QueryForm, RecordSchema, UrlRecord};

// Module declarations
pub mod codec;
pub mod error;
pub mod types;
