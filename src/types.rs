//! Core data structures for URL decomposition and composition.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How the authority host is represented in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostForm {
    /// `host` holds the hostname only; an explicit port lives in `port`.
    Split,
    /// `host` holds the full `host[:port]` authority string; `port` stays `None`.
    Combined,
}

/// How the query component is represented in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryForm {
    /// Parameter name mapped to the set of all values supplied for it, percent-decoded.
    Decoded,
    /// The raw query string, still encoded.
    Opaque,
}

/// The record shape a caller declares when driving the codec.
///
/// The two host representations and two query representations form a closed
/// set of variants; the schema is declared up front rather than inferred
/// from which fields happen to be populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Host representation.
    pub host: HostForm,
    /// Query representation.
    pub query: QueryForm,
}

impl RecordSchema {
    /// Create a schema from explicit host and query forms.
    pub fn new(host: HostForm, query: QueryForm) -> Self {
        Self { host, query }
    }

    /// Split host/port with the decoded query mapping.
    ///
    /// This is the richer shape: the port is numeric and every query
    /// parameter is decoded into its full value set.
    pub fn preferred() -> Self {
        Self::new(HostForm::Split, QueryForm::Decoded)
    }

    /// Split host/port with the raw query string.
    ///
    /// The only shape whose records compose back into a URL string, since
    /// the decoded mapping is output-only.
    pub fn opaque() -> Self {
        Self::new(HostForm::Split, QueryForm::Opaque)
    }
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self::preferred()
    }
}

/// The query component of a URL record.
///
/// Either the raw query string or the decoded parameter mapping. The
/// mapping keeps every value supplied for a name as a set, so duplicate
/// identical values collapse and value order carries no meaning. Serialized
/// untagged: a plain string for the opaque form, an object of string sets
/// for the decoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    /// Raw query string without the leading `?`, empty when absent.
    Opaque(String),
    /// Decoded parameter name to value-set mapping, empty when absent.
    Decoded(BTreeMap<String, BTreeSet<String>>),
}

impl Query {
    /// Check whether the query component is absent or empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Query::Opaque(raw) => raw.is_empty(),
            Query::Decoded(params) => params.is_empty(),
        }
    }

    /// Get the raw query string, if this is the opaque form.
    pub fn as_opaque(&self) -> Option<&str> {
        match self {
            Query::Opaque(raw) => Some(raw),
            Query::Decoded(_) => None,
        }
    }
}

/// The structured representation of a URL.
///
/// A record is an immutable value: every transform produces a new record or
/// a new string, never an in-place mutation. `None` marks a component that
/// was absent from the URL, which is distinct from a component that was
/// present but empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// URI scheme (e.g. "https").
    pub scheme: String,
    /// User-info username; `None` when the authority has no user-info.
    pub username: Option<String>,
    /// User-info password; `None` when no password segment is present.
    /// A password with no username is rejected at composition time.
    pub password: Option<String>,
    /// Authority host: hostname only under `HostForm::Split`, the joined
    /// `host[:port]` string under `HostForm::Combined`.
    pub host: String,
    /// Explicit port; `None` when none was specified, never zero.
    pub port: Option<u16>,
    /// Path component, empty string when absent.
    pub path: String,
    /// Query component.
    pub query: Query,
}

impl UrlRecord {
    /// Create a new URL record.
    pub fn new(
        scheme: String,
        username: Option<String>,
        password: Option<String>,
        host: String,
        port: Option<u16>,
        path: String,
        query: Query,
    ) -> Self {
        Self {
            scheme,
            username,
            password,
            host,
            port,
            path,
            query,
        }
    }

    /// Check whether a user-info segment is present.
    pub fn has_userinfo(&self) -> bool {
        self.username.is_some()
    }

    /// Check whether an explicit port is present.
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_schema_constructors() {
        let preferred = RecordSchema::preferred();
        assert_eq!(preferred.host, HostForm::Split);
        assert_eq!(preferred.query, QueryForm::Decoded);

        let opaque = RecordSchema::opaque();
        assert_eq!(opaque.host, HostForm::Split);
        assert_eq!(opaque.query, QueryForm::Opaque);

        assert_eq!(RecordSchema::default(), RecordSchema::preferred());
    }

    #[test]
    fn test_query_is_empty() {
        assert!(Query::Opaque(String::new()).is_empty());
        assert!(!Query::Opaque("q=1".to_string()).is_empty());
        assert!(Query::Decoded(BTreeMap::new()).is_empty());

        let mut params = BTreeMap::new();
        params.insert("q".to_string(), BTreeSet::from(["1".to_string()]));
        assert!(!Query::Decoded(params).is_empty());
    }

    #[test]
    fn test_query_as_opaque() {
        assert_eq!(Query::Opaque("q=1".to_string()).as_opaque(), Some("q=1"));
        assert_eq!(Query::Decoded(BTreeMap::new()).as_opaque(), None);
    }

    #[test]
    fn test_record_helpers() {
        let record = UrlRecord::new(
            "https".to_string(),
            Some("alice".to_string()),
            None,
            "example.com".to_string(),
            Some(8443),
            "/".to_string(),
            Query::Opaque(String::new()),
        );

        assert!(record.has_userinfo());
        assert!(record.has_port());
    }

    #[test]
    fn test_record_without_optionals() {
        let record = UrlRecord::new(
            "https".to_string(),
            None,
            None,
            "example.com".to_string(),
            None,
            "/".to_string(),
            Query::Opaque(String::new()),
        );

        assert!(!record.has_userinfo());
        assert!(!record.has_port());
    }
}
