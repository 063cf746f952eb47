//! Query-string sub-codec for the decoded record shape.
//!
//! Splitting and percent-decoding follow the
//! `application/x-www-form-urlencoded` convention via the `form_urlencoded`
//! parser. Only the decoding direction exists; composing a record requires
//! the opaque query string.

use std::collections::{BTreeMap, BTreeSet};

/// Decode a raw query string into a parameter-name to value-set mapping.
///
/// Keys and values are percent-decoded, and every value supplied for a name
/// is grouped into that name's set, so repeated parameters are preserved
/// while identical duplicates collapse. Names with no recorded pair are
/// absent from the mapping rather than mapped to an empty set.
///
/// # Examples
///
/// ```
/// use urlrec::decode_query;
///
/// let params = decode_query("a=1&a=2&b=3");
/// assert_eq!(params["a"].len(), 2);
/// assert!(params["b"].contains("3"));
/// assert!(decode_query("").is_empty());
/// ```
pub fn decode_query(raw: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut params: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .insert(value.into_owned());
    }

    params
}
