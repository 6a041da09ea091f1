//! URL value model with legacy parse/format/resolve semantics.
//!
//! [`UrlValue`] carries every field as optional so that hand-built records
//! format the same way as parsed ones. Parsing and resolution delegate
//! grammar recognition to the `url` crate; formatting applies the legacy
//! serialization rules (auth encoding, `//` for slashed protocols, bracketed
//! IPv6 hostnames, `search` over `query`).

mod format;
mod parse;
mod resolve;

pub use format::format;
pub use parse::parse;
pub use resolve::resolve;

use crate::query::QueryMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Query as given on a [`UrlValue`]: already-encoded text (no leading `?`) or
/// a decoded mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlQuery {
    Encoded(String),
    Map(QueryMap),
}

impl From<QueryMap> for UrlQuery {
    fn from(map: QueryMap) -> Self {
        UrlQuery::Map(map)
    }
}

impl From<&str> for UrlQuery {
    fn from(s: &str) -> Self {
        UrlQuery::Encoded(s.to_string())
    }
}

/// One URL broken into its legacy components.
///
/// Precedence when formatting: `host` over `hostname` + `port`, and `search`
/// over `query`. After changing `query` on a parsed value, clear `search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlValue {
    /// Serialization produced by the grammar on parse. Ignored by [`format`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Scheme, with or without the trailing `:`. Parse stores it without.
    #[serde(alias = "scheme", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub slashes: bool,
    /// Raw `user[:pass]`, not percent-encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    /// `hostname[:port]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Host without port. IPv6 literals are stored without brackets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(
        deserialize_with = "deserialize_port",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    /// Query text including the leading `?`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<UrlQuery>,
    /// Fragment including the leading `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl fmt::Display for UrlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Text(String),
    Number(u64),
}

/// Ports arrive as strings or numbers from loosely-built records.
fn deserialize_port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let port = Option::<PortRepr>::deserialize(deserializer)?;
    Ok(port.map(|p| match p {
        PortRepr::Text(s) => s,
        PortRepr::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryValue;

    #[test]
    fn display_formats() {
        let value = UrlValue {
            protocol: Some("http".into()),
            hostname: Some("example.com".into()),
            pathname: Some("/x".into()),
            ..UrlValue::default()
        };
        assert_eq!(value.to_string(), "http://example.com/x");
    }

    #[test]
    fn deserialize_loose_record() {
        let value: UrlValue = serde_json::from_str(
            r#"{
                "scheme": "https",
                "hostname": "example.com",
                "port": 8443,
                "pathname": "/some/path",
                "query": { "page": 1, "format": "json" }
            }"#,
        )
        .unwrap();
        assert_eq!(value.protocol.as_deref(), Some("https"));
        assert_eq!(value.port.as_deref(), Some("8443"));
        assert!(!value.slashes);
        match value.query {
            Some(UrlQuery::Map(ref map)) => {
                assert_eq!(map.get("page"), Some(&QueryValue::from("1")));
            }
            ref other => panic!("expected query map, got {:?}", other),
        }
    }

    #[test]
    fn deserialize_string_query_and_port() {
        let value: UrlValue =
            serde_json::from_str(r#"{"query": "a=1", "port": "80", "slashes": true}"#).unwrap();
        assert_eq!(value.query, Some(UrlQuery::from("a=1")));
        assert_eq!(value.port.as_deref(), Some("80"));
        assert!(value.slashes);
    }

    #[test]
    fn deserialize_empty_record() {
        let value: UrlValue = serde_json::from_str("{}").unwrap();
        assert_eq!(value, UrlValue::default());
    }

    #[test]
    fn deserialize_null_port() {
        let value: UrlValue = serde_json::from_str(r#"{"port": null}"#).unwrap();
        assert!(value.port.is_none());
    }
}
