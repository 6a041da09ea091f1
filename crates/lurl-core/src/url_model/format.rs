//! [`UrlValue`] to string, with the legacy serialization rules.

use super::{UrlQuery, UrlValue};
use crate::query::{self, encode_component};

/// Protocols that get `//` even when the record did not ask for slashes.
const SLASHED_PROTOCOLS: [&str; 5] = ["http", "https", "ftp", "gopher", "file"];

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Formats a [`UrlValue`] back into a URL string.
///
/// Total: absent fields contribute nothing, so `format(&UrlValue::default())`
/// is `""`.
pub fn format(value: &UrlValue) -> String {
    let auth = non_empty(&value.auth)
        .map(|a| format!("{}@", encode_auth(a)))
        .unwrap_or_default();

    let mut host = match (non_empty(&value.host), non_empty(&value.hostname)) {
        (Some(host), _) => format!("{}{}", auth, host),
        (None, Some(hostname)) => {
            let mut host = auth;
            if hostname.contains(':') {
                host.push('[');
                host.push_str(hostname);
                host.push(']');
            } else {
                host.push_str(hostname);
            }
            if let Some(port) = non_empty(&value.port) {
                host.push(':');
                host.push_str(port);
            }
            host
        }
        (None, None) => String::new(),
    };

    let mut search = match non_empty(&value.search) {
        Some(search) => search.to_string(),
        None => search_from_query(value.query.as_ref()),
    };

    let mut protocol = non_empty(&value.protocol).unwrap_or_default().to_string();
    if !protocol.is_empty() && !protocol.ends_with(':') {
        protocol.push(':');
    }

    let mut pathname = value.pathname.clone().unwrap_or_default();
    if value.slashes || ((protocol.is_empty() || is_slashed_protocol(&protocol)) && !host.is_empty())
    {
        host.insert_str(0, "//");
        if !pathname.is_empty() && !pathname.starts_with('/') {
            pathname.insert(0, '/');
        }
    }

    let mut hash = value.hash.clone().unwrap_or_default();
    if !hash.is_empty() && !hash.starts_with('#') {
        hash.insert(0, '#');
    }
    if !search.is_empty() && !search.starts_with('?') {
        search.insert(0, '?');
    }

    let pathname = pathname.replace('?', "%3F").replace('#', "%23");
    let search = search.replacen('#', "%23", 1);

    format!("{}{}{}{}{}", protocol, host, pathname, search, hash)
}

/// Percent-encodes credentials, keeping the first `:` as the user/password separator.
fn encode_auth(auth: &str) -> String {
    let encoded = encode_component(auth);
    encoded.replacen("%3A", ":", 1)
}

fn search_from_query(given: Option<&UrlQuery>) -> String {
    let encoded = match given {
        Some(UrlQuery::Map(map)) => query::encode(map),
        Some(UrlQuery::Encoded(text)) => text.clone(),
        None => String::new(),
    };
    if encoded.is_empty() {
        encoded
    } else {
        format!("?{}", encoded)
    }
}

/// `protocol` carries its trailing `:`; matching is case-insensitive.
fn is_slashed_protocol(protocol: &str) -> bool {
    let scheme = protocol.trim_end_matches(':');
    SLASHED_PROTOCOLS
        .iter()
        .any(|p| p.eq_ignore_ascii_case(scheme))
}
