//! String to [`UrlValue`].

use super::{UrlQuery, UrlValue};
use crate::base::BaseContext;
use crate::error::MalformedUrl;
use crate::query::{self, decode_component};
use url::{Host, Url};

/// Parses `input` (absolute or relative) against `base`.
///
/// Besides the grammar's own components, the raw query (text after `?`,
/// before `#`) is decoded into [`UrlValue::query`], which is always present.
pub fn parse(input: &str, base: &BaseContext) -> Result<UrlValue, MalformedUrl> {
    let url = base.join(input)?;
    Ok(from_url(&url))
}

pub(crate) fn from_url(url: &Url) -> UrlValue {
    let hostname = url.host().map(|h| match h {
        Host::Ipv6(addr) => addr.to_string(),
        other => other.to_string(),
    });
    let host = url.host_str().map(|h| match url.port() {
        Some(port) => format!("{}:{}", h, port),
        None => h.to_string(),
    });
    let raw_query = url.query().unwrap_or("");

    UrlValue {
        href: Some(url.as_str().to_string()),
        protocol: Some(url.scheme().to_string()),
        slashes: url.has_authority(),
        auth: auth_of(url),
        host: host.filter(|h| !h.is_empty()),
        hostname: hostname.filter(|h| !h.is_empty()),
        port: url.port().map(|p| p.to_string()),
        pathname: Some(url.path().to_string()),
        search: (!raw_query.is_empty()).then(|| format!("?{}", raw_query)),
        query: Some(UrlQuery::Map(query::decode(raw_query))),
        hash: url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(|f| format!("#{}", f)),
    }
}

/// Decoded `user[:pass]`, or `None` without credentials.
fn auth_of(url: &Url) -> Option<String> {
    let user = decode_component(url.username());
    match url.password() {
        Some(pass) => Some(format!("{}:{}", user, decode_component(pass))),
        None if user.is_empty() => None,
        None => Some(user),
    }
}
