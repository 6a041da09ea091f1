//! Base context: the absolute URL relative references are resolved against.
//!
//! Selected once by the host environment (see [`BaseContext::from_config`]) and
//! passed explicitly to every parse/resolve call.

use crate::config::LurlConfig;
use crate::error::MalformedUrl;
use crate::url_model::{self, UrlValue};
use url::Url;

/// Base used when no document location is configured.
pub const DEFAULT_BASE_URL: &str = "http://baseurl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseContext {
    url: Url,
}

impl BaseContext {
    /// Builds a base context from an absolute URL string.
    pub fn new(base: &str) -> Result<Self, MalformedUrl> {
        let url = Url::parse(base).map_err(|e| MalformedUrl::new(base, None, e))?;
        if url.cannot_be_a_base() {
            return Err(MalformedUrl::new(
                base,
                None,
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { url })
    }

    /// Picks the document location when one is configured (page-like host),
    /// else the non-interactive fallback base.
    pub fn from_config(cfg: &LurlConfig) -> Result<Self, MalformedUrl> {
        let base = match cfg.document_url.as_deref() {
            Some(doc) => {
                tracing::debug!("base context from document location {}", doc);
                doc
            }
            None => {
                tracing::debug!("base context from fallback {}", cfg.fallback_base_url);
                cfg.fallback_base_url.as_str()
            }
        };
        Self::new(base)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Resolves `input` against this base with the WHATWG grammar.
    pub(crate) fn join(&self, input: &str) -> Result<Url, MalformedUrl> {
        self.url
            .join(input)
            .map_err(|e| MalformedUrl::new(input, Some(self.as_str()), e))
    }

    /// Same as [`crate::parse`] with this base.
    pub fn parse(&self, input: &str) -> Result<UrlValue, MalformedUrl> {
        url_model::parse(input, self)
    }

    /// Same as [`crate::resolve`] with this base.
    pub fn resolve(&self, from: &str, to: &str) -> Result<String, MalformedUrl> {
        url_model::resolve(from, to, self)
    }
}

impl Default for BaseContext {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is absolute"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base() {
        assert_eq!(BaseContext::default().as_str(), "http://baseurl/");
    }

    #[test]
    fn rejects_relative_base() {
        let err = BaseContext::new("/just/a/path").unwrap_err();
        assert_eq!(err.source, url::ParseError::RelativeUrlWithoutBase);
        assert!(err.base.is_none());
    }

    #[test]
    fn rejects_opaque_base() {
        let err = BaseContext::new("mailto:someone@example.com").unwrap_err();
        assert_eq!(err.source, url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }

    #[test]
    fn from_config_prefers_document_location() {
        let cfg = LurlConfig {
            document_url: Some("https://app.example.com/page/index.html".into()),
            ..LurlConfig::default()
        };
        let base = BaseContext::from_config(&cfg).unwrap();
        assert_eq!(base.as_str(), "https://app.example.com/page/index.html");
        assert_eq!(base.url().host_str(), Some("app.example.com"));
        assert_eq!(base.url().path(), "/page/index.html");
    }

    #[test]
    fn from_config_falls_back() {
        let base = BaseContext::from_config(&LurlConfig::default()).unwrap();
        assert_eq!(base, BaseContext::default());
    }

    #[test]
    fn join_reports_base() {
        let err = BaseContext::default().join("http://[::1").unwrap_err();
        assert_eq!(err.base.as_deref(), Some("http://baseurl/"));
        assert_eq!(err.input, "http://[::1");
    }
}
