//! Error type for URL recognition failures.

/// A string could not be recognized as a URI reference against the base context.
///
/// Raised by [`crate::parse`], [`crate::resolve`] and [`crate::BaseContext::new`].
/// `base` is `None` when the rejected string was itself the candidate base.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed URL {input:?}{}: {source}", base_suffix(.base))]
pub struct MalformedUrl {
    pub input: String,
    pub base: Option<String>,
    #[source]
    pub source: url::ParseError,
}

impl MalformedUrl {
    pub(crate) fn new(input: &str, base: Option<&str>, source: url::ParseError) -> Self {
        tracing::debug!(input, ?base, %source, "rejected URL");
        Self {
            input: input.to_string(),
            base: base.map(str::to_string),
            source,
        }
    }
}

fn base_suffix(base: &Option<String>) -> String {
    match base {
        Some(b) => format!(" (base {:?})", b),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input_and_base() {
        let err = MalformedUrl::new(
            "http://[::1",
            Some("http://baseurl/"),
            url::ParseError::InvalidIpv6Address,
        );
        let msg = err.to_string();
        assert!(msg.contains("\"http://[::1\""), "{msg}");
        assert!(msg.contains("base \"http://baseurl/\""), "{msg}");
    }

    #[test]
    fn display_without_base() {
        let err = MalformedUrl::new("nope", None, url::ParseError::RelativeUrlWithoutBase);
        assert!(!err.to_string().contains("(base"));
    }
}
