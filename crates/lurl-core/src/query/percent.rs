//! Component-level percent-encoding shared by the query codec and the formatter.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left alone by `encodeURIComponent`: alphanumerics plus `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes everything outside the URI-component unreserved set.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Permissive percent-decoding.
///
/// Escapes that are not `%` followed by two hex digits are kept literally.
/// If the decoded bytes are not valid UTF-8 the input is returned unchanged.
pub fn decode_component(input: &str) -> String {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            tracing::trace!(input, %err, "percent-decoded bytes are not UTF-8, keeping raw text");
            input.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_keeps_unreserved() {
        assert_eq!(encode_component("aZ09-_.!~*'()"), "aZ09-_.!~*'()");
    }

    #[test]
    fn encode_escapes_reserved_and_non_ascii() {
        assert_eq!(encode_component("a b&c=d/e?f#g"), "a%20b%26c%3Dd%2Fe%3Ff%23g");
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("user:pass"), "user%3Apass");
    }

    #[test]
    fn decode_valid_escapes() {
        assert_eq!(decode_component("a%20b%26c"), "a b&c");
        assert_eq!(decode_component("%c3%a9"), "é");
    }

    #[test]
    fn decode_passes_through_malformed_escapes() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz%4"), "%zz%4");
        assert_eq!(decode_component("a%2"), "a%2");
    }

    #[test]
    fn decode_invalid_utf8_keeps_raw() {
        assert_eq!(decode_component("%FF%FE"), "%FF%FE");
        assert_eq!(decode_component("ok%C3"), "ok%C3");
    }
}
