//! Query string to mapping.

use super::percent::decode_component;
use super::QueryMap;

/// Decodes a raw query string (no leading `?`) into a [`QueryMap`].
///
/// Pairs are split on `&`, then on the first `=`. `+` means space. Empty
/// segments are skipped and a segment without `=` maps its key to `""`.
/// Never fails: malformed escapes are kept as written.
pub fn decode(raw: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for segment in raw.split('&').filter(|s| !s.is_empty()) {
        let segment = segment.replace('+', " ");
        let (key, value) = segment.split_once('=').unwrap_or((segment.as_str(), ""));
        map.append(decode_component(key), decode_component(value));
    }
    map
}
