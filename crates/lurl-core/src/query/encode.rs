//! Mapping to query string.

use super::percent::encode_component;
use super::QueryMap;

/// Encodes a [`QueryMap`] as `k=v` pairs joined by `&`, without a leading `?`.
///
/// A multi-valued key emits one pair per value, in order. An empty mapping
/// (or one whose sequences are all empty) yields `""`.
pub fn encode(map: &QueryMap) -> String {
    let mut pairs: Vec<String> = Vec::new();
    for (key, value) in map {
        let key = encode_component(key);
        pairs.extend(
            value
                .values()
                .iter()
                .map(|v| format!("{}={}", key, encode_component(v))),
        );
    }
    pairs.join("&")
}
