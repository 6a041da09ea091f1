//! Reference resolution.

use crate::base::BaseContext;
use crate::error::MalformedUrl;

use super::format::format;
use super::parse::from_url;

/// Resolves `to` against `from`, where `from` is first made absolute against `base`.
///
/// An empty `to` returns `from` as [`format`] writes it after parsing. Otherwise the
/// WHATWG reference-resolution algorithm applies: scheme-bearing references
/// are absolute, path references merge with dot-segment removal, and query-
/// or fragment-only references inherit the preceding components.
pub fn resolve(from: &str, to: &str, base: &BaseContext) -> Result<String, MalformedUrl> {
    let absolute = base.join(from)?;
    if to.is_empty() {
        return Ok(format(&from_url(&absolute)));
    }
    let resolved = absolute
        .join(to)
        .map_err(|e| MalformedUrl::new(to, Some(absolute.as_str()), e))?;
    tracing::trace!(from, to, resolved = resolved.as_str(), "resolved reference");
    Ok(resolved.into())
}
