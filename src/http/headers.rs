//! Default header set and header merging.
//!
//! Every outbound request starts from a fixed default header set (currently
//! just a `User-Agent` identifying this crate). Callers layer their own
//! headers on top with [`merge`], which always produces a fresh map and never
//! mutates its inputs.
//!
//! Header names are compared case-insensitively, as HTTP requires:
//! [`HeaderMap`] lowercases names on insertion, so `User-Agent` and
//! `user-agent` are the same key.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

/// `User-Agent` value sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("stubborn/", env!("CARGO_PKG_VERSION"));

/// Returns the fixed default header set applied to every outbound request.
///
/// A fresh map is built on each call so no caller can mutate shared state.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// Merges `overrides` over `defaults` into a fresh [`HeaderMap`].
///
/// Every header name present in `overrides` replaces the corresponding
/// entry in `defaults` (all of its values, for multi-valued headers); names
/// absent from `overrides` keep their default values. Neither input is
/// mutated, and merging the same inputs twice yields equal results.
pub fn merge(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for name in overrides.keys() {
        merged.remove(name);
    }
    for (name, value) in overrides {
        merged.append(name, value.clone());
    }
    merged
}
