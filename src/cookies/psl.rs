//! Public Suffix List (PSL) checks for `Domain=` attributes.
//!
//! The in-memory store refuses cookies scoped to a public suffix such as
//! `com` or `co.uk`, the same way a WebView cookie manager does.
//!
//! Uses Mozilla's Public Suffix List via the `psl` crate.

use psl::{List, Psl};

/// True when `domain` is itself a public suffix (e.g. "com", "co.uk").
pub fn is_public_suffix(domain: &str) -> bool {
    let domain = domain.trim_start_matches('.').to_lowercase();
    List.suffix(domain.as_bytes())
        .is_some_and(|suffix| suffix.as_bytes() == domain.as_bytes())
}

/// Whether a cookie from `host` may be scoped to `cookie_domain`.
///
/// The domain must not be a public suffix and `host` must equal it or be
/// one of its subdomains.
pub fn is_valid_cookie_domain(cookie_domain: &str, host: &str) -> bool {
    let cookie_domain = cookie_domain.trim_start_matches('.').to_lowercase();
    let host = host.to_lowercase();

    if cookie_domain.is_empty() || is_public_suffix(&cookie_domain) {
        return false;
    }

    host == cookie_domain || host.ends_with(&format!(".{}", cookie_domain))
}
