use crate::base::bridgeerror::BridgeError;
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::codec::parse_cookie;
use crate::cookies::persistence;
use crate::cookies::psl;
use crate::cookies::store::{CookieStore, Removing};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::OffsetDateTime;
use url::Url;

/// In-memory cookie store.
/// Modeled after Chromium's `net::CookieMonster`, reduced to the surface a
/// WebView cookie manager exposes.
pub struct CookieMonster {
    // Store: Map<Domain, List<Cookie>>
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
    persist_path: Option<PathBuf>,
}

impl Default for CookieMonster {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieMonster {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            persist_path: None,
        }
    }

    /// A store that writes itself to `path` on every [`CookieStore::flush`].
    pub fn with_persistence(path: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            persist_path: Some(path.into()),
        }
    }

    /// Load a previously flushed store, or start empty when `path` does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BridgeError> {
        let path = path.into();
        let monster = Self::with_persistence(path.clone());
        if path.exists() {
            for cookie in persistence::load_cookies(&path)? {
                monster.set_canonical_cookie(cookie);
            }
        }
        Ok(monster)
    }

    pub fn persist_path(&self) -> Option<&Path> {
        self.persist_path.as_deref()
    }

    pub fn set_canonical_cookie(&self, cookie: CanonicalCookie) {
        let mut entry = self.store.entry(cookie.domain.clone()).or_default();

        // Same name/path on the same domain replaces.
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);
        entry.push(cookie);
    }

    fn delete_cookie(&self, domain: &str, name: &str, path: &str) {
        if let Some(mut entry) = self.store.get_mut(domain) {
            entry.retain(|c| c.name != name || c.path != path);
        }
    }

    /// Parse `cookie_line` as received for `url` and store it.
    ///
    /// Rejected silently (logged) when it does not parse, when its `Domain`
    /// is a public suffix or foreign to the host. An already expired cookie
    /// deletes its stored counterpart.
    pub fn parse_and_save_cookie(&self, url: &Url, cookie_line: &str) {
        let host = url.host_str().unwrap_or("").to_lowercase();
        if host.is_empty() {
            tracing::debug!(url = %url, "ignoring cookie for URL without host");
            return;
        }

        let parsed = match parse_cookie(cookie_line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "failed to parse cookie");
                return;
            }
        };

        let (domain, host_only) = match parsed.domain.as_deref() {
            Some(d) => {
                if !psl::is_valid_cookie_domain(d, &host) {
                    tracing::warn!(domain = %d, host = %host, "rejecting cookie domain");
                    return;
                }
                (d.trim_start_matches('.').to_lowercase(), false)
            }
            None => (host, true),
        };

        if parsed.has_expired() {
            let path = parsed.path.as_deref().unwrap_or("/");
            self.delete_cookie(&domain, &parsed.name, path);
            return;
        }

        let now = OffsetDateTime::now_utc();
        self.set_canonical_cookie(CanonicalCookie::from_parsed(parsed, domain, host_only, now));
    }

    /// Get cookies matching the URL with proper domain suffix matching.
    pub fn get_cookies_for_url(&self, url: &Url) -> Vec<CanonicalCookie> {
        let host = url.host_str().unwrap_or("").to_lowercase();
        let now = OffsetDateTime::now_utc();
        let https = url.scheme() == "https";

        let mut result: Vec<CanonicalCookie> = Self::candidate_domains(&host)
            .iter()
            .filter_map(|domain| self.store.get(domain))
            .flat_map(|entry| {
                entry
                    .iter()
                    .filter(|c| Self::domain_matches(c, &host))
                    .filter(|c| Self::path_matches(&c.path, url.path()))
                    .filter(|c| !c.secure || https)
                    .filter(|c| !c.is_expired(now))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();

        // Longest path first, then oldest first.
        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
        });

        result
    }

    fn domain_matches(cookie: &CanonicalCookie, host: &str) -> bool {
        if cookie.host_only {
            return cookie.domain == host;
        }
        host == cookie.domain || host.ends_with(&format!(".{}", cookie.domain))
    }

    fn path_matches(cookie_path: &str, request_path: &str) -> bool {
        match request_path.strip_prefix(cookie_path) {
            Some(rest) => rest.is_empty() || cookie_path.ends_with('/') || rest.starts_with('/'),
            None => false,
        }
    }

    /// The host itself and every parent domain.
    fn candidate_domains(host: &str) -> Vec<String> {
        let parts: Vec<&str> = host.split('.').collect();
        (0..parts.len().max(1))
            .map(|i| parts[i..].join("."))
            .filter(|d| !d.is_empty())
            .collect()
    }

    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Iterate over all cookies (for persistence).
    pub fn iter_all_cookies(&self) -> impl Iterator<Item = CanonicalCookie> + '_ {
        self.store.iter().flat_map(|entry| entry.value().clone())
    }
}

/// Accepts a full URL or a bare host; a bare host is treated as `http://`.
fn origin_url(origin: &str) -> Option<Url> {
    let origin = origin.trim();
    if origin.is_empty() {
        return None;
    }
    Url::parse(origin)
        .ok()
        .filter(|u| u.host_str().is_some())
        .or_else(|| Url::parse(&format!("http://{}", origin)).ok())
}

impl CookieStore for CookieMonster {
    fn cookie_header(&self, url: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        let header = self
            .get_cookies_for_url(&url)
            .iter()
            .map(CanonicalCookie::to_pair)
            .collect::<Vec<_>>()
            .join("; ");

        if header.is_empty() {
            None
        } else {
            Some(header)
        }
    }

    fn set_cookie(&self, origin: &str, cookie_string: &str) {
        match origin_url(origin) {
            Some(url) => self.parse_and_save_cookie(&url, cookie_string),
            None => tracing::debug!(origin = %origin, "ignoring cookie with unusable origin"),
        }
    }

    fn remove_all_cookies(&self) -> Removing {
        let store = Arc::clone(&self.store);
        Box::pin(async move {
            tokio::task::yield_now().await;
            let removed = store.iter().any(|e| !e.value().is_empty());
            store.clear();
            removed
        })
    }

    fn remove_all_cookies_now(&self) {
        self.clear();
    }

    fn has_cookies(&self) -> bool {
        let now = OffsetDateTime::now_utc();
        self.store
            .iter()
            .any(|e| e.value().iter().any(|c| !c.is_expired(now)))
    }

    fn flush(&self) -> Result<(), BridgeError> {
        match &self.persist_path {
            Some(path) => persistence::save_cookies(self, path),
            None => Ok(()),
        }
    }
}
