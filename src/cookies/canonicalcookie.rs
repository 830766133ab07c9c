use crate::cookies::codec::ParsedCookie;
use time::{Duration, OffsetDateTime};

/// Represents a cookie held by the in-memory store.
/// Modeled after Chromium's `net::CanonicalCookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
    pub host_only: bool,
}

impl CanonicalCookie {
    /// Build a stored cookie from a parsed `Set-Cookie` string.
    ///
    /// `domain` is the already validated, lowercased domain; `host_only` is
    /// true when the string carried no `Domain` attribute.
    pub fn from_parsed(
        parsed: ParsedCookie,
        domain: String,
        host_only: bool,
        now: OffsetDateTime,
    ) -> Self {
        let expiration_time = match parsed.max_age {
            Some(_) if parsed.discard => None,
            Some(secs) => now.checked_add(Duration::seconds(secs)),
            None => None,
        };

        Self {
            name: parsed.name,
            value: parsed.value,
            domain,
            path: parsed.path.unwrap_or_else(|| "/".to_string()),
            creation_time: now,
            expiration_time,
            secure: parsed.secure,
            http_only: parsed.http_only,
            host_only,
        }
    }

    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expiration_time {
            Some(expiry) => expiry <= current_time,
            None => false,
        }
    }

    /// Request-header form, `name=value`.
    pub fn to_pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}
