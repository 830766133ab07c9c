//! Conversion between platform cookie strings and [`Cookie`] records.
//!
//! The platform store hands out cookies as a single request-style header
//! (`a=1; b=2`) and accepts them as `Set-Cookie` style strings. Decoding
//! splits the header on `;` and strictly parses every segment; a segment
//! that does not parse is dropped without failing the batch.

use crate::base::bridgeerror::BridgeError;
use crate::base::capabilities::Capabilities;
use crate::cookies::serializedcookie::{Cookie, CookieBatch};
use cookie::Cookie as RawCookie;
use serde_json::Value;
use time::{Duration, OffsetDateTime};
use url::Url;

/// Attribute names that can never be used as a cookie name.
const RESERVED_NAMES: &[&str] = &[
    "comment",
    "commenturl",
    "discard",
    "domain",
    "expires",
    "max-age",
    "path",
    "port",
    "secure",
    "version",
    "httponly",
];

/// A single strictly parsed cookie string, before defaults are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    /// Lifetime in seconds. `None` when neither `Max-Age` nor `Expires` was given.
    pub max_age: Option<i64>,
    pub secure: bool,
    pub http_only: bool,
    pub discard: bool,
}

impl ParsedCookie {
    pub fn has_expired(&self) -> bool {
        self.max_age == Some(0)
    }

    /// Absolute expiry for a persistent, still valid cookie.
    pub fn expires_at(&self, now: OffsetDateTime) -> Option<i64> {
        match self.max_age {
            Some(max_age) if max_age > 0 && !self.has_expired() && !self.discard => now
                .checked_add(Duration::seconds(max_age))
                .map(OffsetDateTime::unix_timestamp),
            _ => None,
        }
    }
}

/// Parse one cookie string following the `Set-Cookie` grammar.
///
/// The first pair is the name/value, every following pair is an attribute.
pub fn parse_cookie(segment: &str) -> Result<ParsedCookie, BridgeError> {
    parse_cookie_at(segment, OffsetDateTime::now_utc())
}

fn parse_cookie_at(segment: &str, now: OffsetDateTime) -> Result<ParsedCookie, BridgeError> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Err(BridgeError::cookie_parse("empty cookie string"));
    }

    let pair = segment.split(';').next().unwrap_or_default();
    let (name, _) = pair
        .split_once('=')
        .ok_or_else(|| BridgeError::cookie_parse("invalid cookie name-value pair"))?;
    validate_name(name.trim())?;

    let raw = RawCookie::parse(segment).map_err(|e| BridgeError::cookie_parse(e.to_string()))?;

    let max_age = match (raw.max_age(), raw.expires_datetime()) {
        (Some(max_age), _) => Some(max_age.whole_seconds().max(0)),
        (None, Some(expires)) => Some((expires - now).whole_seconds().max(0)),
        (None, None) => None,
    };

    Ok(ParsedCookie {
        name: raw.name().to_string(),
        value: unquote(raw.value()).to_string(),
        domain: raw.domain().map(str::to_string),
        path: raw.path().map(str::to_string),
        max_age,
        secure: raw.secure().unwrap_or(false),
        http_only: raw.http_only().unwrap_or(false),
        discard: has_discard(segment),
    })
}

fn validate_name(name: &str) -> Result<(), BridgeError> {
    if name.is_empty() {
        return Err(BridgeError::cookie_parse("empty cookie name"));
    }
    if name.chars().any(|c| c.is_control() || !c.is_ascii() || is_separator(c)) {
        return Err(BridgeError::cookie_parse(format!("illegal cookie name: {}", name)));
    }
    if name.starts_with('$') || RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
        return Err(BridgeError::cookie_parse(format!("reserved cookie name: {}", name)));
    }
    Ok(())
}

// RFC 2616 `separators`; a token may contain none of them.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '<'
            | '>'
            | '@'
            | ','
            | ';'
            | ':'
            | '\\'
            | '"'
            | '/'
            | '['
            | ']'
            | '?'
            | '='
            | '{'
            | '}'
            | ' '
            | '\t'
    )
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

// `Discard` is a RFC 2965 attribute the `cookie` crate does not model.
fn has_discard(segment: &str) -> bool {
    segment.split(';').skip(1).any(|attr| {
        attr.split('=')
            .next()
            .is_some_and(|key| key.trim().eq_ignore_ascii_case("discard"))
    })
}

/// Host component of `url`, if it parses and has one.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

/// Decode the platform's cookie header for `url` into structured records.
///
/// Returns an empty batch when either input is absent.
pub fn decode(header: Option<&str>, url: Option<&str>, caps: Capabilities) -> CookieBatch {
    decode_at(header, url, caps, OffsetDateTime::now_utc())
}

pub(crate) fn decode_at(
    header: Option<&str>,
    url: Option<&str>,
    caps: Capabilities,
    now: OffsetDateTime,
) -> CookieBatch {
    let (Some(header), Some(url)) = (header, url) else {
        return Vec::new();
    };
    let host = host_of(url);

    header
        .split(';')
        .filter_map(|segment| match parse_cookie_at(segment, now) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::trace!(segment = %segment, error = %e, "dropping malformed cookie");
                None
            }
        })
        .map(|parsed| to_cookie(parsed, host.as_deref(), caps, now))
        .collect()
}

fn to_cookie(
    parsed: ParsedCookie,
    host: Option<&str>,
    caps: Capabilities,
    now: OffsetDateTime,
) -> Cookie {
    let expires = parsed.expires_at(now);
    Cookie {
        domain: parsed.domain.or_else(|| host.map(str::to_string)),
        path: parsed.path.unwrap_or_else(|| "/".to_string()),
        secure: parsed.secure,
        http_only: caps.http_only.then_some(parsed.http_only),
        expires,
        name: parsed.name,
        value: parsed.value,
    }
}

/// Serialize a record into a cookie string the platform store accepts.
pub fn encode(cookie: &Cookie) -> String {
    let mut builder = RawCookie::build((cookie.name.clone(), cookie.value.clone()))
        .path(cookie.path.clone())
        .secure(cookie.secure);

    if let Some(domain) = cookie.domain.as_deref().filter(|d| !d.is_empty()) {
        builder = builder.domain(domain.to_string());
    }
    if let Some(http_only) = cookie.http_only {
        builder = builder.http_only(http_only);
    }
    if let Some(expires) = cookie
        .expires
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
    {
        builder = builder.expires(expires);
    }

    builder.build().to_string()
}

/// Pick the key a cookie is set under: a non-empty string `origin`, else a
/// non-empty string `domain`, else the empty string.
pub fn resolve_origin(origin: Option<&Value>, domain: Option<&Value>) -> String {
    [origin, domain]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}
