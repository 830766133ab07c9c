//! Cookie records exchanged with the application layer.

use crate::base::bridgeerror::BridgeError;
use crate::cookies::codec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cookie as reported to (or received from) the application layer.
///
/// `http_only` and `expires` are omitted from the serialized form when
/// absent, never written as `false` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: String,
    #[serde(default)]
    pub secure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    /// Absolute expiry in unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
}

/// Cookies produced by one `getCookies` call, in header order.
pub type CookieBatch = Vec<Cookie>;

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: "/".to_string(),
            secure: false,
            http_only: None,
            expires: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// One validated element of a `setCookies` batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookieRecord {
    /// Key passed to the store, see [`codec::resolve_origin`].
    pub origin: String,
    /// Raw cookie string submitted to the store.
    pub cookie_string: String,
}

impl SetCookieRecord {
    /// Validate one batch element.
    ///
    /// `asString` wins when present. Without it, a record carrying `name`
    /// and `value` is serialized with [`codec::encode`]. Anything else is a
    /// [`BridgeError::MissingField`].
    pub fn from_value(index: usize, value: &Value) -> Result<Self, BridgeError> {
        let map = value.as_object().ok_or_else(|| {
            BridgeError::invalid_argument(format!("Expected Map<String,Object> at index {}", index))
        })?;

        let origin = codec::resolve_origin(map.get("origin"), map.get("domain"));

        let cookie_string = match map.get("asString").and_then(scalar_to_string) {
            Some(s) => s,
            None => Self::encode_fields(map).ok_or(BridgeError::MissingField {
                index,
                field: "asString",
            })?,
        };

        Ok(Self {
            origin,
            cookie_string,
        })
    }

    fn encode_fields(map: &Map<String, Value>) -> Option<String> {
        let name = map.get("name")?.as_str().filter(|n| !n.is_empty())?;
        let value = map.get("value").and_then(scalar_to_string)?;

        let cookie = Cookie {
            name: name.to_string(),
            value,
            domain: map
                .get("domain")
                .and_then(Value::as_str)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            path: map
                .get("path")
                .and_then(Value::as_str)
                .filter(|p| !p.is_empty())
                .unwrap_or("/")
                .to_string(),
            secure: map.get("secure").and_then(Value::as_bool).unwrap_or(false),
            http_only: map.get("httpOnly").and_then(Value::as_bool),
            expires: map.get("expires").and_then(Value::as_i64),
        };

        Some(codec::encode(&cookie))
    }
}

/// Stringify a scalar the way a loosely typed caller expects: strings as-is,
/// numbers and booleans via their JSON text. `null` and containers are absent.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_omits_optional_fields() {
        let cookie = Cookie::new("a", "1").with_domain("example.com");
        let value = serde_json::to_value(&cookie).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "a",
                "value": "1",
                "domain": "example.com",
                "path": "/",
                "secure": false
            })
        );
        assert!(value.get("httpOnly").is_none());
        assert!(value.get("expires").is_none());
    }

    #[test]
    fn test_serialize_http_only_false_is_kept() {
        let mut cookie = Cookie::new("a", "1");
        cookie.http_only = Some(false);
        let value = serde_json::to_value(&cookie).unwrap();
        assert_eq!(value["httpOnly"], json!(false));
        assert_eq!(value["domain"], Value::Null);
    }

    #[test]
    fn test_record_prefers_origin() {
        let record = SetCookieRecord::from_value(
            0,
            &json!({"origin": "https://a.example.com", "domain": "example.com", "asString": "a=1"}),
        )
        .unwrap();
        assert_eq!(record.origin, "https://a.example.com");
        assert_eq!(record.cookie_string, "a=1");
    }

    #[test]
    fn test_record_stringifies_scalars() {
        let record =
            SetCookieRecord::from_value(0, &json!({"domain": "example.com", "asString": 42}))
                .unwrap();
        assert_eq!(record.cookie_string, "42");
    }

    #[test]
    fn test_record_encodes_structured_cookie() {
        let record = SetCookieRecord::from_value(
            0,
            &json!({"name": "session", "value": "abc", "domain": "example.com", "secure": true}),
        )
        .unwrap();
        assert_eq!(record.origin, "example.com");
        assert!(record.cookie_string.starts_with("session=abc"));
        assert!(record.cookie_string.contains("Secure"));
        assert!(record.cookie_string.contains("Domain=example.com"));
    }

    #[test]
    fn test_record_missing_value() {
        let record = json!({"domain": "example.com", "asString": null});
        let err = SetCookieRecord::from_value(3, &record).unwrap_err();
        assert_eq!(
            err,
            BridgeError::MissingField {
                index: 3,
                field: "asString"
            }
        );
    }

    #[test]
    fn test_record_not_a_map() {
        let err = SetCookieRecord::from_value(0, &json!("a=1")).unwrap_err();
        assert_eq!(err.code(), "Invalid argument");
    }
}
