//! Cookie persistence - save and load cookies to/from disk.
//!
//! Backs [`CookieStore::flush`](crate::cookies::store::CookieStore::flush)
//! for the in-memory store with a JSON file.

use crate::base::bridgeerror::BridgeError;
use crate::base::context::ResultExt;
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::monster::CookieMonster;
use std::fs;
use std::path::Path;
use time::OffsetDateTime;

use serde::{Deserialize, Serialize};

/// Serializable representation of a cookie for persistence.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PersistentCookie {
    name: String,
    value: String,
    domain: String,
    path: String,
    secure: bool,
    http_only: bool,
    host_only: bool,
    created_unix_secs: i64,
    expires_unix_secs: Option<i64>,
}

impl From<CanonicalCookie> for PersistentCookie {
    fn from(cookie: CanonicalCookie) -> Self {
        Self {
            name: cookie.name,
            value: cookie.value,
            domain: cookie.domain,
            path: cookie.path,
            secure: cookie.secure,
            http_only: cookie.http_only,
            host_only: cookie.host_only,
            created_unix_secs: cookie.creation_time.unix_timestamp(),
            expires_unix_secs: cookie.expiration_time.map(|t| t.unix_timestamp()),
        }
    }
}

/// Save every cookie of `monster` to `path`.
///
/// Session cookies are written too; the store outlives a single page load.
pub fn save_cookies(monster: &CookieMonster, path: &Path) -> Result<(), BridgeError> {
    let all_cookies: Vec<PersistentCookie> =
        monster.iter_all_cookies().map(PersistentCookie::from).collect();

    let json = serde_json::to_string_pretty(&all_cookies).path_context(path)?;
    fs::write(path, json).path_context(path)?;

    tracing::debug!(path = %path.display(), count = all_cookies.len(), "flushed cookies");
    Ok(())
}

/// Load cookies saved by [`save_cookies`], skipping the ones that expired since.
pub fn load_cookies(path: &Path) -> Result<Vec<CanonicalCookie>, BridgeError> {
    let json = fs::read_to_string(path).path_context(path)?;
    let persistent_cookies: Vec<PersistentCookie> = serde_json::from_str(&json).path_context(path)?;

    let now = OffsetDateTime::now_utc();
    let cookies = persistent_cookies
        .into_iter()
        .filter_map(|pc| {
            let expiration_time = match pc.expires_unix_secs {
                Some(secs) => Some(OffsetDateTime::from_unix_timestamp(secs).ok()?),
                None => None,
            };
            let creation_time =
                OffsetDateTime::from_unix_timestamp(pc.created_unix_secs).unwrap_or(now);

            let cookie = CanonicalCookie {
                name: pc.name,
                value: pc.value,
                domain: pc.domain,
                path: pc.path,
                creation_time,
                expiration_time,
                secure: pc.secure,
                http_only: pc.http_only,
                host_only: pc.host_only,
            };
            (!cookie.is_expired(now)).then_some(cookie)
        })
        .collect();

    Ok(cookies)
}
