//! The platform cookie store surface.
//!
//! This is everything the codec and the dispatcher need from the host: a
//! header lookup, a setter, removal, a presence check and a durable flush.
//! Embedders wrap their native cookie manager in this trait; the crate ships
//! [`CookieMonster`](crate::cookies::monster::CookieMonster) as an in-memory
//! implementation.

use crate::base::bridgeerror::BridgeError;
use std::{future::Future, pin::Pin};

/// Future returned by [`CookieStore::remove_all_cookies`].
///
/// Resolves to `true` when any cookie was removed.
pub type Removing = Pin<Box<dyn Future<Output = bool> + Send>>;

/// Host cookie store.
///
/// # Design Notes
///
/// - Uses `&self`; implementations synchronize internally.
/// - Removal returns a boxed future for trait object compatibility.
/// - Implementations must be thread-safe.
pub trait CookieStore: Send + Sync {
    /// Request-style cookie header for `url` (`a=1; b=2`), or `None` when
    /// no cookie matches.
    fn cookie_header(&self, url: &str) -> Option<String>;

    /// Store one `Set-Cookie` style string under `origin`.
    ///
    /// `origin` may be a URL, a bare host, or empty. Invalid input is
    /// ignored the way a browser ignores a bad `Set-Cookie` header.
    fn set_cookie(&self, origin: &str, cookie_string: &str);

    /// Remove every cookie. The returned future completes once removal is done.
    fn remove_all_cookies(&self) -> Removing;

    /// Remove every cookie synchronously, for platforms without async removal.
    fn remove_all_cookies_now(&self);

    fn has_cookies(&self) -> bool;

    /// Write pending state to durable storage.
    fn flush(&self) -> Result<(), BridgeError>;
}
