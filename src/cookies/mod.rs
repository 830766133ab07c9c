//! Cookie records, the cookie string codec and the store abstraction.
//!
//! - **Codec**: [`codec::decode`] / [`codec::encode`] between platform cookie
//!   strings and [`Cookie`](serializedcookie::Cookie) records
//! - **Store**: the [`CookieStore`](store::CookieStore) trait a host cookie
//!   manager is wrapped in
//! - **Reference store**: [`CookieMonster`](monster::CookieMonster), an
//!   in-memory store with optional JSON [`persistence`]
//!
//! # Architecture
//!
//! | Platform | webviewcookies (Rust) | Responsibility |
//! |----------|-----------------------|----------------|
//! | `CookieManager` | [`CookieStore`](store::CookieStore) | Storage, lookup, removal, flush |
//! | `HttpCookie.parse` | [`codec::parse_cookie`] | Strict `Set-Cookie` parsing |
//! | cookie map | [`Cookie`](serializedcookie::Cookie) | Record sent to the application |
//!
//! # Decoding a cookie header
//!
//! ```rust
//! use webviewcookies::base::capabilities::Capabilities;
//! use webviewcookies::cookies::codec;
//!
//! let cookies = codec::decode(Some("a=1; b=2"), Some("http://example.com/"), Capabilities::all());
//! assert_eq!(cookies.len(), 2);
//! assert_eq!(cookies[0].domain.as_deref(), Some("example.com"));
//! assert_eq!(cookies[0].path, "/");
//! ```

pub mod canonicalcookie;
pub mod codec;
pub mod monster;
pub mod persistence;
pub mod psl;
pub mod serializedcookie;
pub mod store;
