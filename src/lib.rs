//! # webviewcookies
//!
//! A bridge exposing a host WebView cookie store to an application layer.
//!
//! The application sends named method calls over a request/response channel;
//! `webviewcookies` forwards them to the platform cookie store and serializes
//! the result back. The only logic of its own is the cookie codec: turning
//! the store's `a=1; b=2` headers into structured records and records back
//! into cookie strings.
//!
//! ## Features
//!
//! - **Cookie Codec**: strict `Set-Cookie` parsing with domain/path defaults and expiry
//! - **Dispatcher**: `clearCookies`, `hasCookies`, `getCookies`, `setCookies`
//! - **Method Channel**: JSON wire codec with success/error envelopes
//! - **Capabilities**: platform version resolved once into feature flags
//! - **Reference Store**: in-memory cookie store with PSL checks and JSON flush
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use webviewcookies::cookies::monster::CookieMonster;
//! use webviewcookies::plugin::config::PluginConfig;
//! use webviewcookies::plugin::dispatcher::CookieManagerPlugin;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = PluginConfig::default();
//!     let store = Arc::new(config.open_store().unwrap());
//!     let channel = CookieManagerPlugin::register(store, &config);
//!
//!     let reply = channel
//!         .send(br#"{"method":"getCookies","args":{"url":"https://example.com"}}"#)
//!         .await
//!         .unwrap();
//!     println!("{}", String::from_utf8_lossy(&reply));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy and capability flags
//! - [`channel`] - Method calls, replies, JSON codec and channel routing
//! - [`cookies`] - Cookie records, codec, store trait and in-memory store
//! - [`plugin`] - Configuration and the command dispatcher

pub mod base;
pub mod channel;
pub mod cookies;
pub mod plugin;
