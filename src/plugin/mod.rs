//! The cookie manager plugin: configuration and command dispatch.
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use webviewcookies::channel::methodcall::{MethodCall, MethodResult};
//! use webviewcookies::cookies::monster::CookieMonster;
//! use webviewcookies::plugin::config::PluginConfig;
//! use webviewcookies::plugin::dispatcher::CookieManagerPlugin;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = Arc::new(CookieMonster::new());
//! let channel = CookieManagerPlugin::register(store, &PluginConfig::default());
//!
//! let call = MethodCall::new("setCookies", json!([{"domain": "example.com", "asString": "a=1"}]));
//! assert!(channel.invoke(call).await.is_success());
//!
//! let has = channel.invoke(MethodCall::bare("hasCookies")).await;
//! assert_eq!(has, MethodResult::success(true));
//! # });
//! ```

pub mod config;
pub mod dispatcher;
