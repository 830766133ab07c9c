//! Command dispatcher.
//!
//! Maps the four channel methods onto an injected [`CookieStore`]:
//!
//! | Method | Arguments | Reply |
//! |--------|-----------|-------|
//! | `clearCookies` | none | `bool`, cookies left after removal |
//! | `hasCookies` | none | `bool` |
//! | `getCookies` | `{"url": string}` | list of cookie records |
//! | `setCookies` | list of `{origin?, domain?, asString}` | `null` |
//!
//! Anything else is reported as not implemented.

use crate::base::bridgeerror::BridgeError;
use crate::base::capabilities::Capabilities;
use crate::channel::methodcall::{MethodCall, MethodResult};
use crate::channel::methodchannel::{Handling, MethodCallHandler, MethodChannel};
use crate::cookies::codec;
use crate::cookies::serializedcookie::{CookieBatch, SetCookieRecord};
use crate::cookies::store::CookieStore;
use crate::plugin::config::PluginConfig;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ClearCookies,
    HasCookies,
    GetCookies,
    SetCookies,
}

impl Method {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clearCookies" => Some(Method::ClearCookies),
            "hasCookies" => Some(Method::HasCookies),
            "getCookies" => Some(Method::GetCookies),
            "setCookies" => Some(Method::SetCookies),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::ClearCookies => "clearCookies",
            Method::HasCookies => "hasCookies",
            Method::GetCookies => "getCookies",
            Method::SetCookies => "setCookies",
        }
    }
}

/// Exposes a [`CookieStore`] over a method channel.
///
/// Holds no state of its own besides the store handle and the capability
/// flags resolved at construction.
pub struct CookieManagerPlugin {
    store: Arc<dyn CookieStore>,
    capabilities: Capabilities,
}

impl CookieManagerPlugin {
    pub fn new(store: Arc<dyn CookieStore>, capabilities: Capabilities) -> Self {
        Self {
            store,
            capabilities,
        }
    }

    pub fn from_config(store: Arc<dyn CookieStore>, config: &PluginConfig) -> Self {
        Self::new(store, config.capabilities())
    }

    /// Create a channel named by `config` with a plugin attached to it.
    pub fn register(store: Arc<dyn CookieStore>, config: &PluginConfig) -> MethodChannel {
        let channel = MethodChannel::new(config.channel_name.clone());
        Arc::new(Self::from_config(store, config)).attach(&channel);
        channel
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn attach(self: &Arc<Self>, channel: &MethodChannel) {
        tracing::debug!(channel = %channel.name(), "attaching cookie manager");
        channel.set_method_call_handler(Some(Arc::clone(self) as Arc<dyn MethodCallHandler>));
    }

    pub fn detach(channel: &MethodChannel) {
        tracing::debug!(channel = %channel.name(), "detaching cookie manager");
        channel.set_method_call_handler(None);
    }

    /// Remove every cookie and report whether any remain.
    ///
    /// With async removal the reply waits for the store to confirm.
    pub async fn clear_cookies(&self) -> bool {
        if self.capabilities.async_removal {
            let removed = self.store.remove_all_cookies().await;
            tracing::debug!(removed, "cookie removal complete");
        } else {
            self.store.remove_all_cookies_now();
        }
        if self.capabilities.flush {
            self.flush();
        }
        self.store.has_cookies()
    }

    pub fn has_cookies(&self) -> bool {
        self.store.has_cookies()
    }

    pub fn get_cookies(&self, arguments: &Value) -> Result<CookieBatch, BridgeError> {
        let arguments = arguments
            .as_object()
            .ok_or_else(|| BridgeError::invalid_argument("Expected Map<String,String>"))?;

        let url = arguments.get("url").and_then(Value::as_str);
        let header = url.and_then(|url| self.store.cookie_header(url));

        Ok(codec::decode(header.as_deref(), url, self.capabilities))
    }

    /// Validate the whole batch, then apply it in order and flush once.
    ///
    /// A record that fails validation fails the call before any cookie is set.
    pub fn set_cookies(&self, arguments: &Value) -> Result<(), BridgeError> {
        let records = arguments
            .as_array()
            .ok_or_else(|| BridgeError::invalid_argument("Expected List<Map<String,String>>"))?
            .iter()
            .enumerate()
            .map(|(index, record)| SetCookieRecord::from_value(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        for record in &records {
            self.store.set_cookie(&record.origin, &record.cookie_string);
        }

        if self.capabilities.flush {
            self.flush();
        }
        Ok(())
    }

    fn flush(&self) {
        if let Err(e) = self.store.flush() {
            tracing::warn!(error = %e, "cookie store flush failed");
        }
    }

    pub async fn handle(&self, call: &MethodCall) -> MethodResult {
        let Some(method) = Method::from_name(&call.method) else {
            tracing::debug!(method = %call.method, "method not implemented");
            return MethodResult::NotImplemented;
        };
        tracing::debug!(method = method.name(), "dispatching");

        let result = match method {
            Method::ClearCookies => Ok(Value::Bool(self.clear_cookies().await)),
            Method::HasCookies => Ok(Value::Bool(self.has_cookies())),
            Method::GetCookies => self.get_cookies(&call.arguments).and_then(|cookies| {
                serde_json::to_value(cookies)
                    .map_err(|e| BridgeError::malformed_message(e.to_string()))
            }),
            Method::SetCookies => self.set_cookies(&call.arguments).map(|_| Value::Null),
        };

        match result {
            Ok(value) => MethodResult::Success(value),
            Err(e) => {
                tracing::debug!(method = method.name(), error = %e, "method failed");
                e.to_method_result()
            }
        }
    }
}

impl MethodCallHandler for CookieManagerPlugin {
    fn on_method_call(&self, call: MethodCall) -> Handling<'_> {
        Box::pin(async move { self.handle(&call).await })
    }
}
