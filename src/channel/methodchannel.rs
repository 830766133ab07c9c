//! Named request/response channel between the application layer and a handler.

#[cfg(feature = "json")]
use crate::base::bridgeerror::BridgeError;
#[cfg(feature = "json")]
use crate::channel::jsoncodec::JsonMethodCodec;
use crate::channel::methodcall::{MethodCall, MethodResult};
#[cfg(feature = "json")]
use bytes::Bytes;
use std::sync::{Arc, PoisonError, RwLock};
use std::{fmt, future::Future, pin::Pin};

/// Alias for the `Future` type returned by a method call handler.
pub type Handling<'a> = Pin<Box<dyn Future<Output = MethodResult> + Send + 'a>>;

/// Receives the calls of one channel.
pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: MethodCall) -> Handling<'_>;
}

pub struct MethodChannel {
    name: String,
    handler: RwLock<Option<Arc<dyn MethodCallHandler>>>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handler: RwLock::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install or, with `None`, remove the handler.
    pub fn set_method_call_handler(&self, handler: Option<Arc<dyn MethodCallHandler>>) {
        *self.handler.write().unwrap_or_else(PoisonError::into_inner) = handler;
    }

    pub fn has_handler(&self) -> bool {
        self.handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Route `call` to the handler. Without one the call is not implemented.
    pub async fn invoke(&self, call: MethodCall) -> MethodResult {
        let handler = self
            .handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match handler {
            Some(handler) => handler.on_method_call(call).await,
            None => {
                tracing::debug!(channel = %self.name, method = %call.method, "no handler attached");
                MethodResult::NotImplemented
            }
        }
    }

    /// Decode an encoded call, invoke it and encode the reply.
    #[cfg(feature = "json")]
    pub async fn send(&self, message: &[u8]) -> Result<Bytes, BridgeError> {
        let codec = JsonMethodCodec;
        let call = codec.decode_method_call(message)?;
        let result = self.invoke(call).await;
        Ok(codec.encode_result(&result))
    }
}

impl fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodChannel")
            .field("name", &self.name)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    impl MethodCallHandler for Echo {
        fn on_method_call(&self, call: MethodCall) -> Handling<'_> {
            Box::pin(async move {
                match call.method.as_str() {
                    "echo" => MethodResult::Success(call.arguments),
                    _ => MethodResult::NotImplemented,
                }
            })
        }
    }

    #[tokio::test]
    async fn test_invoke_without_handler() {
        let channel = MethodChannel::new("test");
        let result = channel.invoke(MethodCall::bare("echo")).await;
        assert_eq!(result, MethodResult::NotImplemented);
    }

    #[tokio::test]
    async fn test_handler_lifecycle() {
        let channel = MethodChannel::new("test");
        channel.set_method_call_handler(Some(Arc::new(Echo)));
        assert!(channel.has_handler());

        let result = channel.invoke(MethodCall::new("echo", json!(1))).await;
        assert_eq!(result, MethodResult::success(1));

        channel.set_method_call_handler(None);
        let result = channel.invoke(MethodCall::new("echo", json!(1))).await;
        assert_eq!(result, MethodResult::NotImplemented);
    }

    #[cfg(feature = "json")]
    #[tokio::test]
    async fn test_send_encoded() {
        let channel = MethodChannel::new("test");
        channel.set_method_call_handler(Some(Arc::new(Echo)));

        let reply = channel
            .send(br#"{"method":"echo","args":{"a":1}}"#)
            .await
            .unwrap();
        assert_eq!(&reply[..], br#"[{"a":1}]"#);

        let reply = channel.send(br#"{"method":"nope"}"#).await.unwrap();
        assert!(reply.is_empty());

        assert!(channel.send(b"garbage").await.is_err());
    }
}
