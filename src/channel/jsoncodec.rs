//! JSON method codec.
//!
//! Wire format of the method channel:
//!
//! | Message | Encoding |
//! |---------|----------|
//! | method call | `{"method": "<name>", "args": <value>}` |
//! | success | `[<result>]` |
//! | error | `[<code>, <message>, <details>]` |
//! | not implemented | empty payload |

use crate::base::bridgeerror::BridgeError;
use crate::channel::methodcall::{MethodCall, MethodResult};
use bytes::Bytes;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMethodCodec;

impl JsonMethodCodec {
    pub fn encode_method_call(&self, call: &MethodCall) -> Bytes {
        to_bytes(&json!({ "method": call.method, "args": call.arguments }))
    }

    pub fn decode_method_call(&self, message: &[u8]) -> Result<MethodCall, BridgeError> {
        let value: Value = serde_json::from_slice(message)
            .map_err(|e| BridgeError::malformed_message(e.to_string()))?;

        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(BridgeError::malformed_message(format!(
                    "expected method call object, got {}",
                    other
                )))
            }
        };

        let method = match map.remove("method") {
            Some(Value::String(method)) => method,
            _ => return Err(BridgeError::malformed_message("missing method name")),
        };
        let arguments = map.remove("args").unwrap_or(Value::Null);

        Ok(MethodCall { method, arguments })
    }

    pub fn encode_success_envelope(&self, result: &Value) -> Bytes {
        to_bytes(&json!([result]))
    }

    pub fn encode_error_envelope(
        &self,
        code: &str,
        message: Option<&str>,
        details: Option<&Value>,
    ) -> Bytes {
        to_bytes(&json!([code, message, details]))
    }

    /// Encode any reply. `NotImplemented` becomes an empty payload.
    pub fn encode_result(&self, result: &MethodResult) -> Bytes {
        match result {
            MethodResult::Success(value) => self.encode_success_envelope(value),
            MethodResult::Error {
                code,
                message,
                details,
            } => self.encode_error_envelope(code, message.as_deref(), details.as_ref()),
            MethodResult::NotImplemented => Bytes::new(),
        }
    }

    /// Decode a reply envelope into its result, or the error it carries.
    pub fn decode_envelope(&self, envelope: &[u8]) -> Result<Value, BridgeError> {
        let value: Value = serde_json::from_slice(envelope)
            .map_err(|e| BridgeError::malformed_message(e.to_string()))?;

        match value {
            Value::Array(mut items) if items.len() == 1 => Ok(items.remove(0)),
            Value::Array(items) if items.len() == 3 => {
                let code = items[0]
                    .as_str()
                    .ok_or_else(|| BridgeError::malformed_message("error code must be a string"))?;
                Err(BridgeError::PlatformError {
                    code: code.to_string(),
                    message: items[1].as_str().map(str::to_string),
                    details: Some(items[2].clone()).filter(|d| !d.is_null()),
                })
            }
            other => Err(BridgeError::malformed_message(format!(
                "invalid envelope: {}",
                other
            ))),
        }
    }
}

fn to_bytes(value: &Value) -> Bytes {
    // Serializing a `Value` cannot fail.
    Bytes::from(value.to_string())
}
