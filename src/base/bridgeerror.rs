use crate::channel::methodcall::MethodResult;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BridgeError {
    // Argument Errors
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
    #[error("Cookie record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    // Codec Errors
    #[error("Cookie parse error: {reason}")]
    CookieParse { reason: String },
    #[error("Malformed channel message: {reason}")]
    MalformedMessage { reason: String },

    // Platform Errors
    #[error("Platform error {code}: {}", .message.as_deref().unwrap_or(""))]
    PlatformError {
        code: String,
        message: Option<String>,
        details: Option<Value>,
    },
    #[error("Persistence error at {path}: {message}")]
    Persistence { path: String, message: String },
}

impl BridgeError {
    /// Error code reported to the application layer.
    pub fn code(&self) -> &str {
        match self {
            BridgeError::InvalidArgument { .. } => "Invalid argument",
            BridgeError::MissingField { .. } => "Missing field",
            BridgeError::CookieParse { .. } => "Cookie parse error",
            BridgeError::MalformedMessage { .. } => "Malformed message",
            BridgeError::PlatformError { code, .. } => code,
            BridgeError::Persistence { .. } => "Persistence error",
        }
    }

    /// Human-readable message without the code prefix.
    pub fn message(&self) -> Option<String> {
        match self {
            BridgeError::InvalidArgument { message } => Some(message.clone()),
            BridgeError::PlatformError { message, .. } => message.clone(),
            other => Some(other.to_string()),
        }
    }

    /// Build the error reply for this failure.
    pub fn to_method_result(&self) -> MethodResult {
        let details = match self {
            BridgeError::PlatformError { details, .. } => details.clone(),
            BridgeError::MissingField { index, field } => {
                Some(serde_json::json!({ "index": index, "field": field }))
            }
            _ => None,
        };
        MethodResult::Error {
            code: self.code().to_string(),
            message: self.message(),
            details,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BridgeError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn cookie_parse(reason: impl Into<String>) -> Self {
        BridgeError::CookieParse {
            reason: reason.into(),
        }
    }

    pub fn malformed_message(reason: impl Into<String>) -> Self {
        BridgeError::MalformedMessage {
            reason: reason.into(),
        }
    }

    pub fn persistence(path: impl Into<String>, message: impl Into<String>) -> Self {
        BridgeError::Persistence {
            path: path.into(),
            message: message.into(),
        }
    }
}
