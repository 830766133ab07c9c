use serde_json::Value;

/// A named invocation arriving from the application layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    /// Arguments as sent; `Value::Null` when the caller passed none.
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call without arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }
}

/// The single reply every call produces.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResult {
    Success(Value),
    Error {
        code: String,
        message: Option<String>,
        details: Option<Value>,
    },
    /// The handler does not know the method. Not a failure.
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResult::Success(value.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success(_))
    }

    /// The success payload, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            MethodResult::Success(v) => Some(v),
            _ => None,
        }
    }
}
