//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting IO and JSON errors into context-rich `BridgeError` variants.

use crate::base::bridgeerror::BridgeError;
use std::path::Path;

/// Extension trait for adding file context to fallible persistence calls.
pub trait ResultExt<T> {
    /// Attach the path being read or written.
    ///
    /// # Example
    /// ```ignore
    /// use webviewcookies::base::context::ResultExt;
    ///
    /// let json = std::fs::read_to_string(path).path_context(path)?;
    /// // Error: "Persistence error at /tmp/cookies.json: No such file or directory"
    /// ```
    fn path_context(self, path: &Path) -> Result<T, BridgeError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn path_context(self, path: &Path) -> Result<T, BridgeError> {
        self.map_err(|e| BridgeError::persistence(path.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Error, ErrorKind};

    #[test]
    fn test_path_context_io() {
        let result: Result<(), io::Error> = Err(Error::new(ErrorKind::NotFound, "missing"));
        let err = result
            .path_context(Path::new("/tmp/cookies.json"))
            .unwrap_err();

        match err {
            BridgeError::Persistence { path, message } => {
                assert_eq!(path, "/tmp/cookies.json");
                assert_eq!(message, "missing");
            }
            _ => panic!("Expected Persistence"),
        }
    }

    #[test]
    fn test_path_context_json() {
        let result: Result<Vec<u8>, serde_json::Error> = serde_json::from_str("not json");
        let err = result.path_context(Path::new("cookies.json")).unwrap_err();
        assert_eq!(err.code(), "Persistence error");
    }
}
