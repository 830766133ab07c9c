//! Plugin configuration.

use crate::base::bridgeerror::BridgeError;
use crate::base::capabilities::{Capabilities, DEFAULT_API_LEVEL};
use crate::cookies::monster::CookieMonster;
use std::path::PathBuf;

/// Name of the channel the application layer talks to.
pub const CHANNEL_NAME: &str = "webview_cookie_manager";

/// Configuration options for [`CookieManagerPlugin`](super::dispatcher::CookieManagerPlugin).
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Channel the plugin is registered on.
    pub channel_name: String,

    /// Platform API level capabilities are derived from.
    pub api_level: u32,

    /// Where the in-memory store flushes to (None = memory only).
    pub persist_path: Option<PathBuf>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            channel_name: CHANNEL_NAME.to_string(),
            api_level: DEFAULT_API_LEVEL,
            persist_path: None,
        }
    }
}

impl PluginConfig {
    pub fn with_api_level(mut self, api_level: u32) -> Self {
        self.api_level = api_level;
        self
    }

    pub fn with_persist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.persist_path = Some(path.into());
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_api_level(self.api_level)
    }

    /// The in-memory store this configuration describes, restored from
    /// `persist_path` when one is set.
    pub fn open_store(&self) -> Result<CookieMonster, BridgeError> {
        match &self.persist_path {
            Some(path) => CookieMonster::open(path.clone()),
            None => Ok(CookieMonster::new()),
        }
    }
}
