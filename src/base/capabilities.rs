//! Platform capability flags.
//!
//! Host cookie stores grow features with platform versions. Instead of
//! branching on the version everywhere, the version is resolved once into a
//! [`Capabilities`] set that the codec and dispatcher consult as plain flags.

/// First API level with asynchronous removal and durable flush.
pub const API_LEVEL_ASYNC_REMOVAL: u32 = 21;

/// First API level able to report the HttpOnly attribute.
pub const API_LEVEL_HTTP_ONLY: u32 = 24;

/// Default API level assumed when the embedder does not supply one.
pub const DEFAULT_API_LEVEL: u32 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// `httpOnly` is reported in decoded cookies.
    pub http_only: bool,
    /// Removal completes through a future instead of synchronously.
    pub async_removal: bool,
    /// The store supports flushing to durable storage.
    pub flush: bool,
}

impl Capabilities {
    pub fn for_api_level(level: u32) -> Self {
        Self {
            http_only: level >= API_LEVEL_HTTP_ONLY,
            async_removal: level >= API_LEVEL_ASYNC_REMOVAL,
            flush: level >= API_LEVEL_ASYNC_REMOVAL,
        }
    }

    /// Every capability enabled.
    pub fn all() -> Self {
        Self {
            http_only: true,
            async_removal: true,
            flush: true,
        }
    }

    /// The oldest supported platform: synchronous removal, no flush, no httpOnly.
    pub fn legacy() -> Self {
        Self {
            http_only: false,
            async_removal: false,
            flush: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_api_level(DEFAULT_API_LEVEL)
    }
}
