//! Decoder configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of the NHTSA vPIC vehicles API.
pub const DEFAULT_API_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// Default cache lifetime: one hour.
pub const DEFAULT_CACHE_DURATION_MS: u64 = 3_600_000;

/// Default remote request timeout: ten seconds.
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 10_000;

/// Settings for [`VinDecoder`](super::VinDecoder).
///
/// Missing keys fall back to the defaults when deserializing, so
/// `{"online": false}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecoderConfig {
    /// Try the remote registry before falling back to offline data.
    pub online: bool,
    /// How long a remote result stays in the cache.
    pub cache_duration_ms: u64,
    /// Timeout handed to the remote client.
    pub remote_timeout_ms: u64,
    /// Base URL handed to the remote client.
    pub api_base_url: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            online: true,
            cache_duration_ms: DEFAULT_CACHE_DURATION_MS,
            remote_timeout_ms: DEFAULT_REMOTE_TIMEOUT_MS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl DecoderConfig {
    /// Configuration that never contacts the remote registry.
    pub fn offline() -> Self {
        Self {
            online: false,
            ..Self::default()
        }
    }

    pub fn with_online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    pub fn with_cache_duration(mut self, duration: Duration) -> Self {
        self.cache_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_remote_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn cache_duration(&self) -> Duration {
        Duration::from_millis(self.cache_duration_ms)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_millis(self.remote_timeout_ms)
    }
}
