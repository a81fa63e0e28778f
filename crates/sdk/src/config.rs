//! Configuration types for the Rocketlane SDK.

use std::time::Duration;
use url::Url;

/// Rocketlane's public API root. The API version is appended per request.
pub const DEFAULT_BASE_URL: &str = "https://api.rocketlane.com/api";

/// Version segment placed between the base URL and every resource path.
pub const API_VERSION: &str = "1.0";

/// Configuration for the Rocketlane client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, without the API version.
    pub base_url: Url,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }
}
