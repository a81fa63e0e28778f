//! Request header resolution.
//!
//! Missing credentials never fail a call locally. The request goes out
//! without the `api-key` header and Rocketlane's 401 surfaces as an
//! [`crate::RocketlaneError::Api`].

use crate::credentials::{CredentialStore, Credentials};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, error, warn};

/// Header Rocketlane reads the API key from.
pub const API_KEY_HEADER: &str = "api-key";

/// Credential keys checked for the API key, in order.
pub const API_KEY_NAMES: [&str; 3] = ["api_key", "API_KEY", "apiKey"];

/// First non-empty API key found under one of [`API_KEY_NAMES`].
pub fn find_api_key(credentials: &Credentials) -> Option<&str> {
    API_KEY_NAMES
        .iter()
        .filter_map(|name| credentials.get(*name))
        .map(String::as_str)
        .find(|key| !key.is_empty())
}

/// Build the headers for one request.
pub fn resolve_headers(store: Option<&dyn CredentialStore>) -> HeaderMap {
    let Some(store) = store else {
        warn!("No credential store configured, sending request without headers");
        return HeaderMap::new();
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    let credentials = store.credentials();
    let Some(api_key) = find_api_key(&credentials) else {
        error!("API key not found in credentials");
        return headers;
    };

    match HeaderValue::from_str(api_key) {
        Ok(mut value) => {
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
            debug!("Using api-key header for authentication");
        }
        Err(_) => error!("API key contains characters not allowed in a header"),
    }

    headers
}
