//! Credential sources.
//!
//! A [`CredentialStore`] hands out a flat key/value mapping. The header
//! resolver in [`crate::auth`] looks for the API key under any of the
//! accepted names, so stores do not need to agree on a single key.

use std::collections::HashMap;
use tracing::debug;

/// Credential mapping, e.g. `{"api_key": "..."}`.
pub type Credentials = HashMap<String, String>;

/// Environment variable read by [`EnvCredentialStore::default`].
pub const DEFAULT_API_KEY_ENV: &str = "ROCKETLANE_API_KEY";

/// Source of API key material.
pub trait CredentialStore: Send + Sync {
    /// Current credentials. Called once per request.
    fn credentials(&self) -> Credentials;
}

/// Reads the API key from an environment variable on every lookup.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    var: String,
}

impl EnvCredentialStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialStore for EnvCredentialStore {
    fn credentials(&self) -> Credentials {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => {
                Credentials::from([("api_key".to_string(), value)])
            }
            _ => {
                debug!(var = %self.var, "API key environment variable is not set");
                Credentials::new()
            }
        }
    }
}

/// Fixed credentials, useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    credentials: Credentials,
}

impl StaticCredentialStore {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Store holding a single API key under `api_key`.
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::new(Credentials::from([("api_key".to_string(), api_key.into())]))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticCredentialStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl CredentialStore for StaticCredentialStore {
    fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_reads_variable() {
        let var = "ROCKETLANE_SDK_TEST_KEY_PRESENT";
        std::env::set_var(var, "rl-secret");

        let creds = EnvCredentialStore::new(var).credentials();
        assert_eq!(creds.get("api_key").map(String::as_str), Some("rl-secret"));

        std::env::remove_var(var);
    }

    #[test]
    fn test_env_store_missing_variable() {
        let store = EnvCredentialStore::new("ROCKETLANE_SDK_TEST_KEY_ABSENT");
        assert!(store.credentials().is_empty());
    }

    #[test]
    fn test_env_store_default_var() {
        assert_eq!(EnvCredentialStore::default().var(), "ROCKETLANE_API_KEY");
    }

    #[test]
    fn test_static_store() {
        let store = StaticCredentialStore::from_api_key("k1");
        assert_eq!(store.credentials().get("api_key").map(String::as_str), Some("k1"));

        let store: StaticCredentialStore = [("apiKey", "k2")].into_iter().collect();
        assert_eq!(store.credentials().get("apiKey").map(String::as_str), Some("k2"));
    }
}
