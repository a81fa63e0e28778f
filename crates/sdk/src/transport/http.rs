//! HTTP transport layer for the Rocketlane SDK.

use crate::auth::resolve_headers;
use crate::config::{ClientConfig, API_VERSION};
use crate::credentials::CredentialStore;
use crate::error::{RocketlaneError, RocketlaneResult};
use crate::operation::PreparedRequest;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// HTTP transport for making API requests.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
    credentials: Option<Arc<dyn CredentialStore>>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(
        config: Arc<ClientConfig>,
        credentials: Option<Arc<dyn CredentialStore>>,
    ) -> RocketlaneResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    /// Build the URL for the given path segments below the versioned base.
    fn build_url(&self, segments: &[String]) -> RocketlaneResult<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RocketlaneError::Config("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);
        Ok(url)
    }

    /// Send a prepared request and normalize the response.
    pub async fn send(&self, request: PreparedRequest) -> RocketlaneResult<Option<Value>> {
        let url = self.build_url(&request.segments)?;
        let method = request.method.as_str();
        debug!(method, url = %url, "Rocketlane request");

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .headers(resolve_headers(self.credentials.as_deref()));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        normalize_response(response).await
    }
}

/// Turn a response into `Some(json)`, or `None` when there is nothing to decode.
///
/// Non-2xx statuses are errors. A 204, an empty or blank body, a literal
/// `null`, or a body that is not valid JSON all yield `None`.
pub async fn normalize_response(response: Response) -> RocketlaneResult<Option<Value>> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RocketlaneError::from_response(status.as_u16(), &body));
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let bytes = response.bytes().await?;
    Ok(decode_body(&bytes))
}

fn decode_body(bytes: &[u8]) -> Option<Value> {
    if String::from_utf8_lossy(bytes).trim().is_empty() {
        return None;
    }

    match serde_json::from_slice(bytes) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Response body is not JSON, returning nothing");
            None
        }
    }
}
