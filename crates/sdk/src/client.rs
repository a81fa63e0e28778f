//! Main client for the Rocketlane SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::credentials::{CredentialStore, EnvCredentialStore, StaticCredentialStore};
use crate::error::{RocketlaneError, RocketlaneResult};
use crate::operation::Operation;
use crate::params::Params;
use crate::transport::HttpTransport;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Name the client registers under with tool hosts.
pub const APP_NAME: &str = "rocketlane";

/// Main client for interacting with the Rocketlane API.
#[derive(Clone)]
pub struct RocketlaneClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl RocketlaneClient {
    /// Create a new client builder.
    pub fn builder() -> RocketlaneClientBuilder {
        RocketlaneClientBuilder::new()
    }

    /// Client for the public API, reading the key from `ROCKETLANE_API_KEY`.
    pub fn from_env() -> RocketlaneResult<Self> {
        Self::builder()
            .credentials(Arc::new(EnvCredentialStore::default()))
            .build()
    }

    /// Create a client from configuration.
    fn from_config(
        config: ClientConfig,
        credentials: Option<Arc<dyn CredentialStore>>,
    ) -> RocketlaneResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone(), credentials)?;

        Ok(Self { config, http })
    }

    pub fn name(&self) -> &'static str {
        APP_NAME
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Run an operation with the given arguments.
    ///
    /// Arguments are validated before anything is sent. Returns the decoded
    /// JSON body, or `None` when Rocketlane returned no usable content.
    pub async fn execute(
        &self,
        operation: &Operation,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        let request = operation.prepare(&params)?;
        self.http.send(request).await
    }

    /// Run an operation by name, as a tool host would.
    pub async fn call(&self, name: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        let operation = find_operation(name)
            .ok_or_else(|| RocketlaneError::UnknownOperation(name.to_string()))?;
        self.execute(operation, params).await
    }

    /// Every operation this client can run.
    pub fn operations(&self) -> &'static [&'static Operation] {
        OPERATIONS
    }

    /// Get the projects API.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Get the tasks API.
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// Get the phases API.
    pub fn phases(&self) -> PhasesApi<'_> {
        PhasesApi::new(self)
    }

    /// Get the spaces API.
    pub fn spaces(&self) -> SpacesApi<'_> {
        SpacesApi::new(self)
    }

    /// Get the space documents API.
    pub fn space_documents(&self) -> SpaceDocumentsApi<'_> {
        SpaceDocumentsApi::new(self)
    }

    /// Get the fields API.
    pub fn fields(&self) -> FieldsApi<'_> {
        FieldsApi::new(self)
    }

    /// Get the users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get the time entries API.
    pub fn time_entries(&self) -> TimeEntriesApi<'_> {
        TimeEntriesApi::new(self)
    }

    /// Get the time-offs API.
    pub fn time_offs(&self) -> TimeOffsApi<'_> {
        TimeOffsApi::new(self)
    }

    /// Get the resource allocations API.
    pub fn resource_allocations(&self) -> ResourceAllocationsApi<'_> {
        ResourceAllocationsApi::new(self)
    }
}

/// Builder for creating a RocketlaneClient.
pub struct RocketlaneClientBuilder {
    base_url: Option<String>,
    credentials: Option<Arc<dyn CredentialStore>>,
    timeout: Option<Duration>,
}

impl RocketlaneClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            credentials: None,
            timeout: None,
        }
    }

    /// Override the API base URL (defaults to Rocketlane's public API).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Authenticate with a fixed API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Some(Arc::new(StaticCredentialStore::from_api_key(key)));
        self
    }

    /// Read credentials from a store on every request.
    pub fn credentials(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(store);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> RocketlaneResult<RocketlaneClient> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        if base_url.cannot_be_a_base() {
            return Err(RocketlaneError::Config(format!(
                "base URL must be hierarchical: {}",
                base_url
            )));
        }

        let config = ClientConfig {
            base_url,
            timeout: self.timeout,
        };

        RocketlaneClient::from_config(config, self.credentials)
    }
}

// Leaves out the transport and the credential store.
impl fmt::Debug for RocketlaneClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RocketlaneClient")
            .field("base_url", &self.config.base_url.as_str())
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

impl Default for RocketlaneClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RocketlaneClient {
        RocketlaneClient::builder()
            .base_url(server.uri())
            .api_key("rl-test-key")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = RocketlaneClient::builder().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.rocketlane.com/api");
        assert_eq!(client.name(), "rocketlane");
        assert_eq!(client.operations().len(), 59);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = RocketlaneClient::builder()
            .base_url("http://localhost:9090/api")
            .api_key("rl-secret-key")
            .build()
            .unwrap();

        let printed = format!("{:?}", client);
        assert!(printed.starts_with("RocketlaneClient {"));
        assert!(printed.contains("http://localhost:9090/api"));
        assert!(!printed.contains("rl-secret-key"));

        let err = RocketlaneClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, RocketlaneError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        assert!(matches!(
            RocketlaneClient::builder().base_url("not a url").build(),
            Err(RocketlaneError::InvalidUrl(_))
        ));
        assert!(matches!(
            RocketlaneClient::builder().base_url("mailto:ops@example.com").build(),
            Err(RocketlaneError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_identifier_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        for op in OPERATIONS.iter().filter(|op| !op.required.is_empty()) {
            let err = client.execute(op, Params::new()).await.unwrap_err();
            assert!(
                matches!(err, RocketlaneError::MissingParameter(_)),
                "{}: {err:?}",
                op.name
            );
        }

        let err = client.tasks().get("", Params::new()).await.unwrap_err();
        assert!(matches!(err, RocketlaneError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_call_unknown_operation() {
        let client = RocketlaneClient::builder().build().unwrap();
        let err = client.call("get_everything", Params::new()).await.unwrap_err();
        assert!(matches!(err, RocketlaneError::UnknownOperation(_)));
    }

    #[tokio::test]
    async fn test_list_tasks_transmits_falsy_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.0/tasks"))
            .and(query_param("includeArchive.eq", "false"))
            .and(query_param("progress.eq", "0"))
            .and(query_param("task.status.oneOf", "1,2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = Params::new()
            .set("includeArchive_eq", false)
            .set("progress_eq", 0)
            .set("task_status_oneOf", "1,2")
            .set("pageToken", Value::Null);
        let result = client.tasks().list(params).await.unwrap();
        assert_eq!(result, Some(json!({"data": []})));

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap_or_default().to_string();
        assert!(!query.contains("pageToken"));
    }

    #[tokio::test]
    async fn test_update_task_body_alias() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/1.0/tasks/201"))
            .and(header("api-key", "rl-test-key"))
            .and(body_json(json!({"taskId": 201, "atRisk": false, "progress": 0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"taskId": 201})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = Params::new()
            .set("taskId_body", 201)
            .set("atRisk", false)
            .set("progress", 0)
            .set("taskName", Value::Null);
        let result = client.tasks().update("201", params).await.unwrap();
        assert_eq!(result, Some(json!({"taskId": 201})));
    }

    #[tokio::test]
    async fn test_import_template_sends_raw_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1.0/projects/5/import-template"))
            .and(body_json(json!([{"templateId": 3, "startDate": "2024-01-01"}])))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let items = vec![json!({"templateId": 3, "startDate": "2024-01-01"})];
        let result = client.projects().import_template("5", items).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_archive_project_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1.0/projects/5/archive"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.projects().archive("5").await.unwrap(), None);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_resource_allocations_required_dates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.0/resource-allocations"))
            .and(query_param("startDate", "2024-03-01"))
            .and(query_param("endDate", "2024-03-31"))
            .and(query_param("memberId.oneOf", "10,11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let params = Params::new().set("memberId_oneOf", "10,11");
        let result = client
            .resource_allocations()
            .list("2024-03-01", "2024-03-31", params)
            .await
            .unwrap();
        assert_eq!(result, Some(json!({"data": []})));

        let err = client
            .call("get_all_resource_allocations", Params::new().set("startDate", "2024-03-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, RocketlaneError::MissingParameter(ref name) if name == "endDate"));
    }

    #[tokio::test]
    async fn test_call_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.0/spaces"))
            .and(query_param("projectId", "200"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": [{"spaceId": 1}]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .call("get_all_spaces", Params::new().set("projectId", 200))
            .await
            .unwrap();
        assert_eq!(result, Some(json!({"data": [{"spaceId": 1}]})));
    }
}
