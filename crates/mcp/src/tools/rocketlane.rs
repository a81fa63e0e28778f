// Rocketlane operations exposed as MCP tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_property, Tool, ToolRegistry};
use anyhow::{Context, Result};
use rocketlane_sdk::{Operation, Param, Params, RocketlaneClient, OPERATIONS};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One catalog operation, callable as a tool of the same name.
pub struct RocketlaneTool {
    client: Arc<RocketlaneClient>,
    operation: &'static Operation,
}

impl RocketlaneTool {
    pub fn new(client: Arc<RocketlaneClient>, operation: &'static Operation) -> Self {
        Self { client, operation }
    }

    pub fn operation(&self) -> &'static Operation {
        self.operation
    }
}

#[async_trait::async_trait]
impl Tool for RocketlaneTool {
    fn schema(&self) -> ToolSchema {
        let op = self.operation;
        ToolSchema {
            name: op.name.to_string(),
            description: format!("{}. `{} /{}`", op.summary, op.method.as_str(), op.path),
            input_schema: input_schema(op),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let params = Params::try_from(arguments)
            .with_context(|| format!("Invalid arguments for {}", self.operation.name))?;

        debug!(tool = self.operation.name, "Calling Rocketlane");
        match self.client.execute(self.operation, params).await {
            Ok(Some(body)) => Ok(CallToolResult::text(serde_json::to_string_pretty(&body)?)),
            Ok(None) => Ok(CallToolResult::text("null")),
            Err(e) => {
                warn!(tool = self.operation.name, error = %e, "Rocketlane call failed");
                Ok(CallToolResult::error(e.to_string()))
            }
        }
    }

    fn tags(&self) -> &[&str] {
        self.operation.tags
    }
}

/// Register a tool for every catalog operation carrying one of `tags`.
/// An empty tag list registers everything. Returns the number registered.
pub fn register_all(
    registry: &mut ToolRegistry,
    client: Arc<RocketlaneClient>,
    tags: &[String],
) -> usize {
    let mut count = 0;
    for op in OPERATIONS.iter().copied() {
        if tags.is_empty() || tags.iter().any(|tag| op.has_tag(tag)) {
            registry.register(Arc::new(RocketlaneTool::new(client.clone(), op)));
            count += 1;
        }
    }

    info!(count, ?tags, "Registered Rocketlane tools");
    count
}

fn input_schema(op: &Operation) -> Value {
    let mut properties = Map::new();

    for name in op.path_params() {
        properties.insert(
            name.to_string(),
            json_schema_property("string", &format!("{} path identifier", name)),
        );
    }
    for param in op.query {
        insert_param(&mut properties, param, &describe_query(param.name));
    }
    for param in op.body_params() {
        insert_param(&mut properties, param, &format!("{} request body field", param.name));
    }

    json_schema_object(Value::Object(properties), op.required.to_vec())
}

/// Insert `param` unless its argument name is taken. Catalog guidance wins
/// over the generated `fallback` wording.
fn insert_param(properties: &mut Map<String, Value>, param: &Param, fallback: &str) {
    let description = param.description.unwrap_or(fallback);
    properties
        .entry(param.arg_name().into_owned())
        .or_insert_with(|| json_schema_property(param.ty.as_str(), description));
}

/// Human wording for filter suffixes such as `createdAt.gt`.
fn describe_query(name: &str) -> String {
    let Some((field, suffix)) = name.rsplit_once('.') else {
        return format!("{} query parameter", name);
    };

    let meaning = match suffix {
        "eq" => "equals",
        "gt" => "greater than",
        "lt" => "less than",
        "ge" => "greater than or equal to",
        "le" => "less than or equal to",
        "oneOf" => "is one of (comma separated)",
        "noneOf" => "is none of (comma separated)",
        "cn" => "contains",
        "nc" => "does not contain",
        _ => return format!("{} query parameter", name),
    };
    format!("{} {}", field, meaning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ToolContent;
    use rocketlane_sdk::find_operation;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(uri: &str) -> Arc<RocketlaneClient> {
        Arc::new(
            RocketlaneClient::builder()
                .base_url(uri)
                .api_key("rl-test-key")
                .build()
                .unwrap(),
        )
    }

    fn tool(uri: &str, name: &str) -> RocketlaneTool {
        RocketlaneTool::new(client_for(uri), find_operation(name).unwrap())
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0] {
            ToolContent::Text { text } => text,
        }
    }

    #[test]
    fn test_describe_query() {
        assert_eq!(describe_query("createdAt.gt"), "createdAt greater than");
        assert_eq!(describe_query("task.status.oneOf"), "task.status is one of (comma separated)");
        assert_eq!(describe_query("taskName.nc"), "taskName does not contain");
        assert_eq!(describe_query("pageSize"), "pageSize query parameter");
    }

    #[test]
    fn test_get_task_schema() {
        let schema = tool("http://localhost", "get_task").schema();

        assert_eq!(schema.name, "get_task");
        assert_eq!(schema.description, "Get task by Id. `GET /tasks/{taskId}`");
        let input = schema.input_schema;
        assert_eq!(input["required"], json!(["taskId"]));
        assert_eq!(input["properties"]["taskId"]["type"], "string");
        assert_eq!(input["properties"]["includeFields"]["type"], "array");
        assert_eq!(input["properties"]["includeAllFields"]["type"], "boolean");
    }

    #[test]
    fn test_schema_uses_argument_names() {
        let schema = tool("http://localhost", "update_task").schema();
        let properties = &schema.input_schema["properties"];
        assert!(properties.get("taskId_body").is_some());
        assert_eq!(properties["taskId_body"]["description"], "taskId request body field");

        let schema = tool("http://localhost", "get_all_tasks").schema();
        let properties = &schema.input_schema["properties"];
        assert_eq!(properties["task_status_eq"]["description"], "task.status equals");
        assert!(properties.get("task.status.eq").is_none());
    }

    #[test]
    fn test_schema_carries_field_guidance() {
        let schema = tool("http://localhost", "update_task").schema();
        let properties = &schema.input_schema["properties"];
        assert_eq!(properties["progress"]["description"], "Progress from 0 to 100");
        assert!(properties["type"]["description"].as_str().unwrap().contains("MILESTONE"));
        assert!(properties["dueDate"]["description"].as_str().unwrap().contains("YYYY-MM-DD"));

        let schema = tool("http://localhost", "get_all_resource_allocations").schema();
        let properties = &schema.input_schema["properties"];
        assert!(properties["startDate"]["description"].as_str().unwrap().starts_with("YYYY-MM-DD"));
        assert!(properties["pageToken"]["description"].as_str().unwrap().contains("15 minutes"));
        assert_eq!(properties["memberId_eq"]["description"], "memberId equals");

        let schema = tool("http://localhost", "create_time_entry").schema();
        let properties = &schema.input_schema["properties"];
        assert_eq!(properties["date"]["description"], "Date in YYYY-MM-DD format");
        assert_eq!(properties["minutes"]["description"], "Duration in minutes");
    }

    #[test]
    fn test_every_schema_lists_required_properties() {
        let client = client_for("http://localhost");
        for op in OPERATIONS.iter().copied() {
            let schema = RocketlaneTool::new(client.clone(), op).schema();
            let properties = schema.input_schema["properties"].as_object().unwrap();
            for name in op.required {
                assert!(properties.contains_key(*name), "{}: {}", op.name, name);
            }
            for name in op.arg_names() {
                assert!(properties.contains_key(name.as_ref()), "{}: {}", op.name, name);
            }
        }
    }

    #[tokio::test]
    async fn test_execute_returns_pretty_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.0/tasks/42"))
            .and(header("api-key", "rl-test-key"))
            .and(query_param("includeAllFields", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"taskId": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool(&server.uri(), "get_task")
            .execute(json!({"taskId": "42", "includeAllFields": true}))
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        assert_eq!(text(&result), "{\n  \"taskId\": 42\n}");
    }

    #[tokio::test]
    async fn test_execute_empty_response_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1.0/tasks/7/move-phase"))
            .and(body_json(json!({"phase": {"phaseId": 3}})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool(&server.uri(), "move_task_to_given_phase")
            .execute(json!({"taskId": 7, "phase": {"phaseId": 3}}))
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        assert_eq!(text(&result), "null");
    }

    #[tokio::test]
    async fn test_execute_missing_parameter_is_in_band() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = tool(&server.uri(), "delete_task")
            .execute(json!({"taskId": null}))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Error: Missing required parameter 'taskId'.");
    }

    #[tokio::test]
    async fn test_execute_api_error_is_in_band() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.0/users/9"))
            .respond_with(ResponseTemplate::new(404).set_body_string("User not found"))
            .mount(&server)
            .await;

        let result = tool(&server.uri(), "get_user")
            .execute(json!({"userId": 9}))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).contains("404"));
        assert!(text(&result).contains("User not found"));
    }

    #[tokio::test]
    async fn test_execute_rejects_non_object_arguments() {
        let err = tool("http://localhost", "get_task")
            .execute(json!(["taskId"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid arguments for get_task"));
    }

    #[test]
    fn test_register_all_with_tags() {
        let client = client_for("http://localhost");

        let mut registry = ToolRegistry::new();
        assert_eq!(register_all(&mut registry, client.clone(), &[]), 59);
        assert_eq!(registry.list_schemas()[0].name, "get_time_entry");

        let mut registry = ToolRegistry::new();
        let count = register_all(&mut registry, client, &["Important".to_string()]);
        assert_eq!(count, 6);
        assert!(registry.contains("get_project"));
        assert!(registry.contains("create_field"));
        assert!(!registry.contains("get_task"));
        assert!(registry.get("get_user").unwrap().tags().contains(&"Users"));
    }
}
