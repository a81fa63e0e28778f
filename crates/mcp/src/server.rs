// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use std::io;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, info, warn};

/// Longest request line read, in bytes. Longer lines are skipped and
/// answered with a parse error.
pub const MAX_LINE_LENGTH: usize = 8 * 1024 * 1024;

pub struct McpServer {
    registry: ToolRegistry,
    server_info: ServerInfo,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            server_info: ServerInfo {
                name: rocketlane_sdk::APP_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serve requests on stdin, writing responses to stdout.
    pub async fn start(&self) -> Result<()> {
        info!(tools = self.registry.len(), "MCP server listening on stdio");
        self.run(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve one request per line until the reader is exhausted.
    ///
    /// Lines that are too long or not UTF-8 get a parse error and the loop
    /// carries on. Only a failing reader or writer ends it early.
    pub async fn run<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, RequestLines::new(self.max_line_length));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());

        while let Some(frame) = lines.next().await {
            let response = match frame.context("Failed to read request line")? {
                RequestLine::Text(line) => self.handle_line(&line).await,
                RequestLine::Unreadable(e) => {
                    warn!(error = %e, "Unreadable JSON-RPC line");
                    Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()))
                }
            };
            if let Some(response) = response {
                let encoded =
                    serde_json::to_string(&response).context("Failed to encode response")?;
                sink.send(encoded).await.context("Failed to write response")?;
            }
        }

        info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw line. Returns `None` for blank lines and notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparsable JSON-RPC line");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!(error = %e, "Malformed JSON-RPC request");
                Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()))
            }
        }
    }

    /// Dispatch a parsed request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "Handling request");

        let Some(id) = request.id else {
            if !request.method.starts_with("notifications/") {
                debug!(method = %request.method, "Ignoring unknown notification");
            }
            return None;
        };

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let client = params
            .and_then(|p| serde_json::from_value::<InitializeParams>(p).ok())
            .and_then(|p| p.client_info);
        if let Some(client) = client {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        encode(InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.server_info.clone(),
        })
    }

    fn list_tools(&self) -> Result<Value, JsonRpcError> {
        encode(ListToolsResult {
            tools: self.registry.list_schemas(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params for tools/call"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
            })?;

        let Some(tool) = self.registry.get(&params.name) else {
            return Err(JsonRpcError::invalid_params(format!(
                "Unknown tool: {}",
                params.name
            )));
        };

        info!(tool = %params.name, "Calling tool");
        let result = tool
            .execute(params.arguments)
            .await
            .map_err(|e| JsonRpcError::invalid_params(format!("{:#}", e)))?;

        encode(result)
    }
}

fn encode(value: impl serde::Serialize) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

enum RequestLine {
    Text(String),
    Unreadable(LinesCodecError),
}

/// `LinesCodec` that yields bad lines as frames. `FramedRead` stops after
/// any decoder error, so only I/O failures surface as errors here.
struct RequestLines {
    inner: LinesCodec,
}

impl RequestLines {
    fn new(max_line_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_line_length),
        }
    }
}

impl Decoder for RequestLines {
    type Item = RequestLine;
    type Error = LinesCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<RequestLine>, LinesCodecError> {
        recover(self.inner.decode(src))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<RequestLine>, LinesCodecError> {
        recover(self.inner.decode_eof(src))
    }
}

// The inner codec has already consumed (or started discarding) the bad line.
fn recover(
    decoded: Result<Option<String>, LinesCodecError>,
) -> Result<Option<RequestLine>, LinesCodecError> {
    match decoded {
        Ok(line) => Ok(line.map(RequestLine::Text)),
        Err(e @ LinesCodecError::MaxLineLengthExceeded) => Ok(Some(RequestLine::Unreadable(e))),
        Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
            Ok(Some(RequestLine::Unreadable(LinesCodecError::Io(e))))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::register_all;
    use rocketlane_sdk::RocketlaneClient;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(uri: &str) -> McpServer {
        let client = RocketlaneClient::builder()
            .base_url(uri)
            .api_key("rl-test-key")
            .build()
            .unwrap();
        let mut registry = ToolRegistry::new();
        register_all(&mut registry, Arc::new(client), &[]);
        McpServer::new(registry)
    }

    async fn run_bytes(server: &McpServer, input: &[u8]) -> Vec<Value> {
        let mut output = Vec::new();
        server.run(input, &mut output).await.unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    async fn roundtrip(server: &McpServer, line: &str) -> Value {
        let response = server.handle_line(line).await.expect("response");
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server_for("http://localhost");
        let response = roundtrip(
            &server,
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1"}}}"#,
        )
        .await;

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(response["result"]["serverInfo"]["name"], "rocketlane");
        assert_eq!(response["result"]["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let server = server_for("http://localhost");
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(server.handle_line(line).await.is_none());
        assert!(server.handle_line("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let server = server_for("http://localhost");
        let response = roundtrip(&server, r#"{"jsonrpc":"2.0","id":"a","method":"ping"}"#).await;
        assert_eq!(response["id"], "a");
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn test_tools_list_in_catalog_order() {
        let server = server_for("http://localhost");
        let response = roundtrip(&server, r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#).await;

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 59);
        assert_eq!(tools[0]["name"], "get_time_entry");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["timeEntryId"]));
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let server = server_for("http://localhost");

        let response = roundtrip(&server, "{not json").await;
        assert_eq!(response["error"]["code"], -32700);
        assert_eq!(response["id"], Value::Null);

        let response = roundtrip(&server, r#"{"jsonrpc":"2.0","id":3,"method":"nope"}"#).await;
        assert_eq!(response["error"]["code"], -32601);

        let response = roundtrip(&server, r#"{"jsonrpc":"2.0","id":4}"#).await;
        assert_eq!(response["error"]["code"], -32600);
        assert_eq!(response["id"], 4);

        let response = roundtrip(
            &server,
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"get_everything"}}"#,
        )
        .await;
        assert_eq!(response["error"]["code"], -32602);
        assert_eq!(response["error"]["message"], "Unknown tool: get_everything");

        let response = roundtrip(&server, r#"{"jsonrpc":"2.0","id":6,"method":"tools/call"}"#).await;
        assert_eq!(response["error"]["code"], -32602);

        let response = roundtrip(
            &server,
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"get_task","arguments":[1]}}"#,
        )
        .await;
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_tools_call_failure_is_in_band() {
        let server = server_for("http://localhost");
        let response = roundtrip(
            &server,
            r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"get_task","arguments":{}}}"#,
        )
        .await;

        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(
            response["result"]["content"][0]["text"],
            "Error: Missing required parameter 'taskId'."
        );
    }

    #[tokio::test]
    async fn test_run_over_lines() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.0/phases/12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"phaseId": 12})))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(&mock.uri());
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_phase","arguments":{"phaseId":"12"}}}"#,
            "\n",
        );
        let mut output = Vec::new();
        server.run(input.as_bytes(), &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        let responses: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(
            responses[1]["result"]["content"][0]["text"],
            "{\n  \"phaseId\": 12\n}"
        );
    }

    #[tokio::test]
    async fn test_run_recovers_from_invalid_utf8() {
        let server = server_for("http://localhost");
        let input: &[u8] = b"{\"jsonrpc\":\"2.0\",\"id\":\"\xff\",\"method\":\"ping\"}\n\
            {\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n";

        let responses = run_bytes(&server, input).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[1]["id"], 2);
        assert_eq!(responses[1]["result"], json!({}));
    }

    #[tokio::test]
    async fn test_run_skips_overlong_lines() {
        let server = server_for("http://localhost").with_max_line_length(64);
        let long = format!(r#"{{"jsonrpc":"2.0","id":"{}","method":"ping"}}"#, "x".repeat(200));
        let input = format!("{}\n{}\n", long, r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#);

        let responses = run_bytes(&server, input.as_bytes()).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[1]["id"], 2);
    }
}
