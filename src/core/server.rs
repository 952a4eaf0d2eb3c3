//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool dispatcher.
//!
//! ## Tool Architecture
//!
//! Tools are registered once at startup in `domains/tools/catalog.rs` and
//! served through a [`Dispatcher`]. The server exposes exactly two tool
//! operations to its transports: listing tools and invoking one.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{Dispatcher, Envelope, ToolInfo, ToolRegistry, build_tool_registry};

/// Instructions sent to clients on initialization.
const INSTRUCTIONS: &str = "This server provides business intelligence tools for prospect \
     research and market analysis. Call tools/list to discover the available tools and \
     their input schemas. Failed calls return text starting with 'Error: '.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool requests to the dispatcher. Clones share the same tool registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the immutable tool registry.
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new MCP server with the tools enabled by the configuration.
    ///
    /// Fails if tool registration fails (e.g. two tools share a name).
    pub fn new(config: Config) -> Result<Self> {
        let registry = build_tool_registry(&config.tools)?;
        if registry.is_empty() {
            warn!("No tool suites enabled; the server will advertise no tools");
        }
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server over an already built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(Arc::new(registry)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Server instructions for clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// List all available tools, in registration order.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.dispatcher.list_tools()
    }

    /// Call a tool by name. Always resolves to an envelope.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Envelope {
        self.dispatcher.invoke(name, arguments).await
    }

    /// Whether error envelopes carry the MCP `isError` flag.
    pub fn flag_errors(&self) -> bool {
        self.config.tools.flag_errors
    }

    /// Answer an rmcp `tools/call` request. Missing arguments count as `{}`.
    async fn call_tool_request(&self, request: CallToolRequestParam) -> CallToolResult {
        let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        let envelope = self.call_tool(&request.name, arguments).await;
        envelope.into_call_tool_result(self.flag_errors())
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.registry().to_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self.call_tool_request(request).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{
        Arguments, FieldSpec, SchemaDescriptor, ToolDefinition, ToolPayload,
    };
    use serde_json::json;

    fn test_server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "bizintel-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_list_tools_is_stable() {
        let server = test_server();
        let first = server.list_tools();
        assert_eq!(first.len(), 7);
        assert_eq!(first, server.list_tools());
        assert_eq!(first[0].name, "search_contacts");
    }

    #[tokio::test]
    async fn test_call_sample_tool() {
        let server = test_server();
        let envelope = server
            .call_tool("search_contacts", json!({ "company_name": "Acme" }))
            .await;
        assert!(envelope.text_content().starts_with("Found 2 contacts for Acme:"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool_then_list() {
        let server = test_server();
        let envelope = server.call_tool("missing_tool", json!({})).await;
        assert_eq!(envelope.text_content(), "Error: Unknown tool: missing_tool");
        assert_eq!(server.list_tools().len(), 7);
    }

    #[tokio::test]
    async fn test_custom_registry() {
        let registry = ToolRegistry::new()
            .with_tool(ToolDefinition::new(
                "echo",
                "Echo the message back",
                SchemaDescriptor::new().required_property("msg", FieldSpec::string("Message")),
                |args: Arguments| async move {
                    Ok::<_, anyhow::Error>(ToolPayload::new("Echo", Value::Object(args)))
                },
            ))
            .unwrap();
        let server = McpServer::with_registry(Config::default(), registry);
        let envelope = server.call_tool("echo", json!({ "msg": "hi" })).await;
        assert!(envelope.text_content().contains("\"hi\""));
    }

    fn call_request(body: Value) -> CallToolRequestParam {
        serde_json::from_value(body).unwrap()
    }

    fn first_text(result: &CallToolResult) -> String {
        result.content[0].as_text().unwrap().text.clone()
    }

    #[tokio::test]
    async fn test_rmcp_call_without_arguments() {
        let server = test_server();
        let result = server
            .call_tool_request(call_request(json!({ "name": "market_analysis" })))
            .await;
        assert_eq!(
            first_text(&result),
            "Error: Missing required field: industry"
        );
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_rmcp_call_flags_errors_when_configured() {
        let mut config = Config::default();
        config.tools.flag_errors = true;
        let server = McpServer::new(config).unwrap();

        let failed = server
            .call_tool_request(call_request(json!({ "name": "missing_tool" })))
            .await;
        assert_eq!(first_text(&failed), "Error: Unknown tool: missing_tool");
        assert_eq!(failed.is_error, Some(true));

        let succeeded = server
            .call_tool_request(call_request(json!({
                "name": "trend_analysis",
                "arguments": { "topic": "Edge AI" }
            })))
            .await;
        assert!(first_text(&succeeded).starts_with("Trend Analysis for \"Edge AI\":"));
        assert_eq!(succeeded.is_error, Some(false));
    }

    #[test]
    fn test_no_suites_is_allowed() {
        let mut config = Config::default();
        config.tools.suites.clear();
        let server = McpServer::new(config).unwrap();
        assert!(server.list_tools().is_empty());
    }
}
