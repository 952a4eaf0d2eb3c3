//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - [`ToolDefinition`]: a named tool with its schema and handler
//! - [`ToolRegistry`]: the ordered, name-unique collection of definitions
//! - [`ToolInfo`]: the handler-free metadata advertised by `tools/list`
//!
//! The registry is filled once at startup and only read afterwards, so it is
//! shared behind an `Arc` without any locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rmcp::model::Tool;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::ToolError;
use super::handlers::ToolHandler;
use super::schema::SchemaDescriptor;

// ============================================================================
// Tool Definition
// ============================================================================

/// A registered tool: unique name, description, input contract and handler.
///
/// Definitions are immutable once built.
#[derive(Clone)]
pub struct ToolDefinition {
    name: String,
    description: String,
    schema: SchemaDescriptor,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: SchemaDescriptor,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            handler: Arc::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    pub fn handler(&self) -> &dyn ToolHandler {
        self.handler.as_ref()
    }

    /// Handler-free metadata for capability advertisement.
    pub fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            input_schema: Value::Object(self.schema.to_json_schema()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: Arc::new(self.schema.to_json_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Advertised metadata of a tool, as returned by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// Enumeration follows insertion order; lookups go through a name index.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    ///
    /// Fails if the name is taken or the schema descriptor is inconsistent.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        if self.index.contains_key(definition.name()) {
            return Err(ToolError::duplicate(definition.name()));
        }
        definition
            .schema()
            .check()
            .map_err(|reason| ToolError::invalid_schema(definition.name(), reason))?;

        debug!("Registering tool: {}", definition.name());
        self.index
            .insert(definition.name().to_string(), self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_tool(mut self, definition: ToolDefinition) -> Result<Self, ToolError> {
        self.register(definition)?;
        Ok(self)
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDefinition, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::unknown(name))
    }

    /// Metadata of all tools, in registration order.
    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools.iter().map(ToolDefinition::info).collect()
    }

    /// All tools as rmcp Tool models, in registration order.
    pub fn to_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDefinition::to_tool).collect()
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDefinition::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{Arguments, FieldSpec, ToolPayload};

    fn noop_tool(name: &str) -> ToolDefinition {
        ToolDefinition::new(
            name,
            format!("The {} tool", name),
            SchemaDescriptor::new().required_property("msg", FieldSpec::string("Message")),
            |_args: Arguments| async { Ok::<_, anyhow::Error>(ToolPayload::text("ok")) },
        )
    }

    fn registry_of(names: &[&str]) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        for name in names {
            registry.register(noop_tool(name)).unwrap();
        }
        registry
    }

    #[test]
    fn test_lookup_returns_matching_definition() {
        let registry = registry_of(&["echo", "limited", "flaky"]);
        for name in ["echo", "limited", "flaky"] {
            assert_eq!(registry.lookup(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = registry_of(&["echo"]);
        let err = registry.lookup("missing_tool").unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref n) if n == "missing_tool"));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = registry_of(&["echo"]);
        let err = registry.register(noop_tool("echo")).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateTool(ref n) if n == "echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let definition = ToolDefinition::new(
            "broken",
            "Requires an undeclared field",
            SchemaDescriptor::new().require("ghost"),
            |_args: Arguments| async { Ok::<_, anyhow::Error>(ToolPayload::text("ok")) },
        );
        let err = ToolRegistry::new().with_tool(definition).unwrap_err();
        assert!(matches!(err, ToolError::InvalidSchema { .. }));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = registry_of(&["zeta", "alpha", "mid"]);
        let first = registry.list();
        let names: Vec<_> = first.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(first, registry.list());
        assert_eq!(registry.tool_names(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_info_excludes_handler_and_renders_schema() {
        let registry = registry_of(&["echo"]);
        let json = serde_json::to_value(&registry.list()[0]).unwrap();
        assert_eq!(json["name"], "echo");
        assert_eq!(json["inputSchema"]["required"], serde_json::json!(["msg"]));
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_to_tools_matches_list() {
        let registry = registry_of(&["echo", "limited"]);
        let tools = registry.to_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[1].name, "limited");
        assert_eq!(tools[0].input_schema["type"], "object");
    }

    #[test]
    fn test_handler_reachable_through_definition() {
        let registry = registry_of(&["echo"]);
        let handler = registry.lookup("echo").unwrap().handler();
        let payload = tokio_test::block_on(handler.call(Arguments::new())).unwrap();
        assert_eq!(payload.summary, "ok");
    }
}
