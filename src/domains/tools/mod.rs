//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are named, schema-described operations that MCP clients discover
//! through `tools/list` and run through `tools/call`.
//!
//! ## Architecture
//!
//! - `schema.rs` - Schema descriptors: input contracts and their validator
//! - `handlers.rs` - The uniform async handler capability and its payload
//! - `registry.rs` - Tool definitions and the ordered, name-unique registry
//! - `dispatcher.rs` - Lookup, defaulting, validation and handler invocation
//! - `envelope.rs` - The uniform success/error response envelope
//! - `catalog.rs` - Assembles the registry served by the binary
//! - `definitions/` - Sample tool implementations (one file per tool)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `CatalogTool`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `catalog.rs`
//!
//! **No need to modify `server.rs` or the transports!**

pub mod catalog;
pub mod definitions;
mod dispatcher;
mod envelope;
mod error;
mod handlers;
mod registry;
pub mod schema;

pub use catalog::{ToolSuite, build_tool_registry};
pub use dispatcher::Dispatcher;
pub use envelope::{ERROR_PREFIX, Envelope, EnvelopeContent};
pub use error::{ToolError, ValidationError};
pub use handlers::{HandlerResult, ToolHandler, ToolPayload};
pub use registry::{ToolDefinition, ToolInfo, ToolRegistry};
pub use schema::{Arguments, FieldKind, FieldSpec, PrimitiveType, SchemaDescriptor};
