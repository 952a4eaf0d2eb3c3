//! Business Intelligence MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server built around a
//! tool registry and dispatcher. Tools declare a name, a description, an
//! input schema and an async handler; the dispatcher validates arguments,
//! runs the handler and always answers with a uniform text envelope.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and its transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Schema descriptors, the registry, the dispatcher and the sample catalog
//!
//! # Example
//!
//! ```rust,no_run
//! use bizintel_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let envelope = server
//!         .call_tool("market_analysis", serde_json::json!({ "industry": "Fintech" }))
//!         .await;
//!     println!("{}", envelope.text_content());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
