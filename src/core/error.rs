//! Error types and handling for the MCP server.
//!
//! This module defines the unified error type returned by server setup and
//! the transports.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// This enum captures the error conditions that can abort server operation:
/// tool registration failures at startup and transport failures afterwards.
/// Errors raised while serving a single tool call never reach this type.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),
}
