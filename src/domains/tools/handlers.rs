//! Tool handler abstraction.
//!
//! Every tool is backed by a [`ToolHandler`]: an async callable that receives
//! the defaulted, validated argument bag and eventually produces a
//! [`ToolPayload`] or fails. All tools share this one call signature, so the
//! registry can store them uniformly.
//!
//! Plain async closures implement the trait, which keeps test tools short:
//!
//! ```rust
//! use bizintel_mcp_server::domains::tools::{Arguments, ToolPayload};
//!
//! let echo = |args: Arguments| async move {
//!     Ok::<_, anyhow::Error>(ToolPayload::new("Echo", serde_json::Value::Object(args)))
//! };
//! # let _ = echo;
//! ```

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::Arguments;

/// Result type returned by tool handlers.
///
/// Any error converts into `anyhow::Error`; only its top-level message ends
/// up in the error envelope.
pub type HandlerResult = anyhow::Result<ToolPayload>;

/// Successful output of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolPayload {
    /// Human-readable headline, e.g. "Found 2 contacts for Acme".
    pub summary: String,

    /// Structured result data.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl ToolPayload {
    /// Create a payload with a summary and structured data.
    pub fn new(summary: impl Into<String>, data: Value) -> Self {
        Self {
            summary: summary.into(),
            data,
        }
    }

    /// Create a payload with text only.
    pub fn text(summary: impl Into<String>) -> Self {
        Self::new(summary, Value::Null)
    }

    /// Render the payload as envelope text: the summary, a blank line, then
    /// the data as pretty-printed JSON.
    pub fn render(&self) -> String {
        if self.data.is_null() {
            return self.summary.clone();
        }
        let data =
            serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| self.data.to_string());
        format!("{}:\n\n{}", self.summary, data)
    }
}

/// Trait implemented by every tool's behaviour.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool with already validated arguments.
    async fn call(&self, arguments: Arguments) -> HandlerResult;
}

#[async_trait::async_trait]
impl<F, Fut> ToolHandler for F
where
    F: Fn(Arguments) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn call(&self, arguments: Arguments) -> HandlerResult {
        (self)(arguments).await
    }
}
