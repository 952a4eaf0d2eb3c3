//! Response envelope returned for every tool invocation.
//!
//! Success and failure share one shape: an ordered list of text items. An
//! error is recognised by the `Error: ` prefix of its text, never by a
//! separate channel.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix marking an error envelope.
pub const ERROR_PREFIX: &str = "Error: ";

/// One content item of an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EnvelopeContent {
    Text { text: String },
}

/// Uniform response wrapper for tool invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub content: Vec<EnvelopeContent>,
}

impl Envelope {
    /// Envelope holding a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![EnvelopeContent::Text { text: text.into() }],
        }
    }

    /// Error envelope: `Error: <message>`.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::text(format!("{}{}", ERROR_PREFIX, message))
    }

    /// All text items joined by newlines.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                EnvelopeContent::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether this envelope carries the error marker.
    pub fn is_error(&self) -> bool {
        matches!(
            self.content.first(),
            Some(EnvelopeContent::Text { text }) if text.starts_with(ERROR_PREFIX)
        )
    }

    /// Convert to an MCP `CallToolResult`.
    ///
    /// With `flag_errors` the MCP `isError` flag is set on error envelopes;
    /// otherwise every envelope is reported as a plain result.
    pub fn into_call_tool_result(self, flag_errors: bool) -> CallToolResult {
        let is_error = flag_errors && self.is_error();
        let content = self
            .content
            .into_iter()
            .map(|c| match c {
                EnvelopeContent::Text { text } => Content::text(text),
            })
            .collect();

        if is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }

    /// JSON form used by the HTTP transport (`content` plus `isError`).
    pub fn to_json(&self, flag_errors: bool) -> Value {
        serde_json::json!({
            "content": self.content,
            "isError": flag_errors && self.is_error(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_text() {
        let envelope = Envelope::error("Unknown tool: missing_tool");
        assert_eq!(envelope.text_content(), "Error: Unknown tool: missing_tool");
        assert!(envelope.is_error());
    }

    #[test]
    fn test_success_envelope_is_not_error() {
        assert!(!Envelope::text("Found 2 contacts").is_error());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Envelope::text("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "content": [{ "type": "text", "text": "hi" }] })
        );
    }

    #[test]
    fn test_call_tool_result_flagging() {
        let plain = Envelope::error("boom").into_call_tool_result(false);
        assert_eq!(plain.is_error, Some(false));

        let flagged = Envelope::error("boom").into_call_tool_result(true);
        assert_eq!(flagged.is_error, Some(true));

        let success = Envelope::text("ok").into_call_tool_result(true);
        assert_eq!(success.is_error, Some(false));
    }

    #[test]
    fn test_json_form() {
        let json = Envelope::error("boom").to_json(true);
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["text"], "Error: boom");
    }
}
