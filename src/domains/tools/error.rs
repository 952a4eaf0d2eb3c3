//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while registering or dispatching tools.
///
/// Only the registration variants (`DuplicateTool`, `InvalidSchema`) are
/// meant to abort startup. Everything raised while serving a call is turned
/// into an error [`Envelope`](super::Envelope) by the dispatcher.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with the same name is already registered.
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    /// A tool was registered with an inconsistent schema descriptor.
    #[error("Invalid schema for tool '{tool}': {reason}")]
    InvalidSchema { tool: String, reason: String },

    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments were rejected by the tool's schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The handler ran and failed.
    #[error("{0}")]
    Handler(String),
}

impl ToolError {
    /// Create a new "duplicate tool" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new "invalid schema" error.
    pub fn invalid_schema(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "unknown tool" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "handler failed" error.
    pub fn handler(msg: impl Into<String>) -> Self {
        Self::Handler(msg.into())
    }
}

/// Reasons an argument bag can be rejected by a schema descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The argument bag itself was not a JSON object.
    #[error("Arguments must be an object, got {0}")]
    NotAnObject(&'static str),

    /// A required field was absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field had the wrong JSON type.
    #[error("Invalid type for field '{field}': expected {expected}, got {actual}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A field's value is outside the declared enum set.
    #[error("Invalid value for field '{field}': '{value}' is not one of [{}]", allowed.join(", "))]
    NotInEnum {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// An array item failed its item schema.
    #[error("Invalid item {index} in field '{field}': {source}")]
    InvalidItem {
        field: String,
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_message() {
        let err = ToolError::unknown("missing_tool");
        assert_eq!(err.to_string(), "Unknown tool: missing_tool");
    }

    #[test]
    fn test_handler_message_is_verbatim() {
        assert_eq!(ToolError::handler("boom").to_string(), "boom");
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: ToolError = ValidationError::MissingField("msg".into()).into();
        assert_eq!(err.to_string(), "Missing required field: msg");
    }

    #[test]
    fn test_enum_message_lists_allowed_values() {
        let err = ValidationError::NotInEnum {
            field: "depth".into(),
            value: "deep".into(),
            allowed: vec!["basic".into(), "detailed".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'depth': 'deep' is not one of [basic, detailed]"
        );
    }
}
