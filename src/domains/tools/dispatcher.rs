//! Tool dispatcher - resolves, validates and runs tool invocations.
//!
//! `invoke` always resolves to an [`Envelope`]. Unknown tools, rejected
//! arguments, handler errors and handler panics all become error envelopes
//! instead of propagating to the transport.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::envelope::Envelope;
use super::error::ToolError;
use super::handlers::ToolPayload;
use super::registry::{ToolInfo, ToolRegistry};

/// Routes invocations to the handlers of a shared registry.
///
/// Cloning is cheap; clones share the same registry. Invocations carry no
/// shared mutable state, so any number may run concurrently.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher routes to.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Capability advertisement: all tools in registration order.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.registry.list()
    }

    /// Invoke a tool by name.
    ///
    /// `arguments` should be a JSON object; `null` is treated as `{}`.
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub async fn invoke(&self, name: &str, arguments: Value) -> Envelope {
        match self.try_invoke(name, arguments).await {
            Ok(payload) => {
                info!("Tool {} completed", name);
                Envelope::text(payload.render())
            }
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                Envelope::error(e)
            }
        }
    }

    async fn try_invoke(&self, name: &str, arguments: Value) -> Result<ToolPayload, ToolError> {
        let tool = self.registry.lookup(name)?;
        let arguments = tool.schema().prepare(arguments)?;

        match AssertUnwindSafe(tool.handler().call(arguments))
            .catch_unwind()
            .await
        {
            Ok(Ok(payload)) => Ok(payload),
            Ok(Err(e)) => Err(ToolError::handler(e.to_string())),
            Err(panic) => Err(ToolError::handler(panic_message(panic.as_ref()))),
        }
    }
}

/// Extract a readable message from a panic payload.
fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "tool handler panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{Arguments, FieldSpec, SchemaDescriptor, ToolDefinition};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn echo_tool() -> ToolDefinition {
        ToolDefinition::new(
            "echo",
            "Echo the message back",
            SchemaDescriptor::new().required_property("msg", FieldSpec::string("Message")),
            |args: Arguments| async move {
                Ok::<_, anyhow::Error>(ToolPayload::new("Echo", Value::Object(args)))
            },
        )
    }

    fn limited_tool() -> ToolDefinition {
        ToolDefinition::new(
            "limited",
            "Return the first `limit` items",
            SchemaDescriptor::new().property(
                "limit",
                FieldSpec::number("Maximum number of results").with_default(10),
            ),
            |args: Arguments| async move {
                let limit = args["limit"].as_u64().unwrap_or(0) as usize;
                let items: Vec<u32> = (1..=15).take(limit).collect();
                Ok::<_, anyhow::Error>(ToolPayload::new(
                    format!("Returned {} items", items.len()),
                    json!(items),
                ))
            },
        )
    }

    fn flaky_tool() -> ToolDefinition {
        ToolDefinition::new(
            "flaky",
            "Always fails",
            SchemaDescriptor::new(),
            |_args: Arguments| async { Err::<ToolPayload, _>(anyhow::anyhow!("boom")) },
        )
    }

    fn counting_tool(calls: Arc<AtomicUsize>) -> ToolDefinition {
        ToolDefinition::new(
            "counted",
            "Counts its invocations",
            SchemaDescriptor::new().required_property("f", FieldSpec::string("Required field")),
            move |_args: Arguments| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, anyhow::Error>(ToolPayload::text("counted")) }
            },
        )
    }

    fn dispatcher(tools: Vec<ToolDefinition>) -> Dispatcher {
        let mut registry = ToolRegistry::new();
        for tool in tools {
            registry.register(tool).unwrap();
        }
        Dispatcher::new(Arc::new(registry))
    }

    /// Parse the JSON part of a success envelope.
    fn payload_json(envelope: &Envelope) -> Value {
        let text = envelope.text_content();
        let (_, json_part) = text.split_once("\n\n").expect("payload has data");
        serde_json::from_str(json_part).unwrap()
    }

    #[tokio::test]
    async fn test_echo_returns_message() {
        let d = dispatcher(vec![echo_tool()]);
        let envelope = d.invoke("echo", json!({ "msg": "hi" })).await;
        assert!(!envelope.is_error());
        assert!(envelope.text_content().contains("\"hi\""));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let d = dispatcher(vec![echo_tool()]);
        let envelope = d.invoke("missing_tool", json!({})).await;
        assert_eq!(envelope.text_content(), "Error: Unknown tool: missing_tool");
    }

    #[tokio::test]
    async fn test_default_limit_applied() {
        let d = dispatcher(vec![limited_tool()]);
        let envelope = d.invoke("limited", json!({})).await;
        let items = payload_json(&envelope);
        assert_eq!(items.as_array().unwrap().len(), 10);

        let envelope = d.invoke("limited", json!({ "limit": 3 })).await;
        assert_eq!(payload_json(&envelope).as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_handler_failure_becomes_envelope() {
        let d = dispatcher(vec![echo_tool(), flaky_tool()]);
        let envelope = d.invoke("flaky", json!({})).await;
        assert_eq!(envelope.text_content(), "Error: boom");
        assert_eq!(d.list_tools().len(), 2);
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_envelope() {
        let d = dispatcher(vec![ToolDefinition::new(
            "panicky",
            "Panics",
            SchemaDescriptor::new(),
            |_args: Arguments| async {
                if true {
                    panic!("handler exploded");
                }
                Ok::<_, anyhow::Error>(ToolPayload::text("unreachable"))
            },
        )]);
        let envelope = d.invoke("panicky", Value::Null).await;
        assert_eq!(envelope.text_content(), "Error: handler exploded");
    }

    #[tokio::test]
    async fn test_missing_required_field_skips_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(vec![counting_tool(calls.clone())]);

        let envelope = d.invoke("counted", json!({})).await;
        assert_eq!(envelope.text_content(), "Error: Missing required field: f");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        d.invoke("counted", json!({ "f": "x" })).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_wrong_type_skips_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let d = dispatcher(vec![counting_tool(calls.clone())]);
        let envelope = d.invoke("counted", json!({ "f": 1 })).await;
        assert!(envelope.text_content().starts_with("Error: Invalid type for field 'f'"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_object_arguments() {
        let d = dispatcher(vec![echo_tool()]);
        let envelope = d.invoke("echo", json!("hi")).await;
        assert_eq!(envelope.text_content(), "Error: Arguments must be an object, got string");
    }

    #[tokio::test]
    async fn test_deterministic_handler_is_idempotent() {
        let d = dispatcher(vec![echo_tool()]);
        let first = d.invoke("echo", json!({ "msg": "same" })).await;
        let second = d.invoke("echo", json!({ "msg": "same" })).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_invocations_run_concurrently() {
        // Both calls must be in flight at once to get past the barrier.
        let barrier = Arc::new(Barrier::new(2));
        let d = dispatcher(vec![ToolDefinition::new(
            "rendezvous",
            "Waits for a second caller",
            SchemaDescriptor::new(),
            move |_args: Arguments| {
                let barrier = barrier.clone();
                async move {
                    barrier.wait().await;
                    Ok::<_, anyhow::Error>(ToolPayload::text("met"))
                }
            },
        )]);

        let both = futures::future::join(
            d.invoke("rendezvous", json!({})),
            d.invoke("rendezvous", json!({})),
        );
        let (a, b) = tokio::time::timeout(Duration::from_secs(5), both)
            .await
            .expect("invocations were serialized");
        assert_eq!(a.text_content(), "met");
        assert_eq!(b.text_content(), "met");
    }
}
