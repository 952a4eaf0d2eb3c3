//! Tool definitions module.
//!
//! Each sample tool is defined in its own file with:
//! - Metadata (name, description, nominal latency)
//! - Its schema descriptor
//! - A params struct and an `execute()` function producing placeholder data
//!
//! The handlers never contact a remote service; they return fixed sample
//! records shaped like the real provider responses.

pub mod contacts;
pub mod research;

use std::time::Duration;

use crate::core::config::ToolsConfig;

use super::handlers::HandlerResult;
use super::registry::ToolDefinition;
use super::schema::{Arguments, SchemaDescriptor};

pub use contacts::{EnrichContactTool, GetCompanyInfoTool, SearchContactsTool};
pub use research::{
    CompetitiveIntelligenceTool, MarketAnalysisTool, ResearchCompanyTool, TrendAnalysisTool,
};

/// Trait for catalog tool definitions.
///
/// Each sample tool implements this trait to provide its metadata, schema
/// and behaviour; [`definition`] turns it into a registrable
/// [`ToolDefinition`].
pub trait CatalogTool {
    /// The unique name of the tool.
    const NAME: &'static str;

    /// A description of what the tool does.
    const DESCRIPTION: &'static str;

    /// Delay applied before answering when latency simulation is enabled.
    const LATENCY_MS: u64;

    /// The input contract.
    fn schema() -> SchemaDescriptor;

    /// Produce the tool's result from validated arguments.
    fn execute(arguments: Arguments) -> HandlerResult;
}

/// Build a ToolDefinition from a CatalogTool.
pub fn definition<T>(config: &ToolsConfig) -> ToolDefinition
where
    T: CatalogTool + 'static,
{
    let latency = config
        .simulate_latency
        .then(|| Duration::from_millis(T::LATENCY_MS));

    ToolDefinition::new(
        T::NAME,
        T::DESCRIPTION,
        T::schema(),
        move |arguments: Arguments| async move {
            if let Some(delay) = latency {
                tokio::time::sleep(delay).await;
            }
            T::execute(arguments)
        },
    )
}

/// Lower-case a name and strip whitespace, e.g. for synthetic domains.
pub(crate) fn slug(name: &str) -> String {
    name.split_whitespace().collect::<String>().to_lowercase()
}
