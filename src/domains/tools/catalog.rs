//! Tool catalog - builds the registry served by the binary.
//!
//! Sample tools are grouped into suites that can be enabled independently
//! through configuration. Registration order here is the order clients see
//! in `tools/list`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::definitions::{
    CompetitiveIntelligenceTool, EnrichContactTool, GetCompanyInfoTool, MarketAnalysisTool,
    ResearchCompanyTool, SearchContactsTool, TrendAnalysisTool, definition,
};
use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::core::config::ToolsConfig;

/// A named group of sample tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolSuite {
    /// Contact search, company lookup and contact enrichment.
    Contacts,
    /// Company research, market, competitive and trend analysis.
    Research,
}

impl ToolSuite {
    /// All suites, in registration order.
    pub const ALL: [ToolSuite; 2] = [ToolSuite::Contacts, ToolSuite::Research];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Research => "research",
        }
    }

    /// Register this suite's tools.
    fn register(self, registry: &mut ToolRegistry, config: &ToolsConfig) -> Result<(), ToolError> {
        match self {
            Self::Contacts => {
                registry.register(definition::<SearchContactsTool>(config))?;
                registry.register(definition::<GetCompanyInfoTool>(config))?;
                registry.register(definition::<EnrichContactTool>(config))?;
            }
            Self::Research => {
                registry.register(definition::<ResearchCompanyTool>(config))?;
                registry.register(definition::<MarketAnalysisTool>(config))?;
                registry.register(definition::<CompetitiveIntelligenceTool>(config))?;
                registry.register(definition::<TrendAnalysisTool>(config))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ToolSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolSuite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contacts" => Ok(Self::Contacts),
            "research" => Ok(Self::Research),
            other => Err(format!("unknown tool suite: {}", other)),
        }
    }
}

/// Build the tool registry for the enabled suites.
///
/// A suite listed twice fails with `DuplicateTool`.
pub fn build_tool_registry(config: &ToolsConfig) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    for suite in &config.suites {
        suite.register(&mut registry, config)?;
        info!("Registered tool suite: {}", suite);
    }
    info!("Tool registry ready with {} tools", registry.len());
    Ok(registry)
}
