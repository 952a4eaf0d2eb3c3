//! Market analysis tool definition.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::super::CatalogTool;
use super::report_date;
use crate::domains::tools::{Arguments, FieldSpec, HandlerResult, SchemaDescriptor, ToolPayload};

/// Parameters for the market analysis tool.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketAnalysisParams {
    pub industry: String,
    pub region: String,
    pub timeframe: String,
}

/// Market analysis tool - analyses an industry or sector.
pub struct MarketAnalysisTool;

impl CatalogTool for MarketAnalysisTool {
    const NAME: &'static str = "market_analysis";
    const DESCRIPTION: &'static str = "Perform market analysis for a specific industry or sector";
    const LATENCY_MS: u64 = 1500;

    fn schema() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .required_property("industry", FieldSpec::string("Industry or sector to analyze"))
            .property(
                "region",
                FieldSpec::string("Geographic region for analysis").with_default("global"),
            )
            .property(
                "timeframe",
                FieldSpec::string("Timeframe for analysis (e.g., \"last 6 months\", \"2024\")")
                    .with_default("current"),
            )
    }

    #[instrument(skip_all)]
    fn execute(arguments: Arguments) -> HandlerResult {
        let params: MarketAnalysisParams = serde_json::from_value(Value::Object(arguments))?;
        info!("Market analysis tool called for {}", params.industry);

        let analysis = json!({
            "industry": &params.industry,
            "region": &params.region,
            "timeframe": &params.timeframe,
            "market_size": "$50B globally",
            "growth_rate": "8.5% CAGR",
            "key_trends": [
                "Digital transformation acceleration",
                "AI and automation adoption",
                "Sustainability focus",
                "Remote work normalization",
            ],
            "major_players": ["Market Leader Corp", "Innovation Inc", "Global Solutions Ltd"],
            "opportunities": [
                "Emerging market expansion",
                "Technology integration",
                "Sustainability solutions",
            ],
            "challenges": ["Regulatory compliance", "Talent shortage", "Economic uncertainty"],
            "analysis_date": report_date(),
        });

        Ok(ToolPayload::new(
            format!("Market Analysis for {} ({})", params.industry, params.region),
            analysis,
        ))
    }
}
