//! Research company tool definition.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::super::CatalogTool;
use super::report_date;
use crate::domains::tools::{Arguments, FieldSpec, HandlerResult, SchemaDescriptor, ToolPayload};

/// Parameters for the research company tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchCompanyParams {
    pub company_name: String,
    pub focus_areas: Vec<String>,
    pub depth: String,
}

/// Research company tool - produces a company research report.
pub struct ResearchCompanyTool;

impl CatalogTool for ResearchCompanyTool {
    const NAME: &'static str = "research_company";
    const DESCRIPTION: &'static str = "Research a company for comprehensive analysis";
    const LATENCY_MS: u64 = 2000;

    fn schema() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .required_property("company_name", FieldSpec::string("Company name to research"))
            .property(
                "focus_areas",
                FieldSpec::string_array(
                    "Specific areas to focus research on (e.g., financials, competitors, news)",
                )
                .with_default(json!(["overview", "recent_news", "financials"])),
            )
            .property(
                "depth",
                FieldSpec::enumeration(["basic", "detailed", "comprehensive"], "Depth of research")
                    .with_default("detailed"),
            )
    }

    #[instrument(skip_all)]
    fn execute(arguments: Arguments) -> HandlerResult {
        let params: ResearchCompanyParams = serde_json::from_value(Value::Object(arguments))?;
        info!(
            "Research company tool called for {} ({})",
            params.company_name, params.depth
        );

        let name = &params.company_name;
        let report = json!({
            "company": name,
            "research_depth": params.depth,
            "focus_areas": params.focus_areas,
            "findings": {
                "overview": {
                    "description": format!("{} is a leading company in its sector with strong market presence.", name),
                    "founded": "2010",
                    "headquarters": "San Francisco, CA",
                    "employee_count": "1,000-5,000",
                    "industry": "Technology",
                },
                "recent_news": [
                    {
                        "headline": format!("{} announces new product launch", name),
                        "date": "2024-01-15",
                        "source": "TechCrunch",
                        "summary": "Company unveils innovative solution targeting enterprise market.",
                    },
                    {
                        "headline": format!("{} secures Series B funding", name),
                        "date": "2024-01-10",
                        "source": "VentureBeat",
                        "summary": "Raised $50M to expand operations and product development.",
                    },
                ],
                "financials": {
                    "revenue_estimate": "$100M - $500M",
                    "funding_total": "$150M",
                    "last_funding_round": "Series B",
                    "valuation": "$1B+",
                    "growth_rate": "25% YoY",
                },
                "key_executives": [
                    { "name": "John CEO", "title": "Chief Executive Officer" },
                    { "name": "Jane CTO", "title": "Chief Technology Officer" },
                ],
                "competitive_position": "Strong market position with differentiated technology stack",
                "risk_factors": ["Market competition", "Regulatory changes", "Technology disruption"],
            },
            "research_date": report_date(),
        });

        Ok(ToolPayload::new(
            format!("Research Results for {}", name),
            report,
        ))
    }
}
