//! Company info tool definition.
//!
//! A tool that returns a company profile by name or domain.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::super::{CatalogTool, slug};
use crate::domains::tools::{Arguments, FieldSpec, HandlerResult, SchemaDescriptor, ToolPayload};

/// Parameters for the company info tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetCompanyInfoParams {
    /// Company name to look up.
    pub company_name: Option<String>,

    /// Company domain (alternative to company name).
    pub domain: Option<String>,
}

/// Company info tool - looks up a company profile.
pub struct GetCompanyInfoTool;

impl CatalogTool for GetCompanyInfoTool {
    const NAME: &'static str = "get_company_info";
    const DESCRIPTION: &'static str = "Get detailed company information";
    const LATENCY_MS: u64 = 800;

    fn schema() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .property("company_name", FieldSpec::string("Company name to lookup"))
            .property(
                "domain",
                FieldSpec::string("Company domain (alternative to company name)"),
            )
    }

    #[instrument(skip_all)]
    fn execute(arguments: Arguments) -> HandlerResult {
        let params: GetCompanyInfoParams = serde_json::from_value(Value::Object(arguments))?;

        let identifier = params
            .company_name
            .as_deref()
            .or(params.domain.as_deref())
            .unwrap_or("unknown company");
        info!("Company info tool called for: {}", identifier);

        let handle = slug(params.company_name.as_deref().unwrap_or("example"));
        let domain = match (&params.domain, &params.company_name) {
            (Some(domain), _) => domain.clone(),
            (None, Some(name)) => format!("{}.com", slug(name)),
            (None, None) => "example.com".to_string(),
        };

        let profile = json!({
            "name": params.company_name.as_deref().unwrap_or("Example Corp"),
            "domain": domain,
            "industry": "Technology",
            "employee_count": "1000-5000",
            "revenue": "$100M - $500M",
            "headquarters": "San Francisco, CA",
            "founded": "2010",
            "description": "Leading technology company specializing in innovative solutions",
            "technologies": ["Salesforce", "HubSpot", "AWS", "React"],
            "social_media": {
                "linkedin": format!("https://linkedin.com/company/{}", handle),
                "twitter": format!("@{}", handle),
            },
        });

        Ok(ToolPayload::new(
            format!("Company Information for {}", identifier),
            profile,
        ))
    }
}
