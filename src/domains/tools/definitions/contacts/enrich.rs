//! Enrich contact tool definition.
//!
//! A tool that expands an e-mail address into a fuller contact record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::super::CatalogTool;
use crate::domains::tools::{Arguments, FieldSpec, HandlerResult, SchemaDescriptor, ToolPayload};

/// Parameters for the enrich contact tool.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichContactParams {
    /// Contact email address.
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
}

/// An enriched contact record.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedContact {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub job_title: &'static str,
    pub department: &'static str,
    pub seniority: &'static str,
    pub phone: String,
    pub linkedin: String,
    pub location: &'static str,
    pub experience_years: u64,
    pub education: &'static str,
    pub skills: [&'static str; 4],
    pub last_updated: String,
}

/// Enrich contact tool - fills in contact details from an e-mail address.
pub struct EnrichContactTool;

impl CatalogTool for EnrichContactTool {
    const NAME: &'static str = "enrich_contact";
    const DESCRIPTION: &'static str = "Enrich contact data with additional information";
    const LATENCY_MS: u64 = 600;

    fn schema() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .required_property("email", FieldSpec::string("Contact email address"))
            .property("first_name", FieldSpec::string("Contact first name"))
            .property("last_name", FieldSpec::string("Contact last name"))
            .property("company", FieldSpec::string("Contact company"))
    }

    #[instrument(skip_all)]
    fn execute(arguments: Arguments) -> HandlerResult {
        let params: EnrichContactParams = serde_json::from_value(Value::Object(arguments))?;
        info!("Enrich contact tool called for: {}", params.email);

        let seed = email_seed(&params.email);

        let first_name = params.first_name.unwrap_or_else(|| "Unknown".to_string());
        let last_name = params.last_name.unwrap_or_else(|| "Unknown".to_string());

        let contact = EnrichedContact {
            linkedin: format!(
                "https://linkedin.com/in/{}{}",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            email: params.email.clone(),
            first_name,
            last_name,
            company: params.company.unwrap_or_else(|| "Unknown Company".to_string()),
            job_title: "Senior Manager",
            department: "Sales",
            seniority: "Senior",
            phone: format!("+1-555-{:04}", seed % 10_000),
            location: "United States",
            experience_years: 5 + (seed >> 16) % 15,
            education: "MBA, Business Administration",
            skills: ["Sales", "Business Development", "CRM", "Lead Generation"],
            last_updated: chrono::Utc::now().to_rfc3339(),
        };

        Ok(ToolPayload::new(
            format!("Enriched contact data for {}", params.email),
            serde_json::to_value(contact)?,
        ))
    }
}

/// FNV-1a over the e-mail bytes. Synthetic fields derive from this seed, so
/// the same address always enriches to the same phone and experience.
fn email_seed(email: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    email
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
