//! Search contacts tool definition.
//!
//! A tool that lists contacts working at a given company.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::super::{CatalogTool, slug};
use crate::domains::tools::{Arguments, FieldSpec, HandlerResult, SchemaDescriptor, ToolPayload};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the search contacts tool.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchContactsParams {
    /// Company name to search for contacts.
    pub company_name: String,

    /// Job title filter.
    pub job_title: Option<String>,

    /// Location filter.
    pub location: Option<String>,

    /// Maximum number of results.
    pub limit: f64,
}

/// A contact record.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: String,
    pub job_title: String,
    pub company: String,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub location: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Search contacts tool - finds contacts at a company.
pub struct SearchContactsTool;

impl SearchContactsTool {
    /// Build the sample contacts for a search.
    fn sample_contacts(params: &SearchContactsParams) -> Vec<Contact> {
        let domain = slug(&params.company_name);
        let samples = [
            (
                "John",
                "Smith",
                "Sales Manager",
                "+1-555-0123",
                "https://linkedin.com/in/johnsmith",
                "New York, NY",
            ),
            (
                "Sarah",
                "Johnson",
                "Marketing Director",
                "+1-555-0124",
                "https://linkedin.com/in/sarahjohnson",
                "San Francisco, CA",
            ),
        ];

        samples
            .into_iter()
            .map(|(first, last, title, phone, linkedin, location)| Contact {
                first_name: first,
                last_name: last,
                email: format!(
                    "{}.{}@{}.com",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    domain
                ),
                job_title: params.job_title.clone().unwrap_or_else(|| title.to_string()),
                company: params.company_name.clone(),
                phone,
                linkedin,
                location: params.location.clone().unwrap_or_else(|| location.to_string()),
            })
            .take(params.limit.max(0.0) as usize)
            .collect()
    }
}

impl CatalogTool for SearchContactsTool {
    const NAME: &'static str = "search_contacts";
    const DESCRIPTION: &'static str = "Search for contacts at a company";
    const LATENCY_MS: u64 = 1000;

    fn schema() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .required_property(
                "company_name",
                FieldSpec::string("Company name to search for contacts"),
            )
            .property("job_title", FieldSpec::string("Job title filter"))
            .property("location", FieldSpec::string("Location filter"))
            .property(
                "limit",
                FieldSpec::number("Maximum number of results").with_default(10),
            )
    }

    #[instrument(skip_all)]
    fn execute(arguments: Arguments) -> HandlerResult {
        let params: SearchContactsParams = serde_json::from_value(Value::Object(arguments))?;
        info!("Search contacts tool called for company: {}", params.company_name);

        let contacts = Self::sample_contacts(&params);

        Ok(ToolPayload::new(
            format!(
                "Found {} contacts for {}",
                contacts.len(),
                params.company_name
            ),
            serde_json::to_value(contacts)?,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
