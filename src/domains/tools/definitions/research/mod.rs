//! Research tools.
//!
//! This suite provides placeholder market research tools:
//! - `company`: Company research report
//! - `market`: Industry market analysis
//! - `competitive`: Competitive intelligence
//! - `trend`: Trend analysis for a topic

pub mod company;
pub mod competitive;
pub mod market;
pub mod trend;

pub use company::{ResearchCompanyParams, ResearchCompanyTool};
pub use competitive::{CompetitiveIntelligenceParams, CompetitiveIntelligenceTool};
pub use market::{MarketAnalysisParams, MarketAnalysisTool};
pub use trend::{TrendAnalysisParams, TrendAnalysisTool};

/// Current time as an RFC 3339 string, stamped on every report.
pub(crate) fn report_date() -> String {
    chrono::Utc::now().to_rfc3339()
}
