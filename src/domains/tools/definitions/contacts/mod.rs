//! Contact data tools.
//!
//! This suite provides placeholder prospect-research tools:
//! - `search`: Find contacts at a company
//! - `company_info`: Look up a company profile
//! - `enrich`: Enrich a contact record from an e-mail address

pub mod company_info;
pub mod enrich;
pub mod search;

pub use company_info::{GetCompanyInfoParams, GetCompanyInfoTool};
pub use enrich::{EnrichContactParams, EnrichContactTool};
pub use search::{SearchContactsParams, SearchContactsTool};
