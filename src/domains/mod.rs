//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: schema-described tools, their registry and dispatcher
//!   - **tools::definitions**: the sample tool catalog

pub mod tools;
