//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use crate::domains::tools::ToolSuite;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Sample tool suites to register, in order.
    pub suites: Vec<ToolSuite>,

    /// Sleep for each sample tool's nominal latency before answering.
    pub simulate_latency: bool,

    /// Mark error envelopes with the MCP `isError` flag.
    pub flag_errors: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            suites: ToolSuite::ALL.to_vec(),
            simulate_latency: false,
            flag_errors: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "bizintel-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools: ToolsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TOOL_SUITES`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(timestamps) = env_flag("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(suites) = std::env::var("MCP_TOOL_SUITES") {
            config.tools.suites = parse_suites(&suites);
            info!("Tool suites from environment: {:?}", config.tools.suites);
        }

        if let Some(simulate) = env_flag("MCP_SIMULATE_LATENCY") {
            config.tools.simulate_latency = simulate;
        }

        if let Some(flag) = env_flag("MCP_FLAG_TOOL_ERRORS") {
            config.tools.flag_errors = flag;
            info!("Tool error flagging: {}", flag);
        }

        config
    }
}

/// Parse a comma-separated suite list, skipping unknown names.
fn parse_suites(raw: &str) -> Vec<ToolSuite> {
    let mut suites = Vec::new();
    for item in raw.split(',').filter(|s| !s.trim().is_empty()) {
        match item.parse::<ToolSuite>() {
            Ok(suite) if !suites.contains(&suite) => suites.push(suite),
            Ok(_) => {}
            Err(e) => warn!("Ignoring {}", e),
        }
    }
    suites
}

/// Read a boolean environment variable ("true"/"1"/"false"/"0").
fn env_flag(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => {
            warn!("Ignoring invalid boolean for {}: {}", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_tool_suites_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TOOL_SUITES", "research, bogus");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.suites, vec![ToolSuite::Research]);
        unsafe {
            std::env::remove_var("MCP_TOOL_SUITES");
        }
    }

    #[test]
    fn test_tool_flags_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SIMULATE_LATENCY", "true");
            std::env::set_var("MCP_FLAG_TOOL_ERRORS", "1");
        }
        let config = Config::from_env();
        assert!(config.tools.simulate_latency);
        assert!(config.tools.flag_errors);
        unsafe {
            std::env::remove_var("MCP_SIMULATE_LATENCY");
            std::env::remove_var("MCP_FLAG_TOOL_ERRORS");
        }
    }

    #[test]
    fn test_defaults_without_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_TOOL_SUITES");
            std::env::remove_var("MCP_SIMULATE_LATENCY");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.suites, ToolSuite::ALL.to_vec());
        assert!(!config.tools.simulate_latency);
    }

    #[test]
    fn test_parse_suites_dedups() {
        assert_eq!(
            parse_suites("contacts,research,contacts"),
            vec![ToolSuite::Contacts, ToolSuite::Research]
        );
        assert!(parse_suites("").is_empty());
    }
}
