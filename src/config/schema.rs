//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Base URLs whose links are routed.
    pub origins: OriginConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// The two recognized link origins.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OriginConfig {
    /// API origin (e.g., "https://api.example.com").
    pub api_base_url: String,

    /// Web origin (e.g., "https://www.example.com").
    pub web_base_url: String,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.example.com".to_string(),
            web_base_url: "https://www.example.com".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty for terminals, JSON for log shipping.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
