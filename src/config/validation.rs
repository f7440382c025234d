//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check base URLs are absolute http(s) URLs usable as prefixes
//! - Check base URLs are already canonical (the origin guard compares raw strings)
//! - Check the log level is one tracing understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::RouterConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyBaseUrl { field: &'static str },

    #[error("{field} is not an absolute URL ({value}): {reason}")]
    InvalidBaseUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field} must use http or https, got {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("{field} is not in canonical form ({value}); write it as {canonical}")]
    NonCanonicalBaseUrl {
        field: &'static str,
        value: String,
        canonical: String,
    },

    #[error("{field} must not carry a query or fragment")]
    UnexpectedQuery { field: &'static str },

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_base_url("origins.api_base_url", &config.origins.api_base_url, &mut errors);
    validate_base_url("origins.web_base_url", &config.origins.web_base_url, &mut errors);

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_base_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::EmptyBaseUrl { field });
        return;
    }

    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(e) => {
            errors.push(ValidationError::InvalidBaseUrl {
                field,
                value: value.to_string(),
                reason: e.to_string(),
            });
            return;
        }
    };

    if !matches!(url.scheme(), "http" | "https") {
        errors.push(ValidationError::UnsupportedScheme {
            field,
            scheme: url.scheme().to_string(),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        errors.push(ValidationError::UnexpectedQuery { field });
    }

    // Parsed links are canonical, so a non-canonical prefix can never match one.
    let canonical = url.as_str().trim_end_matches('/');
    if canonical != value.trim_end_matches('/') {
        errors.push(ValidationError::NonCanonicalBaseUrl {
            field,
            value: value.to_string(),
            canonical: canonical.to_string(),
        });
    }
}
