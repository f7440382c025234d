//! Origin guard.
//!
//! Only links under the configured API or web base URL are routed.
//! The check is a case-sensitive byte prefix test on the link's absolute
//! string: no canonicalization, no host-only matching.

use crate::config::OriginConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginGuard {
    api_base_url: String,
    web_base_url: String,
}

impl OriginGuard {
    pub fn new(origins: &OriginConfig) -> Self {
        Self {
            api_base_url: origins.api_base_url.clone(),
            web_base_url: origins.web_base_url.clone(),
        }
    }

    /// Returns true if `absolute` starts with either base URL.
    pub fn admits(&self, absolute: &str) -> bool {
        absolute.starts_with(&self.api_base_url) || absolute.starts_with(&self.web_base_url)
    }
}
