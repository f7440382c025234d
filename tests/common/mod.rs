//! Shared utilities for integration tests.

use deeplink_router::{Destination, OriginConfig, Router};

pub const WEB: &str = "https://web.example";
pub const API: &str = "https://api.web.example";

pub fn origins() -> OriginConfig {
    OriginConfig {
        api_base_url: API.to_string(),
        web_base_url: WEB.to_string(),
    }
}

/// Router over the default table with the test origins.
pub fn router() -> Router {
    Router::new(&origins())
}

/// Resolve `path_and_query` under the web origin.
#[allow(dead_code)]
pub fn web(path_and_query: &str) -> Option<Destination> {
    router().match_str(&format!("{}{}", WEB, path_and_query))
}
