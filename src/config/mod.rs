//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → OriginConfig passed explicitly to routing::Router
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the router never reads ambient state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LogFormat, ObservabilityConfig, OriginConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
