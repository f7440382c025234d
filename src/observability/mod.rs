//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing::Router produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (resolution counters via the metrics facade)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → whatever metrics recorder the embedding app installs
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Route names are the label for every event
//! - Metrics are cheap no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
