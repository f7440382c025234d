//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming link (url::Url, http::Uri, or http::Request)
//!     → origin.rs (API / web base-URL prefix gate)
//!     → link.rs (path segments + query items)
//!     → router.rs (scan table.rs in declared order)
//!         → template.rs (positional bind, segment counts must agree)
//!         → params.rs (query items overlaid last, query wins)
//!         → decoders.rs (typed extraction → Destination)
//!     → Return: first decoded Destination or None
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - No regex: literal compare and positional binding only
//! - Deterministic: same link always yields the same destination
//! - First successful decode wins; decode errors stay local

pub mod decoders;
pub mod link;
pub mod origin;
pub mod params;
pub mod router;
pub mod table;
pub mod template;

pub use link::Link;
pub use origin::OriginGuard;
pub use params::{DecodeError, DecodeResult, Params};
pub use router::{Attempt, Explanation, Outcome, Resolution, Router};
pub use table::{default_routes, Route, RouterError};
pub use template::{Template, TemplateError};
