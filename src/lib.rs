//! Deep-link routing engine.
//!
//! Maps an incoming URL to a typed [`Destination`], scanning an ordered
//! table of path templates. Unrecognized links resolve to `None`.

pub mod config;
pub mod destination;
pub mod discovery;
pub mod observability;
pub mod routing;

pub use config::{OriginConfig, RouterConfig};
pub use destination::{Destination, Param, RefTag};
pub use discovery::DiscoveryFilter;
pub use routing::{Link, Router};
