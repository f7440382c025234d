//! Resolution metrics.
//!
//! # Metrics
//! - `deeplink_resolutions_total` (counter): outcome="matched" with route,
//!   or outcome="miss" with reason ("origin", "malformed", "no_route")
//! - `deeplink_decode_failures_total` (counter): by route
//!
//! # Design Decisions
//! - Labels are static strings; no URL text ends up in label values
//! - No exporter here; the host application owns the recorder

pub fn record_resolution(route: &'static str) {
    ::metrics::counter!("deeplink_resolutions_total", "outcome" => "matched", "route" => route).increment(1);
}

pub fn record_miss(reason: &'static str) {
    ::metrics::counter!("deeplink_resolutions_total", "outcome" => "miss", "reason" => reason).increment(1);
}

pub fn record_decode_failure(route: &'static str) {
    ::metrics::counter!("deeplink_decode_failures_total", "route" => route).increment(1);
}
