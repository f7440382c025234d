//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Gate links on the configured origins
//! - Scan the route table in order, binding and decoding
//! - Return the first decoded destination or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over routes, each O(segments); no backtracking
//! - Decoder failures never escape: they only move the scan along
//! - No-match is `None`, a normal outcome for unrelated links
//! - Links whose path or query is not valid UTF-8 are a miss, not a lossy match

use serde::Serialize;
use url::Url;

use crate::config::OriginConfig;
use crate::destination::{Destination, Param, RefTag};
use crate::observability::metrics;
use crate::routing::link::Link;
use crate::routing::origin::OriginGuard;
use crate::routing::params::DecodeError;
use crate::routing::table::{default_routes, validate_routes, Route, RouterError};

/// A successful match and the route that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub route: &'static str,
    pub destination: Destination,
}

/// What happened when one route was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ShapeMismatch,
    DecodeFailed(DecodeError),
    Matched(Destination),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub route: &'static str,
    pub outcome: Outcome,
}

/// Step-by-step account of a match, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Explanation {
    /// False when the origin guard rejected the link; `attempts` is then empty.
    pub admitted: bool,
    /// True when the path or query is not valid percent-encoded UTF-8.
    pub malformed: bool,
    pub attempts: Vec<Attempt>,
}

impl Explanation {
    pub fn destination(&self) -> Option<&Destination> {
        self.attempts.iter().find_map(|a| match &a.outcome {
            Outcome::Matched(destination) => Some(destination),
            _ => None,
        })
    }

    /// The winning route, as [`Router::resolve`] would report it.
    pub fn resolution(&self) -> Option<Resolution> {
        self.attempts.iter().find_map(|a| match &a.outcome {
            Outcome::Matched(destination) => Some(Resolution {
                route: a.route,
                destination: destination.clone(),
            }),
            _ => None,
        })
    }
}

/// Deep-link router.
#[derive(Debug, Clone)]
pub struct Router {
    guard: OriginGuard,
    routes: Vec<Route>,
}

impl Router {
    /// Router over the default route table.
    pub fn new(origins: &OriginConfig) -> Self {
        Self {
            guard: OriginGuard::new(origins),
            routes: default_routes(),
        }
    }

    /// Router over a caller-supplied table, tried in the given order.
    pub fn with_routes(origins: &OriginConfig, routes: Vec<Route>) -> Result<Self, RouterError> {
        validate_routes(&routes)?;
        Ok(Self {
            guard: OriginGuard::new(origins),
            routes,
        })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn match_link<L: Link + ?Sized>(&self, link: &L) -> Option<Destination> {
        self.resolve(link).map(|r| r.destination)
    }

    pub fn match_url(&self, url: &Url) -> Option<Destination> {
        self.match_link(url)
    }

    pub fn match_uri(&self, uri: &http::Uri) -> Option<Destination> {
        self.match_link(uri)
    }

    pub fn match_request<B>(&self, request: &http::Request<B>) -> Option<Destination> {
        self.match_uri(request.uri())
    }

    /// Parse and match `raw`; unparseable input is simply no match.
    pub fn match_str(&self, raw: &str) -> Option<Destination> {
        let url = Url::parse(raw).ok()?;
        self.match_url(&url)
    }

    /// Match `link`, also reporting which route won.
    pub fn resolve<L: Link + ?Sized>(&self, link: &L) -> Option<Resolution> {
        let absolute = link.absolute();
        let scan = match self.scan(link) {
            Ok(scan) => scan,
            Err(miss) => {
                tracing::trace!(url = %absolute, reason = miss.reason(), "Link not routable");
                metrics::record_miss(miss.reason());
                return None;
            }
        };

        for (route, outcome) in scan {
            match outcome {
                Outcome::ShapeMismatch => {}
                Outcome::DecodeFailed(e) => {
                    tracing::debug!(route = route.name, error = %e, "Route shape matched but decode failed");
                    metrics::record_decode_failure(route.name);
                }
                Outcome::Matched(destination) => {
                    tracing::debug!(route = route.name, url = %absolute, "Link matched");
                    metrics::record_resolution(route.name);
                    return Some(Resolution {
                        route: route.name,
                        destination,
                    });
                }
            }
        }

        tracing::debug!(url = %absolute, "No route matched");
        metrics::record_miss("no_route");
        None
    }

    /// Same scan as [`Router::resolve`], recording every attempt.
    pub fn explain<L: Link + ?Sized>(&self, link: &L) -> Explanation {
        let scan = match self.scan(link) {
            Ok(scan) => scan,
            Err(Miss::Origin) => return Explanation::default(),
            Err(Miss::Malformed) => {
                return Explanation {
                    admitted: true,
                    malformed: true,
                    attempts: Vec::new(),
                }
            }
        };

        let mut attempts = Vec::new();
        for (route, outcome) in scan {
            let matched = matches!(outcome, Outcome::Matched(_));
            attempts.push(Attempt {
                route: route.name,
                outcome,
            });
            if matched {
                break;
            }
        }

        Explanation {
            admitted: true,
            malformed: false,
            attempts,
        }
    }

    /// Param and referral tag of a project-root link.
    pub fn project_root<L: Link + ?Sized>(&self, link: &L) -> Option<(Param, Option<RefTag>)> {
        let destination = self.match_link(link)?;
        destination
            .as_project_root()
            .map(|(param, ref_tag)| (param.clone(), ref_tag.cloned()))
    }

    /// Param and update id of an update link.
    pub fn update_root<L: Link + ?Sized>(&self, link: &L) -> Option<(Param, i64)> {
        let destination = self.match_link(link)?;
        destination.as_update_root().map(|(param, id)| (param.clone(), id))
    }

    /// Param and update id of an update-comments link.
    pub fn update_comments<L: Link + ?Sized>(&self, link: &L) -> Option<(Param, i64)> {
        let destination = self.match_link(link)?;
        destination.as_update_comments().map(|(param, id)| (param.clone(), id))
    }

    fn scan<L: Link + ?Sized>(&self, link: &L) -> Result<Scan<'_>, Miss> {
        if !self.guard.admits(&link.absolute()) {
            return Err(Miss::Origin);
        }
        let path = link.path_segments().ok_or(Miss::Malformed)?;
        let query = link.query_items().ok_or(Miss::Malformed)?;
        Ok(Scan {
            routes: self.routes.iter(),
            path,
            query,
        })
    }
}

/// Why a link never reached the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Miss {
    Origin,
    Malformed,
}

impl Miss {
    fn reason(self) -> &'static str {
        match self {
            Miss::Origin => "origin",
            Miss::Malformed => "malformed",
        }
    }
}

/// Lazily tries each route in table order.
struct Scan<'a> {
    routes: std::slice::Iter<'a, Route>,
    path: Vec<String>,
    query: Vec<(String, Option<String>)>,
}

impl<'a> Iterator for Scan<'a> {
    type Item = (&'a Route, Outcome);

    fn next(&mut self) -> Option<Self::Item> {
        let route = self.routes.next()?;
        let outcome = match route.template.bind(&self.path) {
            None => Outcome::ShapeMismatch,
            Some(mut params) => {
                params.overlay(self.query.iter().cloned());
                match (route.decoder)(&params) {
                    Ok(destination) => Outcome::Matched(destination),
                    Err(e) => Outcome::DecodeFailed(e),
                }
            }
        };
        Some((route, outcome))
    }
}
