//! Discovery filter decoded from link parameters.
//!
//! # Responsibilities
//! - Describe the project search a `/discover` link asks for
//! - Decode itself from a parameter bag through [`FromParams`]
//!
//! # Design Decisions
//! - Every field is optional; an empty bag is the default filter
//! - Unknown keys are ignored (links carry unrelated tracking params)
//! - A known key with a malformed value fails the whole decode

use std::str::FromStr;

use serde::Serialize;

use crate::routing::params::{DecodeError, DecodeResult, Params};

/// Values that can be decoded from a route's parameter bag.
pub trait FromParams: Sized {
    fn from_params(params: &Params) -> DecodeResult<Self>;
}

/// Ordering for discovered projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
    Magic,
    Popularity,
    Newest,
    EndDate,
    MostFunded,
}

impl FromStr for Sort {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "magic" => Ok(Sort::Magic),
            "popularity" => Ok(Sort::Popularity),
            "newest" => Ok(Sort::Newest),
            "end_date" => Ok(Sort::EndDate),
            "most_funded" => Ok(Sort::MostFunded),
            _ => Err(DecodeError::InvalidFormat {
                field: "sort".to_string(),
                value: s.to_string(),
                expected: "a sort order",
            }),
        }
    }
}

/// Project search parameters carried by discovery links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryFilter {
    pub backed: Option<bool>,
    pub category_id: Option<i64>,
    pub has_video: Option<bool>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub query: Option<String>,
    pub recommended: Option<bool>,
    pub similar_to: Option<i64>,
    pub social: Option<bool>,
    pub sort: Option<Sort>,
    pub staff_picks: Option<bool>,
    pub starred: Option<bool>,
}

impl DiscoveryFilter {
    pub fn is_default(&self) -> bool {
        *self == DiscoveryFilter::default()
    }
}

impl FromParams for DiscoveryFilter {
    fn from_params(params: &Params) -> DecodeResult<Self> {
        Ok(DiscoveryFilter {
            backed: params.optional_bool("backed")?,
            category_id: params.optional_int("category_id")?,
            has_video: params.optional_bool("has_video")?,
            page: params.optional_int("page")?,
            per_page: params.optional_int("per_page")?,
            query: params.get("term").map(str::to_string),
            recommended: params.optional_bool("recommended")?,
            similar_to: params.optional_int("similar_to")?,
            social: params.optional_bool("social")?,
            sort: params.get("sort").map(str::parse::<Sort>).transpose()?,
            staff_picks: params.optional_bool("staff_picks")?,
            starred: params.optional_bool("starred")?,
        })
    }
}
