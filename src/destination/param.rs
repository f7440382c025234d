//! Identifier that is either a numeric id or a slug.

use std::fmt;

use serde::Serialize;

/// A project, category or user identifier.
///
/// The router never interprets a path segment: everything it binds is a
/// [`Param::Slug`], even when the text happens to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    Id(i64),
    Slug(String),
}

impl Param {
    pub fn slug(s: impl Into<String>) -> Self {
        Param::Slug(s.into())
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            Param::Id(id) => Some(*id),
            Param::Slug(_) => None,
        }
    }

    pub fn as_slug(&self) -> Option<&str> {
        match self {
            Param::Id(_) => None,
            Param::Slug(s) => Some(s),
        }
    }
}

impl From<i64> for Param {
    fn from(id: i64) -> Self {
        Param::Id(id)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Slug(s.to_string())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Id(id) => write!(f, "{}", id),
            Param::Slug(s) => f.write_str(s),
        }
    }
}
