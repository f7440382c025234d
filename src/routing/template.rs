//! Path templates.
//!
//! # Responsibilities
//! - Split a template into literal and `:placeholder` segments
//! - Bind a link's path segments positionally against it
//! - Validate template strings for the route table
//!
//! # Design Decisions
//! - Segment counts must be equal; no wildcards, no optional segments
//! - Literals compare byte-for-byte
//! - Parsing never fails; `validate` reports malformed templates separately

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::routing::params::Params;

/// Problems with a template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("template `{0}` has a placeholder with no name")]
    EmptyPlaceholder(String),

    #[error("template `{template}` has invalid placeholder name `{name}`")]
    InvalidPlaceholder { template: String, name: String },

    #[error("template `{template}` binds `{name}` more than once")]
    DuplicatePlaceholder { template: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed `/`-delimited path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        let segments = source
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Placeholder(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();

        Self {
            source: source.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in path order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Bind `path` against this template.
    ///
    /// Returns `None` when the segment counts differ or a literal disagrees.
    pub fn bind<S: AsRef<str>>(&self, path: &[S]) -> Option<Params> {
        if self.segments.len() != path.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(path) {
            let value = value.as_ref();
            match segment {
                Segment::Placeholder(name) => params.insert(name.as_str(), value),
                Segment::Literal(literal) if literal == value => {}
                Segment::Literal(_) => return None,
            }
        }
        Some(params)
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        if !self.source.starts_with('/') {
            return Err(TemplateError::MissingLeadingSlash(self.source.clone()));
        }

        let mut seen = HashSet::new();
        for name in self.placeholders() {
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder(self.source.clone()));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(TemplateError::InvalidPlaceholder {
                    template: self.source.clone(),
                    name: name.to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(TemplateError::DuplicatePlaceholder {
                    template: self.source.clone(),
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
