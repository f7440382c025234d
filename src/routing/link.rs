//! URL abstraction consumed by the router.
//!
//! # Responsibilities
//! - Expose the absolute string (origin guard), the path and the query
//! - Split the path into non-empty, percent-decoded segments
//! - Split the query into name/value items
//!
//! # Design Decisions
//! - The whole path is decoded before splitting, so `%2F` starts a new segment
//! - Decoded `?`-prefixed segments are dropped
//! - Invalid percent-encoded UTF-8 makes the link undecodable (`None`), never lossy
//! - Query items keep "no value" distinct from "empty value"
//! - `+` in a query is left as-is (not form decoding)

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Anything the router can match: a parsed URL or a request URI.
pub trait Link {
    /// Full string form, used by the origin guard.
    fn absolute(&self) -> Cow<'_, str>;

    /// Raw (still percent-encoded) path.
    fn raw_path(&self) -> &str;

    /// Raw query without the leading `?`.
    fn raw_query(&self) -> Option<&str>;

    /// Non-empty decoded path segments, or `None` if the path is not valid UTF-8.
    fn path_segments(&self) -> Option<Vec<String>> {
        let path = decode(self.raw_path())?;
        Some(
            path.split('/')
                .filter(|segment| !segment.is_empty() && !segment.starts_with('?'))
                .map(str::to_string)
                .collect(),
        )
    }

    /// Decoded query items, or `None` if any name or value is not valid UTF-8.
    fn query_items(&self) -> Option<Vec<(String, Option<String>)>> {
        let Some(query) = self.raw_query() else {
            return Some(Vec::new());
        };

        query
            .split('&')
            .filter(|item| !item.is_empty())
            .map(|item| match item.split_once('=') {
                Some((name, value)) => Some((decode(name)?, Some(decode(value)?))),
                None => Some((decode(item)?, None)),
            })
            .collect()
    }
}

impl Link for url::Url {
    fn absolute(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    fn raw_path(&self) -> &str {
        self.path()
    }

    fn raw_query(&self) -> Option<&str> {
        self.query()
    }
}

impl Link for http::Uri {
    fn absolute(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn raw_path(&self) -> &str {
        self.path()
    }

    fn raw_query(&self) -> Option<&str> {
        self.query()
    }
}

fn decode(raw: &str) -> Option<String> {
    percent_decode_str(raw).decode_utf8().ok().map(Cow::into_owned)
}
