//! Parameter bag and typed field extraction.
//!
//! # Responsibilities
//! - Hold path bindings and query items for one match attempt
//! - Extract required, optional and integer fields for decoders
//!
//! # Design Decisions
//! - Keys are unique; a later insert overwrites (query wins over path)
//! - Extraction short-circuits on the first missing or malformed field
//! - Values are kept as raw strings; coercion happens per field on demand

use std::collections::HashMap;

use thiserror::Error;

use crate::destination::{Param, RefTag};

/// Why a decoder could not build a destination from a bag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required key is absent.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// A key is present but its value cannot be coerced.
    #[error("field `{field}` expected {expected}, got {value:?}")]
    InvalidFormat {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// The discovery filter sub-decoder failed.
    #[error("invalid discovery filter: {0}")]
    InvalidFilter(Box<DecodeError>),
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// String-keyed, string-valued bindings for one template attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply query items on top of the current bindings.
    ///
    /// An item without a value unbinds its key.
    pub fn overlay<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        for (name, value) in items {
            match value {
                Some(value) => self.insert(name, value),
                None => {
                    self.remove(&name);
                }
            }
        }
    }

    pub fn required(&self, key: &str) -> DecodeResult<&str> {
        self.get(key).ok_or_else(|| DecodeError::MissingField(key.to_string()))
    }

    /// Required base-10 integer field.
    pub fn required_int(&self, key: &str) -> DecodeResult<i64> {
        parse_int(key, self.required(key)?)
    }

    /// Optional base-10 integer field; present-but-malformed is still an error.
    pub fn optional_int(&self, key: &str) -> DecodeResult<Option<i64>> {
        self.get(key).map(|v| parse_int(key, v)).transpose()
    }

    /// Optional boolean field (`true`/`false`/`1`/`0`).
    pub fn optional_bool(&self, key: &str) -> DecodeResult<Option<bool>> {
        self.get(key).map(|v| parse_bool(key, v)).transpose()
    }

    pub fn param(&self, key: &str) -> DecodeResult<Param> {
        self.required(key).map(Param::from)
    }

    pub fn optional_param(&self, key: &str) -> Option<Param> {
        self.get(key).map(Param::from)
    }

    /// The `ref_tag` query item; absence is never an error.
    pub fn ref_tag(&self) -> Option<RefTag> {
        self.get("ref_tag").map(RefTag::from)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

fn parse_int(field: &str, value: &str) -> DecodeResult<i64> {
    value.parse().map_err(|_| DecodeError::InvalidFormat {
        field: field.to_string(),
        value: value.to_string(),
        expected: "an integer",
    })
}

fn parse_bool(field: &str, value: &str) -> DecodeResult<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(DecodeError::InvalidFormat {
            field: field.to_string(),
            value: value.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        let params: Params = [("project_param", "gizmo")].into_iter().collect();
        assert_eq!(params.required("project_param"), Ok("gizmo"));
        assert_eq!(
            params.required("checkout_param"),
            Err(DecodeError::MissingField("checkout_param".into()))
        );
    }

    #[test]
    fn test_integer_coercion() {
        let params: Params = [("ok", "42"), ("neg", "-3"), ("bad", "notanumber"), ("space", " 1")]
            .into_iter()
            .collect();
        assert_eq!(params.required_int("ok"), Ok(42));
        assert_eq!(params.required_int("neg"), Ok(-3));
        assert!(matches!(
            params.required_int("bad"),
            Err(DecodeError::InvalidFormat { ref field, .. }) if field == "bad"
        ));
        assert!(params.required_int("space").is_err());
        assert_eq!(params.required_int("absent"), Err(DecodeError::MissingField("absent".into())));
        assert_eq!(params.optional_int("absent"), Ok(None));
    }

    #[test]
    fn test_bool_coercion() {
        let params: Params = [("a", "true"), ("b", "0"), ("c", "yes")].into_iter().collect();
        assert_eq!(params.optional_bool("a"), Ok(Some(true)));
        assert_eq!(params.optional_bool("b"), Ok(Some(false)));
        assert!(params.optional_bool("c").is_err());
        assert_eq!(params.optional_bool("d"), Ok(None));
    }

    #[test]
    fn test_overlay_overwrites_and_unbinds() {
        let mut params: Params = [("project_param", "from-path"), ("ref_tag", "push")].into_iter().collect();
        params.overlay(vec![
            ("project_param".to_string(), Some("from-query".to_string())),
            ("ref_tag".to_string(), None),
            ("extra".to_string(), Some(String::new())),
        ]);
        assert_eq!(params.get("project_param"), Some("from-query"));
        assert_eq!(params.get("ref_tag"), None);
        assert_eq!(params.get("extra"), Some(""));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_ref_tag_is_optional() {
        assert_eq!(Params::new().ref_tag(), None);
        let params: Params = [("ref_tag", "category")].into_iter().collect();
        assert_eq!(params.ref_tag(), Some(RefTag::Category));
    }

    #[test]
    fn test_error_display() {
        let err = DecodeError::InvalidFilter(Box::new(DecodeError::InvalidFormat {
            field: "page".into(),
            value: "x".into(),
            expected: "an integer",
        }));
        assert_eq!(
            err.to_string(),
            "invalid discovery filter: field `page` expected an integer, got \"x\""
        );
    }
}
