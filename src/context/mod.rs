//! Data context for interpolation
//!
//! The context maps top-level keywords (`data`, `url`, `user`) to nested
//! value trees. The engine navigates dotted paths through these trees and
//! never mutates them. An empty context is valid; lookups against it fail
//! with `UnexpectedValue` when referenced from an expression.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level keywords a dotted path may start with.
///
/// Context entries under other keys are permitted but unreachable from
/// expressions.
pub const TOP_LEVEL_KEYWORDS: [&str; 3] = ["data", "url", "user"];

/// A node in the context value tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    /// String scalar
    String(String),
    /// Signed integer scalar
    Integer(i64),
    /// Double-precision scalar
    Float(f64),
    /// Nested mapping
    Map(HashMap<String, ContextValue>),
}

impl ContextValue {
    /// Look up a key in a mapping node
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        match self {
            ContextValue::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Whether this node is a scalar (string or number)
    pub fn is_scalar(&self) -> bool {
        !matches!(self, ContextValue::Map(_))
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::String(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::String(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Integer(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl From<HashMap<String, ContextValue>> for ContextValue {
    fn from(value: HashMap<String, ContextValue>) -> Self {
        ContextValue::Map(value)
    }
}

/// Caller-supplied data context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataContext {
    entries: HashMap<String, ContextValue>,
}

impl DataContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tree under a top-level keyword
    pub fn insert(&mut self, keyword: impl Into<String>, value: impl Into<ContextValue>) {
        self.entries.insert(keyword.into(), value.into());
    }

    /// Get the tree under a top-level keyword
    pub fn get(&self, keyword: &str) -> Option<&ContextValue> {
        self.entries.get(keyword)
    }

    /// Whether the context has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a builder for constructing contexts
    pub fn builder() -> DataContextBuilder {
        DataContextBuilder::new()
    }
}

/// Builder for creating data contexts
#[derive(Debug, Clone, Default)]
pub struct DataContextBuilder {
    entries: HashMap<String, ContextValue>,
}

impl DataContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `data` tree
    pub fn data(self, value: impl Into<ContextValue>) -> Self {
        self.entry("data", value)
    }

    /// Set the `url` tree
    pub fn url(self, value: impl Into<ContextValue>) -> Self {
        self.entry("url", value)
    }

    /// Set the `user` tree
    pub fn user(self, value: impl Into<ContextValue>) -> Self {
        self.entry("user", value)
    }

    /// Set the tree under an arbitrary keyword
    pub fn entry(mut self, keyword: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.entries.insert(keyword.into(), value.into());
        self
    }

    /// Build the data context
    pub fn build(self) -> DataContext {
        DataContext {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_map() -> ContextValue {
        let mut user = HashMap::new();
        user.insert("name".to_string(), ContextValue::from("George"));
        ContextValue::Map(user)
    }

    #[test]
    fn test_empty_context() {
        let ctx = DataContext::new();
        assert!(ctx.is_empty());
        assert!(ctx.get("user").is_none());
    }

    #[test]
    fn test_builder() {
        let ctx = DataContext::builder().user(user_map()).build();
        let name = ctx.get("user").and_then(|u| u.get("name"));
        assert_eq!(name, Some(&ContextValue::String("George".to_string())));
    }

    #[test]
    fn test_scalar_classification() {
        assert!(ContextValue::from("x").is_scalar());
        assert!(ContextValue::from(2i64).is_scalar());
        assert!(ContextValue::from(-55.7).is_scalar());
        assert!(!user_map().is_scalar());
    }

    #[test]
    fn test_unknown_keyword_is_storable() {
        let ctx = DataContext::builder().entry("misc", "anything").build();
        assert!(ctx.get("misc").is_some());
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "user": { "name": "George" },
            "data": { "int": 2, "negativeDouble": -55.7 }
        });
        let ctx: DataContext = serde_json::from_value(json).unwrap();
        assert_eq!(
            ctx.get("user").and_then(|u| u.get("name")),
            Some(&ContextValue::String("George".to_string()))
        );
        assert_eq!(
            ctx.get("data").and_then(|d| d.get("int")),
            Some(&ContextValue::Integer(2))
        );
        assert_eq!(
            ctx.get("data").and_then(|d| d.get("negativeDouble")),
            Some(&ContextValue::Float(-55.7))
        );
    }

    #[test]
    fn test_json_round_trip() {
        let ctx = DataContext::builder()
            .data(user_map())
            .url("https://example.com")
            .build();
        let json = serde_json::to_value(&ctx).unwrap();
        let back: DataContext = serde_json::from_value(json).unwrap();
        assert_eq!(back, ctx);
    }
}
