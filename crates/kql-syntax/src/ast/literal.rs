use crate::escape::{QUOTED_STRING, UNQUOTED_STRING};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    String(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => write!(f, "null"),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Boolean(value)
    }
}

impl<T: Into<LiteralValue>> From<Option<T>> for LiteralValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LiteralValue::Null, Into::into)
    }
}

impl From<LiteralValue> for serde_json::Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Null => serde_json::Value::Null,
            LiteralValue::Boolean(b) => serde_json::Value::Bool(b),
            LiteralValue::String(s) => serde_json::Value::String(s),
        }
    }
}

/// An atomic value inside a KQL expression, either a bare token or a
/// quoted phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralNode {
    pub value: LiteralValue,
    #[serde(rename = "isPhrase", default)]
    pub is_phrase: bool,
}

impl LiteralNode {
    pub fn new(value: impl Into<LiteralValue>, is_phrase: bool) -> Self {
        LiteralNode {
            value: value.into(),
            is_phrase,
        }
    }

    /// Render the literal back into KQL text.
    ///
    /// Phrases are wrapped in double quotes and only need quotes and
    /// whitespace escaped; bare values also escape special characters and
    /// the `and`/`or`/`not` keywords.
    pub fn to_kql_expression(&self) -> String {
        let raw = self.value.to_string();
        if self.is_phrase {
            format!("\"{}\"", QUOTED_STRING.apply(&raw))
        } else {
            UNQUOTED_STRING.apply(&raw)
        }
    }

    /// The value as it goes into a structured Elasticsearch query.
    pub fn to_elasticsearch_query(&self) -> &LiteralValue {
        &self.value
    }
}

/// Build a bare (unquoted) literal.
pub fn build_literal(value: impl Into<LiteralValue>) -> LiteralNode {
    LiteralNode::new(value, false)
}

/// Build a quoted phrase literal.
pub fn build_phrase(value: impl Into<LiteralValue>) -> LiteralNode {
    LiteralNode::new(value, true)
}
