use crate::{
    ast::{literal::build_literal, node::KqlNode},
    escape::{UNQUOTED_STRING, escape_query_string},
};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder standing in for an unescaped `*` inside a wildcard value.
pub const WILDCARD_SYMBOL: &str = "@kuery-wildcard@";

/// A value containing one or more `*` wildcards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardNode {
    /// Value with every wildcard replaced by [`WILDCARD_SYMBOL`].
    pub value: String,
}

impl WildcardNode {
    fn segments(&self) -> impl Iterator<Item = &str> {
        self.value.split(WILDCARD_SYMBOL)
    }

    pub fn to_elasticsearch_query(&self) -> String {
        self.segments().collect::<Vec<_>>().join("*")
    }

    /// Lucene query-string form: literal segments escaped, wildcards kept.
    pub fn to_query_string_query(&self) -> String {
        self.segments()
            .map(escape_query_string)
            .collect::<Vec<_>>()
            .join("*")
    }

    pub fn to_kql_expression(&self) -> String {
        self.segments()
            .map(|segment| UNQUOTED_STRING.apply(segment))
            .collect::<Vec<_>>()
            .join("*")
    }

    /// True when the value starts with a wildcard and has something after it.
    pub fn has_leading_wildcard(&self) -> bool {
        self.value.starts_with(WILDCARD_SYMBOL)
            && !self.value.replacen(WILDCARD_SYMBOL, "", 1).is_empty()
    }

    /// Glob-match `input` against this value; wildcards match any run of
    /// characters, newlines included.
    pub fn test(&self, input: &str) -> bool {
        let pattern = self
            .segments()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"[\s\S]*");
        Regex::new(&format!("^{pattern}$"))
            .map(|re| re.is_match(input))
            .unwrap_or(false)
    }
}

/// Build a node from raw text where `*` means "any characters". Values
/// without a wildcard become bare literals.
pub fn build_wildcard(value: &str) -> KqlNode {
    if !value.contains('*') {
        return build_literal(value).into();
    }

    KqlNode::Wildcard(WildcardNode {
        value: value.replace('*', WILDCARD_SYMBOL),
    })
}
