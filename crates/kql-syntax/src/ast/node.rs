use crate::ast::{literal::LiteralNode, wildcard::WildcardNode};
use serde::{Deserialize, Serialize};

/// A node of a KQL expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KqlNode {
    Literal(LiteralNode),
    Wildcard(WildcardNode),
}

impl KqlNode {
    pub fn to_kql_expression(&self) -> String {
        match self {
            KqlNode::Literal(node) => node.to_kql_expression(),
            KqlNode::Wildcard(node) => node.to_kql_expression(),
        }
    }

    pub fn to_elasticsearch_query(&self) -> serde_json::Value {
        match self {
            KqlNode::Literal(node) => node.to_elasticsearch_query().clone().into(),
            KqlNode::Wildcard(node) => serde_json::Value::String(node.to_elasticsearch_query()),
        }
    }
}

impl From<LiteralNode> for KqlNode {
    fn from(node: LiteralNode) -> Self {
        KqlNode::Literal(node)
    }
}

impl From<WildcardNode> for KqlNode {
    fn from(node: WildcardNode) -> Self {
        KqlNode::Wildcard(node)
    }
}

pub fn is_literal(node: &KqlNode) -> bool {
    matches!(node, KqlNode::Literal(_))
}

pub fn is_wildcard(node: &KqlNode) -> bool {
    matches!(node, KqlNode::Wildcard(_))
}
