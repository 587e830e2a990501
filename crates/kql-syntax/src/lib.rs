pub mod ast;
pub mod escape;

pub use ast::literal::{LiteralNode, LiteralValue, build_literal, build_phrase};
pub use ast::node::{KqlNode, is_literal, is_wildcard};
pub use ast::wildcard::{WILDCARD_SYMBOL, WildcardNode, build_wildcard};
pub use escape::{EscapePipeline, QUOTED_STRING, UNQUOTED_STRING};
