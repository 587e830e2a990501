//! Escaping rules for rendering values back into KQL text.
//!
//! Every rule is an independent `&str -> String` transform mirroring one
//! character class of the KQL grammar. Rules are grouped into
//! [`EscapePipeline`]s that apply them left to right. Order inside a
//! pipeline matters: special characters are escaped before keywords so the
//! backslashes inserted for keywords are not escaped again, and whitespace
//! always goes last.
//!
//! The pipelines are not idempotent. Escaping an already escaped string
//! escapes its backslashes a second time.

use lazy_static::lazy_static;
use regex::Regex;

/// A single escaping stage.
pub type EscapeFn = fn(&str) -> String;

/// Whitespace as KQL sees it: Unicode white space plus the byte order mark,
/// without NEL (U+0085).
const WHITESPACE: &str = r"[[\s\x{FEFF}]--\x{85}]";

lazy_static! {
    static ref SPECIAL_CHARACTER: Regex =
        Regex::new(r#"[\\():<>"*{}]"#).expect("special character class is valid");
    static ref AND_OR_KEYWORD: Regex =
        Regex::new(&format!(r"(?i)({WHITESPACE}+)(and|or)({WHITESPACE}+)"))
            .expect("and/or keyword pattern is valid");
    static ref NOT_KEYWORD: Regex =
        Regex::new(&format!(r"(?i)not({WHITESPACE}+)")).expect("not keyword pattern is valid");
}

/// An ordered list of escaping stages folded left to right.
#[derive(Debug, Clone, Copy)]
pub struct EscapePipeline {
    name: &'static str,
    stages: &'static [EscapeFn],
}

impl EscapePipeline {
    pub const fn new(name: &'static str, stages: &'static [EscapeFn]) -> Self {
        EscapePipeline { name, stages }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stages(&self) -> &'static [EscapeFn] {
        self.stages
    }

    /// Run `input` through every stage in order.
    pub fn apply(&self, input: &str) -> String {
        self.stages
            .iter()
            .fold(input.to_string(), |acc, stage| stage(&acc))
    }
}

/// Escaping for the inside of a double-quoted phrase.
pub const QUOTED_STRING: EscapePipeline =
    EscapePipeline::new("quoted_string", &[escape_quotes as EscapeFn, escape_whitespace]);

/// Escaping for a bare, unquoted value.
pub const UNQUOTED_STRING: EscapePipeline = EscapePipeline::new(
    "unquoted_string",
    &[
        escape_special_characters as EscapeFn,
        escape_keyword,
        escape_whitespace,
    ],
);

pub fn escape_quoted_string(value: &str) -> String {
    QUOTED_STRING.apply(value)
}

pub fn escape_unquoted_string(value: &str) -> String {
    UNQUOTED_STRING.apply(value)
}

/// Backslash-escapes `\` and `"` (the quoted character rule).
pub fn escape_quotes(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Backslash-escapes `\ ( ) : < > " * { }` (the special character rule).
pub fn escape_special_characters(value: &str) -> String {
    SPECIAL_CHARACTER.replace_all(value, r"\${0}").into_owned()
}

/// Escapes `and`/`or` surrounded by whitespace, then `not` followed by
/// whitespace. Both are case-insensitive.
pub fn escape_keyword(value: &str) -> String {
    escape_not(&escape_and_or(value))
}

/// The whitespace groups around the keyword are kept as they were. Matches
/// do not overlap, so in `a and or b` only `and` is escaped.
pub fn escape_and_or(value: &str) -> String {
    AND_OR_KEYWORD
        .replace_all(value, r"${1}\${2}${3}")
        .into_owned()
}

/// Matches `not` anywhere it is followed by whitespace, word boundaries
/// included (`cannot go` becomes `can\not go`).
pub fn escape_not(value: &str) -> String {
    NOT_KEYWORD.replace_all(value, r"\${0}").into_owned()
}

/// Replaces tab, carriage return and newline with their textual escapes.
pub fn escape_whitespace(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\t' => escaped.push_str(r"\t"),
            '\r' => escaped.push_str(r"\r"),
            '\n' => escaped.push_str(r"\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Backslash-escapes the reserved characters of Lucene query-string syntax.
pub fn escape_query_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(
            ch,
            '+' | '-'
                | '='
                | '&'
                | '|'
                | '>'
                | '<'
                | '!'
                | '('
                | ')'
                | '{'
                | '}'
                | '['
                | ']'
                | '^'
                | '"'
                | '~'
                | '*'
                | '?'
                | ':'
                | '\\'
                | '/'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
