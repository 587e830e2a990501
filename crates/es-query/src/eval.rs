//! Evaluates compiled query DSL against a single JSON document.
//!
//! Supports the clauses the compiler emits for built filters: `bool`,
//! `match_all`, `match_none`, `exists`, `term`, `terms`, `match`,
//! `match_phrase`, `range` and `nested`. Text analysis is not modelled:
//! `match` and `match_phrase` compare whole values.

use crate::{
    error::{EsQueryError, Result},
    from_filters::BoolQuery,
};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Whether `doc` matches `query`.
pub fn evaluate(query: &Value, doc: &Value) -> Result<bool> {
    let (clause, body) = single_clause(query)?;

    match clause {
        "bool" => {
            let bool_query: BoolQuery =
                serde_json::from_value(body.clone()).map_err(|e| malformed("bool", e))?;
            eval_bool(&bool_query, doc)
        }
        "match_all" => Ok(true),
        "match_none" => Ok(false),
        "exists" => {
            let field = body
                .get("field")
                .and_then(Value::as_str)
                .ok_or_else(|| malformed("exists", "missing 'field'"))?;
            Ok(lookup(doc, field).iter().any(|v| !v.is_null()))
        }
        "term" | "match" | "match_phrase" => {
            let (field, expected) = field_clause(clause, body)?;
            let expected = match expected {
                Value::Object(params) => params
                    .get("query")
                    .or_else(|| params.get("value"))
                    .ok_or_else(|| malformed(clause, "missing 'query' or 'value'"))?,
                other => other,
            };
            Ok(lookup(doc, field)
                .iter()
                .any(|actual| values_equal(actual, expected)))
        }
        "terms" => {
            let (field, expected) = field_clause(clause, body)?;
            let expected = expected
                .as_array()
                .ok_or_else(|| malformed("terms", "values must be a list"))?;
            Ok(lookup(doc, field)
                .iter()
                .any(|actual| expected.iter().any(|e| values_equal(actual, e))))
        }
        "range" => {
            let (field, bounds) = field_clause(clause, body)?;
            let bounds = bounds
                .as_object()
                .ok_or_else(|| malformed("range", "bounds must be an object"))?;
            Ok(lookup(doc, field)
                .iter()
                .any(|actual| in_range(actual, bounds)))
        }
        "nested" => {
            let inner = body
                .get("query")
                .ok_or_else(|| malformed("nested", "missing 'query'"))?;
            evaluate(inner, doc)
        }
        other => Err(EsQueryError::UnsupportedQuery(other.to_string())),
    }
}

fn eval_bool(query: &BoolQuery, doc: &Value) -> Result<bool> {
    for clause in query.must.iter().chain(&query.filter) {
        if !evaluate(clause, doc)? {
            return Ok(false);
        }
    }
    for clause in &query.must_not {
        if evaluate(clause, doc)? {
            return Ok(false);
        }
    }

    // Without scoring clauses, a non-empty `should` needs one match.
    let required = query.minimum_should_match.unwrap_or(
        if query.must.is_empty() && query.filter.is_empty() && !query.should.is_empty() {
            1
        } else {
            0
        },
    ) as usize;

    let mut matched = 0;
    for clause in &query.should {
        if matched >= required {
            break;
        }
        if evaluate(clause, doc)? {
            matched += 1;
        }
    }
    Ok(matched >= required)
}

fn single_clause(query: &Value) -> Result<(&str, &Value)> {
    let object = query
        .as_object()
        .ok_or_else(|| malformed("query", "expected an object"))?;
    let mut entries = object.iter();
    match (entries.next(), entries.next()) {
        (Some((clause, body)), None) => Ok((clause.as_str(), body)),
        _ => Err(malformed("query", "expected exactly one clause")),
    }
}

/// `{ "<field>": <body> }`
fn field_clause<'q>(clause: &str, body: &'q Value) -> Result<(&'q str, &'q Value)> {
    let (field, value) = single_clause(body).map_err(|_| malformed(clause, "expected one field"))?;
    Ok((field, value))
}

/// All values at a dotted path. Arrays along the way are flattened.
fn lookup<'d>(doc: &'d Value, path: &str) -> Vec<&'d Value> {
    if let Some(value) = doc.as_object().and_then(|object| object.get(path)) {
        return flatten(value);
    }

    let mut current = vec![doc];
    for segment in path.split('.') {
        current = current
            .into_iter()
            .filter_map(|value| value.as_object().and_then(|object| object.get(segment)))
            .flat_map(flatten)
            .collect();
    }
    current
}

fn flatten(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().flat_map(flatten).collect(),
        other => vec![other],
    }
}

fn values_equal(actual: &Value, expected: &Value) -> bool {
    match compare(actual, expected) {
        Some(ordering) => ordering == Ordering::Equal,
        None => actual == expected,
    }
}

fn compare(actual: &Value, expected: &Value) -> Option<Ordering> {
    match (actual, expected) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => as_number(actual)?.partial_cmp(&as_number(expected)?),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn in_range(actual: &Value, bounds: &Map<String, Value>) -> bool {
    bounds.iter().all(|(op, bound)| {
        let ordering = compare(actual, bound);
        match op.as_str() {
            "gt" => ordering == Some(Ordering::Greater),
            "gte" => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            "lt" => ordering == Some(Ordering::Less),
            "lte" => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            _ => true,
        }
    })
}

fn malformed(clause: &str, message: impl ToString) -> EsQueryError {
    EsQueryError::MalformedQuery {
        clause: clause.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Value {
        json!({
            "host": "web-1",
            "bytes": 512,
            "tags": ["prod", "eu"],
            "user": [{ "name": "alice" }, { "name": "bob" }]
        })
    }

    #[test]
    fn test_leaf_clauses() {
        let doc = doc();
        assert!(evaluate(&json!({ "match_all": {} }), &doc).unwrap());
        assert!(!evaluate(&json!({ "match_none": {} }), &doc).unwrap());
        assert!(evaluate(&json!({ "exists": { "field": "host" } }), &doc).unwrap());
        assert!(!evaluate(&json!({ "exists": { "field": "missing" } }), &doc).unwrap());
        assert!(evaluate(&json!({ "match_phrase": { "host": "web-1" } }), &doc).unwrap());
        assert!(evaluate(&json!({ "term": { "tags": "eu" } }), &doc).unwrap());
        assert!(evaluate(&json!({ "match_phrase": { "user.name": { "query": "bob" } } }), &doc).unwrap());
        assert!(evaluate(&json!({ "terms": { "host": ["web-2", "web-1"] } }), &doc).unwrap());
        assert!(evaluate(&json!({ "range": { "bytes": { "gte": 512, "lt": "1024" } } }), &doc).unwrap());
        assert!(!evaluate(&json!({ "range": { "bytes": { "gt": 512 } } }), &doc).unwrap());
    }

    #[test]
    fn test_bool_clauses() {
        let doc = doc();
        let hit = json!({ "term": { "host": "web-1" } });
        let miss = json!({ "term": { "host": "web-2" } });

        assert!(evaluate(&json!({ "bool": {} }), &doc).unwrap());
        assert!(evaluate(&json!({ "bool": { "filter": [hit], "must_not": [miss] } }), &doc).unwrap());
        assert!(!evaluate(&json!({ "bool": { "must_not": [hit] } }), &doc).unwrap());
        assert!(evaluate(&json!({ "bool": { "should": [miss, hit] } }), &doc).unwrap());
        assert!(!evaluate(&json!({ "bool": { "should": [miss] } }), &doc).unwrap());
        assert!(!evaluate(&json!({ "bool": { "should": [], "minimum_should_match": 1 } }), &doc).unwrap());
        assert!(
            evaluate(&json!({ "bool": { "filter": [hit], "should": [miss] } }), &doc).unwrap()
        );
    }

    #[test]
    fn test_nested_evaluates_inner_query() {
        let query = json!({
            "nested": { "path": "user", "query": { "match_phrase": { "user.name": "alice" } } }
        });
        assert!(evaluate(&query, &doc()).unwrap());
    }

    #[test]
    fn test_unsupported_and_malformed() {
        let doc = doc();
        assert!(matches!(
            evaluate(&json!({ "query_string": { "query": "a" } }), &doc),
            Err(EsQueryError::UnsupportedQuery(clause)) if clause == "query_string"
        ));
        assert!(matches!(
            evaluate(&json!({ "term": {}, "exists": {} }), &doc),
            Err(EsQueryError::MalformedQuery { .. })
        ));
        assert!(matches!(
            evaluate(&json!({ "bool": { "must": "nope" } }), &doc),
            Err(EsQueryError::MalformedQuery { .. })
        ));
    }
}
