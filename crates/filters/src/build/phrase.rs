use crate::{
    data_view::{DataViewBase, DataViewFieldBase, field_types},
    error::{FilterError, Result},
    types::{Filter, FilterMeta, FilterParams, PhraseParams},
};
use serde_json::{Value, json};

/// Builds a filter matching `value` as an exact phrase on `field`.
///
/// Values for boolean fields are converted first; scripted fields compile
/// to a script query instead of `match_phrase`.
pub fn build_phrase_filter(
    field: &DataViewFieldBase,
    value: Value,
    data_view: &DataViewBase,
) -> Result<Filter> {
    let converted = get_converted_value_for_field(field, value)?;

    let query = if field.scripted {
        json!({ "script": get_phrase_script(field, &converted)? })
    } else {
        json!({ "match_phrase": { field.name.as_str(): converted } })
    };

    Ok(Filter {
        meta: FilterMeta {
            params: FilterParams::Phrase(PhraseParams { query: converted }),
            index: data_view.id.clone(),
            key: Some(field.name.clone()),
            ..Default::default()
        },
        query: Some(query),
        ..Default::default()
    })
}

/// Boolean fields accept `true`/`false`, `"true"`/`"false"` and `1`/`0`.
/// Values for other field types pass through unchanged.
pub fn get_converted_value_for_field(field: &DataViewFieldBase, value: Value) -> Result<Value> {
    if !field.is_type(field_types::BOOLEAN) || value.is_boolean() {
        return Ok(value);
    }

    match &value {
        Value::String(s) if s == "true" => Ok(Value::Bool(true)),
        Value::String(s) if s == "false" => Ok(Value::Bool(false)),
        Value::Number(n) if n.as_f64() == Some(1.0) => Ok(Value::Bool(true)),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(Value::Bool(false)),
        _ => Err(FilterError::InvalidBoolean {
            field: field.name.clone(),
            value,
        }),
    }
}

/// Script query body comparing a scripted field to `params.value`.
pub fn get_phrase_script(field: &DataViewFieldBase, value: &Value) -> Result<Value> {
    Ok(json!({
        "script": {
            "source": build_inline_script_for_phrase_filter(field)?,
            "lang": field.lang,
            "params": { "value": value },
        }
    }))
}

/// Painless scripts may return a list, in which case any element equal to
/// the value matches.
pub fn build_inline_script_for_phrase_filter(field: &DataViewFieldBase) -> Result<String> {
    let script = field
        .script
        .as_deref()
        .ok_or_else(|| FilterError::MissingScript(field.name.clone()))?;

    if field.lang.as_deref() == Some("painless") {
        Ok(format!(
            "boolean compare(Supplier s, def v) {{if(s.get() instanceof List){{List list = s.get(); \
             for(def k : list){{if(k==v){{return true;}}}}return false;}}else{{return s.get() == v;}}}}\
             compare(() -> {{ {script} }}, params.value);"
        ))
    } else {
        Ok(format!("({script}) == value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> DataViewBase {
        DataViewBase::new(
            "logs",
            "logs-*",
            vec![
                DataViewFieldBase::new("host", field_types::STRING),
                DataViewFieldBase::new("ssl", field_types::BOOLEAN),
                DataViewFieldBase::new("bytes_kb", field_types::NUMBER)
                    .with_script("doc['bytes'].value / 1024", "painless"),
            ],
        )
    }

    #[test]
    fn test_build_phrase_filter() {
        let view = view();
        let filter = build_phrase_filter(view.field("host").unwrap(), json!("web-1"), &view).unwrap();
        assert_eq!(
            filter.query,
            Some(json!({ "match_phrase": { "host": "web-1" } }))
        );
        assert_eq!(filter.meta.key.as_deref(), Some("host"));
        assert_eq!(
            filter.meta.params,
            FilterParams::Phrase(PhraseParams {
                query: json!("web-1")
            })
        );
    }

    #[test]
    fn test_boolean_conversion() {
        let view = view();
        let ssl = view.field("ssl").unwrap();
        assert_eq!(get_converted_value_for_field(ssl, json!("true")).unwrap(), json!(true));
        assert_eq!(get_converted_value_for_field(ssl, json!(0)).unwrap(), json!(false));
        assert_eq!(get_converted_value_for_field(ssl, json!(true)).unwrap(), json!(true));
        assert!(matches!(
            get_converted_value_for_field(ssl, json!("yes")),
            Err(FilterError::InvalidBoolean { .. })
        ));

        let host = view.field("host").unwrap();
        assert_eq!(get_converted_value_for_field(host, json!("true")).unwrap(), json!("true"));
    }

    #[test]
    fn test_scripted_phrase_filter() {
        let view = view();
        let filter =
            build_phrase_filter(view.field("bytes_kb").unwrap(), json!(4), &view).unwrap();
        let query = filter.query.unwrap();
        let script = &query["script"]["script"];

        assert_eq!(script["lang"], json!("painless"));
        assert_eq!(script["params"], json!({ "value": 4 }));
        assert!(script["source"]
            .as_str()
            .unwrap()
            .ends_with("compare(() -> { doc['bytes'].value / 1024 }, params.value);"));
    }

    #[test]
    fn test_non_painless_script() {
        let field = DataViewFieldBase::new("f", field_types::NUMBER).with_script("1 + 1", "expression");
        assert_eq!(
            build_inline_script_for_phrase_filter(&field).unwrap(),
            "(1 + 1) == value"
        );
    }

    #[test]
    fn test_scripted_field_without_script() {
        let mut field = DataViewFieldBase::new("f", field_types::NUMBER);
        field.scripted = true;
        assert!(matches!(
            build_inline_script_for_phrase_filter(&field),
            Err(FilterError::MissingScript(name)) if name == "f"
        ));
    }
}
