use crate::{
    data_view::{DataViewBase, DataViewFieldBase, field_types},
    error::{FilterError, Result},
    types::{Filter, FilterMeta, FilterParams, RangeParams},
};
use serde_json::{Map, Value, json};

const OPERATORS: [(&str, &str); 4] = [("gt", ">"), ("gte", ">="), ("lt", "<"), ("lte", "<=")];

/// Builds a range filter on `field`.
///
/// `gt`/`gte` and `lt`/`lte` are mutually exclusive. Bounds of number
/// fields given as strings are parsed into numbers.
pub fn build_range_filter(
    field: &DataViewFieldBase,
    params: RangeParams,
    data_view: &DataViewBase,
) -> Result<Filter> {
    if params.gt.is_some() && params.gte.is_some() {
        return Err(FilterError::ConflictingBounds("gte", "gt"));
    }
    if params.lt.is_some() && params.lte.is_some() {
        return Err(FilterError::ConflictingBounds("lte", "lt"));
    }

    let params = if field.is_type(field_types::NUMBER) {
        convert_number_bounds(field, params)?
    } else {
        params
    };

    let query = if field.scripted {
        json!({ "script": get_range_script(field, &params)? })
    } else {
        json!({ "range": { field.name.as_str(): params } })
    };

    Ok(Filter {
        meta: FilterMeta {
            params: FilterParams::Range(params),
            index: data_view.id.clone(),
            key: Some(field.name.clone()),
            ..Default::default()
        },
        query: Some(query),
        ..Default::default()
    })
}

fn convert_number_bounds(field: &DataViewFieldBase, params: RangeParams) -> Result<RangeParams> {
    let convert = |bound: Option<Value>| bound.map(|value| parse_number(field, value)).transpose();

    Ok(RangeParams {
        gt: convert(params.gt)?,
        gte: convert(params.gte)?,
        lt: convert(params.lt)?,
        lte: convert(params.lte)?,
        format: params.format,
    })
}

fn parse_number(field: &DataViewFieldBase, value: Value) -> Result<Value> {
    let Value::String(raw) = &value else {
        return Ok(value);
    };

    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(Value::from(int));
    }

    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| FilterError::InvalidNumber {
            field: field.name.clone(),
            value: value.clone(),
        })
}

/// Script query body checking every set bound against a scripted field.
pub fn get_range_script(field: &DataViewFieldBase, params: &RangeParams) -> Result<Value> {
    let script = field
        .script
        .as_deref()
        .ok_or_else(|| FilterError::MissingScript(field.name.clone()))?;

    let bounds = params.bounds();
    let known_params = bounds
        .iter()
        .map(|(op, value)| (op.to_string(), (*value).clone()))
        .collect::<Map<String, Value>>();

    let source = if field.lang.as_deref() == Some("painless") {
        let comparators = bounds
            .iter()
            .filter_map(|(op, _)| operator(op))
            .map(|(op, symbol)| format!("boolean {op}(Supplier s, def v) {{return s.get() {symbol} v}}"))
            .collect::<Vec<_>>()
            .join(" ");
        let comparisons = bounds
            .iter()
            .map(|(op, _)| format!("{op}(() -> {{ {script} }}, params.{op})"))
            .collect::<Vec<_>>()
            .join(" && ");
        format!("{comparators}{comparisons}")
    } else {
        bounds
            .iter()
            .filter_map(|(op, _)| operator(op))
            .map(|(op, symbol)| format!("({script}){symbol}params.{op}"))
            .collect::<Vec<_>>()
            .join(" && ")
    };

    Ok(json!({
        "script": {
            "source": source,
            "params": known_params,
            "lang": field.lang,
        }
    }))
}

fn operator(op: &str) -> Option<(&'static str, &'static str)> {
    OPERATORS.iter().copied().find(|(name, _)| *name == op)
}
