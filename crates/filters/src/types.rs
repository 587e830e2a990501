use serde::{
    Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned, ser::SerializeMap,
};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

/// The `meta.type` discriminant of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterType {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "combined")]
    Combined,
    #[serde(rename = "phrase")]
    Phrase,
    #[serde(rename = "phrases")]
    Phrases,
    #[serde(rename = "range")]
    Range,
    #[serde(rename = "exists")]
    Exists,
    #[serde(rename = "match_all")]
    MatchAll,
    #[serde(rename = "query_string")]
    QueryString,
    #[serde(rename = "custom")]
    Custom,
    /// Any `meta.type` not listed above.
    #[serde(rename = "other")]
    Other,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::And => "AND",
            FilterType::Or => "OR",
            FilterType::Combined => "combined",
            FilterType::Phrase => "phrase",
            FilterType::Phrases => "phrases",
            FilterType::Range => "range",
            FilterType::Exists => "exists",
            FilterType::MatchAll => "match_all",
            FilterType::QueryString => "query_string",
            FilterType::Custom => "custom",
            FilterType::Other => "other",
        }
    }

    /// AND, OR and combined filters hold sub-filters instead of a field.
    pub fn is_combinator(&self) -> bool {
        matches!(
            self,
            FilterType::And | FilterType::Or | FilterType::Combined
        )
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(FilterType::And),
            "OR" => Ok(FilterType::Or),
            "combined" => Ok(FilterType::Combined),
            "phrase" => Ok(FilterType::Phrase),
            "phrases" => Ok(FilterType::Phrases),
            "range" => Ok(FilterType::Range),
            "exists" => Ok(FilterType::Exists),
            "match_all" => Ok(FilterType::MatchAll),
            "query_string" => Ok(FilterType::QueryString),
            "custom" => Ok(FilterType::Custom),
            _ => Err(format!("Unsupported filter type: {}", s)),
        }
    }
}

/// `meta.type` together with the `meta.params` shape it implies.
///
/// Kinds without parameters serialize with no `params` key. A meta without
/// `type` deserializes as a custom filter; a `type` this crate does not know
/// is kept as [`FilterParams::Other`] with its params untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterParams {
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Combined(Vec<FilterItem>),
    Phrase(PhraseParams),
    Phrases(Vec<Value>),
    Range(RangeParams),
    Exists,
    MatchAll,
    QueryString(QueryStringParams),
    /// Also what an untyped (empty) filter is treated as.
    #[default]
    Custom,
    /// A filter kind owned by someone else (e.g. `spatial_filter`). Compiled
    /// from its `query` like a custom filter.
    Other { type_name: String, params: Value },
}

impl Serialize for FilterParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.type_name())?;
        match self {
            FilterParams::And(params) | FilterParams::Or(params) => {
                map.serialize_entry("params", params)?
            }
            FilterParams::Combined(items) => map.serialize_entry("params", items)?,
            FilterParams::Phrase(params) => map.serialize_entry("params", params)?,
            FilterParams::Phrases(values) => map.serialize_entry("params", values)?,
            FilterParams::Range(params) => map.serialize_entry("params", params)?,
            FilterParams::QueryString(params) => map.serialize_entry("params", params)?,
            FilterParams::Other { params, .. } if !params.is_null() => {
                map.serialize_entry("params", params)?
            }
            FilterParams::Other { .. }
            | FilterParams::Exists
            | FilterParams::MatchAll
            | FilterParams::Custom => {}
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FilterParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Tagged {
            #[serde(rename = "type", default)]
            type_name: Option<String>,
            #[serde(default)]
            params: Value,
        }

        fn params<T: DeserializeOwned, E: serde::de::Error>(params: Value) -> Result<T, E> {
            serde_json::from_value(params).map_err(E::custom)
        }

        let tagged = Tagged::deserialize(deserializer)?;
        let Some(type_name) = tagged.type_name else {
            return Ok(FilterParams::Custom);
        };
        let Ok(filter_type) = type_name.parse::<FilterType>() else {
            return Ok(FilterParams::Other {
                type_name,
                params: tagged.params,
            });
        };

        Ok(match filter_type {
            FilterType::And => FilterParams::And(params(tagged.params)?),
            FilterType::Or => FilterParams::Or(params(tagged.params)?),
            FilterType::Combined => FilterParams::Combined(params(tagged.params)?),
            FilterType::Phrase => FilterParams::Phrase(params(tagged.params)?),
            FilterType::Phrases => FilterParams::Phrases(params(tagged.params)?),
            FilterType::Range => FilterParams::Range(params(tagged.params)?),
            FilterType::QueryString => FilterParams::QueryString(params(tagged.params)?),
            FilterType::Exists => FilterParams::Exists,
            FilterType::MatchAll => FilterParams::MatchAll,
            FilterType::Custom => FilterParams::Custom,
            FilterType::Other => FilterParams::Other {
                type_name,
                params: tagged.params,
            },
        })
    }
}

impl FilterParams {
    pub fn filter_type(&self) -> FilterType {
        match self {
            FilterParams::And(_) => FilterType::And,
            FilterParams::Or(_) => FilterType::Or,
            FilterParams::Combined(_) => FilterType::Combined,
            FilterParams::Phrase(_) => FilterType::Phrase,
            FilterParams::Phrases(_) => FilterType::Phrases,
            FilterParams::Range(_) => FilterType::Range,
            FilterParams::Exists => FilterType::Exists,
            FilterParams::MatchAll => FilterType::MatchAll,
            FilterParams::QueryString(_) => FilterType::QueryString,
            FilterParams::Custom => FilterType::Custom,
            FilterParams::Other { .. } => FilterType::Other,
        }
    }

    /// The `meta.type` string, including the name of an unknown kind.
    pub fn type_name(&self) -> &str {
        match self {
            FilterParams::Other { type_name, .. } => type_name,
            params => params.filter_type().as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseParams {
    pub query: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl RangeParams {
    /// The bounds that are set, in `gt`, `gte`, `lt`, `lte` order.
    pub fn bounds(&self) -> Vec<(&'static str, &Value)> {
        [
            ("gt", &self.gt),
            ("gte", &self.gte),
            ("lt", &self.lt),
            ("lte", &self.lte),
        ]
        .into_iter()
        .filter_map(|(op, bound)| bound.as_ref().map(|value| (op, value)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryStringParams {
    pub query: String,
}

/// How the members of a combined filter are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanRelation {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// Entry of a combined filter: a filter, or a group of entries that is
/// itself joined with AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterItem {
    Filter(Filter),
    Group(Vec<FilterItem>),
}

impl From<Filter> for FilterItem {
    fn from(filter: Filter) -> Self {
        FilterItem::Filter(filter)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterMeta {
    #[serde(flatten)]
    pub params: FilterParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub disabled: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub negate: bool,
    /// Id of the data view the filter was built against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<BooleanRelation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_by: Option<String>,
    /// Meta keys not modelled above (`field`, `group`, `isMultiIndex`, ...),
    /// written back as they were read.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl FilterMeta {
    pub fn filter_type(&self) -> FilterType {
        self.params.filter_type()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterStateStore {
    #[serde(rename = "appState")]
    AppState,
    #[serde(rename = "globalState")]
    GlobalState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub store: FilterStateStore,
}

/// A single clause of a search refinement, or a combinator of clauses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub meta: FilterMeta,
    /// Compiled query DSL for this filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    #[serde(rename = "$state", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FilterState>,
    /// Query DSL keys that legacy filters keep next to `meta` instead of
    /// under `query` (e.g. `exists`, `script`, `match_all`).
    #[serde(flatten)]
    pub legacy: Map<String, Value>,
}

impl Filter {
    pub fn filter_type(&self) -> FilterType {
        self.meta.filter_type()
    }

    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }
}
