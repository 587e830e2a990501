//! Field metadata of the data views filters are built against.

use serde::{Deserialize, Serialize};

pub mod field_types {
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
    pub const BOOLEAN: &str = "boolean";
    pub const DATE: &str = "date";
    pub const IP: &str = "ip";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedSubType {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSubType {
    pub parent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSubType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<NestedSubType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi: Option<MultiSubType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewFieldBase {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub es_types: Vec<String>,
    #[serde(default)]
    pub scripted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<FieldSubType>,
}

impl DataViewFieldBase {
    pub fn new(name: &str, field_type: &str) -> Self {
        DataViewFieldBase {
            name: name.to_string(),
            field_type: field_type.to_string(),
            es_types: Vec::new(),
            scripted: false,
            script: None,
            lang: None,
            sub_type: None,
        }
    }

    /// Mark the field as living under the nested object at `path`.
    pub fn with_nested_path(mut self, path: &str) -> Self {
        let sub_type = self.sub_type.get_or_insert_with(FieldSubType::default);
        sub_type.nested = Some(NestedSubType {
            path: path.to_string(),
        });
        self
    }

    /// Turn the field into a scripted field.
    pub fn with_script(mut self, script: &str, lang: &str) -> Self {
        self.scripted = true;
        self.script = Some(script.to_string());
        self.lang = Some(lang.to_string());
        self
    }

    pub fn nested_path(&self) -> Option<&str> {
        self.sub_type
            .as_ref()
            .and_then(|sub_type| sub_type.nested.as_ref())
            .map(|nested| nested.path.as_str())
    }

    pub fn is_type(&self, field_type: &str) -> bool {
        self.field_type == field_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataViewBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<DataViewFieldBase>,
}

impl DataViewBase {
    pub fn new(id: &str, title: &str, fields: Vec<DataViewFieldBase>) -> Self {
        DataViewBase {
            id: Some(id.to_string()),
            title: title.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&DataViewFieldBase> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Zero, one or many data views supplied to a compilation call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataViewSet<'a> {
    views: &'a [DataViewBase],
}

impl<'a> DataViewSet<'a> {
    pub fn empty() -> Self {
        DataViewSet { views: &[] }
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a DataViewBase> + 'a {
        self.views.iter()
    }

    /// The data view with the given id, falling back to the first one.
    pub fn find(&self, id: Option<&str>) -> Option<&'a DataViewBase> {
        self.views
            .iter()
            .find(|view| view.id.as_deref() == id)
            .or_else(|| self.views.first())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.iter().any(|view| view.id.as_deref() == Some(id))
    }
}

impl<'a> From<&'a DataViewBase> for DataViewSet<'a> {
    fn from(view: &'a DataViewBase) -> Self {
        DataViewSet {
            views: std::slice::from_ref(view),
        }
    }
}

impl<'a> From<&'a [DataViewBase]> for DataViewSet<'a> {
    fn from(views: &'a [DataViewBase]) -> Self {
        DataViewSet { views }
    }
}

impl<'a> From<&'a Vec<DataViewBase>> for DataViewSet<'a> {
    fn from(views: &'a Vec<DataViewBase>) -> Self {
        DataViewSet { views }
    }
}

impl<'a> From<Option<&'a DataViewBase>> for DataViewSet<'a> {
    fn from(view: Option<&'a DataViewBase>) -> Self {
        view.map(DataViewSet::from).unwrap_or_default()
    }
}
