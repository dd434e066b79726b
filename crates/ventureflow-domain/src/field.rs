//! Declarative form field schema used by the listing wizard.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported input kinds for listing form fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Number,
    Checkbox,
    Rating,
    Map,
    MultiSelect,
    File,
    Time,
    Boolean,
    /// Amount plus currency composite.
    Price,
}

impl FieldType {
    /// Returns `true` for kinds whose value is chosen from `options`.
    pub fn uses_options(self) -> bool {
        matches!(self, FieldType::Select | FieldType::MultiSelect)
    }

    /// Returns `true` for yes/no style inputs.
    pub fn is_toggle(self) -> bool {
        matches!(self, FieldType::Checkbox | FieldType::Boolean)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Number => "number",
            FieldType::Checkbox => "checkbox",
            FieldType::Rating => "rating",
            FieldType::Map => "map",
            FieldType::MultiSelect => "multi-select",
            FieldType::File => "file",
            FieldType::Time => "time",
            FieldType::Boolean => "boolean",
            FieldType::Price => "price",
        };
        f.write_str(label)
    }
}

/// Makes a field visible only while another field holds one of `values`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependsOn {
    pub field: String,
    pub values: Vec<String>,
}

impl DependsOn {
    pub fn new(field: impl Into<String>, values: &[&str]) -> Self {
        Self {
            field: field.into(),
            values: values.iter().map(|value| value.to_string()).collect(),
        }
    }
}

/// A single entry in a subcategory's form schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    /// Option value → fields revealed while that option is selected.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dynamic_fields: BTreeMap<String, Vec<FormField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FormField {
    /// Creates a required field without options.
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type,
            required: true,
            options: Vec::new(),
            depends_on: None,
            dynamic_fields: BTreeMap::new(),
            placeholder: None,
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|option| option.to_string()).collect();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_depends_on(mut self, depends_on: DependsOn) -> Self {
        self.depends_on = Some(depends_on);
        self
    }

    pub fn with_dynamic_fields(mut self, option: impl Into<String>, fields: Vec<FormField>) -> Self {
        self.dynamic_fields.insert(option.into(), fields);
        self
    }

    /// Returns `true` when selecting an option can reveal nested fields.
    pub fn has_dynamic_fields(&self) -> bool {
        !self.dynamic_fields.is_empty()
    }

    /// Nested fields for `option`, if any.
    pub fn dynamic_fields_for(&self, option: &str) -> Option<&[FormField]> {
        self.dynamic_fields.get(option).map(Vec::as_slice)
    }

    /// Iterates over this field and every nested dynamic field, depth first.
    pub fn walk(&self) -> Vec<&FormField> {
        let mut out = vec![self];
        for nested in self.dynamic_fields.values() {
            for field in nested {
                out.extend(field.walk());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&FieldType::MultiSelect).unwrap();
        assert_eq!(json, "\"multi-select\"");
        let parsed: FieldType = serde_json::from_str("\"textarea\"").unwrap();
        assert_eq!(parsed, FieldType::Textarea);
    }

    #[test]
    fn form_field_reads_camel_case_schema() {
        let raw = r#"{
            "id": "roomTypes",
            "label": "Room Types",
            "type": "multi-select",
            "required": true,
            "options": ["Single"],
            "dynamicFields": {
                "Single": [{ "id": "single_beds", "label": "Beds", "type": "number" }]
            }
        }"#;
        let field: FormField = serde_json::from_str(raw).unwrap();
        assert_eq!(field.field_type, FieldType::MultiSelect);
        assert!(field.has_dynamic_fields());
        let nested = field.dynamic_fields_for("Single").unwrap();
        assert_eq!(nested[0].id, "single_beds");
        assert!(!nested[0].required);
        assert_eq!(field.walk().len(), 2);
    }
}
