//! Turns a subcategory schema plus the current values into the ordered list
//! of items a step shows.

use std::ops::Range;

use ventureflow_domain::{format_number, BusinessSubcategory, DependsOn, FieldValue, FormField, ListingData};

use crate::CoreError;

/// Where a rendered field comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOrigin {
    Base,
    Dynamic { parent: String, option: String },
}

/// A field placed in a step.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedField<'a> {
    pub field: &'a FormField,
    pub origin: FieldOrigin,
    /// `false` while the field's `depends_on` condition is unmet.
    pub active: bool,
}

/// One row of a rendered step.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedItem<'a> {
    GroupLabel {
        parent: String,
        option: String,
        label: String,
    },
    Field(RenderedField<'a>),
}

impl<'a> RenderedItem<'a> {
    pub fn as_field(&self) -> Option<&RenderedField<'a>> {
        match self {
            RenderedItem::Field(field) => Some(field),
            RenderedItem::GroupLabel { .. } => None,
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(
            self,
            RenderedItem::Field(RenderedField {
                origin: FieldOrigin::Base,
                ..
            })
        )
    }
}

/// Ids of every field row in `items`, in order.
pub fn field_ids<'a>(items: &'a [RenderedItem<'_>]) -> Vec<&'a str> {
    items
        .iter()
        .filter_map(RenderedItem::as_field)
        .map(|rendered| rendered.field.id.as_str())
        .collect()
}

/// Splits a subcategory's base fields evenly across the data-entry steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLayout {
    pub field_count: usize,
    pub total_steps: usize,
    pub fields_per_step: usize,
}

impl StepLayout {
    pub fn new(field_count: usize, total_steps: usize) -> Result<Self, CoreError> {
        if total_steps == 0 {
            return Err(CoreError::InvalidOperation(
                "a wizard needs at least one step".into(),
            ));
        }
        Ok(Self {
            field_count,
            total_steps,
            fields_per_step: (field_count + total_steps - 1) / total_steps,
        })
    }

    /// Base-field index range for the 1-based `step`. Out-of-range steps are empty.
    pub fn range(&self, step: usize) -> Range<usize> {
        if step == 0 || step > self.total_steps {
            return self.field_count..self.field_count;
        }
        let start = ((step - 1) * self.fields_per_step).min(self.field_count);
        let end = (step * self.fields_per_step).min(self.field_count);
        start..end
    }
}

/// Expands `fields` against `values`: after each field with dynamic fields,
/// a group label and the nested fields of every selected option follow.
pub fn expand_fields<'a>(fields: &'a [FormField], values: &ListingData) -> Vec<RenderedItem<'a>> {
    let mut items = Vec::new();
    expand_into(&mut items, fields, values, &FieldOrigin::Base);
    items
}

fn expand_into<'a>(
    items: &mut Vec<RenderedItem<'a>>,
    fields: &'a [FormField],
    values: &ListingData,
    origin: &FieldOrigin,
) {
    for field in fields {
        let active = dependency_met(field.depends_on.as_ref(), values);
        items.push(RenderedItem::Field(RenderedField {
            field,
            origin: origin.clone(),
            active,
        }));

        if !active || !field.has_dynamic_fields() {
            continue;
        }

        for option in selected_options(values.get(&field.id)) {
            let Some(nested) = field.dynamic_fields_for(&option) else {
                continue;
            };
            items.push(RenderedItem::GroupLabel {
                parent: field.id.clone(),
                option: option.clone(),
                label: format!("{} details", option),
            });
            let nested_origin = FieldOrigin::Dynamic {
                parent: field.id.clone(),
                option,
            };
            expand_into(items, nested, values, &nested_origin);
        }
    }
}

/// Renders the 1-based `step` of `subcategory`.
pub fn render_step<'a>(
    subcategory: &'a BusinessSubcategory,
    step: usize,
    total_steps: usize,
    values: &ListingData,
) -> Result<Vec<RenderedItem<'a>>, CoreError> {
    let layout = StepLayout::new(subcategory.fields.len(), total_steps)?;
    Ok(expand_fields(&subcategory.fields[layout.range(step)], values))
}

fn selected_options(value: Option<&FieldValue>) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    if let Some(value) = value {
        for option in value.as_list() {
            if !options.iter().any(|seen| seen == option) {
                options.push(option.to_string());
            }
        }
    }
    options
}

fn dependency_met(depends_on: Option<&DependsOn>, values: &ListingData) -> bool {
    let Some(dep) = depends_on else {
        return true;
    };
    let Some(value) = values.get(&dep.field) else {
        return false;
    };
    trigger_tokens(value)
        .iter()
        .any(|token| dep.values.iter().any(|trigger| trigger == token))
}

fn trigger_tokens(value: &FieldValue) -> Vec<String> {
    match value {
        FieldValue::Bool(flag) => vec![flag.to_string()],
        FieldValue::Number(number) => vec![format_number(*number)],
        FieldValue::Text(text) => vec![text.trim().to_string()],
        FieldValue::List(items) => items.clone(),
        FieldValue::Price(_) => Vec::new(),
    }
}
