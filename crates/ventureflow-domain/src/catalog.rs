//! Business category taxonomy and the field catalog built on top of it.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FormField;

/// Gradient used when a category does not specify one.
pub const DEFAULT_GRADIENT: &str = "from-slate-500 to-slate-700";

/// Maximum edit distance accepted for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

/// Second level of the taxonomy; owns the form schema for its listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessSubcategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl BusinessSubcategory {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FormField>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            fields,
        }
    }

    /// Looks up a base or nested field by id.
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields
            .iter()
            .flat_map(FormField::walk)
            .find(|field| field.id == id)
    }
}

/// Top level of the taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_gradient")]
    pub gradient: String,
    #[serde(default)]
    pub subcategories: Vec<BusinessSubcategory>,
}

fn default_gradient() -> String {
    DEFAULT_GRADIENT.to_string()
}

impl BusinessCategory {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        subcategories: Vec<BusinessSubcategory>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            gradient: default_gradient(),
            subcategories,
        }
    }

    pub fn with_gradient(mut self, gradient: impl Into<String>) -> Self {
        self.gradient = gradient.into();
        self
    }

    pub fn subcategory(&self, id: &str) -> Option<&BusinessSubcategory> {
        self.subcategories.iter().find(|sub| sub.id == id)
    }
}

/// Schema violation found while checking a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    EmptyId { location: String },
    DuplicateCategory(String),
    DuplicateSubcategory { category: String, subcategory: String },
    DuplicateField { subcategory: String, field: String },
    UnknownDynamicOption { field: String, option: String },
    UnknownDependency { field: String, depends_on: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::EmptyId { location } => write!(f, "empty id in {}", location),
            CatalogIssue::DuplicateCategory(id) => write!(f, "duplicate category `{}`", id),
            CatalogIssue::DuplicateSubcategory {
                category,
                subcategory,
            } => write!(
                f,
                "duplicate subcategory `{}` in category `{}`",
                subcategory, category
            ),
            CatalogIssue::DuplicateField { subcategory, field } => write!(
                f,
                "duplicate field `{}` in subcategory `{}`",
                field, subcategory
            ),
            CatalogIssue::UnknownDynamicOption { field, option } => write!(
                f,
                "field `{}` defines dynamic fields for `{}` which is not one of its options",
                field, option
            ),
            CatalogIssue::UnknownDependency { field, depends_on } => write!(
                f,
                "field `{}` depends on unknown field `{}`",
                field, depends_on
            ),
        }
    }
}

/// Immutable set of categories the wizard can offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub categories: Vec<BusinessCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<BusinessCategory>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, id: &str) -> Option<&BusinessCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn subcategory(&self, category_id: &str, subcategory_id: &str) -> Option<&BusinessSubcategory> {
        self.category(category_id)?.subcategory(subcategory_id)
    }

    /// Closest category id to `input`, for error hints.
    pub fn suggest_category(&self, input: &str) -> Option<&str> {
        closest(input, self.categories.iter().map(|category| category.id.as_str()))
    }

    /// Closest subcategory id within `category_id`, for error hints.
    pub fn suggest_subcategory(&self, category_id: &str, input: &str) -> Option<&str> {
        let category = self.category(category_id)?;
        closest(input, category.subcategories.iter().map(|sub| sub.id.as_str()))
    }

    /// Checks structural invariants. An empty result means the catalog is usable.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut category_ids = HashSet::new();

        for category in &self.categories {
            if category.id.trim().is_empty() {
                issues.push(CatalogIssue::EmptyId {
                    location: format!("category `{}`", category.title),
                });
            }
            if !category_ids.insert(category.id.as_str()) {
                issues.push(CatalogIssue::DuplicateCategory(category.id.clone()));
            }

            let mut sub_ids = HashSet::new();
            for sub in &category.subcategories {
                if sub.id.trim().is_empty() {
                    issues.push(CatalogIssue::EmptyId {
                        location: format!("subcategory `{}` of `{}`", sub.title, category.id),
                    });
                }
                if !sub_ids.insert(sub.id.as_str()) {
                    issues.push(CatalogIssue::DuplicateSubcategory {
                        category: category.id.clone(),
                        subcategory: sub.id.clone(),
                    });
                }
                validate_fields(sub, &mut issues);
            }
        }
        issues
    }
}

fn validate_fields(sub: &BusinessSubcategory, issues: &mut Vec<CatalogIssue>) {
    let all: Vec<&FormField> = sub.fields.iter().flat_map(FormField::walk).collect();
    let mut seen = HashSet::new();

    for field in &all {
        if field.id.trim().is_empty() {
            issues.push(CatalogIssue::EmptyId {
                location: format!("field `{}` of `{}`", field.label, sub.id),
            });
        }
        if !seen.insert(field.id.as_str()) {
            issues.push(CatalogIssue::DuplicateField {
                subcategory: sub.id.clone(),
                field: field.id.clone(),
            });
        }
        for option in field.dynamic_fields.keys() {
            if !field.options.iter().any(|candidate| candidate == option) {
                issues.push(CatalogIssue::UnknownDynamicOption {
                    field: field.id.clone(),
                    option: option.clone(),
                });
            }
        }
    }

    for field in &all {
        if let Some(dep) = &field.depends_on {
            if !all.iter().any(|candidate| candidate.id == dep.field) {
                issues.push(CatalogIssue::UnknownDependency {
                    field: field.id.clone(),
                    depends_on: dep.field.clone(),
                });
            }
        }
    }
}

fn closest<'a>(input: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let needle = input.trim().to_ascii_lowercase();
    candidates
        .map(|candidate| (strsim::levenshtein(&needle, &candidate.to_ascii_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}
