//! Step navigation for the listing form: data-entry steps, a review step and
//! exits to the neighbouring wizard pages.

use tracing::{debug, info};
use ventureflow_domain::{BusinessSubcategory, Catalog, FieldValue, ListingData};

use crate::{
    coupling::{apply_field_change, is_guests_field},
    expand::{expand_fields, RenderedItem, StepLayout},
    state::{WizardAction, WizardState},
    store::WizardStore,
    validate::{validate_items, FieldErrors},
    CoreError,
};

/// Pages adjacent to the listing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SubcategorySelection,
    PackageSelection,
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Advanced { step: usize },
    Retreated { step: usize },
    /// The current step has errors; the step did not change.
    Blocked(FieldErrors),
    Exit(Route),
    AlreadySubmitted,
}

/// One row of the review summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewEntry {
    Heading(String),
    Field {
        id: String,
        label: String,
        value: Option<String>,
    },
}

/// Drives one pass through a subcategory's form.
pub struct ListingWizard<'a> {
    subcategory: &'a BusinessSubcategory,
    category_id: String,
    layout: StepLayout,
    current_step: usize,
    values: ListingData,
    errors: FieldErrors,
    submitted: bool,
}

impl<'a> ListingWizard<'a> {
    /// Opens the form for the category/subcategory selected in `state`,
    /// seeded with any form data already stored there.
    pub fn start(catalog: &'a Catalog, state: &WizardState, total_steps: usize) -> Result<Self, CoreError> {
        let category_id = state
            .selected_category_id
            .as_deref()
            .ok_or(CoreError::NoCategorySelected)?;
        let subcategory_id = state
            .selected_subcategory_id
            .as_deref()
            .ok_or(CoreError::NoSubcategorySelected)?;
        let category = catalog
            .category(category_id)
            .ok_or_else(|| CoreError::CategoryNotFound(category_id.to_string()))?;
        let subcategory = category
            .subcategory(subcategory_id)
            .ok_or_else(|| CoreError::SubcategoryNotFound(subcategory_id.to_string()))?;

        let layout = StepLayout::new(subcategory.fields.len(), total_steps)?;
        debug!(
            category = category_id,
            subcategory = subcategory_id,
            steps = total_steps,
            "listing wizard started"
        );
        Ok(Self {
            subcategory,
            category_id: category_id.to_string(),
            layout,
            current_step: 1,
            values: state.listing_form_data.clone(),
            errors: FieldErrors::new(),
            submitted: false,
        })
    }

    pub fn subcategory(&self) -> &'a BusinessSubcategory {
        self.subcategory
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.layout.total_steps
    }

    pub fn review_step(&self) -> usize {
        self.layout.total_steps + 1
    }

    pub fn is_review(&self) -> bool {
        self.current_step == self.review_step()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn values(&self) -> &ListingData {
        &self.values
    }

    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Records an edit. Returns ids of other fields adjusted by coupling rules.
    pub fn set_value(&mut self, field_id: &str, value: FieldValue) -> Vec<String> {
        self.errors.remove(field_id);
        apply_field_change(&mut self.values, field_id, value)
    }

    /// Removes a value. Guest limits fall back to their minimum instead.
    pub fn clear_value(&mut self, field_id: &str) {
        self.errors.remove(field_id);
        if is_guests_field(field_id) {
            apply_field_change(&mut self.values, field_id, FieldValue::text(""));
        } else {
            self.values.remove(field_id);
        }
    }

    /// Items shown on the current step; empty on the review step.
    pub fn rendered_fields(&self) -> Vec<RenderedItem<'a>> {
        self.rendered_step(self.current_step)
    }

    fn rendered_step(&self, step: usize) -> Vec<RenderedItem<'a>> {
        let subcategory: &'a BusinessSubcategory = self.subcategory;
        expand_fields(&subcategory.fields[self.layout.range(step)], &self.values)
    }

    /// Errors the current step would produce right now.
    pub fn validate_current(&self) -> FieldErrors {
        validate_items(&self.rendered_fields(), &self.values)
    }

    /// Everything entered so far, grouped the way the steps show it.
    pub fn review_summary(&self) -> Vec<ReviewEntry> {
        let mut entries = Vec::new();
        for step in 1..=self.layout.total_steps {
            for item in self.rendered_step(step) {
                match item {
                    RenderedItem::GroupLabel { label, .. } => entries.push(ReviewEntry::Heading(label)),
                    RenderedItem::Field(rendered) if rendered.active => {
                        let value = self
                            .values
                            .get(&rendered.field.id)
                            .filter(|value| !value.is_blank())
                            .map(FieldValue::display);
                        entries.push(ReviewEntry::Field {
                            id: rendered.field.id.clone(),
                            label: rendered.field.label.clone(),
                            value,
                        });
                    }
                    RenderedItem::Field(_) => {}
                }
            }
        }
        entries
    }

    /// Moves forward. Data-entry steps advance only when valid; the review step
    /// writes the collected data into `store` once and exits to package selection.
    pub fn next(&mut self, store: &mut WizardStore) -> NavOutcome {
        if self.submitted {
            return NavOutcome::AlreadySubmitted;
        }

        if self.is_review() {
            store.dispatch(WizardAction::UpdateListingData(self.values.clone()));
            self.submitted = true;
            info!(
                category = %self.category_id,
                subcategory = %self.subcategory.id,
                fields = self.values.len(),
                "listing details submitted"
            );
            return NavOutcome::Exit(Route::PackageSelection);
        }

        let errors = self.validate_current();
        if !errors.is_empty() {
            debug!(step = self.current_step, errors = errors.len(), "step blocked by validation");
            self.errors = errors.clone();
            return NavOutcome::Blocked(errors);
        }

        self.errors.clear();
        self.current_step += 1;
        NavOutcome::Advanced {
            step: self.current_step,
        }
    }

    /// Moves back one step without validating; step 1 exits to subcategory selection.
    pub fn back(&mut self) -> NavOutcome {
        if self.current_step <= 1 {
            return NavOutcome::Exit(Route::SubcategorySelection);
        }
        self.errors.clear();
        self.current_step -= 1;
        NavOutcome::Retreated {
            step: self.current_step,
        }
    }
}
