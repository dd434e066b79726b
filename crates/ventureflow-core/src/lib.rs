//! ventureflow-core
//!
//! Listing wizard engine: the reducer-backed state store, schema expansion,
//! step validation and navigation. Depends on ventureflow-domain.
//! No CLI, no terminal I/O, no direct storage or network interactions.

pub mod coupling;
pub mod error;
pub mod expand;
pub mod state;
pub mod store;
pub mod validate;
pub mod wizard;

pub use coupling::apply_field_change;
pub use error::CoreError;
pub use expand::{expand_fields, render_step, RenderedField, RenderedItem, FieldOrigin, StepLayout};
pub use state::{reduce, WizardAction, WizardState};
pub use store::{MemoryPersistence, NoopPersistence, StatePersistence, WizardStore};
pub use validate::{validate_items, FieldErrors};
pub use wizard::{ListingWizard, NavOutcome, Route, ReviewEntry};
